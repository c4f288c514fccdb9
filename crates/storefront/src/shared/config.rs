use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub splash: SplashConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Заголовок приложения; показывается, когда активный таб не даёт свой.
    pub title: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SplashConfig {
    /// Задержка авто-перехода со splash-экрана на login.
    pub duration_ms: u64,
}

impl SplashConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[app]
title = "Dreamy Bloom"

[splash]
duration_ms = 2000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.app.title, "Dreamy Bloom");
        assert_eq!(config.splash.duration_ms, 2000);
        assert_eq!(config.splash.duration(), Duration::from_millis(2000));
    }
}
