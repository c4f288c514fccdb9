pub mod routes;
pub mod screens;
pub mod shared;
pub mod shell;

use std::sync::Arc;
use std::time::Duration;

use shell::store::{ShellEvent, ShellStore};
use shell::tabs::TabKey;
use shell::ShellRuntime;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("storefront.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;

    // Каталог собирается один раз и передаётся store по ссылке.
    let catalog = Arc::new(shared::data::seed_catalog()?);
    tracing::info!(
        sections = catalog.sections().len(),
        products = catalog.product_count(),
        "catalog seeded"
    );

    let store = ShellStore::new(catalog, config.app.title.clone());
    let (runtime, events) = ShellRuntime::new(store, config.splash.duration());
    tracing::info!(
        route = runtime.store().current_route().route.name(),
        "shell starting"
    );

    // Demo-сессия: прогоняет типовой сценарий через цикл событий и
    // закрывает канал - цикл завершается сам.
    let splash_duration = config.splash.duration();
    let driver = tokio::spawn(async move {
        // Даём splash-таймеру отработать авто-переход на login.
        tokio::time::sleep(splash_duration + Duration::from_millis(50)).await;

        let session = [
            ShellEvent::NavigateTo {
                path: "home_screen".to_string(),
            },
            ShellEvent::HomeSearchChanged("serum".to_string()),
            ShellEvent::SelectTab(TabKey::Products),
            ShellEvent::NavigateTo {
                path: routes::product_detail_path(101),
            },
            ShellEvent::Back,
            ShellEvent::CartItemAdded(
                shared::data::sample_cart_items().remove(0),
            ),
            ShellEvent::SelectTab(TabKey::Cart),
            ShellEvent::SelectTab(TabKey::Home),
        ];
        for event in session {
            if events.send(event).is_err() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        // events дропается здесь - канал закрывается.
    });

    let store = runtime.run().await;
    driver.await?;

    let snapshot = serde_json::to_string_pretty(&store.view())?;
    tracing::info!("final shell view:\n{snapshot}");
    println!("{snapshot}");

    Ok(())
}
