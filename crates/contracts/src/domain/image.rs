use serde::{Deserialize, Serialize};

/// Opaque handle на встроенный ресурс (drawable).
///
/// Ядро никогда его не разыменовывает: чем является ключ и как по нему
/// находится картинка — целиком забота слоя отрисовки.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}
