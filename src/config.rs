use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Olympiad Quiz";
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuración de arranque, leída de variables de entorno.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// YAML externo que sustituye al banco embebido
    pub bank_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_TITLE.to_string(),
            window_size: [900.0, 680.0],
            bank_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// `QUIZ_BANK_PATH`, `QUIZ_WINDOW_TITLE` y `QUIZ_LOG` pisan los valores por defecto
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            window_title: non_empty("QUIZ_WINDOW_TITLE").unwrap_or(defaults.window_title),
            window_size: defaults.window_size,
            bank_path: non_empty("QUIZ_BANK_PATH").map(PathBuf::from),
            log_filter: non_empty("QUIZ_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

/// Preferencias de interfaz guardadas por eframe (sólo el tema).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}
