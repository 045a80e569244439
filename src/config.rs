// Configuración del servidor a partir de variables de entorno (y `.env` si existe).
use std::env;
use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_CATALOG: &str = "csvjson.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `SCHEDSMART_BIND`
    pub bind: String,
    /// `SCHEDSMART_CATALOG`: nombre o ruta del JSON con las secciones
    pub catalog: String,
    /// `SCHEDSMART_DATA_DIR`: donde buscar `catalog` si no existe tal cual
    pub data_dir: PathBuf,
    /// `SCHEDSMART_WORKERS`; por defecto uno por CPU
    pub workers: usize,
    /// `SCHEDSMART_ALLOWED_ORIGIN`: habilita CORS para una UI servida desde otro origen
    pub allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: DEFAULT_BIND.to_string(),
            catalog: DEFAULT_CATALOG.to_string(),
            data_dir: PathBuf::from("."),
            workers: num_cpus::get().max(1),
            allowed_origin: None,
        }
    }
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable lookup, so tests don't touch the real env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let workers = match non_empty("SCHEDSMART_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(value = %raw, "invalid SCHEDSMART_WORKERS, using {}", defaults.workers);
                    defaults.workers
                }
            },
            None => defaults.workers,
        };

        Config {
            bind: non_empty("SCHEDSMART_BIND").unwrap_or(defaults.bind),
            catalog: non_empty("SCHEDSMART_CATALOG").unwrap_or(defaults.catalog),
            data_dir: non_empty("SCHEDSMART_DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            workers,
            allowed_origin: non_empty("SCHEDSMART_ALLOWED_ORIGIN"),
        }
    }
}
