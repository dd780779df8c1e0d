//! config/server_config.rs
//! Configuración del proceso, leída de variables de entorno (y .env vía dotenv).

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8080;
/// Cantidad máxima de renders simultáneos
pub const DEFAULT_RENDER_CONCURRENCY: usize = 8;
/// 20 MiB para todo el cuerpo multipart
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub render_concurrency: usize,
    pub max_upload_bytes: usize,
    pub wkhtmltopdf_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            render_concurrency: DEFAULT_RENDER_CONCURRENCY,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            wkhtmltopdf_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env`, pero con una función de búsqueda inyectable (tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let render_concurrency = parse_var(&lookup, "RENDER_CONCURRENCY")?
            .unwrap_or(defaults.render_concurrency)
            .max(1);
        let max_upload_bytes =
            parse_var(&lookup, "MAX_UPLOAD_BYTES")?.unwrap_or(defaults.max_upload_bytes);
        let wkhtmltopdf_path = lookup("WKHTMLTOPDF_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(ServerConfig {
            port,
            render_concurrency,
            max_upload_bytes,
            wkhtmltopdf_path,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Valor inválido para {}: {:?}", key, raw)),
        _ => Ok(None),
    }
}
