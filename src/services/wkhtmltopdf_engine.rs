//! services/wkhtmltopdf_engine.rs
//! Implementación de `PdfEngine` lanzando el binario wkhtmltopdf.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;

use crate::config::pdf_config::RenderConfig;
use crate::errors::EngineError;
use crate::services::pdf_engine::PdfEngine;

/// Prefijo de carpeta temporal
const TEMP_DIR_PREFIX: &str = "pdf_service_";
const BINARY_NAME: &str = "wkhtmltopdf";

#[derive(Debug, Clone, Default)]
pub struct WkhtmltopdfEngine {
    /// Ruta explícita; si es `None` se busca en PATH en cada render.
    binary: Option<PathBuf>,
}

impl WkhtmltopdfEngine {
    pub fn new(binary: Option<PathBuf>) -> Self {
        Self { binary }
    }

    fn locate(&self) -> Result<PathBuf, EngineError> {
        match &self.binary {
            Some(path) if path.is_file() => Ok(path.clone()),
            Some(path) => Err(EngineError::Init(format!(
                "{} no existe en {:?}",
                BINARY_NAME, path
            ))),
            None => which::which(BINARY_NAME).map_err(|e| {
                EngineError::Init(format!("No se encontró {} en el sistema: {}", BINARY_NAME, e))
            }),
        }
    }
}

/// Argumentos de línea de comandos para un render.
/// Opciones globales primero, luego la página con sus opciones propias, luego la salida.
pub fn build_args(config: &RenderConfig, html_path: &Path, pdf_path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    let mut push = |flag: &str, value: String| {
        args.push(flag.into());
        args.push(value.into());
    };

    // ===== DOCUMENTO =====
    push("--page-size", config.page_size.clone());
    push("--orientation", config.orientation.clone());
    push("--margin-top", format!("{}mm", config.margin_top));
    push("--margin-bottom", format!("{}mm", config.margin_bottom));
    push("--margin-left", format!("{}mm", config.margin_left));
    push("--margin-right", format!("{}mm", config.margin_right));
    push("--dpi", config.dpi.to_string());
    args.push("--quiet".into());

    // ===== PÁGINA =====
    args.push(html_path.into());
    args.push(if config.page_shrinking {
        "--enable-smart-shrinking".into()
    } else {
        "--disable-smart-shrinking".into()
    });
    args.push("--zoom".into());
    args.push(config.page_zoom.to_string().into());

    args.push(pdf_path.into());
    args
}

#[async_trait]
impl PdfEngine for WkhtmltopdfEngine {
    async fn render(&self, html: Bytes, config: RenderConfig) -> Result<Vec<u8>, EngineError> {
        let binary = self.locate()?;

        // Se borra sola al salir de scope, con éxito o con error.
        let workdir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(|e| EngineError::Init(format!("No se pudo crear carpeta temporal: {}", e)))?;
        let html_path = workdir.path().join("input.html");
        let pdf_path = workdir.path().join("output.pdf");

        tokio::fs::write(&html_path, &html).await.map_err(|e| {
            EngineError::Init(format!("Error escribiendo HTML temporal en {:?}: {}", html_path, e))
        })?;

        let output = Command::new(&binary)
            .args(build_args(&config, &html_path, &pdf_path))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| EngineError::Init(format!("No se pudo lanzar {:?}: {}", binary, e)))?;

        if !output.status.success() {
            let stderr_msg = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::Render(format!(
                "{} falló ({}): {}",
                BINARY_NAME,
                output.status,
                stderr_msg.trim()
            )));
        }

        tokio::fs::read(&pdf_path).await.map_err(|e| {
            EngineError::Render(format!("Error leyendo PDF final en {:?}: {}", pdf_path, e))
        })
    }
}
