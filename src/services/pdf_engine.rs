//! services/pdf_engine.rs
//! Frontera con el motor de render externo.

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::pdf_config::RenderConfig;
use crate::errors::EngineError;

/// Convierte HTML + configuración en los bytes del PDF.
///
/// Una sola llamada por request, sin reintentos. `EngineError::Init` indica que
/// el motor no se pudo preparar; `EngineError::Render` que la ejecución falló.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    async fn render(&self, html: Bytes, config: RenderConfig) -> Result<Vec<u8>, EngineError>;
}
