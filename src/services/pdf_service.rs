use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use tokio::sync::Semaphore;

use crate::config::pdf_config::RenderConfig;
use crate::errors::EngineError;
use crate::services::pdf_engine::PdfEngine;

/// Envuelve el motor con un límite de renders simultáneos.
#[derive(Clone)]
pub struct PdfService {
    engine: Arc<dyn PdfEngine>,
    semaphore: Arc<Semaphore>,
}

impl PdfService {
    pub fn new(engine: Arc<dyn PdfEngine>, max_concurrent: usize) -> Self {
        Self {
            engine,
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    /// Genera el PDF completo en memoria. Espera un permiso sin timeout y
    /// luego bloquea hasta que el motor termina o falla.
    pub async fn generate_pdf(
        &self,
        html: Bytes,
        config: RenderConfig,
    ) -> Result<Vec<u8>, EngineError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| EngineError::Init("No se pudo adquirir el semaphore".to_string()))?;

        let start = Instant::now();
        let pdf_data = self.engine.render(html, config).await?;
        log::debug!(
            "Motor terminó en {:.2}s ({} bytes)",
            start.elapsed().as_secs_f32(),
            pdf_data.len()
        );
        Ok(pdf_data)
    }
}
