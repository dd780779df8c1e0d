//! errors.rs
//! Clasificación de fallos de un request: datos del cliente vs. motor de render.

use thiserror::Error;

/// El cliente mandó algo faltante o mal formado. Siempre se rechaza antes de renderizar.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("falta el documento: {0}")]
    MissingPayload(String),

    #[error("el cuerpo supera {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("entero inválido en {field}: {value:?}")]
    InvalidMargin { field: &'static str, value: String },

    #[error("zoom inválido: {value:?}")]
    InvalidZoom { value: String },
}

/// El motor no pudo inicializarse o falló al renderizar. No se reintenta.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("no se pudo inicializar el motor: {0}")]
    Init(String),

    #[error("falló el render: {0}")]
    Render(String),
}

#[derive(Debug, Error)]
pub enum PdfError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
