//! config/pdf_config.rs
//! Configuración de un render: valores por defecto de página, márgenes, zoom y DPI.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: &str = "A4";
pub const DEFAULT_ORIENTATION: &str = "Landscape";
pub const DEFAULT_MARGIN: u32 = 10;
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Fijo, nunca viene del request.
pub const RENDER_DPI: u32 = 600;

/// Parámetros de layout ya resueltos para un único request.
/// Se construye una vez y se entrega por valor al motor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderConfig {
    pub page_size: String,
    pub orientation: String,
    pub margin_top: u32, // mm
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub page_shrinking: bool,
    pub page_zoom: f64,
    pub dpi: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            page_size: DEFAULT_PAGE_SIZE.to_string(),
            orientation: DEFAULT_ORIENTATION.to_string(),
            margin_top: DEFAULT_MARGIN,
            margin_bottom: DEFAULT_MARGIN,
            margin_left: DEFAULT_MARGIN,
            margin_right: DEFAULT_MARGIN,
            page_shrinking: true,
            page_zoom: DEFAULT_ZOOM,
            dpi: RENDER_DPI,
        }
    }
}
