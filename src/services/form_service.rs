//! services/form_service.rs
//! Lectura del multipart y resolución de la configuración de render.

use actix_multipart::{Field, Multipart};
use bytes::{Bytes, BytesMut};
use futures_util::TryStreamExt;

use crate::config::pdf_config::RenderConfig;
use crate::errors::InputError;
use crate::models::pdf_model::{PdfFormValues, PdfUpload, FILE_FIELD};

pub const PAGE_SIZE_FIELD: &str = "page_size";
pub const ORIENTATION_FIELD: &str = "orientation";
pub const MARGIN_TOP_FIELD: &str = "margin_top";
pub const MARGIN_BOTTOM_FIELD: &str = "margin_bottom";
pub const MARGIN_LEFT_FIELD: &str = "margin_left";
pub const MARGIN_RIGHT_FIELD: &str = "margin_right";
pub const SHRINK_FIELD: &str = "shrink";
pub const ZOOM_FIELD: &str = "zoom";

/// Consume todo el multipart: el primer campo `file` es el documento,
/// el resto de campos con nombre se guardan como texto.
///
/// `max_bytes` limita la suma de todos los campos.
pub async fn read_pdf_form(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<PdfUpload, InputError> {
    let mut budget = max_bytes;
    let mut file: Option<(Option<String>, Bytes)> = None;
    let mut values = PdfFormValues::new();

    while let Some(field) = multipart
        .try_next()
        .await
        .map_err(|e| InputError::MissingPayload(format!("multipart inválido: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        // Se lee siempre, aunque se descarte, para avanzar al siguiente campo.
        let data = read_field(field, &mut budget, max_bytes).await?;

        match name.as_deref() {
            Some(FILE_FIELD) if file.is_none() => file = Some((file_name, data)),
            Some(FILE_FIELD) | None => {}
            Some(other) => values.insert_first(other, String::from_utf8_lossy(&data)),
        }
    }

    match file {
        Some((file_name, payload)) => Ok(PdfUpload {
            file_name,
            payload,
            values,
        }),
        None => Err(InputError::MissingPayload(format!(
            "no se encontró el campo '{}'",
            FILE_FIELD
        ))),
    }
}

async fn read_field(
    mut field: Field,
    budget: &mut usize,
    limit: usize,
) -> Result<Bytes, InputError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| InputError::MissingPayload(format!("error leyendo campo: {}", e)))?
    {
        if chunk.len() > *budget {
            return Err(InputError::PayloadTooLarge { limit });
        }
        *budget -= chunk.len();
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}

/// Superpone los campos opcionales sobre los valores por defecto.
/// Cualquier override inválido aborta todo el request.
pub fn resolve_render_config(values: &PdfFormValues) -> Result<RenderConfig, InputError> {
    let mut cfg = RenderConfig::default();

    if let Some(page_size) = values.get(PAGE_SIZE_FIELD) {
        cfg.page_size = page_size.to_string();
    }
    if let Some(orientation) = values.get(ORIENTATION_FIELD) {
        cfg.orientation = orientation.to_string();
    }

    cfg.margin_top = parse_margin(values, MARGIN_TOP_FIELD, cfg.margin_top)?;
    cfg.margin_bottom = parse_margin(values, MARGIN_BOTTOM_FIELD, cfg.margin_bottom)?;
    cfg.margin_left = parse_margin(values, MARGIN_LEFT_FIELD, cfg.margin_left)?;
    cfg.margin_right = parse_margin(values, MARGIN_RIGHT_FIELD, cfg.margin_right)?;

    // "1" desactiva el smart shrinking; cualquier otro valor no cambia nada.
    if values.get(SHRINK_FIELD) == Some("1") {
        cfg.page_shrinking = false;
    }

    if let Some(raw) = values.get(ZOOM_FIELD) {
        cfg.page_zoom = match raw.parse::<f64>() {
            // Cero o negativo se deja pasar; el motor decide.
            Ok(zoom) if zoom.is_finite() => zoom,
            _ => {
                return Err(InputError::InvalidZoom {
                    value: raw.to_string(),
                })
            }
        };
    }

    Ok(cfg)
}

fn parse_margin(
    values: &PdfFormValues,
    field: &'static str,
    default: u32,
) -> Result<u32, InputError> {
    match values.get(field) {
        Some(raw) => raw.parse::<u32>().map_err(|_| InputError::InvalidMargin {
            field,
            value: raw.to_string(),
        }),
        None => Ok(default),
    }
}
