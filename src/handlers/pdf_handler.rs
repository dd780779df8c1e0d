//! handlers/pdf_handler.rs
//! Endpoint para generar PDFs a partir de un HTML subido por multipart.

use std::time::Instant;

use actix_multipart::Multipart;
use actix_web::http::header::{
    CacheControl, CacheDirective, ContentDisposition, ContentType, DispositionParam,
    DispositionType,
};
use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::config::server_config::ServerConfig;
use crate::errors::PdfError;
use crate::models::pdf_model::{PdfFormValues, PdfUpload, DOWNLOAD_NAME};
use crate::services::form_service::{read_pdf_form, resolve_render_config};
use crate::services::pdf_service::PdfService;

pub const INPUT_ERROR_BODY: &str = "can't read body";
pub const ENGINE_ERROR_BODY: &str = "application error";

/// POST /
/// Campo `file` obligatorio; las opciones pueden venir como campos de texto
/// o en el query string (el query string se consulta primero).
pub async fn generate_pdf_endpoint(
    req: HttpRequest,
    pdf_service: web::Data<PdfService>,
    server_config: web::Data<ServerConfig>,
    multipart: Multipart,
) -> HttpResponse {
    let request_id = Uuid::new_v4();
    let start = Instant::now();

    let upload = match read_pdf_form(multipart, server_config.max_upload_bytes).await {
        Ok(upload) => upload,
        Err(e) => return error_response(request_id, &PdfError::from(e)),
    };
    log::info!(
        "[{}] Archivo de entrada: {} ({} bytes)",
        request_id,
        upload.file_name.as_deref().unwrap_or("<sin nombre>"),
        upload.payload.len()
    );

    // Un query string mal formado se ignora, igual que un campo ausente.
    let query = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let PdfUpload {
        payload, values, ..
    } = upload;
    let values = PdfFormValues::from_query(query).merge_body(values);

    let config = match resolve_render_config(&values) {
        Ok(config) => config,
        Err(e) => return error_response(request_id, &PdfError::from(e)),
    };
    log::debug!(
        "[{}] Configuración: {}",
        request_id,
        serde_json::to_string(&config).unwrap_or_default()
    );

    match pdf_service.generate_pdf(payload, config).await {
        Ok(pdf_bytes) => {
            log::info!(
                "[{}] PDF generado correctamente en {:.2}s",
                request_id,
                start.elapsed().as_secs_f32()
            );
            pdf_response(pdf_bytes)
        }
        Err(e) => error_response(request_id, &PdfError::from(e)),
    }
}

/// Cuerpo = bytes exactos del motor.
pub fn pdf_response(pdf_bytes: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType(actix_web::mime::APPLICATION_PDF))
        .insert_header(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(DOWNLOAD_NAME.to_string())],
        })
        .insert_header(CacheControl(vec![
            CacheDirective::Public,
            CacheDirective::MustRevalidate,
            CacheDirective::MaxAge(0),
        ]))
        .body(pdf_bytes)
}

/// El detalle va al log; el cliente solo ve un mensaje genérico.
pub fn error_response(request_id: Uuid, err: &PdfError) -> HttpResponse {
    match err {
        PdfError::Input(e) => {
            log::warn!("[{}] Request inválido: {}", request_id, e);
            HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(INPUT_ERROR_BODY)
        }
        PdfError::Engine(e) => {
            log::error!("[{}] Error generando PDF: {}", request_id, e);
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(ENGINE_ERROR_BODY)
        }
    }
}
