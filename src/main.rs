use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use crate::config::server_config::ServerConfig;
use crate::logger::init_logger;
use crate::services::pdf_service::PdfService;
use crate::services::wkhtmltopdf_engine::WkhtmltopdfEngine;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let server_config = ServerConfig::from_env().context("Configuración inválida")?;

    let engine = WkhtmltopdfEngine::new(server_config.wkhtmltopdf_path.clone());
    let pdf_service = PdfService::new(Arc::new(engine), server_config.render_concurrency);

    let port = server_config.port;
    log::info!(
        "App start on port: {} (renders simultáneos: {})",
        port,
        server_config.render_concurrency
    );
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pdf_service.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .configure(app::init_app)
    })
    .bind(("0.0.0.0", port))
    .with_context(|| format!("No se pudo abrir el puerto {}", port))?
    .run()
    .await
    .context("El servidor terminó con error")
}
