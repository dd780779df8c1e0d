//! app.rs
use crate::handlers::pdf_handler;
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::post().to(pdf_handler::generate_pdf_endpoint)));
}
