//! services/mod.rs
//! Módulo que agrupa los "servicios" o "capas de negocio" de la app.

pub mod form_service;
pub mod pdf_engine;
pub mod pdf_service;
pub mod wkhtmltopdf_engine;
