//! handlers/mod.rs
pub mod pdf_handler;
