//! config/mod.rs
pub mod pdf_config;
pub mod server_config;
