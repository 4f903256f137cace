pub mod app;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::catalog::Catalog;
pub use models::Movie;
