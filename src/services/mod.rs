//! Hosting-layer services: model file loading and CSV export
//!
//! Nothing here is part of the rendering core; the dashboard renders
//! identically whether the model came from a file or the built-in
//! sample.

pub mod export;
pub mod loader;

pub use export::export_tab_tables;
pub use loader::load_model;
