pub mod app;
pub mod config;
pub mod contact;
pub mod csv_loader;
pub mod logging;
pub mod render;
