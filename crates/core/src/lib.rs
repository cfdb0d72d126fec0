//! Core library for multiad: resolve per-location ad copy from templates and
//! export multi-location campaigns for the ads manager.

pub mod ads;
pub mod config;
pub mod export;
pub mod locations;
pub mod models;
pub mod plan;
pub mod templates;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
