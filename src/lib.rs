//! Datanorm - A lightweight data normalization service
//!
//! Provides cache-augmented payload processing with TTL expiration and
//! oldest-first eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod ops;
pub mod processor;

pub use api::AppState;
pub use config::Config;
pub use processor::Processor;
