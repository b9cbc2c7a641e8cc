//! API Module
//!
//! HTTP handlers and routing for the processing REST API.
//!
//! # Endpoints
//! - `POST /process` - Run an operation over a payload
//! - `GET /stats` - Get result cache statistics
//! - `DELETE /cache` - Empty the result cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
