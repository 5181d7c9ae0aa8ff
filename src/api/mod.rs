//! HTTP API Handlers and Routes
//!
//! This module provides the REST API behind the SoftSell site, built on the
//! Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! - `POST /api/chat` - Ask the support assistant; always answers, falling
//!   back to an apology when the model is unavailable
//! - `GET /api/info` - Server name, version and configured model
//! - `GET /health` - Health check endpoint
//!
//! With the `ui` feature every other path serves the embedded frontend.
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

/// Embedded frontend assets.
#[cfg(feature = "ui")]
pub mod assets;
/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
