//! # eventdesk HTTP Server Module
//!
//! The HTTP boundary of the service: request decoding and validation,
//! status-code mapping, CORS, and the axum server.
//!
//! # Endpoints
//!
//! - `GET /` - Service info
//! - `GET /events` - List events, optionally filtered by status
//! - `POST /events` - Create an event
//! - `GET /events/:id` - Fetch one event
//! - `PUT /events/:id` - Partial update
//! - `DELETE /events/:id` - Delete an event

pub mod config;
pub mod errors;
pub mod event_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use event_routes::EventsState;
pub use server::HttpServer;
