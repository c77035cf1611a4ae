//! # Events Module
//!
//! The event catalog domain: the typed data model, the store adapter,
//! the partial-update compiler, and the operation facade the HTTP
//! boundary dispatches into.

pub mod catalog;
pub mod errors;
pub mod model;
pub mod repository;
pub mod update;

pub use catalog::EventCatalog;
pub use errors::{EventError, EventResult};
pub use model::{Event, EventField, EventPatch, EventStatus, KEY_ATTRIBUTE};
pub use repository::EventRepository;
pub use update::{compile_update, needs_alias};
