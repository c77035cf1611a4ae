//! # Key-Value Store Backend
//!
//! Single-table, schema-flexible store keyed by an opaque string id.
//! Writes are either whole-record puts or expression-driven updates;
//! the update grammar reserves a fixed set of identifiers that must be
//! referenced through `#name` aliases (see [`expression`]).

pub mod errors;
pub mod expression;
pub mod table;

pub use errors::{StoreError, StoreResult};
pub use expression::{is_reserved_word, UpdateInput};
pub use table::{EqFilter, Table};
