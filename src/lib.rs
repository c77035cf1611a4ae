//! eventdesk - a self-hostable event catalog service
//!
//! A single-resource CRUD HTTP API over an in-process key-value table.
//! The store applies partial updates through a small expression grammar
//! with reserved-word aliasing; the events module compiles typed change
//! sets into that grammar.

pub mod cli;
pub mod events;
pub mod http_server;
pub mod observability;
pub mod store;
