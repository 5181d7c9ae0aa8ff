//! API request handlers.

/// Support chat handler.
pub mod chat;
/// Server information handler.
pub mod info;
