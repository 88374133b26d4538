//! LSP Protocol Implementation
//!
//! Hover, formatting and the renumber command for TNC7 documents.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod position;
pub mod server;

pub use backend::Backend;
pub use handlers::RENUMBER_COMMAND;
