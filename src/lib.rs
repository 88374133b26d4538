//! TNC7 Language Server
//!
//! Editor support for HEIDENHAIN TNC7 macro and program files.
//!
//! This library provides:
//! - M-code documentation merged from the manual and the local macro set
//! - Block renumbering of whole documents
//! - LSP hover, formatting and a renumber command

pub mod config;
pub mod docs;
pub mod hover;
pub mod lsp;
pub mod renumber;

// Re-exports for clean public API
pub use config::Config;
pub use docs::{DocEntry, DocRegistry};
pub use renumber::{renumber_text, strip_label};
