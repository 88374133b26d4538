//! M-code Documentation
//!
//! Two embedded tables (manual and local macro set) merged into one lookup.

pub mod registry;
pub mod schema;

pub use registry::DocRegistry;
pub use schema::{DocEntry, DocFile, DocTable};
