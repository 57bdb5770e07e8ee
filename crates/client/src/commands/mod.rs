//! Subcommand implementations.
//!
//! Each command owns its CLI args and execution logic.

mod build;
mod catalog;

pub use build::Build;
pub use catalog::ListCatalog;
