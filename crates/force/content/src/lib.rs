//! Data-driven content for the force builder.
//!
//! This crate reads the static data a session runs against:
//! - The faction catalog and cannon table (RON)
//! - Roster defaults (TOML)
//! - Build scripts: ordered lists of roster mutations (RON)
//!
//! Content is turned into `force-core` types at load time and never appears in
//! roster state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BuildScript, CatalogFile, CatalogLoader, ConfigLoader, ContentFactory, LoadResult, Replay,
    ScriptLoader,
};
