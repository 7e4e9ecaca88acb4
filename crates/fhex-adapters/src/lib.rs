//! Infrastructure adapters for fhex.
//!
//! This crate implements the ports defined in `fhex_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog_loader;
pub mod filesystem;
pub mod starters;

// Re-export commonly used adapters
pub use catalog_loader::CatalogLoader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use starters::BuiltinStarters;
