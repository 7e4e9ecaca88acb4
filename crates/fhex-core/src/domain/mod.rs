//! Core domain layer for fhex.
//!
//! Pure logic over example metadata, contract annotations, structural checks,
//! documentation rendering and maintenance rewrites. All filesystem access is
//! handled via ports defined in the application layer.
//!
//! - **No I/O**: renderers return an [`OutputTree`], rewrites return strings
//! - **Immutable values**: everything here is `Clone + PartialEq`
//! - **Findings are data**: validation results are reports, not errors

pub mod checks;
pub mod docs;
pub mod entities;
pub mod error;
pub mod rewrite;
pub mod value_objects;

pub use checks::{ExampleCheck, ExampleReport, ValidationReport};
pub use docs::DocEntry;
pub use entities::{
    ContractDoc, ExampleMetadata, ExampleName, ExampleSources, METADATA_FILE, OutputTree,
    RenderContext,
};
pub use error::{DomainError, ErrorCategory};
pub use rewrite::{
    AllowRewrite, DependencyPin, DependencyPins, ImportMigration, ImportRule, Rewrite,
};
pub use value_objects::{Category, Difficulty};
