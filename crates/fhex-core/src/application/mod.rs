//! Application layer for fhex.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (scaffold, validate, docs, maintenance)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Layout**: Where the hub's directories live
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod layout;
pub mod ports;
pub mod services;

pub use services::{
    BatchProgress, BatchReport, CreatedExample, DocsReport, DocsService, ExampleSummary,
    MaintenanceReport, MaintenanceService, ScaffoldRequest, ScaffoldService, ValidateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, StarterStore};

pub use error::ApplicationError;
pub use layout::HubLayout;
