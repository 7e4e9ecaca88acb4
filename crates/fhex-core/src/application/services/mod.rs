//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the hub's
//! use cases: create, list, validate, generate docs, and maintenance.

pub mod docs_service;
pub mod maintenance_service;
pub mod scaffold_service;
pub mod validate_service;

pub use docs_service::{DefaultedTag, DocsReport, DocsService, SkippedExample};
pub use maintenance_service::{MaintenanceReport, MaintenanceService};
pub use scaffold_service::{
    BatchProgress, BatchReport, CreatedExample, ExampleSummary, ScaffoldRequest, ScaffoldService,
};
pub use validate_service::ValidateService;
