//! fhex Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `fhex`, the
//! tooling behind an FHEVM example hub: scaffold examples from a base
//! template, validate their structure, generate GitBook documentation and
//! run maintenance rewrites.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             fhex-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  Scaffold, Validate, Docs, Maintenance  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        Filesystem, StarterStore         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       fhex-adapters (Infrastructure)    │
//! │  LocalFilesystem, MemoryFilesystem, ... │
//! └─────────────────────────────────────────┘
//!
//!        Domain Layer (pure logic, no I/O)
//!   metadata, annotations, checks, docs, rewrites
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fhex_core::prelude::*;
//! # fn run(fs: Box<dyn Filesystem>, starters: Box<dyn StarterStore>) -> HubResult<()> {
//! let service = ScaffoldService::new(fs, starters, HubLayout::new("."));
//! service.create(ScaffoldRequest::new("fhe-counter", "basic", "Encrypted counter"))?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DocsService, HubLayout, MaintenanceService, ScaffoldRequest, ScaffoldService,
        ValidateService,
        ports::{Filesystem, StarterStore},
    };
    pub use crate::domain::{
        AllowRewrite, Category, DependencyPins, Difficulty, ExampleMetadata, ExampleName,
        ImportMigration, Rewrite,
    };
    pub use crate::error::{HubError, HubResult};
}
