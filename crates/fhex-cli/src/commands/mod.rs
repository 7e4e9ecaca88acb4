//! Command handlers.
//!
//! Each handler translates parsed arguments into a core service call and
//! renders the result. No business logic lives here.

use fhex_adapters::{BuiltinStarters, LocalFilesystem};
use fhex_core::application::{HubLayout, ScaffoldService};

pub mod batch;
pub mod completions;
pub mod config;
pub mod create;
pub mod generate_docs;
pub mod init;
pub mod list;
pub mod maintain;
pub mod validate;

/// Scaffold service over the local disk with the built-in starters.
pub(crate) fn scaffold_service(layout: HubLayout) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinStarters::new()),
        layout,
    )
}
