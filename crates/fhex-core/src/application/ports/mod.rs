//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fhex-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations over the hub
//!   - `StarterStore`: Starter contract/test sources per category
//!
//! - **Driving (Input) Ports**: the services themselves, called by the CLI

pub mod output;

pub use output::{Filesystem, StarterStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockStarterStore};
