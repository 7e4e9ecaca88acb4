pub mod annotation;
pub mod example;
pub mod output_tree;
pub mod render_context;

pub use crate::domain::DomainError;
pub use annotation::ContractDoc;
pub use example::{ExampleMetadata, ExampleName, ExampleSources, METADATA_FILE};
pub use output_tree::OutputTree;
pub use render_context::RenderContext;
