//! Adapters - concrete implementations of the storage ports.

pub mod memory;
pub mod storage;

pub use memory::{InMemoryAssessmentStore, InMemoryForecastStore, InMemoryRiskHistory};
pub use storage::YamlTemplateStore;
