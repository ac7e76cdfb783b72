//! File-based storage adapters.

mod yaml_template_store;

pub use yaml_template_store::YamlTemplateStore;
