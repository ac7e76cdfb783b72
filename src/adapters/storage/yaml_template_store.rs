//! File-based template storage adapter.
//!
//! Stores assessment templates as YAML files on disk, one per phase.
//! Deployments that customize the question bank edit these files and load
//! them at bootstrap instead of using the built-in templates.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::assessment::AssessmentTemplate;
use crate::domain::foundation::{DomainError, ErrorCode, Phase};

/// YAML file storage for assessment templates.
#[derive(Debug, Clone)]
pub struct YamlTemplateStore {
    base_path: PathBuf,
}

impl YamlTemplateStore {
    /// Creates a store rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// File path for a phase's template.
    fn template_path(&self, phase: Phase) -> PathBuf {
        self.base_path
            .join(format!("{}.yaml", phase.label().to_lowercase()))
    }

    /// Saves a template under its phase's file name.
    pub async fn save(&self, template: &AssessmentTemplate) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let yaml = serde_yaml::to_string(template)
            .map_err(|e| DomainError::new(ErrorCode::SerializationError, e.to_string()))?;

        fs::write(self.template_path(template.phase), yaml)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    /// Loads the template for a phase.
    pub async fn load(&self, phase: Phase) -> Result<AssessmentTemplate, DomainError> {
        let path = self.template_path(phase);
        if !path.exists() {
            return Err(DomainError::new(
                ErrorCode::TemplateNotFound,
                format!("no template file for phase {phase}"),
            ));
        }

        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        serde_yaml::from_str(&yaml)
            .map_err(|e| DomainError::new(ErrorCode::SerializationError, e.to_string()))
    }

    /// True when a template file exists for the phase.
    pub fn exists(&self, phase: Phase) -> bool {
        self.template_path(phase).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::builtin_template;

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlTemplateStore::new(dir.path());

        let template = builtin_template(Phase::Be);
        store.save(template).await.unwrap();

        assert!(store.exists(Phase::Be));
        let loaded = store.load(Phase::Be).await.unwrap();
        assert_eq!(&loaded, template);
    }

    #[tokio::test]
    async fn load_missing_phase_is_template_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlTemplateStore::new(dir.path());

        let result = store.load(Phase::Have).await;
        assert!(matches!(
            result,
            Err(DomainError {
                code: ErrorCode::TemplateNotFound,
                ..
            })
        ));
        assert!(!store.exists(Phase::Have));
    }

    #[tokio::test]
    async fn phases_store_to_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlTemplateStore::new(dir.path());

        store.save(builtin_template(Phase::Be)).await.unwrap();
        store.save(builtin_template(Phase::Do)).await.unwrap();

        assert_eq!(store.load(Phase::Be).await.unwrap().phase, Phase::Be);
        assert_eq!(store.load(Phase::Do).await.unwrap().phase, Phase::Do);
        assert!(!store.exists(Phase::Have));
    }
}
