//! Plan file storage
//!
//! Plans are single YAML files. `save_plan` creates missing parent
//! directories so `runway init plans/seed.yaml` works on a fresh checkout.

use std::fs;
use std::path::Path;

use super::plan_data::PlanData;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Read and parse a plan file
pub fn load_plan(path: &Path) -> Result<PlanData, StorageError> {
    let content = fs::read_to_string(path).map_err(|e| {
        StorageError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let plan = PlanData::from_yaml(&content).map_err(|e| {
        StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded plan");
    Ok(plan)
}

/// Write a plan file, replacing any existing content
pub fn save_plan(path: &Path, plan: &PlanData) -> Result<(), StorageError> {
    let yaml = plan
        .to_yaml()
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize plan: {}", e)))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| StorageError::Io(format!("Failed to create directory: {}", e)))?;
    }

    fs::write(path, yaml).map_err(|e| {
        StorageError::Io(format!("Failed to write {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), "saved plan");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_plan() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plans").join("seed.yaml");

        let plan = PlanData {
            name: Some("Seed".into()),
            start_month: Some("2025-01".into()),
            months: Some(12),
            ..Default::default()
        };

        save_plan(&path, &plan).unwrap();
        assert!(path.exists());
        assert_eq!(load_plan(&path).unwrap(), plan);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_plan(&temp_dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "months: [not, a, number]\n").unwrap();

        let err = load_plan(&path).unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }
}
