//! Reading the serialized model artifact from disk.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{DiabriskError, Result};

/// Metadata about a loaded model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Artifact format identifier.
    pub format: String,
    /// Training objective recorded in the artifact.
    pub objective: String,
    /// Number of trees in the ensemble.
    pub num_trees: usize,
    /// Number of input features the model expects.
    pub num_features: usize,
    /// Library version that wrote the artifact, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer_version: Option<String>,
    /// When the artifact was loaded.
    pub loaded_at: DateTime<Utc>,
}

/// Raw artifact bytes plus the file facts gathered while reading them.
#[derive(Debug)]
pub(crate) struct ArtifactBytes {
    pub path: PathBuf,
    pub contents: Vec<u8>,
    pub hash: String,
    pub size_bytes: u64,
}

impl ArtifactBytes {
    /// Read the whole artifact into memory and hash it.
    ///
    /// Any IO problem is reported as an artifact load failure.
    pub fn read(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| DiabriskError::artifact(path, format!("cannot open file: {}", e)))?;

        let size_bytes = file
            .metadata()
            .map_err(|e| DiabriskError::artifact(path, format!("cannot stat file: {}", e)))?
            .len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| DiabriskError::artifact(path, format!("cannot read file: {}", e)))?;

        if contents.is_empty() {
            return Err(DiabriskError::artifact(path, "file is empty"));
        }

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Ok(Self {
            path: path.to_path_buf(),
            contents,
            hash,
            size_bytes,
        })
    }

    pub fn metadata(
        &self,
        format: &str,
        objective: &str,
        num_trees: usize,
        num_features: usize,
        writer_version: Option<String>,
    ) -> ArtifactMetadata {
        let file = self
            .path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        ArtifactMetadata {
            file,
            path: self.path.clone(),
            hash: self.hash.clone(),
            size_bytes: self.size_bytes,
            format: format.to_string(),
            objective: objective.to_string(),
            num_trees,
            num_features,
            writer_version,
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_hashes_contents() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();

        let bytes = ArtifactBytes::read(file.path()).unwrap();
        assert_eq!(bytes.size_bytes, 3);
        assert_eq!(
            bytes.hash,
            "sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_missing_file_is_artifact_error() {
        let err = ArtifactBytes::read(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, DiabriskError::ArtifactLoad { .. }));
    }

    #[test]
    fn test_empty_file_is_artifact_error() {
        let file = NamedTempFile::new().unwrap();
        let err = ArtifactBytes::read(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
