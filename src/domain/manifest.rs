//! Install manifest domain entity.
//!
//! A successful install records every file it placed, keyed by content
//! digest. Uninstall removes exactly the recorded files and refuses to touch
//! copies that were modified after installation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::AppError;

const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// The filename of the install manifest, kept in the working root.
pub const MANIFEST_FILENAME: &str = ".traypack-manifest.json";

/// Record of one completed install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallManifest {
    pub schema_version: u32,
    /// Artifact name the install was made for.
    pub binary: String,
    /// Installed files with their content digests.
    pub files: Vec<ManifestEntry>,
}

/// One installed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub path: String,
    pub sha256: String,
}

impl InstallManifest {
    /// Start an empty manifest for the named artifact.
    pub fn new(binary: &str) -> Self {
        Self { schema_version: MANIFEST_SCHEMA_VERSION, binary: binary.to_string(), files: Vec::new() }
    }

    /// Digest an installed file and append it to the manifest.
    pub fn record(&mut self, path: &Path) -> Result<(), AppError> {
        let sha256 = hash_file(path)?;
        self.files.push(ManifestEntry { path: path.display().to_string(), sha256 });
        Ok(())
    }

    /// Read a manifest back from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the manifest.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, format!("{}\n", content))?;
        Ok(())
    }
}

/// Hex-encoded SHA-256 of a byte slice.
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Hex-encoded SHA-256 of a file's contents.
pub fn hash_file(path: &Path) -> Result<String, AppError> {
    let content = fs::read(path)?;
    Ok(hash_bytes(&content))
}
