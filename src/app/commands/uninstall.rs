//! Uninstall: remove exactly what the last install recorded.
//!
//! Files whose content no longer matches the manifest digest were modified
//! locally and are left in place.

use std::fs;
use std::path::Path;

use crate::domain::{manifest, AppError, InstallLayout, InstallManifest};

/// Summary of an uninstall run.
#[derive(Debug, Clone)]
pub struct UninstallOutcome {
    pub removed: usize,
    pub skipped: usize,
}

/// Remove manifest-listed files, the marker file, and the manifest itself.
pub fn execute(layout: &InstallLayout) -> Result<UninstallOutcome, AppError> {
    let manifest_path = layout.manifest_file();
    if !manifest_path.exists() {
        return Err(AppError::ManifestMissing);
    }
    let manifest = InstallManifest::load(&manifest_path)?;

    let mut removed = 0;
    let mut skipped = 0;
    for entry in &manifest.files {
        let path = Path::new(&entry.path);
        if !path.exists() {
            continue;
        }
        match manifest::hash_file(path) {
            Ok(digest) if digest == entry.sha256 => {
                fs::remove_file(path)?;
                println!("Removed {}", path.display());
                removed += 1;
            }
            _ => {
                println!("Skipping {} (locally modified)", path.display());
                skipped += 1;
            }
        }
    }

    let marker = layout.marker_file();
    if marker.exists() {
        fs::remove_file(&marker)?;
    }
    fs::remove_file(&manifest_path)?;

    Ok(UninstallOutcome { removed, skipped })
}
