//! Startup asset verification
//!
//! Gameplay never reads these files, but a missing sound or font means a
//! broken deployment, so the process refuses to start instead of running
//! degraded. The whole manifest is checked before reporting, so one launch
//! failure names every missing path.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing assets under {}: {}", .root.display(), paths(.missing))]
    Missing { root: PathBuf, missing: Vec<PathBuf> },
}

fn paths(missing: &[PathBuf]) -> String {
    missing
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check every manifest entry exists under `root`.
pub fn verify(root: &Path, manifest: &[&str]) -> Result<(), AssetError> {
    let missing: Vec<PathBuf> = manifest
        .iter()
        .map(PathBuf::from)
        .filter(|rel| !root.join(rel).is_file())
        .collect();

    if missing.is_empty() {
        debug!("verified {} assets under {}", manifest.len(), root.display());
        Ok(())
    } else {
        Err(AssetError::Missing {
            root: root.to_path_buf(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn empty_manifest_always_passes() {
        let dir = tempdir().unwrap();
        assert!(verify(dir.path(), &[]).is_ok());
    }

    #[test]
    fn present_assets_pass() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sfx")).unwrap();
        std::fs::write(dir.path().join("sfx/crash.ogg"), b"x").unwrap();
        std::fs::write(dir.path().join("font.ttf"), b"x").unwrap();

        assert!(verify(dir.path(), &["sfx/crash.ogg", "font.ttf"]).is_ok());
    }

    #[test]
    fn error_lists_every_missing_path() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("font.ttf"), b"x").unwrap();

        let err = verify(dir.path(), &["font.ttf", "theme.ogg", "crash.ogg"]).unwrap_err();
        let AssetError::Missing { missing, .. } = &err;
        assert_eq!(missing.len(), 2);

        let message = err.to_string();
        assert!(message.contains("theme.ogg"));
        assert!(message.contains("crash.ogg"));
        assert!(!message.contains("font.ttf"));
    }

    #[test]
    fn directory_does_not_count_as_asset() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("theme.ogg")).unwrap();
        assert!(verify(dir.path(), &["theme.ogg"]).is_err());
    }
}
