//! CLI command implementations.

pub mod league;
pub mod play;
pub mod score;

use std::path::Path;

use anyhow::{Result, anyhow};
use league_core::FileSystemPlayerStore;

fn open_store(path: &Path) -> Result<FileSystemPlayerStore> {
    FileSystemPlayerStore::open(path).map_err(|e| {
        if e.is_not_found() {
            anyhow!(
                "Directory for league record {} does not exist",
                path.display()
            )
        } else {
            anyhow!("Failed to open league record {}: {}", path.display(), e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_store_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("game.db.json");

        let err = open_store(&path).err().unwrap();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_open_store_creates_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.db.json");

        assert!(open_store(&path).is_ok());
        assert!(path.exists());
    }
}
