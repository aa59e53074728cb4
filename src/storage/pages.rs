// src/storage/pages.rs
// =============================================================================
// Writes downloaded pages into the output directory.
//
// Every error here is a real problem with the disk (missing permissions,
// full disk, ...), so unlike network errors they are returned to the caller
// and end the crawl.
// =============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the output directory (and parents) if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        let existed = fs::try_exists(&self.root).await.unwrap_or(false);

        // Fails if the path exists but is not a directory
        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create output directory {}", self.root.display()))?;

        if !existed {
            tracing::info!(dir = %self.root.display(), "Created output directory");
            println!("Created directory: {}", self.root.display());
        }
        Ok(())
    }

    /// Saves the body verbatim under `name`, replacing any earlier copy.
    pub async fn write_page(&self, name: &str, body: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, body)
            .await
            .with_context(|| format!("Failed to write page {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_dir_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PageStore::new(tmp.path().join("out").join("pages"));

        store.ensure_dir().await.unwrap();
        assert!(store.root().is_dir());

        // Second call is a no-op
        store.ensure_dir().await.unwrap();
    }

    #[tokio::test]
    async fn test_write_page_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PageStore::new(tmp.path());

        store.write_page("index.html", "first").await.unwrap();
        let path = store.write_page("index.html", "<p>second</p>").await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "<p>second</p>");
    }

    #[tokio::test]
    async fn test_ensure_dir_fails_when_path_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = PageStore::new(blocker.join("out"));
        assert!(store.ensure_dir().await.is_err());
    }
}
