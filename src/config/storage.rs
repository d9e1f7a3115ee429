use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem adapter rooted at one directory. The data document is read
/// relative to it and the rendered page is written under it.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base: PathBuf,
}

impl LocalStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base.join(path)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Writes the serialized page under the root and reports the full path
    /// it landed at.
    pub async fn write_page(&self, file: &str, html: &str) -> Result<PathBuf> {
        self.write_file(file, html.as_bytes()).await?;
        Ok(self.resolve(file))
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.resolve(path))?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, data)?;
        Ok(())
    }
}
