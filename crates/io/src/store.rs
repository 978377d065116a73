//! Storage seam for source files
use async_trait::async_trait;
use quotefix_core::error::{QuotefixError, Result};
use std::path::Path;

/// Reads and writes whole source files
#[async_trait]
pub trait SourceStore: Send + Sync {
    async fn read(&self, path: &Path) -> Result<String>;

    async fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Local filesystem store backed by `tokio::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

#[async_trait]
impl SourceStore for FsStore {
    async fn read(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        String::from_utf8(bytes).map_err(|_| QuotefixError::InvalidUtf8(path.to_path_buf()))
    }

    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}
