use super::filters::FileFilter;
/// Recursive file collector with filter support
use quotefix_core::error::{QuotefixError, Result};
use quotefix_core::util::sort::compare_paths;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

pub struct FileCollector<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> FileCollector<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Collect every matching regular file under `root`, in natural order.
    ///
    /// A missing root is an error. A nested directory that cannot be listed
    /// is logged and skipped. Symbolic links are not followed.
    pub async fn collect_async(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = tokio::fs::metadata(root)
            .await
            .map_err(|_| QuotefixError::root_not_found(root))?;
        if !metadata.is_dir() {
            return Err(QuotefixError::root_not_found(root));
        }

        let mut files = Vec::new();
        self.collect_dir_async(root, &mut files).await?;
        files.sort_by(|a, b| compare_paths(a, b));
        debug!("Collected {} file(s) under {}", files.len(), root.display());
        Ok(files)
    }

    fn collect_dir_async<'a>(
        &'a self,
        dir: &'a Path,
        files: &'a mut Vec<PathBuf>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let mut entries = tokio::fs::read_dir(dir).await?;

            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                let file_type = entry.file_type().await?;

                if file_type.is_dir() {
                    if let Err(e) = self.collect_dir_async(&path, files).await {
                        error!("Error reading directory {}: {}", path.display(), e);
                    }
                } else if file_type.is_file() && self.filter.should_include(&path) {
                    files.push(path);
                } else if file_type.is_symlink() {
                    debug!("Skipping symbolic link {}", path.display());
                }
            }

            Ok(())
        })
    }
}
