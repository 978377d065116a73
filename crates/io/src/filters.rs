/// File filter implementations
use quotefix_core::util::file::{has_extension, normalize_extensions};
use std::path::Path;

/// File filter trait
pub trait FileFilter: Send + Sync {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose extension is in a fixed set
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: normalize_extensions(extensions),
        }
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        has_extension(path, self.extensions.as_slice())
    }
}
