pub mod api;
pub mod collector;
pub mod commands;
pub mod config;
pub mod filters;
pub mod store;

// Re-export commonly used types
pub use api::{FailedFile, FileOutcome, RunReport};
pub use collector::FileCollector;
pub use commands::{fix_command, fix_files, process_file};
pub use config::{ConfigLayer, FixConfig};
pub use filters::{ExtensionFilter, FileFilter};
pub use store::{FsStore, SourceStore};
