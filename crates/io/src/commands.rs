use crate::api::{FileOutcome, RunReport};
use crate::collector::FileCollector;
use crate::config::FixConfig;
use crate::filters::ExtensionFilter;
use crate::store::{FsStore, SourceStore};
use quotefix_core::error::Result;
use quotefix_core::{Variant, escape};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Read, escape and conditionally write back one file.
///
/// The file is written only when the escaped text differs from what was
/// read, and never in a dry run.
pub async fn process_file<S: SourceStore + ?Sized>(
    store: &S,
    path: &Path,
    variant: Variant,
    dry_run: bool,
) -> Result<FileOutcome> {
    let content = store.read(path).await?;
    let fixed = escape(&content, variant);

    if fixed == content {
        debug!("No changes needed in {}", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    if dry_run {
        return Ok(FileOutcome::WouldFix);
    }

    store.write(path, &fixed).await?;
    Ok(FileOutcome::Fixed)
}

/// Process `files` one after another; a failing file never stops the rest
pub async fn fix_files<S: SourceStore + ?Sized>(
    store: &S,
    root: &Path,
    files: Vec<PathBuf>,
    variant: Variant,
    dry_run: bool,
) -> RunReport {
    let mut report = RunReport::new(root, dry_run);

    for path in files {
        match process_file(store, &path, variant, dry_run).await {
            Ok(outcome) => {
                match outcome {
                    FileOutcome::Fixed => info!("Fixed quotes in {}", display_name(&path)),
                    FileOutcome::WouldFix => {
                        info!("Would fix quotes in {}", display_name(&path))
                    }
                    FileOutcome::Unchanged => {}
                }
                report.record(path, outcome);
            }
            Err(e) => {
                error!("Error processing {}: {}", path.display(), e);
                report.record_failure(path, e);
            }
        }
    }

    report
}

/// Walk `config.root` and fix every eligible file on disk.
///
/// Only a traversal failure at the root is returned as an error; per-file
/// failures end up in the report.
pub async fn fix_command(config: &FixConfig) -> Result<RunReport> {
    info!("Scanning for unescaped quotes in {}", config.root.display());
    debug!("Variant: {}", config.variant);
    debug!("Extensions: {:?}", config.extensions);
    debug!("Dry run: {}", config.dry_run);

    let collector = FileCollector::new(ExtensionFilter::new(&config.extensions));
    let files = collector.collect_async(&config.root).await?;

    let report = fix_files(&FsStore, &config.root, files, config.variant, config.dry_run).await;

    info!(
        "Done! {} visited, {} {}, {} unchanged, {} failed",
        report.visited,
        report.fixed.len(),
        if config.dry_run { "to fix" } else { "fixed" },
        report.unchanged,
        report.failed.len()
    );
    Ok(report)
}

/// Parent directory and file name, enough to tell `page.tsx` files apart
fn display_name(path: &Path) -> String {
    let file = path.file_name().map(|n| n.to_string_lossy());
    let parent = path
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy());
    match (parent, file) {
        (Some(parent), Some(file)) => format!("{parent}/{file}"),
        (None, Some(file)) => file.into_owned(),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(
            display_name(Path::new("src/app/questions/hoisting/page.tsx")),
            "hoisting/page.tsx"
        );
        assert_eq!(display_name(Path::new("page.tsx")), "page.tsx");
    }
}
