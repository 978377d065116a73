// Integration tests for FileCollector
use quotefix_core::error::QuotefixError;
use quotefix_io::{ExtensionFilter, FileCollector};
use std::fs;
use std::path::PathBuf;

fn write(root: &std::path::Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_collect_matching_files_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "hoisting/page.tsx", "<p>x</p>");
    write(root, "event-loop/deep/page.tsx", "<p>y</p>");
    write(root, "questionsList.ts", "export const q = [];");
    write(root, "notes.md", "# notes");
    write(root, "styles.css", "p {}");

    let collector = FileCollector::new(ExtensionFilter::new(["tsx", "ts"]));
    let files = collector
        .collect_async(root)
        .await
        .expect("Failed to collect files");

    let relative: Vec<_> = files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        vec![
            PathBuf::from("event-loop/deep/page.tsx"),
            PathBuf::from("hoisting/page.tsx"),
            PathBuf::from("questionsList.ts"),
        ]
    );
}

#[tokio::test]
async fn test_extension_set_narrows_selection() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a/page.tsx", "");
    write(dir.path(), "list.ts", "");

    let collector = FileCollector::new(ExtensionFilter::new(["tsx"]));
    let files = collector.collect_async(dir.path()).await.unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("a/page.tsx"));
}

#[tokio::test]
async fn test_missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let collector = FileCollector::new(ExtensionFilter::new(["tsx"]));
    let err = collector.collect_async(&missing).await.unwrap_err();

    assert!(matches!(err, QuotefixError::RootNotFound(_)));
}

#[tokio::test]
async fn test_file_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "page.tsx", "");

    let collector = FileCollector::new(ExtensionFilter::new(["tsx"]));
    let err = collector.collect_async(&file).await.unwrap_err();

    assert!(matches!(err, QuotefixError::RootNotFound(_)));
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlinks_not_followed() {
    let dir = tempfile::tempdir().unwrap();
    let target = write(dir.path(), "real/page.tsx", "");
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("loop")).unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("alias.tsx")).unwrap();

    let collector = FileCollector::new(ExtensionFilter::new(["tsx"]));
    let files = collector.collect_async(dir.path()).await.unwrap();

    assert_eq!(files, vec![target]);
}
