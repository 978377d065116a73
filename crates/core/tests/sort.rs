// Unit tests for path ordering
use std::path::PathBuf;
use quotefix_core::util::sort::compare_paths;

#[test]
fn test_natural_order_of_directories() {
    let mut paths = vec![
        PathBuf::from("q10/page.tsx"),
        PathBuf::from("q2/page.tsx"),
        PathBuf::from("q1/page.tsx"),
    ];
    paths.sort_by(|a, b| compare_paths(a, b));

    assert_eq!(
        paths,
        vec![
            PathBuf::from("q1/page.tsx"),
            PathBuf::from("q2/page.tsx"),
            PathBuf::from("q10/page.tsx"),
        ]
    );
}

#[test]
fn test_subdirectories_before_files() {
    let mut paths = vec![
        PathBuf::from("questions/layout.tsx"),
        PathBuf::from("questions/hoisting/page.tsx"),
        PathBuf::from("questions/questionsList.ts"),
        PathBuf::from("questions/event-loop/page.tsx"),
    ];
    paths.sort_by(|a, b| compare_paths(a, b));

    assert_eq!(
        paths,
        vec![
            PathBuf::from("questions/event-loop/page.tsx"),
            PathBuf::from("questions/hoisting/page.tsx"),
            PathBuf::from("questions/layout.tsx"),
            PathBuf::from("questions/questionsList.ts"),
        ]
    );
}
