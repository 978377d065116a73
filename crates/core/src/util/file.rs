use std::path::Path;

/// Check whether `path` has one of `extensions` (case-insensitive, no dot)
pub fn has_extension(path: &Path, extensions: &[impl AsRef<str>]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy();
    extensions
        .iter()
        .any(|candidate| candidate.as_ref().trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

/// Normalize user-supplied extensions: drop leading dots, lowercase, dedupe
pub fn normalize_extensions<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for ext in extensions {
        let ext = ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase();
        if !ext.is_empty() && !out.contains(&ext) {
            out.push(ext);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("a/page.tsx"), &["tsx"]));
        assert!(has_extension(Path::new("a/page.TSX"), &["tsx"]));
        assert!(has_extension(Path::new("list.ts"), &[".ts"]));
        assert!(!has_extension(Path::new("page.tsx.bak"), &["tsx"]));
        assert!(!has_extension(Path::new("Makefile"), &["tsx"]));
    }

    #[test]
    fn test_normalize_extensions() {
        assert_eq!(
            normalize_extensions([".TSX", "ts", "tsx", " ", "jsx"]),
            vec!["tsx", "ts", "jsx"]
        );
    }
}
