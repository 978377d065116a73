//! Run configuration.
//!
//! Layers, highest precedence first: command-line flags, the JSON config
//! file, built-in defaults. Every layer is a [`ConfigLayer`]; unset fields
//! fall through to the next one.

use quotefix_core::config::constants;
use quotefix_core::error::{QuotefixError, Result};
use quotefix_core::util::file::normalize_extensions;
use quotefix_core::Variant;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One partially specified configuration source
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub root: Option<PathBuf>,
    pub variant: Option<Variant>,
    pub extensions: Option<Vec<String>>,
    pub dry_run: Option<bool>,
}

impl ConfigLayer {
    /// Fill fields unset in `self` from `lower`
    pub fn merge(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            root: self.root.or(lower.root),
            variant: self.variant.or(lower.variant),
            extensions: self.extensions.or(lower.extensions),
            dry_run: self.dry_run.or(lower.dry_run),
        }
    }

    /// Parse a layer from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the config file layer.
    ///
    /// An explicitly named file must exist. Without one, `quotefix.json` in
    /// `cwd` is used when present and an empty layer otherwise.
    pub async fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let implicit = cwd.join(constants::CONFIG_FILE);
                if !tokio::fs::try_exists(&implicit).await.unwrap_or(false) {
                    debug!("No config file at {}", implicit.display());
                    return Ok(Self::default());
                }
                implicit
            }
        };

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            QuotefixError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        debug!("Loaded config file {}", path.display());
        Self::from_json(&content)
    }

    /// Apply defaults and validate
    pub fn resolve(self) -> Result<FixConfig> {
        let variant = self.variant.unwrap_or_default();
        let extensions = match self.extensions {
            Some(exts) => normalize_extensions(exts),
            None => normalize_extensions(variant.default_extensions()),
        };
        if extensions.is_empty() {
            return Err(QuotefixError::invalid_config(
                "no file extensions configured",
            ));
        }

        Ok(FixConfig {
            root: self
                .root
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_ROOT)),
            variant,
            extensions,
            dry_run: self.dry_run.unwrap_or(false),
        })
    }
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixConfig {
    pub root: PathBuf,
    pub variant: Variant,
    pub extensions: Vec<String>,
    pub dry_run: bool,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self::new(constants::DEFAULT_ROOT)
    }
}

impl FixConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let variant = Variant::default();
        Self {
            root: root.into(),
            variant,
            extensions: normalize_extensions(variant.default_extensions()),
            dry_run: false,
        }
    }

    /// Switch variant, taking its default extensions
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self.extensions = normalize_extensions(variant.default_extensions());
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = normalize_extensions(extensions);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigLayer::default().resolve().unwrap();
        assert_eq!(config, FixConfig::default());
        assert_eq!(config.root, PathBuf::from("src/app/questions"));
        assert_eq!(config.variant, Variant::Hardened);
        assert_eq!(config.extensions, vec!["tsx", "ts"]);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_variant_picks_its_extensions() {
        let layer = ConfigLayer {
            variant: Some(Variant::Baseline),
            ..Default::default()
        };
        assert_eq!(layer.resolve().unwrap().extensions, vec!["tsx"]);
    }

    #[test]
    fn test_merge_prefers_higher_layer() {
        let cli = ConfigLayer {
            root: Some(PathBuf::from("content")),
            ..Default::default()
        };
        let file = ConfigLayer::from_json(
            r#"{ "root": "ignored", "variant": "baseline", "dry_run": true }"#,
        )
        .unwrap();

        let config = cli.merge(file).resolve().unwrap();
        assert_eq!(config.root, PathBuf::from("content"));
        assert_eq!(config.variant, Variant::Baseline);
        assert!(config.dry_run);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ConfigLayer::from_json(r#"{ "roots": "x" }"#).unwrap_err();
        assert!(matches!(err, QuotefixError::Config(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let layer = ConfigLayer {
            extensions: Some(vec![" ".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            layer.resolve(),
            Err(QuotefixError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = FixConfig::new("q")
            .with_variant(Variant::Baseline)
            .with_extensions([".TSX", "jsx"])
            .with_dry_run(true);
        assert_eq!(config.extensions, vec!["tsx", "jsx"]);
        assert!(config.dry_run);
    }
}
