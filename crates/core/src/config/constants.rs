//! Constants for quotefix

/// Content directory processed when no root is configured
pub const DEFAULT_ROOT: &str = "src/app/questions";

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "quotefix.json";

/// Extensions processed by the baseline variant
pub const BASELINE_EXTENSIONS: &[&str] = &["tsx"];

/// Extensions processed by the hardened variant
pub const HARDENED_EXTENSIONS: &[&str] = &["tsx", "ts"];

/// Entity written for `'`
pub const APOS_ENTITY: &str = "&apos;";

/// Entity written for `"`
pub const QUOT_ENTITY: &str = "&quot;";

/// Placeholder token prefix for shielded code blocks
pub const PLACEHOLDER_PREFIX: &str = "__CODE_BLOCK_";

/// Placeholder token suffix for shielded code blocks
pub const PLACEHOLDER_SUFFIX: &str = "__";
