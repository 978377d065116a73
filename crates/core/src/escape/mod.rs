//! Quote escaping for markup element bodies.
//!
//! Two variants exist. [`Variant::Baseline`] is the regex rewriter that only
//! looks at `<open>...</close>` pairs. [`Variant::Hardened`] shields
//! `` {`...`} `` code samples, classifies the rest with [`scanner::scan`] and
//! touches text content spans only. Both turn `'` into `&apos;` and `"` into
//! `&quot;`, leave backslash-escaped quotes alone, and are idempotent.

mod baseline;
mod hardened;
pub mod scanner;
pub mod shield;

use crate::config::constants;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use baseline::escape_baseline;
pub use hardened::escape_hardened;

/// Escape variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Baseline,
    #[default]
    Hardened,
}

impl Variant {
    /// Extensions this variant processes when none are configured
    pub fn default_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Baseline => constants::BASELINE_EXTENSIONS,
            Self::Hardened => constants::HARDENED_EXTENSIONS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Hardened => "hardened",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "hardened" => Ok(Self::Hardened),
            other => Err(format!("unknown variant '{other}' (expected baseline or hardened)")),
        }
    }
}

/// Escape quotes in `text` with the given variant
pub fn escape(text: &str, variant: Variant) -> String {
    match variant {
        Variant::Baseline => escape_baseline(text),
        Variant::Hardened => escape_hardened(text),
    }
}

/// Replace every `'` and `"` in `text` that is not preceded by a backslash.
///
/// `prev` is the character just before `text` in the surrounding input, so
/// that a backslash ending the previous span still protects the first quote.
pub(crate) fn escape_quotes_into(out: &mut String, text: &str, mut prev: Option<char>) {
    for c in text.chars() {
        match c {
            '\'' if prev != Some('\\') => out.push_str(constants::APOS_ENTITY),
            '"' if prev != Some('\\') => out.push_str(constants::QUOT_ENTITY),
            _ => out.push(c),
        }
        prev = Some(c);
    }
}
