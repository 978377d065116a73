//! Code-block shielding.
//!
//! Verbatim code samples are written as `` {`...`} `` in the content files.
//! They are swapped for `__CODE_BLOCK_<index>__` tokens before escaping and
//! put back afterwards, so quotes inside a sample are never rewritten.

use crate::config::constants::{PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{`.*?`\}").expect("code block pattern is valid"));

/// Placeholder token to original code-block text, in order of appearance
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlaceholderTable {
    blocks: IndexMap<String, String>,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token used for the block at `index`
    pub fn token(index: usize) -> String {
        format!("{PLACEHOLDER_PREFIX}{index}{PLACEHOLDER_SUFFIX}")
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.blocks.get(token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Store `original` under the next token and return that token
    fn push(&mut self, original: &str) -> String {
        let token = Self::token(self.blocks.len());
        self.blocks.insert(token.clone(), original.to_string());
        token
    }

    /// Put every shielded block back, in index order.
    ///
    /// Each token is searched for after the previous one, so restoration
    /// follows the order the blocks were taken out in.
    pub fn restore(&self, text: &str) -> String {
        if self.blocks.is_empty() {
            return text.to_string();
        }

        let extra: usize = self.blocks.values().map(String::len).sum();
        let mut out = String::with_capacity(text.len() + extra);
        let mut rest = text;

        for (token, original) in &self.blocks {
            match rest.find(token.as_str()) {
                Some(pos) => {
                    out.push_str(&rest[..pos]);
                    out.push_str(original);
                    rest = &rest[pos + token.len()..];
                }
                None => debug!("Placeholder {} not found during restore", token),
            }
        }

        out.push_str(rest);
        out
    }
}

/// Replace every `` {`...`} `` span with a placeholder token
pub fn shield(text: &str) -> (String, PlaceholderTable) {
    let mut table = PlaceholderTable::new();
    let shielded = CODE_BLOCK.replace_all(text, |caps: &regex::Captures| table.push(&caps[0]));
    (shielded.into_owned(), table)
}
