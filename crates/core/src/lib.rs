//! Quote-escaping transformer for markup content files.
//!
//! The crate is pure: it never touches the filesystem. Directory walking and
//! the write-back policy live in `quotefix-io`.

pub mod config;
pub mod error;
pub mod escape;
pub mod util;

pub use error::{QuotefixError, Result};
pub use escape::{Variant, escape, escape_baseline, escape_hardened};
