/// Centralized error handling for quotefix
pub mod quotefix;

pub use quotefix::{QuotefixError, Result};
