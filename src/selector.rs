//! CSS selectors that remember their source text.

use crate::error::{ExtractError, Result};
use scraper::Selector;
use std::fmt;

/// A compiled CSS selector paired with the text it was compiled from.
///
/// `scraper` only needs the compiled [`Selector`], but element backends that
/// forward queries to a live browser need the original string, so both are
/// kept together.
#[derive(Clone)]
pub struct CssSelector {
    source: String,
    compiled: Selector,
}

impl CssSelector {
    /// Compile a selector, reporting the offending text on failure.
    pub fn parse(source: &str) -> Result<Self> {
        let compiled = Selector::parse(source).map_err(|e| ExtractError::InvalidSelector {
            selector: source.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: source.to_string(),
            compiled,
        })
    }

    /// Selector text as it was given to [`CssSelector::parse`]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Compiled form used by the `scraper` backend
    pub fn compiled(&self) -> &Selector {
        &self.compiled
    }
}

impl fmt::Debug for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CssSelector").field(&self.source).finish()
    }
}

impl fmt::Display for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
