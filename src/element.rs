//! Read-only element handles the extractor queries.
//!
//! The extractor never walks a DOM itself; it asks an [`ArticleNode`] for
//! descendants, text and attributes. Any backend that can answer those four
//! questions (a parsed `scraper` tree, a browser driver's element handle) can
//! be plugged in.

use crate::selector::CssSelector;
use scraper::ElementRef;

/// A handle to one element of a DOM tree.
///
/// Queries are scoped to the element's descendants and must not mutate the
/// tree.
pub trait ArticleNode: Sized {
    /// First descendant matching `selector`, in document order
    fn query_selector(&self, selector: &CssSelector) -> Option<Self>;

    /// Every descendant matching `selector`, in document order
    fn query_selector_all(&self, selector: &CssSelector) -> Vec<Self>;

    /// Text content of the element and its descendants, untrimmed
    fn inner_text(&self) -> String;

    /// Value of the attribute `name`, if present
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<'a> ArticleNode for ElementRef<'a> {
    fn query_selector(&self, selector: &CssSelector) -> Option<Self> {
        self.select(selector.compiled()).next()
    }

    fn query_selector_all(&self, selector: &CssSelector) -> Vec<Self> {
        self.select(selector.compiled()).collect()
    }

    fn inner_text(&self) -> String {
        self.text().collect::<String>()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}
