//! # devto-listing
//!
//! Structured metadata extraction for article cards on DEV-style listing pages.
//!
//! ## Overview
//!
//! A listing page shows one card per article. Each card carries a title link,
//! a short timestamp, an estimated read time, a handful of tags, and comment
//! and reaction counters. This crate reads those fields from a card element
//! with CSS selectors and returns them as a typed [`ArticleMetadata`] record.
//!
//! ## Key Features
//!
//! - **Field Extraction**: title, absolute URL, publication date, read time, tags,
//!   comment count and reaction count
//! - **Graceful Misses**: a selector that matches nothing yields the field default
//! - **Pluggable Backends**: anything implementing [`ArticleNode`] can be queried;
//!   `scraper::ElementRef` is supported out of the box
//! - **Customizable Options**: origin, selectors, tag prefix width, reference date
//!   and malformed-value policy
//!
//! ## Basic Usage
//!
//! ```rust
//! use devto_listing::{ArticleExtractor, ExtractorOptions};
//!
//! let html = r#"<html><body>
//!     <div class="crayons-story">
//!         <h3 class="crayons-story__title"><a href="/ada/ownership-101">Ownership 101</a></h3>
//!         <a class="crayons-story__tertiary" href="/ada/ownership-101"><time>Jul 1 '24</time></a>
//!         <a href="/ada/ownership-101#comments">12 comments</a>
//!     </div>
//! </body></html>"#;
//!
//! let extractor = ArticleExtractor::new(ExtractorOptions::default()).unwrap();
//! let articles = extractor.extract_listing_html(html).unwrap();
//!
//! let article = &articles[0];
//! assert_eq!(article.title.as_deref(), Some("Ownership 101"));
//! assert_eq!(article.href.as_deref(), Some("https://dev.to/ada/ownership-101"));
//! assert_eq!(article.date.map(|d| d.to_string()).as_deref(), Some("2024-07-01"));
//! assert_eq!(article.comments_count, 12);
//! assert_eq!(article.read_time, None);
//! ```
//!
//! ## Single Element
//!
//! When the caller already holds a card element, extract it directly:
//!
//! ```rust
//! use devto_listing::extract_article_metadata;
//! use scraper::{Html, Selector};
//!
//! let html = Html::parse_fragment(r#"<div class="crayons-story"></div>"#);
//! let card = html.select(&Selector::parse("div.crayons-story").unwrap()).next().unwrap();
//!
//! let metadata = extract_article_metadata(&card).unwrap();
//! assert_eq!(metadata.read_time_or_sentinel(), -1);
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use devto_listing::{ArticleExtractor, ExtractError, ExtractorOptions};
//!
//! let options = ExtractorOptions::builder().origin("not a valid url").build();
//!
//! match ArticleExtractor::new(options) {
//!     Ok(_) => unreachable!(),
//!     Err(ExtractError::InvalidUrl(url)) => assert_eq!(url, "not a valid url"),
//!     Err(e) => panic!("unexpected error: {}", e),
//! }
//! ```
//!
//! Missing elements never produce errors. Timestamps outside the `Mon D` and
//! `Mon D 'YY` formats, and counters that do not start with an integer, are
//! reported as errors unless [`MalformedPolicy::Lenient`] is selected.
//!
//! ## Logging
//!
//! The crate logs through [`tracing`] and never installs a subscriber. Misses
//! are logged at `debug`, malformed values skipped under the lenient policy
//! at `warn`.

mod article;
mod constants;
mod dates;
mod element;
mod error;
mod extractor;
mod options;
mod selector;
mod utils;

// Public exports
pub use article::ArticleMetadata;
pub use dates::parse_listing_date;
pub use element::ArticleNode;
pub use error::{ExtractError, Result};
pub use extractor::{extract_article_metadata, ArticleExtractor};
pub use options::{ExtractorOptions, ExtractorOptionsBuilder, MalformedPolicy, SelectorConfig};
pub use selector::CssSelector;
