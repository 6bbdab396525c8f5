//! Configuration options for the article extractor.
//!
//! This module provides [`ExtractorOptions`], [`ExtractorOptionsBuilder`] and
//! [`SelectorConfig`] for configuring where the extractor looks for each field
//! and how it treats values it cannot read.
//!
//! ## Example
//!
//! ```rust
//! use devto_listing::{ArticleExtractor, ExtractorOptions, MalformedPolicy};
//! use chrono::NaiveDate;
//!
//! // Using default options
//! let extractor = ArticleExtractor::new(ExtractorOptions::default()).unwrap();
//!
//! // Using builder for custom options
//! let options = ExtractorOptions::builder()
//!     .origin("https://community.example.org")
//!     .reference_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
//!     .malformed(MalformedPolicy::Lenient)
//!     .build();
//!
//! let extractor = ArticleExtractor::new(options).unwrap();
//! ```

use crate::constants;
use chrono::NaiveDate;

/// What to do with text that is present but unreadable.
///
/// Missing elements always fall back to the field default; this policy only
/// covers a timestamp outside the two listing formats, or a read-time or
/// reaction counter whose leading token is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Return an error from the extraction call.
    #[default]
    Strict,

    /// Log a warning and use the field default.
    Lenient,
}

/// CSS selectors for each field of a listing card.
///
/// All field selectors are evaluated relative to the card element. `card`
/// is evaluated against the whole document by the listing helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// One article card on a listing page
    pub card: String,

    /// Title anchor; supplies both the title text and the href
    pub title: String,

    /// Timestamp element holding `Mon D` or `Mon D 'YY`
    pub date: String,

    /// Small text whose first token is the read time in minutes
    pub read_time: String,

    /// Tag links, all matches kept in document order
    pub tags: String,

    /// Anchor pointing at the comments fragment
    pub comments: String,

    /// Aggregate reactions counter
    pub reactions: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card: constants::CARD_SELECTOR.to_string(),
            title: constants::TITLE_SELECTOR.to_string(),
            date: constants::DATE_SELECTOR.to_string(),
            read_time: constants::READ_TIME_SELECTOR.to_string(),
            tags: constants::TAGS_SELECTOR.to_string(),
            comments: constants::COMMENTS_SELECTOR.to_string(),
            reactions: constants::REACTIONS_SELECTOR.to_string(),
        }
    }
}

/// Configuration options for the [`ArticleExtractor`](crate::ArticleExtractor).
///
/// ## Creating Options
///
/// ### Using Default
///
/// ```rust
/// use devto_listing::ExtractorOptions;
///
/// let options = ExtractorOptions::default();
/// assert_eq!(options.origin, "https://dev.to");
/// ```
///
/// ### Using Builder
///
/// ```rust
/// use devto_listing::ExtractorOptions;
///
/// let options = ExtractorOptions::builder()
///     .tag_prefix_len(1)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    /// Site origin prepended to root-relative hrefs.
    ///
    /// Must be an absolute `http` or `https` URL. A trailing slash is
    /// ignored so `https://dev.to/` and `https://dev.to` behave the same.
    ///
    /// Default: `"https://dev.to"`
    pub origin: String,

    /// Selectors used to locate each field.
    ///
    /// Default: DEV listing markup, see [`SelectorConfig`]
    pub selectors: SelectorConfig,

    /// Number of leading characters dropped from each trimmed tag.
    ///
    /// DEV renders tags as `# name`, so the default drops the marker and the
    /// following space. Counted in characters, not bytes.
    ///
    /// Default: `2`
    pub tag_prefix_len: usize,

    /// Date supplying the year for timestamps that omit one.
    ///
    /// Listings drop the year for posts from the current year. When unset,
    /// the local calendar date at extraction time is used.
    ///
    /// Default: `None`
    pub reference_date: Option<NaiveDate>,

    /// Handling of present-but-unreadable values.
    ///
    /// Default: [`MalformedPolicy::Strict`]
    pub malformed: MalformedPolicy,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            origin: constants::DEFAULT_ORIGIN.to_string(),
            selectors: SelectorConfig::default(),
            tag_prefix_len: constants::TAG_PREFIX_LEN,
            reference_date: None,
            malformed: MalformedPolicy::default(),
        }
    }
}

impl ExtractorOptions {
    /// Creates a new builder for ExtractorOptions
    pub fn builder() -> ExtractorOptionsBuilder {
        ExtractorOptionsBuilder::default()
    }
}

/// Builder for [`ExtractorOptions`].
///
/// ## Example
///
/// ```rust
/// use devto_listing::{ExtractorOptions, MalformedPolicy};
///
/// let options = ExtractorOptions::builder()
///     .origin("https://dev.to")
///     .title_selector("h2.story-title a")
///     .malformed(MalformedPolicy::Lenient)
///     .build();
///
/// assert_eq!(options.selectors.title, "h2.story-title a");
/// ```
#[derive(Default)]
pub struct ExtractorOptionsBuilder {
    origin: Option<String>,
    selectors: Option<SelectorConfig>,
    card: Option<String>,
    title: Option<String>,
    date: Option<String>,
    read_time: Option<String>,
    tags: Option<String>,
    comments: Option<String>,
    reactions: Option<String>,
    tag_prefix_len: Option<usize>,
    reference_date: Option<NaiveDate>,
    malformed: Option<MalformedPolicy>,
}

impl ExtractorOptionsBuilder {
    /// Set the site origin
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Replace the whole selector set
    pub fn selectors(mut self, selectors: SelectorConfig) -> Self {
        self.selectors = Some(selectors);
        self
    }

    /// Override only the card selector
    pub fn card_selector(mut self, selector: impl Into<String>) -> Self {
        self.card = Some(selector.into());
        self
    }

    /// Override only the title selector
    pub fn title_selector(mut self, selector: impl Into<String>) -> Self {
        self.title = Some(selector.into());
        self
    }

    /// Override only the date selector
    pub fn date_selector(mut self, selector: impl Into<String>) -> Self {
        self.date = Some(selector.into());
        self
    }

    /// Override only the read-time selector
    pub fn read_time_selector(mut self, selector: impl Into<String>) -> Self {
        self.read_time = Some(selector.into());
        self
    }

    /// Override only the tags selector
    pub fn tags_selector(mut self, selector: impl Into<String>) -> Self {
        self.tags = Some(selector.into());
        self
    }

    /// Override only the comments selector
    pub fn comments_selector(mut self, selector: impl Into<String>) -> Self {
        self.comments = Some(selector.into());
        self
    }

    /// Override only the reactions selector
    pub fn reactions_selector(mut self, selector: impl Into<String>) -> Self {
        self.reactions = Some(selector.into());
        self
    }

    /// Set the tag prefix width
    pub fn tag_prefix_len(mut self, len: usize) -> Self {
        self.tag_prefix_len = Some(len);
        self
    }

    /// Pin the date used for year-less timestamps
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Set the malformed-value policy
    pub fn malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = Some(policy);
        self
    }

    /// Build the ExtractorOptions
    pub fn build(self) -> ExtractorOptions {
        let defaults = ExtractorOptions::default();

        let base = self.selectors.unwrap_or(defaults.selectors);
        let selectors = SelectorConfig {
            card: self.card.unwrap_or(base.card),
            title: self.title.unwrap_or(base.title),
            date: self.date.unwrap_or(base.date),
            read_time: self.read_time.unwrap_or(base.read_time),
            tags: self.tags.unwrap_or(base.tags),
            comments: self.comments.unwrap_or(base.comments),
            reactions: self.reactions.unwrap_or(base.reactions),
        };

        ExtractorOptions {
            origin: self.origin.unwrap_or(defaults.origin),
            selectors,
            tag_prefix_len: self.tag_prefix_len.unwrap_or(defaults.tag_prefix_len),
            reference_date: self.reference_date.or(defaults.reference_date),
            malformed: self.malformed.unwrap_or(defaults.malformed),
        }
    }
}
