//! Article metadata record returned by the extractor.
//!
//! This module defines [`ArticleMetadata`], the typed result of extracting one
//! listing card. Optional fields are `Option`s in Rust; when serialized, the
//! record becomes a mapping with fixed keys where an unknown read time is
//! written as the `-1` sentinel.
//!
//! ## Example
//!
//! ```rust
//! use devto_listing::ArticleMetadata;
//!
//! let metadata = ArticleMetadata::default();
//!
//! assert_eq!(metadata.title, None);
//! assert_eq!(metadata.read_time_or_sentinel(), -1);
//! assert!(metadata.tags.is_empty());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata extracted from one article card.
///
/// ## Serialization
///
/// Serializes with the keys `date`, `title`, `href`, `read_time`, `tags`,
/// `comments_count` and `reaction_count`. `date` is written as `YYYY-MM-DD`
/// and a missing `read_time` as `-1`:
///
/// ```json
/// {"date":null,"title":null,"href":null,"read_time":-1,"tags":[],
///  "comments_count":0,"reaction_count":0}
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleMetadata {
    /// Publication date from the card's timestamp.
    ///
    /// `None` when the card has no timestamp element.
    pub date: Option<NaiveDate>,

    /// Trimmed text of the title anchor.
    pub title: Option<String>,

    /// Absolute URL of the article.
    ///
    /// Root-relative hrefs are joined to the configured origin; anything
    /// else is kept exactly as found on the anchor.
    pub href: Option<String>,

    /// Reading time in minutes.
    #[serde(with = "read_time_sentinel")]
    pub read_time: Option<u32>,

    /// Tag names in document order, with the marker prefix removed.
    pub tags: Vec<String>,

    /// Number of comments, `0` when no comments link is shown.
    pub comments_count: u64,

    /// Aggregate reaction count, `0` when no counter is shown.
    pub reaction_count: u64,
}

impl ArticleMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read time as the signed value of the serialized mapping
    pub fn read_time_or_sentinel(&self) -> i64 {
        self.read_time.map_or(-1, i64::from)
    }
}

/// Maps `Option<u32>` to and from the `-1` sentinel.
mod read_time_sentinel {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.map_or(-1, i64::from))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            None | Some(-1) => Ok(None),
            Some(minutes) => u32::try_from(minutes)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid read_time: {minutes}"))),
        }
    }
}
