//! Default selectors and patterns for DEV listing markup.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_ORIGIN: &str = "https://dev.to";

pub const CARD_SELECTOR: &str = "div.crayons-story";
pub const TITLE_SELECTOR: &str = "h3.crayons-story__title a";
pub const DATE_SELECTOR: &str = "a.crayons-story__tertiary time";
pub const READ_TIME_SELECTOR: &str = "div.crayons-story__save small.crayons-story__tertiary";
pub const TAGS_SELECTOR: &str = "div.crayons-story__tags a";
pub const COMMENTS_SELECTOR: &str = "a[href*='#comments']";
pub const REACTIONS_SELECTOR: &str =
    "div.multiple_reactions_aggregate span.aggregate_reactions_counter";

/// Tag links render as `# name`; this many leading characters are dropped.
pub const TAG_PREFIX_LEN: usize = 2;

/// Month, day and full year once the year is resolved (`Mar 18 2025`)
pub const LISTING_DATE_FORMAT: &str = "%b %d %Y";

/// ASCII digits only; `\d` would also match other scripts' digits.
pub static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());
