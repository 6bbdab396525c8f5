//! The [`ArticleExtractor`] and its field readers.
//!
//! ## Example
//!
//! ```rust
//! use devto_listing::{ArticleExtractor, ExtractorOptions};
//! use scraper::Html;
//!
//! let html = Html::parse_fragment(r#"
//!     <div class="crayons-story">
//!         <h3 class="crayons-story__title"><a href="/ada/hello">Hello</a></h3>
//!         <div class="crayons-story__tags"><a href="/t/rust"># rust</a></div>
//!     </div>
//! "#);
//!
//! let extractor = ArticleExtractor::new(ExtractorOptions::default())?;
//! let cards = extractor.extract_listing(&html)?;
//!
//! assert_eq!(cards[0].href.as_deref(), Some("https://dev.to/ada/hello"));
//! assert_eq!(cards[0].tags, vec!["rust".to_string()]);
//! # Ok::<(), devto_listing::ExtractError>(())
//! ```

use crate::{
    article::ArticleMetadata,
    dates::parse_listing_date,
    element::ArticleNode,
    error::{ExtractError, Result},
    options::{ExtractorOptions, MalformedPolicy},
    selector::CssSelector,
    utils,
};
use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html};
use tracing::{debug, warn};
use url::Url;

/// Selectors compiled once at construction.
#[derive(Debug, Clone)]
struct CompiledSelectors {
    card: CssSelector,
    title: CssSelector,
    date: CssSelector,
    read_time: CssSelector,
    tags: CssSelector,
    comments: CssSelector,
    reactions: CssSelector,
}

/// Extracts [`ArticleMetadata`] from listing cards.
///
/// Construction validates the origin and compiles every selector, so
/// configuration mistakes surface from [`ArticleExtractor::new`] rather than
/// from the first card. After that the extractor is immutable and can be
/// reused for any number of cards.
///
/// Missing sub-elements never fail an extraction: each field falls back to
/// its default (`None`, an empty tag list or a zero count). Only text that
/// is present but unreadable can produce an error, and only under
/// [`MalformedPolicy::Strict`].
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    /// Origin with any trailing slash removed
    origin: String,

    selectors: CompiledSelectors,

    options: ExtractorOptions,
}

impl ArticleExtractor {
    /// Create an extractor from options.
    ///
    /// ## Errors
    ///
    /// [`ExtractError::InvalidUrl`] if the origin is not an absolute http(s)
    /// URL, [`ExtractError::InvalidSelector`] if any selector fails to compile.
    pub fn new(options: ExtractorOptions) -> Result<Self> {
        let parsed = Url::parse(&options.origin)
            .map_err(|_| ExtractError::InvalidUrl(options.origin.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(ExtractError::InvalidUrl(options.origin.clone()));
        }
        let origin = options.origin.trim_end_matches('/').to_string();

        let config = &options.selectors;
        let selectors = CompiledSelectors {
            card: CssSelector::parse(&config.card)?,
            title: CssSelector::parse(&config.title)?,
            date: CssSelector::parse(&config.date)?,
            read_time: CssSelector::parse(&config.read_time)?,
            tags: CssSelector::parse(&config.tags)?,
            comments: CssSelector::parse(&config.comments)?,
            reactions: CssSelector::parse(&config.reactions)?,
        };

        Ok(Self {
            origin,
            selectors,
            options,
        })
    }

    /// Options this extractor was built from
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract every field of one article card.
    pub fn extract<N: ArticleNode>(&self, article: &N) -> Result<ArticleMetadata> {
        let (title, href) = self.read_title(article);

        Ok(ArticleMetadata {
            date: self.read_date(article)?,
            title,
            href,
            read_time: self.read_time(article)?,
            tags: self.read_tags(article),
            comments_count: self.read_comments(article),
            reaction_count: self.read_reactions(article)?,
        })
    }

    /// Extract every card of a parsed listing page, in document order.
    pub fn extract_listing(&self, document: &Html) -> Result<Vec<ArticleMetadata>> {
        let cards: Vec<ElementRef> = document.select(self.selectors.card.compiled()).collect();
        debug!(cards = cards.len(), selector = %self.selectors.card, "extracting listing");

        cards.iter().map(|card| self.extract(card)).collect()
    }

    /// Parse `html` as a full document and extract every card.
    pub fn extract_listing_html(&self, html: &str) -> Result<Vec<ArticleMetadata>> {
        let document = Html::parse_document(html);
        self.extract_listing(&document)
    }

    fn read_title<N: ArticleNode>(&self, article: &N) -> (Option<String>, Option<String>) {
        let Some(link) = article.query_selector(&self.selectors.title) else {
            debug!(selector = %self.selectors.title, "no title link");
            return (None, None);
        };

        let title = link.inner_text().trim().to_string();
        let href = link
            .attribute("href")
            .map(|href| utils::absolutize_href(&self.origin, &href));

        (Some(title), href)
    }

    fn read_date<N: ArticleNode>(&self, article: &N) -> Result<Option<chrono::NaiveDate>> {
        let Some(time) = article.query_selector(&self.selectors.date) else {
            debug!(selector = %self.selectors.date, "no timestamp");
            return Ok(None);
        };

        let raw = time.inner_text();
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        match parse_listing_date(raw, self.reference_year()) {
            Ok(date) => Ok(Some(date)),
            Err(e) => self.malformed(e).map(|()| None),
        }
    }

    fn read_time<N: ArticleNode>(&self, article: &N) -> Result<Option<u32>> {
        let Some(small) = article.query_selector(&self.selectors.read_time) else {
            debug!(selector = %self.selectors.read_time, "no read time");
            return Ok(None);
        };

        let text = small.inner_text();
        let minutes = utils::leading_integer(&text).and_then(|m| u32::try_from(m).ok());
        match minutes {
            Some(minutes) => Ok(Some(minutes)),
            None => self
                .malformed(ExtractError::InvalidNumber {
                    field: "read_time",
                    text: text.trim().to_string(),
                })
                .map(|()| None),
        }
    }

    fn read_tags<N: ArticleNode>(&self, article: &N) -> Vec<String> {
        article
            .query_selector_all(&self.selectors.tags)
            .iter()
            .map(|tag| {
                let text = tag.inner_text();
                utils::drop_chars(text.trim(), self.options.tag_prefix_len).to_string()
            })
            .collect()
    }

    fn read_comments<N: ArticleNode>(&self, article: &N) -> u64 {
        article
            .query_selector(&self.selectors.comments)
            .and_then(|link| utils::first_digit_run(link.inner_text().trim()))
            .unwrap_or(0)
    }

    fn read_reactions<N: ArticleNode>(&self, article: &N) -> Result<u64> {
        let Some(counter) = article.query_selector(&self.selectors.reactions) else {
            debug!(selector = %self.selectors.reactions, "no reactions counter");
            return Ok(0);
        };

        let text = counter.inner_text();
        match utils::leading_integer(&text) {
            Some(count) => Ok(count),
            None => self
                .malformed(ExtractError::InvalidNumber {
                    field: "reaction_count",
                    text: text.trim().to_string(),
                })
                .map(|()| 0),
        }
    }

    fn reference_year(&self) -> i32 {
        self.options
            .reference_date
            .map(|date| date.year())
            .unwrap_or_else(|| Local::now().year())
    }

    /// Apply the malformed-value policy: `Ok(())` means use the field default.
    fn malformed(&self, error: ExtractError) -> Result<()> {
        match self.options.malformed {
            MalformedPolicy::Strict => Err(error),
            MalformedPolicy::Lenient => {
                warn!(%error, "malformed value, using default");
                Ok(())
            }
        }
    }
}

static DEFAULT_EXTRACTOR: Lazy<Result<ArticleExtractor>> =
    Lazy::new(|| ArticleExtractor::new(ExtractorOptions::default()));

/// Extract one card with default options.
///
/// Uses a shared extractor built once from [`ExtractorOptions::default`], so
/// the default selectors are compiled on first use only.
pub fn extract_article_metadata<N: ArticleNode>(article: &N) -> Result<ArticleMetadata> {
    match &*DEFAULT_EXTRACTOR {
        Ok(extractor) => extractor.extract(article),
        Err(e) => Err(e.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn extractor_for_year(year: i32) -> ArticleExtractor {
        let options = ExtractorOptions::builder()
            .reference_date(NaiveDate::from_ymd_opt(year, 6, 1).unwrap())
            .build();
        ArticleExtractor::new(options).unwrap()
    }

    fn extract_card(extractor: &ArticleExtractor, inner: &str) -> Result<ArticleMetadata> {
        let html = Html::parse_fragment(&format!(r#"<div class="crayons-story">{inner}</div>"#));
        let cards = extractor.extract_listing(&html)?;
        assert_eq!(cards.len(), 1);
        Ok(cards.into_iter().next().unwrap())
    }

    #[test]
    fn test_empty_card_yields_defaults() {
        let extractor = extractor_for_year(2025);
        let metadata = extract_card(&extractor, "<p>nothing here</p>").unwrap();

        assert_eq!(metadata, ArticleMetadata::default());
        assert_eq!(metadata.read_time_or_sentinel(), -1);
    }

    #[test]
    fn test_title_and_relative_href() {
        let extractor = extractor_for_year(2025);
        let metadata = extract_card(
            &extractor,
            r#"<h3 class="crayons-story__title"><a href="/articles/foo">
                Writing a parser
            </a></h3>"#,
        )
        .unwrap();

        assert_eq!(metadata.title.as_deref(), Some("Writing a parser"));
        assert_eq!(metadata.href.as_deref(), Some("https://dev.to/articles/foo"));
    }

    #[test]
    fn test_absolute_href_untouched() {
        let extractor = extractor_for_year(2025);
        let metadata = extract_card(
            &extractor,
            r#"<h3 class="crayons-story__title"><a href="https://blog.example.com/p">P</a></h3>"#,
        )
        .unwrap();

        assert_eq!(metadata.href.as_deref(), Some("https://blog.example.com/p"));
    }

    #[test]
    fn test_title_without_href() {
        let extractor = extractor_for_year(2025);
        let metadata = extract_card(
            &extractor,
            r#"<h3 class="crayons-story__title"><a>Draft</a></h3>"#,
        )
        .unwrap();

        assert_eq!(metadata.title.as_deref(), Some("Draft"));
        assert_eq!(metadata.href, None);
    }

    #[test]
    fn test_trailing_slash_origin() {
        let options = ExtractorOptions::builder().origin("https://dev.to/").build();
        let extractor = ArticleExtractor::new(options).unwrap();
        let metadata = extract_card(
            &extractor,
            r#"<h3 class="crayons-story__title"><a href="/a/b">T</a></h3>"#,
        )
        .unwrap();

        assert_eq!(metadata.href.as_deref(), Some("https://dev.to/a/b"));
    }

    #[test]
    fn test_dates() {
        let extractor = extractor_for_year(2025);

        let older = extract_card(
            &extractor,
            r#"<a class="crayons-story__tertiary"><time datetime="2024-07-01">Jul 1 '24</time></a>"#,
        )
        .unwrap();
        assert_eq!(older.date, NaiveDate::from_ymd_opt(2024, 7, 1));

        let current = extract_card(
            &extractor,
            r#"<a class="crayons-story__tertiary"><time>Mar 18</time></a>"#,
        )
        .unwrap();
        assert_eq!(current.date, NaiveDate::from_ymd_opt(2025, 3, 18));
    }

    #[test]
    fn test_empty_timestamp_is_absent() {
        let extractor = extractor_for_year(2025);
        let metadata = extract_card(
            &extractor,
            r#"<a class="crayons-story__tertiary"><time>  </time></a>"#,
        )
        .unwrap();

        assert_eq!(metadata.date, None);
    }

    #[test]
    fn test_malformed_date_strict() {
        let extractor = extractor_for_year(2025);
        let err = extract_card(
            &extractor,
            r#"<a class="crayons-story__tertiary"><time>3 hours ago</time></a>"#,
        )
        .unwrap_err();

        assert_eq!(err, ExtractError::InvalidDate("3 hours ago".to_string()));
    }

    #[test]
    fn test_malformed_values_lenient() {
        let options = ExtractorOptions::builder()
            .malformed(MalformedPolicy::Lenient)
            .build();
        let extractor = ArticleExtractor::new(options).unwrap();
        let metadata = extract_card(
            &extractor,
            r#"
            <a class="crayons-story__tertiary"><time>3 hours ago</time></a>
            <div class="crayons-story__save"><small class="crayons-story__tertiary">quick read</small></div>
            <div class="multiple_reactions_aggregate"><span class="aggregate_reactions_counter">many</span></div>
            "#,
        )
        .unwrap();

        assert_eq!(metadata.date, None);
        assert_eq!(metadata.read_time, None);
        assert_eq!(metadata.reaction_count, 0);
    }

    #[test]
    fn test_read_time_and_reactions() {
        let extractor = extractor_for_year(2025);
        let metadata = extract_card(
            &extractor,
            r#"
            <div class="crayons-story__save">
                <small class="crayons-story__tertiary">4 min read</small>
            </div>
            <div class="multiple_reactions_aggregate">
                <span class="aggregate_reactions_counter">38 reactions</span>
            </div>
            "#,
        )
        .unwrap();

        assert_eq!(metadata.read_time, Some(4));
        assert_eq!(metadata.reaction_count, 38);
    }

    #[test]
    fn test_malformed_read_time_strict() {
        let extractor = extractor_for_year(2025);
        let err = extract_card(
            &extractor,
            r#"<div class="crayons-story__save"><small class="crayons-story__tertiary"></small></div>"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ExtractError::InvalidNumber {
                field: "read_time",
                text: String::new(),
            }
        );
    }

    #[test]
    fn test_tags_keep_order_and_drop_prefix() {
        let extractor = extractor_for_year(2025);
        let metadata = extract_card(
            &extractor,
            r#"<div class="crayons-story__tags">
                <a href="/t/rust"> # rust </a>
                <a href="/t/webdev"># webdev</a>
                <a href="/t/x">#</a>
            </div>"#,
        )
        .unwrap();

        assert_eq!(metadata.tags, vec!["rust", "webdev", ""]);
    }

    #[test]
    fn test_comments_count() {
        let extractor = extractor_for_year(2025);

        let metadata = extract_card(
            &extractor,
            r#"<a href="/ada/post#comments">12 comments</a>"#,
        )
        .unwrap();
        assert_eq!(metadata.comments_count, 12);

        let metadata = extract_card(
            &extractor,
            r#"<a href="/ada/post#comments">Add Comment</a>"#,
        )
        .unwrap();
        assert_eq!(metadata.comments_count, 0);
    }

    #[test]
    fn test_invalid_origin() {
        for origin in ["not a url", "ftp://dev.to", "mailto:someone@dev.to"] {
            let options = ExtractorOptions::builder().origin(origin).build();
            let err = ArticleExtractor::new(options).unwrap_err();
            assert_eq!(err, ExtractError::InvalidUrl(origin.to_string()));
        }
    }

    #[test]
    fn test_invalid_selector() {
        let options = ExtractorOptions::builder().title_selector("h3[").build();
        let err = ArticleExtractor::new(options).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector { .. }));
    }

    #[test]
    fn test_extract_article_metadata_default_options() {
        let html = Html::parse_fragment(
            r#"<div><a href="/p#comments">3 comments</a></div>"#,
        );
        let metadata = extract_article_metadata(&html.root_element()).unwrap();
        assert_eq!(metadata.comments_count, 3);
    }

    #[test]
    fn test_default_extractor_is_shared() {
        let html = Html::parse_fragment(r#"<div><a href="/p#comments">5 comments</a></div>"#);
        let first = extract_article_metadata(&html.root_element()).unwrap();
        let second = extract_article_metadata(&html.root_element()).unwrap();
        assert_eq!(first, second);

        let shared = DEFAULT_EXTRACTOR.as_ref().unwrap();
        assert!(std::ptr::eq(shared, DEFAULT_EXTRACTOR.as_ref().unwrap()));
        assert_eq!(shared.options().origin, "https://dev.to");
    }
}
