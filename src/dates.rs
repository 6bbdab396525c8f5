//! Listing timestamp parsing.
//!
//! Cards show `Mar 18` for posts from the current year and `Jul 1 '24` for
//! anything older. Both are resolved to a calendar date here.

use crate::constants::LISTING_DATE_FORMAT;
use crate::error::{ExtractError, Result};
use chrono::NaiveDate;

/// Two-digit years up to this value belong to the 2000s, later ones to the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 68;

/// Parse a listing timestamp.
///
/// `reference_year` supplies the year when the text omits it. Text matching
/// neither format yields [`ExtractError::InvalidDate`].
pub fn parse_listing_date(raw: &str, reference_year: i32) -> Result<NaiveDate> {
    let raw = raw.trim();
    let invalid = || ExtractError::InvalidDate(raw.to_string());

    let (month_day, year) = if raw.contains('\'') {
        let unquoted = raw.replace('\'', "");
        let (month_day, short_year) = unquoted
            .trim()
            .rsplit_once(char::is_whitespace)
            .ok_or_else(invalid)?;
        let year = expand_two_digit_year(short_year).ok_or_else(invalid)?;
        (month_day.trim().to_string(), year)
    } else {
        (raw.to_string(), reference_year)
    };

    // chrono would happily read `Jul 2024` as day 20 of year 24
    if !is_month_day(&month_day) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(&format!("{month_day} {year}"), LISTING_DATE_FORMAT)
        .map_err(|_| invalid())
}

fn is_month_day(text: &str) -> bool {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(month), Some(day), None) => {
            month.chars().all(|c| c.is_ascii_alphabetic()) && is_short_number(day)
        }
        _ => false,
    }
}

fn is_short_number(text: &str) -> bool {
    !text.is_empty() && text.len() <= 2 && text.bytes().all(|b| b.is_ascii_digit())
}

fn expand_two_digit_year(text: &str) -> Option<i32> {
    if !is_short_number(text) {
        return None;
    }

    let short: i32 = text.parse().ok()?;
    if short <= TWO_DIGIT_YEAR_PIVOT {
        Some(2000 + short)
    } else {
        Some(1900 + short)
    }
}
