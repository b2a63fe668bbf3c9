//! Parsing of the inline `[[date:...]]` notation used in notes.
//!
//! Parsing is two separate steps: [`recognize`] decides whether a string is a
//! well-formed notation, and [`decompose`] splits an already recognized value
//! into its start and optional end tokens. [`parse`] composes the two.

use crate::error::{Error, NoteCalResult};
use lazy_static::lazy_static;
use regex::Regex;

/// Opening literal of a date notation
pub const NOTATION_PREFIX: &str = "[[date:";
/// Closing literal of a date notation
pub const NOTATION_SUFFIX: &str = "]]";

const RANGE_SEPARATOR: char = '/';

lazy_static! {
    static ref DATE_PATTERN: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern should compile");
    static ref DATE_TIME_PATTERN: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}$").expect("date-time pattern should compile");
}

/// Start and optional end tokens taken from a date notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDateInfo {
    pub original: String,
    pub start: String,
    pub end: Option<String>,
}

/// `YYYY-MM-DD`
pub fn is_date(token: &str) -> bool {
    DATE_PATTERN.is_match(token)
}

/// `YYYY-MM-DDTHH:MM`
pub fn is_date_time(token: &str) -> bool {
    DATE_TIME_PATTERN.is_match(token)
}

fn is_token(token: &str) -> bool {
    is_date(token) || is_date_time(token)
}

fn content_of(value: &str) -> Option<&str> {
    value
        .strip_prefix(NOTATION_PREFIX)?
        .strip_suffix(NOTATION_SUFFIX)
}

/// Check whether `value` is a well-formed date notation
pub fn recognize(value: &str) -> bool {
    let Some(content) = content_of(value) else {
        return false;
    };

    if content.trim().is_empty() {
        return false;
    }

    match content.split_once(RANGE_SEPARATOR) {
        None => is_token(content),
        Some((start, end)) => {
            !start.is_empty() && !end.is_empty() && is_token(start) && is_token(end)
        }
    }
}

/// Split a recognized notation into its tokens.
///
/// Does not validate; callers run [`recognize`] first.
pub fn decompose(value: &str) -> ParsedDateInfo {
    let content = content_of(value).unwrap_or_default();

    let (start, end) = match content.split_once(RANGE_SEPARATOR) {
        Some((start, end)) => (start, Some(end.to_string())),
        None => (content, None),
    };

    ParsedDateInfo {
        original: value.to_string(),
        start: start.to_string(),
        end,
    }
}

/// Recognize and decompose a date notation
pub fn parse(value: &str) -> NoteCalResult<ParsedDateInfo> {
    if !recognize(value) {
        return Err(Error::MalformedNotation {
            value: value.to_string(),
        });
    }
    Ok(decompose(value))
}
