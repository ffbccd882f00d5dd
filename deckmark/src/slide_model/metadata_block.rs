//! Leading metadata blocks
//!
//! A segment may start with a block of `key: value` lines wrapped in two
//! boundary lines:
//!
//! ```markdown
//! ---
//! template: quote
//! animation: zoom
//! ---
//!
//! > Hello
//! ```
//!
//! Values are scalars. Metadata is best-effort: a malformed block leaves the
//! whole segment as body text with no fields.

use super::error::MetadataBlockError;
use super::segmenter::is_boundary_line;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// A scalar metadata value
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    /// Whole number (e.g. `duration: 800`)
    Integer(i64),
    /// Decimal number
    Float(f64),
    /// `true` or `false`
    Bool(bool),
    /// Anything else, with surrounding quotes removed
    Text(String),
}

impl MetaValue {
    /// Interpret a raw value string
    ///
    /// Quoted values are always text. Unquoted values are tried as boolean,
    /// integer and decimal before falling back to text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Some(inner) = unquote(raw) {
            return Self::Text(inner.to_string());
        }

        match raw {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }

        if let Ok(value) = raw.parse::<i64>() {
            return Self::Integer(value);
        }

        let numeric = !raw.is_empty()
            && raw.chars().any(|c| c.is_ascii_digit())
            && raw
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'));
        if numeric {
            if let Ok(value) = raw.parse::<f64>() {
                return Self::Float(value);
            }
        }

        Self::Text(raw.to_string())
    }

    /// Get the value as text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A segment split into its metadata header and body
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataBlock<'a> {
    /// The block text including both boundary lines (empty when absent)
    pub header: &'a str,
    /// Segment text after the block, trimmed
    pub body: &'a str,
    /// Parsed fields, keyed by name
    pub fields: BTreeMap<String, MetaValue>,
}

impl<'a> MetadataBlock<'a> {
    fn without_block(segment: &'a str) -> Self {
        Self {
            header: "",
            body: segment,
            fields: BTreeMap::new(),
        }
    }
}

fn field_regex() -> &'static Regex {
    static FIELD: OnceLock<Regex> = OnceLock::new();
    FIELD.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_-]*)\s*:(?:\s+(.*))?$").expect("valid field regex")
    })
}

/// Split a `key: value` line into key and raw value
///
/// The colon must be followed by whitespace or end the line, so URLs such as
/// `https://example.com` are not mistaken for fields.
pub(super) fn parse_field_line(line: &str) -> Option<(&str, &str)> {
    let captures = field_regex().captures(line)?;
    let key = captures.get(1)?.as_str();
    let value = captures.get(2).map_or("", |m| m.as_str().trim());
    Some((key, value))
}

/// Parse the optional metadata block at the start of a segment
///
/// # Parameters
/// * `segment` - Raw segment text
///
/// # Returns
/// * `MetadataBlock` - Body and fields. Without a block (or with a malformed
///   one) the body is the whole trimmed segment and the fields are empty.
pub fn parse_block(segment: &str) -> MetadataBlock<'_> {
    let segment = segment.trim();

    match try_parse_block(segment) {
        Ok(Some(block)) => block,
        Ok(None) => MetadataBlock::without_block(segment),
        Err(e) => {
            log::debug!("Ignoring malformed metadata block: {}", e);
            MetadataBlock::without_block(segment)
        }
    }
}

/// Strict parse of a leading metadata block
///
/// # Returns
/// * `Ok(Some(MetadataBlock))` - The segment starts with a well-formed block
/// * `Ok(None)` - The segment does not start with a boundary line
/// * `Err(MetadataBlockError)` - A block was opened but is malformed
fn try_parse_block(segment: &str) -> Result<Option<MetadataBlock<'_>>, MetadataBlockError> {
    let mut lines = segment.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(None);
    };
    if !is_boundary_line(first.trim_end()) {
        return Ok(None);
    }

    let mut offset = first.len();
    let mut fields = BTreeMap::new();

    for (index, line) in lines.enumerate() {
        offset += line.len();
        let text = line.trim_end();

        if is_boundary_line(text) {
            let header = &segment[..offset];
            let body = segment[offset..].trim();
            return Ok(Some(MetadataBlock {
                header: header.trim_end(),
                body,
                fields,
            }));
        }

        if text.trim().is_empty() {
            continue;
        }

        let (key, value) =
            parse_field_line(text).ok_or_else(|| MetadataBlockError::InvalidLine {
                line_number: index + 2,
                line: text.to_string(),
            })?;
        fields.insert(key.to_string(), MetaValue::parse(value));
    }

    Err(MetadataBlockError::Unterminated)
}

/// Remove matching single or double quotes around a value
fn unquote(raw: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        raw.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}
