//! Slide segmentation
//!
//! Splits a document into raw slide segments on boundary lines (`---`).
//!
//! A boundary line immediately followed by `key: value` lines and a second
//! boundary line is not two empty slide breaks: the whole run is the metadata
//! block of the segment that follows, and it stays part of that segment. Such a
//! block only opens at the start of the document or right after another
//! boundary line (blank lines between them are allowed). After slide content a
//! boundary is always a plain break, so a body made of `key: value` lines is
//! still a slide.
//!
//! Boundary-looking lines inside fenced code blocks are ordinary content.

use super::metadata_block::parse_field_line;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// A raw slide segment borrowed from the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Segment text, trimmed
    pub text: &'a str,
    /// Byte range of `text` within the document
    pub span: Range<usize>,
}

/// A single line of the document with its byte offsets
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    /// Line text without its line terminator
    text: &'a str,
    /// Offset of the first byte of the line
    start: usize,
    /// Offset just past the line terminator
    end: usize,
}

/// An open fenced code block
#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    /// Detect a fence opening line (```` ``` ```` or `~~~`, info string allowed)
    fn open(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = trimmed.chars().take_while(|c| *c == marker).count();
        (len >= 3).then_some(Self { marker, len })
    }

    /// Check whether a line closes this fence
    fn closes(&self, line: &str) -> bool {
        let trimmed = line.trim();
        let run = trimmed.chars().take_while(|c| *c == self.marker).count();
        run >= self.len && trimmed.chars().all(|c| c == self.marker)
    }
}

fn boundary_regex() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"^[ \t]*-{3,}\s*$").expect("valid boundary regex"))
}

/// Check whether a line is a slide boundary (three or more hyphens)
///
/// # Parameters
/// * `line` - A single line without its line terminator
///
/// # Returns
/// * `bool` - True if the line consists solely of `---` (or longer), optionally
///   surrounded by whitespace
pub fn is_boundary_line(line: &str) -> bool {
    boundary_regex().is_match(line)
}

/// Split a document into ordered slide segments
///
/// Empty and whitespace-only segments are discarded. Bare boundary lines never
/// appear in a segment. The function is pure: the same text always yields the
/// same segments.
///
/// # Parameters
/// * `document` - Full document text
///
/// # Returns
/// * `Vec<Segment>` - Non-empty segments in document order
pub fn segment(document: &str) -> Vec<Segment<'_>> {
    let lines = split_lines(document);
    let mut segments = Vec::new();
    let mut current = 0..0;
    let mut fence: Option<Fence> = None;
    let mut block_allowed = true;
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];

        if let Some(open) = fence {
            if open.closes(line.text) {
                fence = None;
            }
            current.end = line.end;
            index += 1;
            continue;
        }

        if let Some(open) = Fence::open(line.text) {
            fence = Some(open);
            block_allowed = false;
            current.end = line.end;
            index += 1;
            continue;
        }

        if is_boundary_line(line.text) {
            push_segment(document, current.clone(), &mut segments);

            match metadata_block_end(&lines, index).filter(|_| block_allowed) {
                Some(close) => {
                    current = line.start..lines[close].end;
                    block_allowed = false;
                    index = close + 1;
                }
                None => {
                    current = line.end..line.end;
                    block_allowed = true;
                    index += 1;
                }
            }
            continue;
        }

        if !line.text.trim().is_empty() {
            block_allowed = false;
        }
        current.end = line.end;
        index += 1;
    }

    push_segment(document, current, &mut segments);
    segments
}

/// Find the closing boundary of a metadata block opened at `open`
///
/// The lines between the two boundaries must be blank or `key: value`, with at
/// least one field.
fn metadata_block_end(lines: &[Line<'_>], open: usize) -> Option<usize> {
    let mut saw_field = false;

    for (offset, line) in lines.iter().enumerate().skip(open + 1) {
        if is_boundary_line(line.text) {
            return saw_field.then_some(offset);
        }
        if line.text.trim().is_empty() {
            continue;
        }
        if parse_field_line(line.text).is_none() {
            return None;
        }
        saw_field = true;
    }

    None
}

/// Trim a candidate segment and keep it if it has any content
fn push_segment<'a>(document: &'a str, range: Range<usize>, segments: &mut Vec<Segment<'a>>) {
    let raw = &document[range.clone()];
    let text = raw.trim();
    if text.is_empty() {
        return;
    }

    let start = range.start + (raw.len() - raw.trim_start().len());
    segments.push(Segment {
        text,
        span: start..start + text.len(),
    });
}

fn split_lines(document: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;

    for chunk in document.split_inclusive('\n') {
        let end = start + chunk.len();
        let text = chunk
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(chunk);
        lines.push(Line { text, start, end });
        start = end;
    }

    lines
}
