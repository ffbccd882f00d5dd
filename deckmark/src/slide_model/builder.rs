//! Slide document builder
//!
//! The authoritative parse entry point: segmentation, metadata parsing and
//! title inference combined into the canonical `Vec<Slide>`.

use super::metadata_block::parse_block;
use super::segmenter::{segment, Segment};
use super::slide_metadata::SlideMetadata;
use super::{Slide, SlideId};
use itertools::Itertools;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Separator placed between slides when a deck is written back out
const SLIDE_SEPARATOR: &str = "\n\n---\n\n";

/// Parse a document into slides
///
/// Never fails. The result has one slide per non-empty segment, with ids
/// `slide-1`, `slide-2`, ... in document order.
///
/// # Parameters
/// * `document` - Full document text
///
/// # Returns
/// * `Vec<Slide>` - Slides in document order
pub fn parse(document: &str) -> Vec<Slide> {
    let segments = segment(document);

    #[cfg(feature = "parallel")]
    let slides = segments
        .par_iter()
        .enumerate()
        .map(|(position, seg)| build_slide(position, seg))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let slides = segments
        .iter()
        .enumerate()
        .map(|(position, seg)| build_slide(position, seg))
        .collect();

    slides
}

/// Build one slide from its segment
fn build_slide(position: usize, seg: &Segment<'_>) -> Slide {
    let block = parse_block(seg.text);
    let metadata = SlideMetadata::from_fields(&block.fields);

    Slide {
        id: SlideId::from_position(position),
        title: first_heading(block.body, 1),
        content: block.body.to_string(),
        metadata,
        raw_content: seg.text.to_string(),
        span: seg.span.clone(),
    }
}

/// Find the text of the first ATX heading of the given level
///
/// Headings inside fenced code blocks are skipped.
pub(super) fn first_heading(body: &str, level: usize) -> Option<String> {
    fenced_lines(body)
        .into_iter()
        .filter(|(_, in_fence)| !in_fence)
        .find_map(|(line, _)| heading_text(line, level))
        .map(str::to_string)
}

/// Split a body into lines, flagging those that belong to a fenced code block
///
/// Fence marker lines count as fenced.
///
/// # Parameters
/// * `body` - Slide body
///
/// # Returns
/// * `Vec<(&str, bool)>` - Each line with `true` when it is code
pub(crate) fn fenced_lines(body: &str) -> Vec<(&str, bool)> {
    let mut fence: Option<&str> = None;

    body.lines()
        .map(|line| {
            let trimmed = line.trim_start();

            if let Some(marker) = fence {
                if trimmed.starts_with(marker) {
                    fence = None;
                }
                return (line, true);
            }
            if trimmed.starts_with("```") {
                fence = Some("```");
                return (line, true);
            }
            if trimmed.starts_with("~~~") {
                fence = Some("~~~");
                return (line, true);
            }

            (line, false)
        })
        .collect()
}

/// Text of `line` if it is a heading of exactly `level` (`# text`, `## text`)
fn heading_text(line: &str, level: usize) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes != level {
        return None;
    }

    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

/// Write slides back out as a single document
///
/// Each slide contributes its `raw_content` (metadata block included), so
/// parsing the result yields the same slides.
///
/// # Parameters
/// * `slides` - Slides to write
///
/// # Returns
/// * `String` - Document text with slides separated by `---` lines
pub fn serialize(slides: &[Slide]) -> String {
    slides
        .iter()
        .map(|slide| slide.raw_content.as_str())
        .join(SLIDE_SEPARATOR)
}

/// Replace the body of one slide inside the full document
///
/// The slide's metadata block and every byte outside its segment are kept.
/// The edited body may itself contain boundary lines, in which case the next
/// parse yields more slides.
///
/// # Parameters
/// * `document` - Full document text
/// * `position` - 0-based slide position
/// * `new_content` - Replacement body (without metadata block)
///
/// # Returns
/// * `Some(String)` - The new document text
/// * `None` - No slide at `position`
pub fn replace_slide_content(document: &str, position: usize, new_content: &str) -> Option<String> {
    let segments = segment(document);
    let seg = segments.get(position)?;
    let block = parse_block(seg.text);

    let new_content = new_content.trim();
    let replacement = if block.header.is_empty() {
        new_content.to_string()
    } else if new_content.is_empty() {
        block.header.to_string()
    } else {
        format!("{}\n\n{}", block.header, new_content)
    };

    let mut spliced = String::with_capacity(document.len() + replacement.len());
    spliced.push_str(&document[..seg.span.start]);
    spliced.push_str(&replacement);
    spliced.push_str(&document[seg.span.end..]);
    Some(spliced)
}
