//! Slide document model
//!
//! This module turns a flat markdown document into an ordered sequence of
//! [`Slide`] records. Parsing happens in three steps:
//! 1. **Segmentation**: split the document on horizontal-rule boundary lines
//! 2. **Metadata blocks**: strip the optional `key: value` header of each segment
//! 3. **Building**: normalise metadata, infer titles and assign ids

use std::fmt;
use std::ops::Range;

// Submodules
mod builder;
mod error;
mod metadata_block;
mod segmenter;
mod slide_metadata;

// Re-export public types
pub use builder::{parse, replace_slide_content, serialize};
pub(crate) use builder::fenced_lines;
pub use error::MetadataBlockError;
pub use metadata_block::{parse_block, MetaValue, MetadataBlock};
pub use segmenter::{is_boundary_line, segment, Segment};
pub use slide_metadata::{
    Animation, Layout, SlideMetadata, Transition, UnknownVariant, DEFAULT_DURATION_MS,
};

/// Maximum number of characters of a label shown in a deck outline
const LABEL_MAX_CHARS: usize = 25;

/// Stable identifier of a slide within one parse result (`slide-<n>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(String);

impl SlideId {
    /// Build the id for the slide at a 0-based document position
    pub fn from_position(position: usize) -> Self {
        Self(format!("slide-{}", position + 1))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of the presentation
#[derive(Debug, Clone)]
pub struct Slide {
    /// Identifier assigned in document order, used as the animation key
    pub id: SlideId,

    /// Text of the first level-1 heading in the body, if any
    pub title: Option<String>,

    /// Body text with the metadata block stripped
    pub content: String,

    /// Normalised presentation directives
    pub metadata: SlideMetadata,

    /// The original segment text, metadata block included, trimmed
    pub raw_content: String,

    /// Byte range of `raw_content` within the source document
    pub span: Range<usize>,
}

impl Slide {
    /// Short label for deck outlines and thumbnails
    ///
    /// Uses the level-1 title, then the first level-2 heading, then
    /// `Slide <n>`. Labels longer than 25 characters are truncated.
    ///
    /// # Parameters
    /// * `position` - 0-based position of the slide in the deck
    ///
    /// # Returns
    /// * `String` - The label to display
    pub fn label(&self, position: usize) -> String {
        let label = self
            .title
            .clone()
            .or_else(|| builder::first_heading(&self.content, 2))
            .unwrap_or_else(|| format!("Slide {}", position + 1));

        if label.chars().count() > LABEL_MAX_CHARS {
            let truncated: String = label.chars().take(LABEL_MAX_CHARS).collect();
            format!("{}...", truncated)
        } else {
            label
        }
    }
}

// Equality ignores `span`: it locates the slide in one particular source text.
impl PartialEq for Slide {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.content == other.content
            && self.metadata == other.metadata
            && self.raw_content == other.raw_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_id_from_position() {
        assert_eq!(SlideId::from_position(0).as_str(), "slide-1");
        assert_eq!(SlideId::from_position(9).to_string(), "slide-10");
    }

    #[test]
    fn test_label_prefers_title() {
        let slides = parse("# Welcome\n\n## Subtitle");
        assert_eq!(slides[0].label(0), "Welcome");
    }

    #[test]
    fn test_label_falls_back_to_subheading_then_number() {
        let slides = parse("## Good design is honest\n\n---\n\nplain text");
        assert_eq!(slides[0].label(0), "Good design is honest");
        assert_eq!(slides[1].label(1), "Slide 2");
    }

    #[test]
    fn test_label_truncates_long_titles() {
        let slides = parse("# Good design makes a product understandable");
        assert_eq!(slides[0].label(0), "Good design makes a produ...");
    }

    #[test]
    fn test_equality_ignores_span() {
        let first = parse("# A")[0].clone();
        let shifted = parse("\n\n\n# A")[0].clone();
        assert_ne!(first.span, shifted.span);
        assert_eq!(first, shifted);
    }
}
