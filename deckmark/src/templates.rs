//! Slide templates
//!
//! Resolves a slide's declared template name to a [`TemplateKind`] and lays
//! out its content for that template. Layouts are pure data: a rendering
//! layer (the HTML exporter, a terminal presenter) decides how they look.

use crate::slide_model::{fenced_lines, Slide};
use std::fmt;

/// Background of a title slide that declares none
pub const DEFAULT_TITLE_BACKGROUND: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

/// Line that moves the rest of a split slide into its right column
pub const SPLIT_MARKER: &str = "::right::";

/// Starter deck written by `deckmark init`, one slide per template
pub const SAMPLE_DECK: &str = include_str!("templates/sample_deck.md");

/// Rendering strategy of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    /// Markdown body, centred column
    #[default]
    Default,
    /// Large title and subtitle on a coloured background
    Title,
    /// Image on the left, content on the right
    ImageLeft,
    /// Content on the left, image on the right
    ImageRight,
    /// Image fills the slide, content overlaid
    ImageFull,
    /// Two content columns
    Split,
    /// Emphasised quotation
    Quote,
    /// Content centred on both axes
    Center,
}

impl TemplateKind {
    /// Every template, in declaration order
    pub const ALL: [TemplateKind; 8] = [
        TemplateKind::Default,
        TemplateKind::Title,
        TemplateKind::ImageLeft,
        TemplateKind::ImageRight,
        TemplateKind::ImageFull,
        TemplateKind::Split,
        TemplateKind::Quote,
        TemplateKind::Center,
    ];

    /// Name used in documents
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Default => "default",
            TemplateKind::Title => "title",
            TemplateKind::ImageLeft => "imageLeft",
            TemplateKind::ImageRight => "imageRight",
            TemplateKind::ImageFull => "imageFull",
            TemplateKind::Split => "split",
            TemplateKind::Quote => "quote",
            TemplateKind::Center => "center",
        }
    }

    /// Look up a template by name
    ///
    /// # Parameters
    /// * `name` - Declared template name, if any
    ///
    /// # Returns
    /// * `TemplateKind` - The named template, or `Default` for a missing or
    ///   unrecognised name
    pub fn resolve(name: Option<&str>) -> Self {
        let Some(name) = name.map(str::trim) else {
            return Self::Default;
        };

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or_else(|| {
                log::debug!("Unknown template '{}', using default", name);
                Self::Default
            })
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an image sits relative to the content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSide {
    /// Image column on the left
    Left,
    /// Image column on the right
    Right,
    /// Image behind the content
    Full,
}

/// Laid-out content of one slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideLayout {
    /// Plain markdown body
    Body {
        /// Markdown to render
        markdown: String,
        /// Centre on both axes
        centered: bool,
    },

    /// Title slide
    Title {
        /// Main title, empty if the slide has none
        title: String,
        /// Text of the first `##` heading, if any
        subtitle: Option<String>,
        /// Remaining markdown lines
        remainder: String,
        /// CSS background
        background: String,
    },

    /// Image beside or behind the content
    Image {
        /// Placement of the image
        side: ImageSide,
        /// Image URL or path; `None` renders a placeholder
        image: Option<String>,
        /// Markdown to render
        markdown: String,
    },

    /// Two columns
    Split {
        /// Markdown before the split marker
        left: String,
        /// Markdown after the split marker
        right: String,
    },

    /// Quotation
    Quote {
        /// Quoted lines with their `>` markers removed
        quote: String,
        /// Everything that is not part of the quotation
        remainder: String,
    },
}

/// Lay out a slide according to its template
///
/// # Parameters
/// * `slide` - The slide to lay out
///
/// # Returns
/// * `SlideLayout` - The content arranged for the slide's template
pub fn dispatch(slide: &Slide) -> SlideLayout {
    match slide.metadata.template {
        TemplateKind::Default => body_layout(slide, false),
        TemplateKind::Center => body_layout(slide, true),
        TemplateKind::Title => title_layout(slide),
        TemplateKind::ImageLeft => image_layout(slide, ImageSide::Left),
        TemplateKind::ImageRight => image_layout(slide, ImageSide::Right),
        TemplateKind::ImageFull => image_layout(slide, ImageSide::Full),
        TemplateKind::Split => split_layout(slide),
        TemplateKind::Quote => quote_layout(slide),
    }
}

fn body_layout(slide: &Slide, centered: bool) -> SlideLayout {
    SlideLayout::Body {
        markdown: slide.content.clone(),
        centered,
    }
}

fn title_layout(slide: &Slide) -> SlideLayout {
    let lines: Vec<(&str, bool)> = fenced_lines(&slide.content)
        .into_iter()
        .filter(|(line, code)| *code || !line.trim().is_empty())
        .collect();
    let heading = |prefix: &str| {
        lines
            .iter()
            .filter(|(_, code)| !code)
            .find_map(|(line, _)| line.strip_prefix(prefix))
            .map(|text| text.trim().to_string())
    };

    let title = heading("# ")
        .or_else(|| slide.title.clone())
        .unwrap_or_default();
    let subtitle = heading("## ");

    let remainder = lines
        .iter()
        .filter(|(line, code)| *code || (!line.starts_with("# ") && !line.starts_with("## ")))
        .map(|(line, _)| *line)
        .collect::<Vec<_>>()
        .join("\n");

    SlideLayout::Title {
        title,
        subtitle,
        remainder,
        background: slide
            .metadata
            .background
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE_BACKGROUND.to_string()),
    }
}

fn image_layout(slide: &Slide, side: ImageSide) -> SlideLayout {
    SlideLayout::Image {
        side,
        image: slide.metadata.image.clone(),
        markdown: slide.content.clone(),
    }
}

fn split_layout(slide: &Slide) -> SlideLayout {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut in_right = false;

    for line in slide.content.lines() {
        if !in_right && line.trim() == SPLIT_MARKER {
            in_right = true;
            continue;
        }
        if in_right {
            right.push(line);
        } else {
            left.push(line);
        }
    }

    SlideLayout::Split {
        left: left.join("\n").trim().to_string(),
        right: right.join("\n").trim().to_string(),
    }
}

fn quote_layout(slide: &Slide) -> SlideLayout {
    let mut quote = Vec::new();
    let mut remainder = Vec::new();

    for line in slide.content.lines() {
        match line.trim_start().strip_prefix('>') {
            Some(quoted) => quote.push(quoted.strip_prefix(' ').unwrap_or(quoted)),
            None => remainder.push(line),
        }
    }

    SlideLayout::Quote {
        quote: quote.join("\n").trim().to_string(),
        remainder: remainder.join("\n").trim().to_string(),
    }
}
