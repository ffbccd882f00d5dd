//! Typed slide metadata
//!
//! Normalises the raw fields of a metadata block into [`SlideMetadata`].
//! Recognised keys get their documented fallback when missing or invalid;
//! unrecognised keys are kept in a side table.

use super::metadata_block::MetaValue;
use crate::templates::TemplateKind;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Slide duration used when none (or an invalid one) is declared
pub const DEFAULT_DURATION_MS: u64 = 1000;

/// Error returned when a metadata value names no known variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// Entrance animation of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Animation {
    /// Opacity fade
    #[default]
    FadeIn,
    /// Horizontal slide whose side depends on the navigation direction
    SlideIn,
    /// Enters from below
    SlideUp,
    /// Enters from above
    SlideDown,
    /// Moves leftwards: enters from the right
    SlideLeft,
    /// Moves rightwards: enters from the left
    SlideRight,
    /// Same as `ZoomIn`
    Zoom,
    /// Grows into place
    ZoomIn,
    /// Shrinks into place
    ZoomOut,
    /// No animation at all
    None,
}

impl Animation {
    /// Every animation, in declaration order
    pub const ALL: [Animation; 10] = [
        Animation::FadeIn,
        Animation::SlideIn,
        Animation::SlideUp,
        Animation::SlideDown,
        Animation::SlideLeft,
        Animation::SlideRight,
        Animation::Zoom,
        Animation::ZoomIn,
        Animation::ZoomOut,
        Animation::None,
    ];

    /// Name used in documents
    pub fn as_str(self) -> &'static str {
        match self {
            Animation::FadeIn => "fadeIn",
            Animation::SlideIn => "slideIn",
            Animation::SlideUp => "slideUp",
            Animation::SlideDown => "slideDown",
            Animation::SlideLeft => "slideLeft",
            Animation::SlideRight => "slideRight",
            Animation::Zoom => "zoom",
            Animation::ZoomIn => "zoomIn",
            Animation::ZoomOut => "zoomOut",
            Animation::None => "none",
        }
    }
}

impl FromStr for Animation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s.trim())
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Easing family used when moving between slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transition {
    /// Cubic-bezier curve over the declared duration
    #[default]
    Fade,
    /// Soft spring
    Slide,
    /// Stiffer spring
    Zoom,
    /// Instant change
    None,
}

impl Transition {
    /// Every transition, in declaration order
    pub const ALL: [Transition; 4] = [
        Transition::Fade,
        Transition::Slide,
        Transition::Zoom,
        Transition::None,
    ];

    /// Name used in documents
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Fade => "fade",
            Transition::Slide => "slide",
            Transition::Zoom => "zoom",
            Transition::None => "none",
        }
    }
}

impl FromStr for Transition {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Content/image arrangement hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Content only
    #[default]
    Default,
    /// Image column on the left
    ImageLeft,
    /// Image column on the right
    ImageRight,
    /// Image fills the slide
    ImageFull,
    /// Two content columns
    Split,
}

impl Layout {
    /// Every layout, in declaration order
    pub const ALL: [Layout; 5] = [
        Layout::Default,
        Layout::ImageLeft,
        Layout::ImageRight,
        Layout::ImageFull,
        Layout::Split,
    ];

    /// Name used in documents
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Default => "default",
            Layout::ImageLeft => "imageLeft",
            Layout::ImageRight => "imageRight",
            Layout::ImageFull => "imageFull",
            Layout::Split => "split",
        }
    }
}

impl FromStr for Layout {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s.trim())
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Presentation directives of one slide, with fallbacks applied
#[derive(Debug, Clone, PartialEq)]
pub struct SlideMetadata {
    /// Rendering strategy
    pub template: TemplateKind,

    /// Entrance animation
    pub animation: Animation,

    /// Animation duration in milliseconds (always positive)
    pub duration_ms: u64,

    /// Easing family
    pub transition: Transition,

    /// Colour or CSS gradient expression
    pub background: Option<String>,

    /// Image URL or path
    pub image: Option<String>,

    /// Arrangement hint
    pub layout: Layout,

    /// Fields with no typed counterpart, kept for forward compatibility
    pub extra: BTreeMap<String, MetaValue>,
}

impl Default for SlideMetadata {
    fn default() -> Self {
        Self {
            template: TemplateKind::default(),
            animation: Animation::default(),
            duration_ms: DEFAULT_DURATION_MS,
            transition: Transition::default(),
            background: None,
            image: None,
            layout: Layout::default(),
            extra: BTreeMap::new(),
        }
    }
}

impl SlideMetadata {
    /// Build typed metadata from raw block fields
    ///
    /// Never fails: missing or unrecognised values get their fallback.
    ///
    /// # Parameters
    /// * `fields` - Fields parsed from a metadata block
    ///
    /// # Returns
    /// * `SlideMetadata` - Normalised metadata
    pub fn from_fields(fields: &BTreeMap<String, MetaValue>) -> Self {
        let mut metadata = Self::default();

        for (key, value) in fields {
            match key.as_str() {
                "template" => {
                    metadata.template = TemplateKind::resolve(Some(&value.to_string()));
                }
                "animation" => metadata.animation = parse_or_default(key, value),
                "transition" => metadata.transition = parse_or_default(key, value),
                "layout" => metadata.layout = parse_or_default(key, value),
                "duration" => metadata.duration_ms = parse_duration(value),
                "background" => metadata.background = non_empty(value),
                "image" => metadata.image = non_empty(value),
                _ => {
                    metadata.extra.insert(key.clone(), value.clone());
                }
            }
        }

        metadata
    }
}

fn parse_or_default<T>(key: &str, value: &MetaValue) -> T
where
    T: FromStr<Err = UnknownVariant> + Default,
{
    value.to_string().parse().unwrap_or_else(|e: UnknownVariant| {
        log::debug!("Metadata key '{}': {}, using default", key, e);
        T::default()
    })
}

/// Positive integer milliseconds, else the default
fn parse_duration(value: &MetaValue) -> u64 {
    let parsed = match value {
        MetaValue::Integer(ms) => u64::try_from(*ms).ok(),
        MetaValue::Text(text) => text.trim().parse::<u64>().ok(),
        MetaValue::Float(_) | MetaValue::Bool(_) => None,
    };

    match parsed {
        Some(ms) if ms > 0 => ms,
        _ => {
            log::debug!("Invalid duration '{}', using {}ms", value, DEFAULT_DURATION_MS);
            DEFAULT_DURATION_MS
        }
    }
}

fn non_empty(value: &MetaValue) -> Option<String> {
    let text = value.to_string();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, MetaValue> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), MetaValue::parse(v)))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let metadata = SlideMetadata::from_fields(&BTreeMap::new());
        assert_eq!(metadata.template, TemplateKind::Default);
        assert_eq!(metadata.animation, Animation::FadeIn);
        assert_eq!(metadata.duration_ms, 1000);
        assert_eq!(metadata.transition, Transition::Fade);
        assert_eq!(metadata.layout, Layout::Default);
        assert_eq!(metadata.background, None);
        assert_eq!(metadata.image, None);
        assert!(metadata.extra.is_empty());
    }

    #[test]
    fn test_recognised_values() {
        let metadata = SlideMetadata::from_fields(&fields(&[
            ("template", "imageLeft"),
            ("animation", "slideUp"),
            ("duration", "800"),
            ("transition", "slide"),
            ("layout", "split"),
            ("background", "#fff"),
            ("image", "photo.png"),
        ]));
        assert_eq!(metadata.template, TemplateKind::ImageLeft);
        assert_eq!(metadata.animation, Animation::SlideUp);
        assert_eq!(metadata.duration_ms, 800);
        assert_eq!(metadata.transition, Transition::Slide);
        assert_eq!(metadata.layout, Layout::Split);
        assert_eq!(metadata.background.as_deref(), Some("#fff"));
        assert_eq!(metadata.image.as_deref(), Some("photo.png"));
    }

    #[test]
    fn test_unrecognised_values_fall_back() {
        let metadata = SlideMetadata::from_fields(&fields(&[
            ("template", "poster"),
            ("animation", "spin"),
            ("transition", "dissolve"),
            ("layout", "grid"),
        ]));
        assert_eq!(metadata, SlideMetadata::default());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let metadata = SlideMetadata::from_fields(&fields(&[("animation", "FADEIN")]));
        assert_eq!(metadata.animation, Animation::FadeIn);
        let metadata = SlideMetadata::from_fields(&fields(&[("animation", "ZoomOut")]));
        assert_eq!(metadata.animation, Animation::FadeIn);
    }

    #[test]
    fn test_invalid_durations_fall_back() {
        for raw in ["0", "-5", "1.5", "fast", "true", ""] {
            let metadata = SlideMetadata::from_fields(&fields(&[("duration", raw)]));
            assert_eq!(metadata.duration_ms, DEFAULT_DURATION_MS, "duration {:?}", raw);
        }
        let metadata = SlideMetadata::from_fields(&fields(&[("duration", "\"250\"")]));
        assert_eq!(metadata.duration_ms, 250);
    }

    #[test]
    fn test_unknown_keys_kept_in_side_table() {
        let metadata =
            SlideMetadata::from_fields(&fields(&[("notes", "speak slowly"), ("step", "3")]));
        assert_eq!(
            metadata.extra.get("notes"),
            Some(&MetaValue::Text("speak slowly".to_string()))
        );
        assert_eq!(metadata.extra.get("step"), Some(&MetaValue::Integer(3)));
    }

    #[test]
    fn test_empty_background_is_unset() {
        let metadata = SlideMetadata::from_fields(&fields(&[("background", "")]));
        assert_eq!(metadata.background, None);
    }

    #[test]
    fn test_round_trip_names() {
        for animation in Animation::ALL {
            assert_eq!(animation.as_str().parse::<Animation>(), Ok(animation));
        }
        for transition in Transition::ALL {
            assert_eq!(transition.as_str().parse::<Transition>(), Ok(transition));
        }
        for layout in Layout::ALL {
            assert_eq!(layout.as_str().parse::<Layout>(), Ok(layout));
        }
    }
}
