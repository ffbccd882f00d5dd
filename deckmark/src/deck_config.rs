//! Deck configuration from deckmark.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up next to a deck
pub const CONFIG_FILE_NAME: &str = "deckmark.toml";

/// Deck configuration from deckmark.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeckConfig {
    /// Deck title, used as the HTML page title
    pub title: Option<String>,

    /// Deck author
    pub author: Option<String>,

    /// Presenter settings
    pub presenter: PresenterConfig,

    /// Export settings
    pub export: ExportConfig,
}

/// Presenter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Enter full screen when presenting starts
    pub start_fullscreen: bool,

    /// 1-based slide to start presenting from
    pub start_slide: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            start_fullscreen: true,
            start_slide: 1,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Page size of exported slides
    pub slide_size: SlideSize,

    /// Embed local images as data URLs
    pub embed_images: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            slide_size: SlideSize::default(),
            embed_images: true,
        }
    }
}

/// Page size of exported slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SlideSize {
    /// 1920x1080
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,

    /// 1024x768
    #[serde(rename = "4:3")]
    Standard,

    /// 794x1123 (A4 portrait at 96 dpi)
    #[serde(rename = "A4")]
    A4,
}

impl SlideSize {
    /// Width and height in CSS pixels
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            SlideSize::Widescreen => (1920, 1080),
            SlideSize::Standard => (1024, 768),
            SlideSize::A4 => (794, 1123),
        }
    }
}

impl DeckConfig {
    /// Load configuration from a deckmark.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the deckmark.toml configuration file
    ///
    /// # Returns
    /// * `Ok(DeckConfig)` - Successfully loaded configuration
    /// * `Err(DeckConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DeckConfigError> {
        let content = fs::read_to_string(&path).map_err(DeckConfigError::IoError)?;

        let config: DeckConfig = toml::from_str(&content).map_err(DeckConfigError::ParseError)?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    ///
    /// # Parameters
    /// * `path` - Path to the deckmark.toml configuration file
    ///
    /// # Returns
    /// * `Ok(DeckConfig)` - Loaded configuration, or defaults if no file exists
    /// * `Err(DeckConfigError)` - The file exists but could not be read or parsed
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, DeckConfigError> {
        if !path.as_ref().exists() {
            log::debug!(
                "No configuration at {}, using defaults",
                path.as_ref().display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a deckmark.toml file
    ///
    /// # Parameters
    /// * `path` - Path where the deckmark.toml file will be written
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(DeckConfigError)` - Error serializing or writing the configuration file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DeckConfigError> {
        let content = toml::to_string_pretty(self).map_err(DeckConfigError::SerializeError)?;

        fs::write(&path, content).map_err(DeckConfigError::IoError)?;

        Ok(())
    }

    /// 0-based index of the configured start slide
    pub fn start_index(&self) -> usize {
        self.presenter.start_slide.saturating_sub(1)
    }
}

/// Errors that can occur when loading or saving deck configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum DeckConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for DeckConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckConfigError::IoError(e) => write!(f, "IO error: {}", e),
            DeckConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            DeckConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for DeckConfigError {}
