//! Interfaces to collaborators outside the slide model
//!
//! Rich-text editing, export and math rendering live outside the core. Their
//! failures are reported through the error types defined here and are caught
//! at the boundary: they never invalidate the parsed deck or the navigator.

use crate::slide_model::Slide;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Editing widget for the body of a single slide
pub trait SlideEditor {
    /// Edit a slide body
    ///
    /// # Parameters
    /// * `content` - Current body of the slide (no metadata block)
    ///
    /// # Returns
    /// * `Ok(String)` - The edited body
    /// * `Err(EditorError)` - The edit was abandoned or failed
    fn edit(&mut self, content: &str) -> Result<String, EditorError>;
}

/// Errors reported by a slide editor
#[derive(Error, Debug)]
pub enum EditorError {
    /// The user abandoned the edit
    #[error("edit cancelled")]
    Cancelled,

    /// The editor failed
    #[error("editor failed: {0}")]
    Failed(String),
}

/// Target format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Self-contained HTML page
    Html,
    /// Paginated PDF
    Pdf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Html => f.write_str("HTML"),
            ExportFormat::Pdf => f.write_str("PDF"),
        }
    }
}

/// Writes a deck to a file
pub trait DeckExporter {
    /// Export slides
    ///
    /// # Parameters
    /// * `slides` - The full deck
    /// * `format` - Target format
    /// * `output_path` - File to write
    ///
    /// # Returns
    /// * `Ok(())` - The file was written
    /// * `Err(ExportError)` - The format is unsupported or writing failed
    fn export(
        &self,
        slides: &[Slide],
        format: ExportFormat,
        output_path: &Path,
    ) -> Result<(), ExportError>;
}

/// Errors reported by an exporter
#[derive(Error, Debug)]
pub enum ExportError {
    /// This exporter cannot produce the requested format
    #[error("{0} export is not supported by this exporter")]
    UnsupportedFormat(ExportFormat),

    /// Writing the output failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Reference to a rendered image (URL, path or data URL)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(pub String);

/// Renders LaTeX to an image
pub trait MathRenderer {
    /// Render a LaTeX expression
    ///
    /// # Parameters
    /// * `latex` - LaTeX source, without `$` delimiters
    /// * `display` - Display (block) mode rather than inline
    ///
    /// # Returns
    /// * `Ok(ImageRef)` - Reference to the rendered image
    /// * `Err(MathError)` - The expression could not be rendered
    fn render(&self, latex: &str, display: bool) -> Result<ImageRef, MathError>;
}

/// Errors reported by a math renderer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The LaTeX source is invalid
    #[error("LaTeX syntax error: {0}")]
    Syntax(String),

    /// The renderer failed for another reason
    #[error("math rendering failed: {0}")]
    Render(String),
}

/// Result of rendering math at the collaborator boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathFragment {
    /// The renderer produced an image
    Image(ImageRef),
    /// The renderer failed; show the LaTeX source instead
    Fallback(String),
}

/// Render math, absorbing renderer failures
///
/// # Parameters
/// * `renderer` - The math renderer
/// * `latex` - LaTeX source
/// * `display` - Display (block) mode rather than inline
///
/// # Returns
/// * `MathFragment` - The rendered image, or the source text on failure
pub fn render_math_or_fallback(
    renderer: &dyn MathRenderer,
    latex: &str,
    display: bool,
) -> MathFragment {
    match renderer.render(latex, display) {
        Ok(image) => MathFragment::Image(image),
        Err(e) => {
            log::warn!("Failed to render math '{}': {}", latex, e);
            MathFragment::Fallback(latex.to_string())
        }
    }
}
