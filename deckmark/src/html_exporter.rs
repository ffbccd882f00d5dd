//! HTML exporter for slide decks
//!
//! This module exports a deck to a single self-contained HTML file with:
//! - One `<section>` per slide, laid out by its template
//! - Markdown rendered with pulldown-cmark (tables, task lists, math)
//! - Local images embedded as data URLs (base64 encoded)
//! - A small script for keyboard navigation

use crate::collaborators::{
    render_math_or_fallback, DeckExporter, ExportError, ExportFormat, MathFragment, MathRenderer,
};
use crate::deck_config::{DeckConfig, SlideSize};
use crate::motion::{select_motion_for, Easing, Pose};
use crate::navigation::Direction;
use crate::slide_model::Slide;
use crate::templates::{dispatch, ImageSide, SlideLayout};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during HTML export
#[derive(Error, Debug)]
pub enum HtmlExportError {
    /// Writing the output failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<HtmlExportError> for ExportError {
    fn from(err: HtmlExportError) -> Self {
        match err {
            HtmlExportError::IoError(e) => ExportError::IoError(e),
        }
    }
}

/// Settings of one HTML export
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlExportOptions {
    /// Page title
    pub title: String,
    /// Slide dimensions
    pub slide_size: SlideSize,
    /// Embed local images as data URLs
    pub embed_images: bool,
    /// Directory that relative image paths are resolved against
    pub base_dir: Option<PathBuf>,
}

impl Default for HtmlExportOptions {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            slide_size: SlideSize::default(),
            embed_images: true,
            base_dir: None,
        }
    }
}

impl HtmlExportOptions {
    /// Build options from a deck configuration
    ///
    /// # Parameters
    /// * `config` - Loaded deckmark.toml
    /// * `base_dir` - Directory of the deck file
    pub fn from_config(config: &DeckConfig, base_dir: Option<PathBuf>) -> Self {
        Self {
            title: config
                .title
                .clone()
                .unwrap_or_else(|| Self::default().title),
            slide_size: config.export.slide_size,
            embed_images: config.export.embed_images,
            base_dir,
        }
    }
}

/// [`DeckExporter`] writing self-contained HTML
pub struct HtmlExporter<'r> {
    options: HtmlExportOptions,
    math: Option<&'r dyn MathRenderer>,
}

impl<'r> HtmlExporter<'r> {
    /// Create an exporter
    pub fn new(options: HtmlExportOptions) -> Self {
        Self {
            options,
            math: None,
        }
    }

    /// Render math through a renderer instead of leaving LaTeX for the browser
    pub fn with_math_renderer(mut self, renderer: &'r dyn MathRenderer) -> Self {
        self.math = Some(renderer);
        self
    }

    /// Render a whole deck to an HTML string
    pub fn render(&self, slides: &[Slide]) -> String {
        let mut output = String::new();

        write_html_header(&mut output, &self.options);

        output.push_str("<body>\n");
        output.push_str("<main class=\"deck\">\n");

        if slides.is_empty() {
            output.push_str("<p class=\"empty-deck\">No slides to display</p>\n");
        }

        for (index, slide) in slides.iter().enumerate() {
            self.write_slide(&mut output, slide, index);
        }

        output.push_str("</main>\n");
        output.push_str("<script>\n");
        output.push_str(NAVIGATION_SCRIPT);
        output.push_str("</script>\n");
        output.push_str("</body>\n");
        output.push_str("</html>\n");

        output
    }

    /// Write a single slide section
    fn write_slide(&self, output: &mut String, slide: &Slide, index: usize) {
        let metadata = &slide.metadata;
        let active = if index == 0 { " active" } else { "" };

        let forward = select_motion_for(slide, Direction::Forward);
        let backward = select_motion_for(slide, Direction::Backward);

        output.push_str(&format!(
            "<section class=\"slide template-{}{}\" id=\"{}\" data-animation=\"{}\" data-transition=\"{}\" data-duration=\"{}\"",
            metadata.template,
            active,
            escape_html(slide.id.as_str()),
            metadata.animation.as_str(),
            metadata.transition.as_str(),
            metadata.duration_ms
        ));
        output.push_str(&format!(
            " data-enter-forward=\"{}\" data-enter-backward=\"{}\" data-target=\"{}\" data-exit-forward=\"{}\" data-exit-backward=\"{}\" data-motion-ms=\"{}\" data-easing=\"{}\">\n",
            pose_attr(&forward.initial),
            pose_attr(&backward.initial),
            pose_attr(&forward.target),
            pose_attr(&forward.exit),
            pose_attr(&backward.exit),
            (forward.duration_seconds * 1000.0).round(),
            css_timing(forward.easing)
        ));

        match dispatch(slide) {
            SlideLayout::Body { markdown, centered } => {
                let class = if centered {
                    "slide-body centered"
                } else {
                    "slide-body"
                };
                output.push_str(&format!("<div class=\"{}\">\n", class));
                output.push_str(&self.markdown_to_html(&markdown));
                output.push_str("</div>\n");
            }

            SlideLayout::Title {
                title,
                subtitle,
                remainder,
                background,
            } => {
                output.push_str(&format!(
                    "<div class=\"slide-title\" style=\"background: {}\">\n",
                    escape_html(&background)
                ));
                if !title.is_empty() {
                    output.push_str(&format!("<h1>{}</h1>\n", escape_html(&title)));
                }
                if let Some(subtitle) = subtitle {
                    output.push_str(&format!(
                        "<h2 class=\"subtitle\">{}</h2>\n",
                        escape_html(&subtitle)
                    ));
                }
                output.push_str(&self.markdown_to_html(&remainder));
                output.push_str("</div>\n");
            }

            SlideLayout::Image {
                side,
                image,
                markdown,
            } => self.write_image_layout(output, side, image.as_deref(), &markdown),

            SlideLayout::Split { left, right } => {
                output.push_str("<div class=\"slide-split\">\n");
                output.push_str("<div class=\"column\">\n");
                output.push_str(&self.markdown_to_html(&left));
                output.push_str("</div>\n<div class=\"column\">\n");
                output.push_str(&self.markdown_to_html(&right));
                output.push_str("</div>\n</div>\n");
            }

            SlideLayout::Quote { quote, remainder } => {
                output.push_str("<div class=\"slide-quote\">\n");
                output.push_str(&self.markdown_to_html(&remainder));
                output.push_str("<blockquote>\n");
                output.push_str(&self.markdown_to_html(&quote));
                output.push_str("</blockquote>\n</div>\n");
            }
        }

        output.push_str("</section>\n");
    }

    /// Write an image template: image pane plus content pane
    fn write_image_layout(
        &self,
        output: &mut String,
        side: ImageSide,
        image: Option<&str>,
        markdown: &str,
    ) {
        let content = self.markdown_to_html(markdown);

        if side == ImageSide::Full {
            match image {
                Some(url) => output.push_str(&format!(
                    "<div class=\"slide-image image-full\" style=\"background-image: url('{}')\">\n",
                    escape_html(&self.image_src(url))
                )),
                None => output.push_str("<div class=\"slide-image image-full\">\n"),
            }
            output.push_str("<div class=\"content-pane\">\n");
            output.push_str(&content);
            output.push_str("</div>\n</div>\n");
            return;
        }

        let image_pane = match image {
            Some(url) => format!(
                "<div class=\"image-pane\"><img src=\"{}\" alt=\"\"></div>\n",
                escape_html(&self.image_src(url))
            ),
            None => "<div class=\"image-pane image-placeholder\">No image</div>\n".to_string(),
        };
        let content_pane = format!("<div class=\"content-pane\">\n{}</div>\n", content);

        let class = if side == ImageSide::Left {
            "image-left"
        } else {
            "image-right"
        };
        output.push_str(&format!("<div class=\"slide-image {}\">\n", class));
        if side == ImageSide::Left {
            output.push_str(&image_pane);
            output.push_str(&content_pane);
        } else {
            output.push_str(&content_pane);
            output.push_str(&image_pane);
        }
        output.push_str("</div>\n");
    }

    /// Render slide markdown to HTML
    ///
    /// Math events go through the configured [`MathRenderer`]; without one
    /// the LaTeX is left in `\(..\)` / `\[..\]` delimiters for the browser.
    /// Local image paths are replaced by data URLs when embedding is enabled.
    fn markdown_to_html(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_MATH);

        let events = Parser::new_ext(markdown, options).map(|event| match event {
            Event::InlineMath(latex) => Event::InlineHtml(self.math_html(&latex, false).into()),
            Event::DisplayMath(latex) => Event::InlineHtml(self.math_html(&latex, true).into()),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Image {
                link_type,
                dest_url: CowStr::from(self.image_src(&dest_url)),
                title,
                id,
            }),
            other => other,
        });

        let mut rendered = String::new();
        html::push_html(&mut rendered, events);
        rendered
    }

    /// HTML for one math expression
    fn math_html(&self, latex: &str, display: bool) -> String {
        let class = if display { "math-display" } else { "math-inline" };

        let Some(renderer) = self.math else {
            let (open, close) = if display { ("\\[", "\\]") } else { ("\\(", "\\)") };
            return format!(
                "<span class=\"math {}\">{}{}{}</span>",
                class,
                open,
                escape_html(latex),
                close
            );
        };

        match render_math_or_fallback(renderer, latex, display) {
            MathFragment::Image(image) => format!(
                "<img class=\"math {}\" src=\"{}\" alt=\"{}\">",
                class,
                escape_html(&image.0),
                escape_html(latex)
            ),
            MathFragment::Fallback(source) => format!(
                "<code class=\"math math-error\">{}</code>",
                escape_html(&source)
            ),
        }
    }

    /// Resolve an image reference, embedding local files when enabled
    fn image_src(&self, url: &str) -> String {
        if !self.options.embed_images || is_remote(url) {
            return url.to_string();
        }

        let path = match &self.options.base_dir {
            Some(base) => base.join(url),
            None => PathBuf::from(url),
        };

        if !path.is_file() {
            log::debug!("Image {} not found locally, linking as-is", path.display());
            return url.to_string();
        }

        match fs::read(&path) {
            Ok(data) => format!(
                "data:{};base64,{}",
                mime_type_for(&path),
                STANDARD.encode(&data)
            ),
            Err(e) => {
                log::warn!("Failed to read image {}: {}", path.display(), e);
                url.to_string()
            }
        }
    }
}

impl DeckExporter for HtmlExporter<'_> {
    fn export(
        &self,
        slides: &[Slide],
        format: ExportFormat,
        output_path: &Path,
    ) -> Result<(), ExportError> {
        if format != ExportFormat::Html {
            return Err(ExportError::UnsupportedFormat(format));
        }
        to_html(self, slides, output_path)?;
        Ok(())
    }
}

/// Export a deck to an HTML file
///
/// # Parameters
/// * `exporter` - Configured exporter
/// * `slides` - The deck to export
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
/// * `Ok(())` - Successfully exported to HTML
/// * `Err(HtmlExportError)` - Error during export
pub fn to_html(
    exporter: &HtmlExporter<'_>,
    slides: &[Slide],
    output_path: &Path,
) -> Result<(), HtmlExportError> {
    log::info!(
        "Exporting {} slides to {}",
        slides.len(),
        output_path.display()
    );
    let output = exporter.render(slides);

    // Write to file - create parent directories if they don't exist
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(output_path)?;
    file.write_all(output.as_bytes())?;

    Ok(())
}

/// Write HTML header with CSS styling
fn write_html_header(output: &mut String, options: &HtmlExportOptions) {
    let (width, height) = options.slide_size.dimensions();

    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(&options.title)));
    output.push_str("<style>\n");
    output.push_str(&format!(
        ".slide {{ width: {}px; height: {}px; }}\n",
        width, height
    ));
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

fn is_remote(url: &str) -> bool {
    url.contains("://") || url.starts_with("data:") || url.starts_with("//")
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Pose as `opacity x y scale`, read back by the navigation script
fn pose_attr(pose: &Pose) -> String {
    format!(
        "{} {} {} {}",
        pose.opacity, pose.x_percent, pose.y_percent, pose.scale
    )
}

/// CSS timing function for an easing curve
///
/// CSS has no spring timing. A critically damped spring settles like a
/// strong ease-out; an underdamped one overshoots slightly.
fn css_timing(easing: Easing) -> String {
    match easing {
        Easing::CubicBezier([x1, y1, x2, y2]) => {
            format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
        }
        Easing::Spring(params) => {
            let damping_ratio = params.damping / (2.0 * params.stiffness.sqrt());
            if damping_ratio >= 1.0 {
                "cubic-bezier(0.16, 1, 0.3, 1)".to_string()
            } else {
                "cubic-bezier(0.34, 1.3, 0.64, 1)".to_string()
            }
        }
        Easing::Instant => "linear".to_string(),
    }
}

/// Slide styles; dimensions are emitted separately per export
const CSS_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
                 'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
                 sans-serif;
    line-height: 1.6;
    color: #333;
    background-color: #111;
}

.deck {
    display: grid;
    place-items: center;
    min-height: 100vh;
    overflow: hidden;
}

.slide {
    display: none;
    grid-area: 1 / 1;
    position: relative;
    overflow: hidden;
    background: white;
}

.slide.active, .slide.leaving {
    display: block;
}

.slide.leaving {
    pointer-events: none;
}

.slide h1 {
    font-size: 3em;
    margin-bottom: 0.5em;
}

.slide h2 {
    font-size: 2em;
    margin-bottom: 0.5em;
}

.slide p, .slide li {
    font-size: 1.5em;
}

.slide pre {
    background-color: #f6f8fa;
    padding: 16px;
    border-radius: 4px;
    overflow-x: auto;
}

.slide-body {
    padding: 80px;
    height: 100%;
}

.slide-body.centered, .slide-title {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    height: 100%;
}

.slide-title {
    color: white;
}

.slide-title .subtitle {
    font-weight: 300;
    opacity: 0.9;
}

.slide-image {
    display: flex;
    height: 100%;
}

.slide-image .image-pane, .slide-image .content-pane {
    flex: 1;
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 60px;
}

.slide-image img {
    max-width: 100%;
    max-height: 100%;
    object-fit: contain;
}

.image-placeholder {
    background-color: #eee;
    color: #999;
    align-items: center;
}

.image-full {
    background-size: cover;
    background-position: center;
    color: white;
}

.slide-split {
    display: flex;
    height: 100%;
}

.slide-split .column {
    flex: 1;
    padding: 60px;
}

.slide-quote {
    display: flex;
    flex-direction: column;
    justify-content: center;
    height: 100%;
    padding: 120px;
}

.slide-quote blockquote {
    font-size: 1.5em;
    font-style: italic;
    border-left: 8px solid #764ba2;
    padding-left: 40px;
}

.math-error {
    color: #c0392b;
}

.empty-deck {
    color: #999;
    font-size: 1.5em;
}
"#;

/// Keyboard navigation: arrows and space move, `f` toggles full screen.
/// Each change plays the entering slide's motion from the section attributes.
const NAVIGATION_SCRIPT: &str = r#"
(function () {
    var slides = document.querySelectorAll('.slide');
    var current = 0;
    function pose(el, name) {
        var v = el.getAttribute('data-' + name).split(' ').map(Number);
        return {
            opacity: v[0],
            transform: 'translate(' + v[1] + 'vw, ' + v[2] + 'vh) scale(' + v[3] + ')'
        };
    }
    function settle(el) {
        if (el.getAnimations) { el.getAnimations().forEach(function (a) { a.cancel(); }); }
        el.classList.remove('leaving');
    }
    function show(index) {
        if (index < 0 || index >= slides.length || index === current) { return; }
        var direction = index > current ? 'forward' : 'backward';
        var leaving = slides[current];
        var entering = slides[index];
        settle(leaving);
        settle(entering);
        leaving.classList.remove('active');
        entering.classList.add('active');
        current = index;

        var duration = Number(entering.getAttribute('data-motion-ms'));
        if (duration <= 0 || !entering.animate) { return; }
        var timing = { duration: duration, easing: entering.getAttribute('data-easing') };
        entering.animate([pose(entering, 'enter-' + direction), pose(entering, 'target')], timing);
        leaving.classList.add('leaving');
        var exit = leaving.animate(
            [pose(leaving, 'target'), pose(leaving, 'exit-' + direction)],
            Object.assign({ fill: 'forwards' }, timing)
        );
        exit.onfinish = function () { settle(leaving); };
    }
    document.addEventListener('keydown', function (e) {
        if (e.key === 'ArrowRight' || e.key === ' ') { show(current + 1); }
        else if (e.key === 'ArrowLeft') { show(current - 1); }
        else if (e.key === 'f') {
            if (document.fullscreenElement) { document.exitFullscreen(); }
            else { document.documentElement.requestFullscreen(); }
        }
    });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{ImageRef, MathError};
    use crate::slide_model::parse;

    fn exporter<'r>() -> HtmlExporter<'r> {
        HtmlExporter::new(HtmlExportOptions {
            embed_images: false,
            ..HtmlExportOptions::default()
        })
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_one_section_per_slide_first_active() {
        let slides = parse("# A\n\n---\n\n# B\n\n---\n\n# C");
        let html = exporter().render(&slides);

        assert_eq!(html.matches("<section ").count(), 3);
        assert_eq!(html.matches(" active\"").count(), 1);
        assert!(html.contains("id=\"slide-1\""));
        assert!(html.contains("<h1>B</h1>"));
        assert!(html.contains(".slide { width: 1920px; height: 1080px; }"));
    }

    #[test]
    fn test_empty_deck_message() {
        let html = exporter().render(&[]);
        assert!(html.contains("No slides to display"));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_motion_attributes() {
        let slides = parse("---\nanimation: zoomOut\ntransition: none\nduration: 300\n---\n# Z");
        let html = exporter().render(&slides);
        assert!(html.contains("data-animation=\"zoomOut\""));
        assert!(html.contains("data-transition=\"none\""));
        assert!(html.contains("data-duration=\"300\""));
        assert!(html.contains("data-motion-ms=\"0\""));
        assert!(html.contains("data-easing=\"linear\""));
    }

    #[test]
    fn test_motion_poses_drive_navigation_script() {
        let slides = parse("---\nanimation: slideIn\ntransition: fade\nduration: 600\n---\n# S");
        let html = exporter().render(&slides);

        assert!(html.contains("data-enter-forward=\"0 100 0 1\""));
        assert!(html.contains("data-enter-backward=\"0 -100 0 1\""));
        assert!(html.contains("data-target=\"1 0 0 1\""));
        assert!(html.contains("data-motion-ms=\"600\""));
        assert!(html.contains("data-easing=\"cubic-bezier(0.2, 0, 0.2, 1)\""));
        assert!(html.contains("'enter-' + direction"));
    }

    #[test]
    fn test_css_timing_for_springs() {
        assert_eq!(
            css_timing(Easing::Spring(crate::motion::SLIDE_SPRING)),
            "cubic-bezier(0.16, 1, 0.3, 1)"
        );
        assert_eq!(
            css_timing(Easing::Spring(crate::motion::ZOOM_SPRING)),
            "cubic-bezier(0.34, 1.3, 0.64, 1)"
        );
    }

    #[test]
    fn test_title_template() {
        let slides = parse("---\ntemplate: title\n---\n# Deck <1>\n## Subtitle");
        let html = exporter().render(&slides);
        assert!(html.contains("template-title"));
        assert!(html.contains("<h1>Deck &lt;1&gt;</h1>"));
        assert!(html.contains("<h2 class=\"subtitle\">Subtitle</h2>"));
        assert!(html.contains("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"));
    }

    #[test]
    fn test_split_and_quote_templates() {
        let split = parse("---\ntemplate: split\n---\nLeft\n\n::right::\n\nRight");
        let html = exporter().render(&split);
        assert_eq!(html.matches("<div class=\"column\">").count(), 2);
        assert!(!html.contains("::right::"));

        let quote = parse("---\ntemplate: quote\n---\n> Less, but better.");
        let html = exporter().render(&quote);
        assert!(html.contains("<blockquote>\n<p>Less, but better.</p>"));
    }

    #[test]
    fn test_image_placeholder_and_remote_image() {
        let slides = parse(
            "---\ntemplate: imageLeft\n---\nText\n\n---\n\n---\ntemplate: imageRight\nimage: https://example.com/a.png\n---\nText",
        );
        let html = exporter().render(&slides);
        assert!(html.contains("image-placeholder"));
        assert!(html.contains("src=\"https://example.com/a.png\""));
    }

    #[test]
    fn test_local_image_embedded() {
        let dir = std::env::temp_dir().join("deckmark-html-image-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("pixel.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let exporter = HtmlExporter::new(HtmlExportOptions {
            base_dir: Some(dir.clone()),
            ..HtmlExportOptions::default()
        });
        let slides = parse("![pixel](pixel.png)\n\n![missing](missing.png)");
        let html = exporter.render(&slides);

        assert!(html.contains("src=\"data:image/png;base64,iVBORw==\""));
        assert!(html.contains("src=\"missing.png\""));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_math_without_renderer_is_left_for_browser() {
        let slides = parse("Euler: $e^{i\\pi} + 1 = 0$");
        let html = exporter().render(&slides);
        assert!(html.contains("<span class=\"math math-inline\">\\(e^{i\\pi} + 1 = 0\\)</span>"));
    }

    struct FailingRenderer;

    impl MathRenderer for FailingRenderer {
        fn render(&self, latex: &str, display: bool) -> Result<ImageRef, MathError> {
            if display {
                Ok(ImageRef(format!("math-{}.svg", latex.len())))
            } else {
                Err(MathError::Render("no fonts".to_string()))
            }
        }
    }

    #[test]
    fn test_math_renderer_failure_falls_back() {
        let renderer = FailingRenderer;
        let exporter = exporter().with_math_renderer(&renderer);
        let slides = parse("Inline $x<y$\n\n$$a+b$$");
        let html = exporter.render(&slides);

        assert!(html.contains("<code class=\"math math-error\">x&lt;y</code>"));
        assert!(html.contains("<img class=\"math math-display\" src=\"math-3.svg\""));
    }

    #[test]
    fn test_pdf_is_unsupported() {
        let path = std::env::temp_dir().join("deckmark-never-written.pdf");
        let result = exporter().export(&parse("# A"), ExportFormat::Pdf, &path);
        assert!(matches!(
            result,
            Err(ExportError::UnsupportedFormat(ExportFormat::Pdf))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = std::env::temp_dir().join("deckmark-html-export-test");
        let path = dir.join("nested").join("deck.html");
        let _ = fs::remove_dir_all(&dir);

        let exporter = HtmlExporter::new(HtmlExportOptions::from_config(
            &DeckConfig {
                title: Some("My Talk".to_string()),
                ..DeckConfig::default()
            },
            None,
        ));
        exporter
            .export(&parse("# A"), ExportFormat::Html, &path)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<title>My Talk</title>"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
