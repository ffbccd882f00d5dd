//! Presentation state
//!
//! [`Presentation`] owns the document text, the slides parsed from it and
//! the navigator. It is the single writer of that state: every edit re-parses
//! the whole document and reconciles the navigator with the new slide count.
//!
//! Parsing can be moved off the UI thread with [`ParseJob`]. Each job carries
//! a generation number and [`Presentation::commit`] refuses results older
//! than the newest one already applied, so a slow parse can never overwrite
//! a newer one.

use crate::collaborators::{EditorError, SlideEditor};
use crate::motion::{select_motion, select_motion_for, MotionDescriptor};
use crate::navigation::{Direction, Navigator};
use crate::slide_model::{self, Slide, SlideId};

/// Which view of the deck is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Editing the current slide's source
    Edit,
    /// Rendered preview with navigation controls
    #[default]
    Preview,
    /// Presentation view; keyboard navigation is live only here
    Presenting {
        /// Whether the presentation fills the screen
        fullscreen: bool,
    },
}

/// A pending parse of one document snapshot
#[derive(Debug, Clone)]
pub struct ParseJob {
    generation: u64,
    source: String,
}

impl ParseJob {
    /// Generation number of this job
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Parse the snapshot
    ///
    /// Pure and `Send`: may run on any thread.
    pub fn run(self) -> ParsedDeck {
        let slides = slide_model::parse(&self.source);
        ParsedDeck {
            generation: self.generation,
            source: self.source,
            slides,
        }
    }
}

/// The result of a [`ParseJob`]
#[derive(Debug, Clone)]
pub struct ParsedDeck {
    generation: u64,
    source: String,
    slides: Vec<Slide>,
}

impl ParsedDeck {
    /// Generation number of the job that produced this deck
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Parsed slides
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

/// A move from one slide to another
///
/// Slides are identified by id, not position, so an animation keyed on a
/// change survives slides being inserted before it.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideChange {
    /// Slide being left
    pub from: SlideId,
    /// Slide being entered
    pub to: SlideId,
    /// Direction of the move
    pub direction: Direction,
    /// Motion of the entering slide
    pub enter: MotionDescriptor,
    /// Motion of the leaving slide
    pub exit: MotionDescriptor,
}

/// Document, slides and navigation state of one deck
#[derive(Debug, Clone)]
pub struct Presentation {
    source: String,
    slides: Vec<Slide>,
    navigator: Navigator,
    view: ViewMode,
    next_generation: u64,
    committed_generation: u64,
}

impl Presentation {
    /// Parse a document and select its first slide
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let slides = slide_model::parse(&source);
        let navigator = Navigator::new(slides.len());

        Self {
            source,
            slides,
            navigator,
            view: ViewMode::default(),
            next_generation: 0,
            committed_generation: 0,
        }
    }

    /// Current document text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Slides of the current document
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Navigation state
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Active view
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch view
    ///
    /// Entering the presentation view goes through
    /// [`PresenterSession::start`](crate::presenter::PresenterSession::start),
    /// which owns keyboard handling for as long as it lives.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// The selected slide, or `None` for an empty deck
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.navigator.current_index())
    }

    /// Index of the selected slide
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    /// Number of slides
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Replace the document and re-parse it synchronously
    ///
    /// # Returns
    /// * `bool` - Always true: a synchronous parse is the newest generation
    pub fn set_source(&mut self, source: impl Into<String>) -> bool {
        let job = self.begin_parse(source);
        self.commit(job.run())
    }

    /// Start a parse of a new document snapshot
    ///
    /// The returned job can run on another thread; hand its result to
    /// [`Presentation::commit`].
    pub fn begin_parse(&mut self, source: impl Into<String>) -> ParseJob {
        self.next_generation += 1;
        ParseJob {
            generation: self.next_generation,
            source: source.into(),
        }
    }

    /// Apply a finished parse
    ///
    /// # Parameters
    /// * `parsed` - Result of a job started with [`Presentation::begin_parse`]
    ///
    /// # Returns
    /// * `bool` - True if applied; false if a newer parse was already applied
    pub fn commit(&mut self, parsed: ParsedDeck) -> bool {
        if parsed.generation <= self.committed_generation {
            log::debug!(
                "Discarding stale parse {} (newest applied is {})",
                parsed.generation,
                self.committed_generation
            );
            return false;
        }

        self.committed_generation = parsed.generation;
        self.source = parsed.source;
        self.slides = parsed.slides;
        self.navigator.reconcile(self.slides.len());
        true
    }

    /// Move to the next slide
    ///
    /// # Returns
    /// * `Some(SlideChange)` - The move and its motions
    /// * `None` - Already on the last slide
    pub fn advance(&mut self) -> Option<SlideChange> {
        let from = self.navigator.current_index();
        if !self.navigator.advance() {
            return None;
        }
        self.change_from(from)
    }

    /// Move to the previous slide
    ///
    /// # Returns
    /// * `Some(SlideChange)` - The move and its motions
    /// * `None` - Already on the first slide
    pub fn retreat(&mut self) -> Option<SlideChange> {
        let from = self.navigator.current_index();
        if !self.navigator.retreat() {
            return None;
        }
        self.change_from(from)
    }

    /// Select a slide by index
    ///
    /// # Returns
    /// * `Some(SlideChange)` - The move and its motions
    /// * `None` - Index out of range; nothing changed
    pub fn jump_to(&mut self, index: usize) -> Option<SlideChange> {
        let from = self.navigator.current_index();
        if !self.navigator.jump_to(index) {
            return None;
        }
        self.change_from(from)
    }

    /// Describe the move from `from` to the current slide
    ///
    /// Both motions use the entering slide's transition and duration; the
    /// leaving slide keeps its own animation kind.
    fn change_from(&self, from: usize) -> Option<SlideChange> {
        let direction = self.navigator.direction();
        let entering = self.current_slide()?;
        let leaving = self.slides.get(from).unwrap_or(entering);

        Some(SlideChange {
            from: leaving.id.clone(),
            to: entering.id.clone(),
            direction,
            enter: select_motion_for(entering, direction),
            exit: select_motion(
                leaving.metadata.animation,
                entering.metadata.transition,
                entering.metadata.duration_ms,
                direction,
            ),
        })
    }

    /// Replace the body of the selected slide
    ///
    /// The document is re-spliced around the slide and fully re-parsed.
    ///
    /// # Returns
    /// * `bool` - False if the deck is empty
    pub fn replace_current_content(&mut self, new_content: &str) -> bool {
        let index = self.navigator.current_index();
        match slide_model::replace_slide_content(&self.source, index, new_content) {
            Some(source) => self.set_source(source),
            None => false,
        }
    }

    /// Let an editor change the body of the selected slide
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether the document changed
    /// * `Err(EditorError)` - The editor failed; the deck is untouched
    pub fn edit_current_slide(&mut self, editor: &mut dyn SlideEditor) -> Result<bool, EditorError> {
        let Some(slide) = self.current_slide() else {
            return Ok(false);
        };

        let edited = editor.edit(&slide.content)?;
        if edited == slide.content {
            return Ok(false);
        }
        Ok(self.replace_current_content(&edited))
    }
}
