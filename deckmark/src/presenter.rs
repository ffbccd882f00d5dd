//! Presenter session
//!
//! Keyboard navigation is only live while a [`PresenterSession`] exists. The
//! session mutably borrows its [`Presentation`], so at most one can be
//! attached at a time, and dropping it returns the deck to the preview view.

use crate::navigation::Direction;
use crate::presentation::{Presentation, SlideChange, ViewMode};
use std::str::FromStr;
use thiserror::Error;

/// A key press delivered to the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Right arrow
    ArrowRight,
    /// Left arrow
    ArrowLeft,
    /// Space bar
    Space,
    /// Escape
    Escape,
    /// F11
    F11,
    /// Any other printable character
    Char(char),
}

/// Error for key names that cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown key '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    /// Parse a key name (`right`, `ArrowLeft`, `space`, `esc`, `F11`, or a
    /// single character)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == " " {
            return Ok(Key::Space);
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(c));
        }

        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "arrowright" => Ok(Key::ArrowRight),
            "left" | "arrowleft" => Ok(Key::ArrowLeft),
            "space" => Ok(Key::Space),
            "esc" | "escape" => Ok(Key::Escape),
            "f11" => Ok(Key::F11),
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

/// What a key asks the presenter to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterCommand {
    /// Next slide
    Advance,
    /// Previous slide
    Retreat,
    /// Leave the presentation view
    Exit,
    /// Enter or leave full screen
    ToggleFullscreen,
}

/// Map a key to its presenter command
pub fn command_for(key: Key) -> Option<PresenterCommand> {
    match key {
        Key::ArrowRight | Key::Space => Some(PresenterCommand::Advance),
        Key::ArrowLeft => Some(PresenterCommand::Retreat),
        Key::Escape => Some(PresenterCommand::Exit),
        Key::F11 | Key::Char('f') => Some(PresenterCommand::ToggleFullscreen),
        Key::Char(_) => None,
    }
}

/// Effect of one key press
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// The key has no binding, or the session already ended
    Ignored,
    /// The selected slide changed
    Moved(SlideChange),
    /// Navigation was requested past the first or last slide
    AtEdge(Direction),
    /// Full screen was toggled; carries the new state
    Fullscreen(bool),
    /// The session ended
    Exited,
}

/// An attached presentation view
#[derive(Debug)]
pub struct PresenterSession<'a> {
    presentation: &'a mut Presentation,
    active: bool,
}

impl<'a> PresenterSession<'a> {
    /// Enter the presentation view
    ///
    /// # Parameters
    /// * `presentation` - The deck to present
    /// * `fullscreen` - Start in full screen
    pub fn start(presentation: &'a mut Presentation, fullscreen: bool) -> Self {
        presentation.set_view(ViewMode::Presenting { fullscreen });
        log::debug!("Presenter attached (fullscreen: {})", fullscreen);

        Self {
            presentation,
            active: true,
        }
    }

    /// The presented deck
    pub fn presentation(&self) -> &Presentation {
        self.presentation
    }

    /// Whether keys are still handled
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the view is in full screen
    pub fn is_fullscreen(&self) -> bool {
        matches!(
            self.presentation.view(),
            ViewMode::Presenting { fullscreen: true }
        )
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.active {
            return KeyOutcome::Ignored;
        }

        match command_for(key) {
            None => KeyOutcome::Ignored,
            Some(PresenterCommand::Advance) => self
                .presentation
                .advance()
                .map_or(KeyOutcome::AtEdge(Direction::Forward), KeyOutcome::Moved),
            Some(PresenterCommand::Retreat) => self
                .presentation
                .retreat()
                .map_or(KeyOutcome::AtEdge(Direction::Backward), KeyOutcome::Moved),
            Some(PresenterCommand::ToggleFullscreen) => {
                let fullscreen = !self.is_fullscreen();
                self.presentation
                    .set_view(ViewMode::Presenting { fullscreen });
                KeyOutcome::Fullscreen(fullscreen)
            }
            Some(PresenterCommand::Exit) => {
                self.exit();
                KeyOutcome::Exited
            }
        }
    }

    /// Jump to a slide by index (e.g. a clicked progress dot)
    pub fn jump_to(&mut self, index: usize) -> Option<SlideChange> {
        if !self.active {
            return None;
        }
        self.presentation.jump_to(index)
    }

    /// Leave the presentation view; later keys are ignored
    pub fn exit(&mut self) {
        if self.active {
            self.active = false;
            self.presentation.set_view(ViewMode::Preview);
            log::debug!("Presenter detached");
        }
    }
}

impl Drop for PresenterSession<'_> {
    fn drop(&mut self) {
        self.exit();
    }
}
