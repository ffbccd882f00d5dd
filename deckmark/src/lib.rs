//! deckmark - Markdown slide decks
//!
//! Parses a single markdown document into slides, tracks navigation through
//! them, selects entry/exit motion for each move and lays slides out by
//! template. The `deckmark` binary wraps this library in a CLI.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::enum_variant_names)]

pub mod collaborators;
pub mod deck_config;
pub mod html_exporter;
pub mod motion;
pub mod navigation;
pub mod presentation;
pub mod presenter;
pub mod slide_model;
pub mod templates;

pub use motion::{select_motion, MotionDescriptor};
pub use navigation::{Direction, Navigator};
pub use presentation::{Presentation, SlideChange, ViewMode};
pub use slide_model::{parse, Slide, SlideId, SlideMetadata};
pub use templates::{dispatch, SlideLayout, TemplateKind};
