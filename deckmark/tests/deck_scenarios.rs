//! End-to-end scenarios through the public API

use deckmark::collaborators::{DeckExporter, ExportFormat};
use deckmark::html_exporter::{HtmlExportOptions, HtmlExporter};
use deckmark::motion::Easing;
use deckmark::presenter::{Key, KeyOutcome, PresenterSession};
use deckmark::slide_model::{serialize, Animation, Transition};
use deckmark::templates::SAMPLE_DECK;
use deckmark::{dispatch, parse, select_motion, Direction, Presentation, SlideLayout, TemplateKind};
use std::fs;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("deckmark-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_two_plain_slides() {
    let slides = parse("# A\n\n---\n\n# B");

    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].title.as_deref(), Some("A"));
    assert_eq!(slides[1].title.as_deref(), Some("B"));
    assert_eq!(slides[0].id.as_str(), "slide-1");
    assert_eq!(slides[1].id.as_str(), "slide-2");
    for slide in &slides {
        assert_eq!(slide.metadata.template, TemplateKind::Default);
        assert_eq!(slide.metadata.animation, Animation::FadeIn);
        assert_eq!(slide.metadata.duration_ms, 1000);
    }
}

#[test]
fn test_leading_metadata_block() {
    let slides = parse("---\ntemplate: quote\nanimation: zoom\n---\n\n> Hello");

    assert_eq!(slides.len(), 1);
    let slide = &slides[0];
    assert_eq!(slide.metadata.template, TemplateKind::Quote);
    assert_eq!(slide.metadata.animation, Animation::Zoom);
    assert!(slide.content.contains("> Hello"));
    assert!(!slide.content.contains("template"));
    assert!(!slide.content.contains("animation"));
    assert!(slide.raw_content.contains("template: quote"));

    assert_eq!(
        dispatch(slide),
        SlideLayout::Quote {
            quote: "Hello".to_string(),
            remainder: String::new()
        }
    );
}

#[test]
fn test_reparse_clamps_current_index() {
    let mut presentation = Presentation::new("# A\n---\n# B\n---\n# C");
    presentation.jump_to(2);
    assert_eq!(presentation.current_index(), 2);

    presentation.set_source("# Just one");
    assert_eq!(presentation.current_index(), 0);
    assert_eq!(presentation.current_slide().unwrap().title.as_deref(), Some("Just one"));
}

#[test]
fn test_transition_none_is_instant() {
    let slides = parse("---\ntransition: none\nduration: 4000\nanimation: slideUp\n---\n# Static");
    assert_eq!(slides[0].metadata.transition, Transition::None);
    assert_eq!(slides[0].metadata.duration_ms, 4000);

    for direction in [Direction::Forward, Direction::Backward] {
        let motion = select_motion(
            slides[0].metadata.animation,
            slides[0].metadata.transition,
            slides[0].metadata.duration_ms,
            direction,
        );
        assert_eq!(motion.duration_seconds, 0.0);
        assert_eq!(motion.easing, Easing::Instant);
    }
}

#[test]
fn test_delimiter_inside_code_fence_is_not_a_break() {
    let document = "# Config\n\n```yaml\n---\nname: demo\n---\n```\n\n---\n\n# Next";
    let slides = parse(document);

    assert_eq!(slides.len(), 2);
    assert!(slides[0].content.contains("name: demo"));
    assert_eq!(slides[1].title.as_deref(), Some("Next"));
}

#[test]
fn test_serialize_round_trip_without_metadata() {
    let document = "# One\n\nfirst\n\n---\n\n## Two\n\n---\n\nthree";
    let slides = parse(document);
    assert_eq!(parse(&serialize(&slides)), slides);
}

#[test]
fn test_unknown_keys_and_values_fall_back() {
    let slides = parse("---\ntemplate: poster\nanimation: spin\nduration: -5\nspeaker: Ada\n---\nBody");
    let metadata = &slides[0].metadata;

    assert_eq!(metadata.template, TemplateKind::Default);
    assert_eq!(metadata.animation, Animation::FadeIn);
    assert_eq!(metadata.duration_ms, 1000);
    assert_eq!(
        metadata.extra.get("speaker").and_then(|v| v.as_text()),
        Some("Ada")
    );
}

#[test]
fn test_presenter_walkthrough_of_sample_deck() {
    let mut presentation = Presentation::new(SAMPLE_DECK);
    let count = presentation.slide_count();

    {
        let mut session = PresenterSession::start(&mut presentation, true);
        let mut moves = 0;
        loop {
            match session.handle_key(Key::ArrowRight) {
                KeyOutcome::Moved(change) => {
                    assert_eq!(change.direction, Direction::Forward);
                    assert_ne!(change.from, change.to);
                    moves += 1;
                }
                KeyOutcome::AtEdge(Direction::Forward) => break,
                other => panic!("unexpected outcome {:?}", other),
            }
        }
        assert_eq!(moves, count - 1);

        let back = session.jump_to(0).unwrap();
        assert_eq!(back.direction, Direction::Backward);
        assert_eq!(session.handle_key(Key::Escape), KeyOutcome::Exited);
    }

    assert_eq!(presentation.current_index(), 0);
    assert_eq!(presentation.view(), deckmark::ViewMode::Preview);
}

#[test]
fn test_edit_then_export() {
    let dir = temp_dir("edit-export");
    let mut presentation = Presentation::new(SAMPLE_DECK);

    presentation.jump_to(1);
    assert!(presentation.replace_current_content("## Rewritten\n\nNew body."));
    assert_eq!(presentation.slide_count(), 7);
    assert_eq!(presentation.slides()[1].metadata.animation, Animation::SlideIn);

    let output = dir.join("deck.html");
    let exporter = HtmlExporter::new(HtmlExportOptions {
        title: "Sample".to_string(),
        embed_images: false,
        base_dir: Some(dir.clone()),
        ..HtmlExportOptions::default()
    });
    exporter
        .export(presentation.slides(), ExportFormat::Html, &output)
        .unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("<section ").count(), 7);
    assert!(html.contains("<h2>Rewritten</h2>"));
    assert!(html.contains("template-imageLeft"));

    fs::remove_dir_all(&dir).unwrap();
}
