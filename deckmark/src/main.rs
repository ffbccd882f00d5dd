//! deckmark - Markdown slide decks
//!
//! A CLI tool for listing, presenting, editing and exporting slide decks
//! written as a single markdown document.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use deckmark::collaborators::DeckExporter;
use deckmark::deck_config::{DeckConfig, CONFIG_FILE_NAME};
use deckmark::html_exporter::{HtmlExportOptions, HtmlExporter};
use deckmark::presenter::{Key, KeyOutcome, PresenterSession};
use deckmark::templates::SAMPLE_DECK;
use deckmark::{select_motion, Direction, Presentation, SlideChange};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Main entry point for the deckmark CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();

    match cli.command {
        Commands::Slides { file } => {
            handle_slides_command(&file)?;
        }

        Commands::Present {
            file,
            start,
            windowed,
        } => {
            let config = load_config(&file, cli.config.as_deref())?;
            handle_present_command(&file, &config, start, windowed)?;
        }

        Commands::Edit {
            file,
            slide,
            content,
            output,
        } => {
            handle_edit_command(&file, slide, &content, output)?;
        }

        Commands::Export {
            file,
            output,
            format,
        } => {
            let config = load_config(&file, cli.config.as_deref())?;
            handle_export_command(&file, output, format, &config)?;
        }

        Commands::Init { path, force, title } => {
            handle_init_command(path, force, title)?;
        }
    }

    Ok(())
}

/// Read a deck file
fn read_deck(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read deck {}", file.display()))
}

/// Load deckmark.toml from `--config` or next to the deck
fn load_config(file: &Path, explicit: Option<&Path>) -> Result<DeckConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => file
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME),
    };

    DeckConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load configuration {}", path.display()))
}

/// Handle the slides command
fn handle_slides_command(file: &Path) -> Result<()> {
    let source = read_deck(file)?;
    let slides = deckmark::parse(&source);

    if slides.is_empty() {
        println!("No slides to display");
        return Ok(());
    }

    println!("{} slides in {}:\n", slides.len(), file.display());
    for (index, slide) in slides.iter().enumerate() {
        println!(
            "  {:>3}. {:<28} {:<10} template={} animation={} transition={} duration={}ms",
            index + 1,
            slide.label(index),
            slide.id.as_str(),
            slide.metadata.template,
            slide.metadata.animation.as_str(),
            slide.metadata.transition.as_str(),
            slide.metadata.duration_ms
        );
    }

    Ok(())
}

/// Handle the present command
fn handle_present_command(
    file: &Path,
    config: &DeckConfig,
    start: Option<usize>,
    windowed: bool,
) -> Result<()> {
    let mut presentation = Presentation::new(read_deck(file)?);

    if presentation.slide_count() == 0 {
        println!("No slides to display");
        return Ok(());
    }

    let start_index = start
        .map(|n| n.saturating_sub(1))
        .unwrap_or_else(|| config.start_index());
    if presentation.jump_to(start_index).is_none() {
        log::warn!(
            "Start slide {} is out of range, starting at slide 1",
            start_index + 1
        );
    }

    let fullscreen = config.presenter.start_fullscreen && !windowed;
    let mut session = PresenterSession::start(&mut presentation, fullscreen);

    println!("Keys: right/space, left, f (full screen), esc, or a slide number\n");
    print_current_slide(session.presentation());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Ok(number) = input.parse::<usize>() {
            match number.checked_sub(1).and_then(|index| session.jump_to(index)) {
                Some(change) => {
                    print_change(&change);
                    print_current_slide(session.presentation());
                }
                None => println!("No slide {}", number),
            }
            continue;
        }

        let key = match input.parse::<Key>() {
            Ok(key) => key,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match session.handle_key(key) {
            KeyOutcome::Moved(change) => {
                print_change(&change);
                print_current_slide(session.presentation());
            }
            KeyOutcome::AtEdge(Direction::Forward) => println!("Already at the last slide"),
            KeyOutcome::AtEdge(Direction::Backward) => println!("Already at the first slide"),
            KeyOutcome::Fullscreen(on) => {
                println!("Full screen {}", if on { "on" } else { "off" })
            }
            KeyOutcome::Exited => break,
            KeyOutcome::Ignored => println!("No binding for '{}'", input),
        }
    }

    Ok(())
}

/// Print the selected slide
fn print_current_slide(presentation: &Presentation) {
    let Some(slide) = presentation.current_slide() else {
        println!("No slides to display");
        return;
    };

    let index = presentation.current_index();
    println!(
        "[{}/{}] {} ({})",
        index + 1,
        presentation.slide_count(),
        slide.label(index),
        slide.metadata.template
    );
    println!("{}\n", slide.content);
}

/// Print the motion of a slide change
fn print_change(change: &SlideChange) {
    println!(
        "{} -> {} ({}): enter {:.2}s {:?}, exit {:.2}s",
        change.from,
        change.to,
        change.direction,
        change.enter.duration_seconds,
        change.enter.easing,
        change.exit.duration_seconds
    );
}

/// Handle the edit command
fn handle_edit_command(
    file: &Path,
    slide: usize,
    content: &Path,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut presentation = Presentation::new(read_deck(file)?);
    let new_content = std::fs::read_to_string(content)
        .with_context(|| format!("Failed to read slide content {}", content.display()))?;

    let index = slide
        .checked_sub(1)
        .with_context(|| "Slide numbers start at 1")?;
    if presentation.jump_to(index).is_none() {
        anyhow::bail!(
            "Slide {} does not exist (deck has {} slides)",
            slide,
            presentation.slide_count()
        );
    }

    presentation.replace_current_content(new_content.trim());

    let target = output.unwrap_or_else(|| file.to_path_buf());
    std::fs::write(&target, presentation.source())
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("✓ Updated slide {} in {}", slide, target.display());

    Ok(())
}

/// Handle the export command
fn handle_export_command(
    file: &Path,
    mut output: PathBuf,
    format_arg: Option<OutputFormat>,
    config: &DeckConfig,
) -> Result<()> {
    // Auto-detect format from output file extension if not explicitly specified
    let format = OutputFormat::resolve(format_arg, &mut output)?;

    let source = read_deck(file)?;
    let slides = deckmark::parse(&source);

    let base_dir = file.parent().map(Path::to_path_buf);
    let exporter = HtmlExporter::new(HtmlExportOptions::from_config(config, base_dir));

    println!("Exporting {} slides...", slides.len());
    exporter
        .export(&slides, format.into(), &output)
        .with_context(|| format!("Failed to export {}", output.display()))?;

    if log::log_enabled!(log::Level::Info) {
        for slide in &slides {
            let motion = select_motion(
                slide.metadata.animation,
                slide.metadata.transition,
                slide.metadata.duration_ms,
                Direction::Forward,
            );
            log::info!(
                "{}: {:.2}s {:?}",
                slide.id,
                motion.duration_seconds,
                motion.easing
            );
        }
    }

    println!("✓ Successfully wrote: {}", output.display());

    Ok(())
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, force: bool, title: Option<String>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));
    let deck_path = target_path.join("slides.md");
    let config_path = target_path.join(CONFIG_FILE_NAME);

    if !force && (deck_path.exists() || config_path.exists()) {
        anyhow::bail!(
            "{} already contains a deck. Use --force to overwrite existing files",
            target_path.display()
        );
    }

    // Create the target directory if it doesn't exist
    std::fs::create_dir_all(&target_path)
        .with_context(|| format!("Failed to create directory {}", target_path.display()))?;

    std::fs::write(&deck_path, SAMPLE_DECK)
        .with_context(|| format!("Failed to write file {}", deck_path.display()))?;

    let config = DeckConfig {
        title: Some(title.unwrap_or_else(|| "Ten Principles".to_string())),
        ..DeckConfig::default()
    };
    config
        .save(&config_path)
        .with_context(|| format!("Failed to write file {}", config_path.display()))?;

    println!("✓ Created {}", deck_path.display());
    println!("✓ Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit slides.md; separate slides with a '---' line");
    println!("  2. Run 'deckmark present slides.md' to step through it");
    println!("  3. Run 'deckmark export slides.md -o slides.html' to share it");

    Ok(())
}
