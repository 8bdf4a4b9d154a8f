//! campbase - command-line front end for event participant planning.
//!
//! Reads event drafts (or bare segment lists) exported from the event form
//! and prints participant totals, peak occupancy and accommodation needs.

mod report;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use campbase_core::models::{Branch, BranchSegment, EventDraft};
use campbase_core::{check_segments, summarize_event, Config, DraftStore};

// ============================================================================
// Constants
// ============================================================================

/// Log filter used when neither RUST_LOG nor the config sets one
const DEFAULT_LOG_FILTER: &str = "warn";

const USAGE: &str = "\
Usage:
  campbase summarize <file> [--json]   Summarize an event draft or segment list
  campbase check <file>                Report problems in the segments
  campbase draft save <file>           Save a draft file to the draft store
  campbase draft new <name>            Start a new draft with one placeholder segment
  campbase draft list                  List saved drafts
  campbase draft show <name> [--json]  Show a saved draft and its summary
  campbase draft rm <name>             Delete a saved draft";

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Initialize the tracing subscriber for logging
fn init_tracing(config: &Config) {
    // RUST_LOG wins, then the configured filter, then the default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// What a draft file may contain: a full draft, or just the segment array
/// the form submits.
#[derive(Deserialize)]
#[serde(untagged)]
enum DraftFile {
    Draft(EventDraft),
    Segments(Vec<BranchSegment>),
}

fn read_draft(path: &Path) -> Result<EventDraft> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed: DraftFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} as an event draft or segment list", path.display()))?;

    Ok(match parsed {
        DraftFile::Draft(draft) => draft,
        DraftFile::Segments(segments) => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("event")
                .to_string();
            EventDraft::new(&name).with_segments(segments)
        }
    })
}

/// Split arguments into positionals and whether `--json` was given.
fn split_flags(args: &[String]) -> (Vec<&str>, bool) {
    let json = args.iter().any(|a| a == "--json");
    let positional = args
        .iter()
        .map(String::as_str)
        .filter(|a| !a.starts_with("--"))
        .collect();
    (positional, json)
}

fn print_summary(draft: &EventDraft, json: bool) -> Result<()> {
    let summary = summarize_event(draft);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", report::render_summary(&summary));
    }
    Ok(())
}

fn open_store(config: &Config) -> Result<DraftStore> {
    let dir = config.drafts_dir()?;
    debug!(dir = %dir.display(), "Opening draft store");
    Ok(DraftStore::new(dir)?)
}

fn run_draft(config: &Config, args: &[String]) -> Result<u8> {
    let store = open_store(config)?;
    let (positional, json) = split_flags(args);

    match positional.as_slice() {
        ["save", file] => {
            let draft = read_draft(Path::new(file))?;
            let slug = store.save(&draft)?;
            println!("Saved draft \"{}\" as {}", draft.name, slug);
        }
        ["new", name_parts @ ..] if !name_parts.is_empty() => {
            let name = name_parts.join(" ");
            if store.load(&name)?.is_some() {
                bail!("A draft named \"{}\" already exists", name);
            }
            let placeholder = BranchSegment::new(Branch::All, "", "", config.default_accommodation());
            let draft = EventDraft::new(&name).with_segments(vec![placeholder]);
            let slug = store.save(&draft)?;
            println!("Created draft \"{}\" as {}", name, slug);
        }
        ["list"] => {
            print!("{}", report::render_draft_list(store.dir(), &store.list()?));
        }
        ["show", name] => {
            let stored = store
                .load(name)?
                .ok_or_else(|| anyhow::anyhow!("No saved draft named \"{}\"", name))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stored)?);
            } else {
                print!("{}", report::render_draft(&stored));
                println!();
                print_summary(&stored.draft, false)?;
            }
        }
        ["rm", name] => {
            if store.delete(name)? {
                println!("Deleted draft \"{}\"", name);
            } else {
                println!("No saved draft named \"{}\"", name);
                return Ok(EXIT_FAILURE);
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            return Ok(EXIT_USAGE);
        }
    }

    Ok(EXIT_SUCCESS)
}

fn run(config: &Config, args: &[String]) -> Result<u8> {
    let (positional, json) = split_flags(args);

    match positional.first().copied() {
        Some("summarize") => {
            let file = positional.get(1).context("summarize needs a file argument")?;
            let draft = read_draft(Path::new(file))?;
            print_summary(&draft, json)?;
            Ok(EXIT_SUCCESS)
        }
        Some("check") => {
            let file = positional.get(1).context("check needs a file argument")?;
            let draft = read_draft(Path::new(file))?;
            let issues = check_segments(&draft.segments);
            print!("{}", report::render_issues(&issues));
            Ok(if issues.is_empty() { EXIT_SUCCESS } else { EXIT_FAILURE })
        }
        Some("draft") => {
            let rest: Vec<String> = args.iter().skip_while(|a| *a != "draft").skip(1).cloned().collect();
            run_draft(config, &rest)
        }
        _ => {
            eprintln!("{}", USAGE);
            Ok(EXIT_USAGE)
        }
    }
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    init_tracing(&config);
    info!("campbase starting");

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&config, &args).map(ExitCode::from)
}
