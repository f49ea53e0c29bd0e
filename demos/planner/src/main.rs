//! planner — command-line editing session for the itinerary planner.
//!
//! Opens a session from a place catalog, selects a short route, plays a
//! scripted series of edits (reorder, stay nudges, a rejected edit), prints
//! the reflowed schedule after each stage, and writes the finalized plan.
//!
//! ```text
//! planner --start 09:30 --end 18:00 --out output/planner --format json
//! RUST_LOG=it_editor=debug planner
//! ```

mod catalog;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use it_core::{ClockTime, PlannerConfig};
use it_editor::{EditCommand, EditorBuilder, EditorError, EditorObserver, ScheduleView};
use it_output::{CsvWriter, JsonWriter, PlanOutputObserver, PlanWriter};
use it_schedule::{Itinerary, PlaceSeed, PlanSnapshot, ScheduleError, load_catalog_csv, load_catalog_reader};

use catalog::{CATALOG_CSV, DEMO_ROUTE};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(about = "Plan a day out and watch the schedule reflow as you edit it")]
struct Args {
    /// Schedule start, `HH:MM` (defaults to the config's `default_start`).
    #[arg(long)]
    start: Option<ClockTime>,

    /// End of the planning window, `HH:MM`.
    #[arg(long, conflicts_with = "no_end")]
    end: Option<ClockTime>,

    /// Plan without a window end, even if the config sets one.
    #[arg(long)]
    no_end: bool,

    /// Planner config as JSON.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Place catalog CSV (built-in catalog if omitted).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output directory.
    #[arg(long, short = 'o', default_value = "output/planner")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

// ── Observer wrapper to count edits ──────────────────────────────────────────

struct CountingObserver<W: PlanWriter> {
    inner:    PlanOutputObserver<W>,
    applied:  usize,
    rejected: usize,
}

impl<W: PlanWriter> CountingObserver<W> {
    fn new(inner: PlanOutputObserver<W>) -> Self {
        Self { inner, applied: 0, rejected: 0 }
    }
}

impl<W: PlanWriter> EditorObserver for CountingObserver<W> {
    fn on_applied(&mut self, revision: u64, command: &EditCommand, itinerary: &Itinerary) {
        self.applied += 1;
        self.inner.on_applied(revision, command, itinerary);
    }

    fn on_rejected(&mut self, _command: &EditCommand, error: &EditorError) {
        self.rejected += 1;
        println!("  rejected: {error}");
    }

    fn on_finalize(&mut self, snapshot: &PlanSnapshot) {
        self.inner.on_finalize(snapshot);
    }
}

// ── Printing ──────────────────────────────────────────────────────────────────

fn print_view(title: &str, view: &ScheduleView) {
    println!("── {title} ({})", view.time_range_label());
    println!("{:<3} {:<24} {:<6} {:<6} {:<8} {:<6}", "#", "Place", "Start", "End", "Stay", "Travel");
    println!("{}", "-".repeat(58));
    for row in &view.rows {
        let travel = row.travel_to_next.map(|m| format!("{m}m")).unwrap_or_else(|| "-".to_owned());
        println!(
            "{:<3} {:<24} {:<6} {:<6} {:<8} {:<6}",
            row.number,
            row.place,
            row.start.to_string(),
            row.end.to_string(),
            row.stay.to_string(),
            travel,
        );
    }
    println!("Total: {}", view.total);
    if let Some(over) = view.overrun_minutes {
        println!("Runs {over} minutes past the window end");
    }
    println!();
}

// ── Session ───────────────────────────────────────────────────────────────────

fn run_session<W: PlanWriter>(
    args: &Args,
    config: PlannerConfig,
    catalog: Vec<PlaceSeed>,
    writer: W,
) -> Result<()> {
    let mut builder = EditorBuilder::new(config)
        .catalog(catalog)
        .observer(CountingObserver::new(PlanOutputObserver::new(writer)));
    if let Some(start) = args.start {
        builder = builder.start(start);
    }
    if args.no_end {
        builder = builder.end(None);
    } else if let Some(end) = args.end {
        builder = builder.end(Some(end));
    }
    let mut editor = builder.build()?;

    // 1. Pick the route from the catalog.
    for place in DEMO_ROUTE {
        editor.select_place(place)?;
    }
    print_view("selected", &editor.view());

    // 2. Drag the last stop to the front.
    let last = editor.itinerary().len().saturating_sub(1);
    editor.reorder_by_index(last, 0)?;
    print_view("after reorder", &editor.view());

    // 3. Stay a little longer at the new second stop, cut the travel after it.
    let second = editor.itinerary().activities()[1].id();
    editor.nudge_duration(second, 2)?;
    editor.set_travel_time(second, 5)?;
    print_view("after stay edits", &editor.view());

    // 4. A negative stay is refused and changes nothing.
    let before = editor.view();
    match editor.set_duration(second, -30) {
        Err(EditorError::Schedule(ScheduleError::InvalidValue(msg))) => {
            println!("Negative stay refused: {msg}");
        }
        other => anyhow::bail!("expected a negative stay to be refused, got {other:?}"),
    }
    anyhow::ensure!(editor.view() == before, "refused edit changed the schedule");
    println!();

    // 5. Finalize.
    let snapshot = editor.finalize();
    let revision = editor.revision();
    let (_, mut obs) = editor.into_parts();
    obs.inner.finish().context("writing plan output")?;

    println!(
        "Finalized {} activities after {revision} edits ({} applied, {} rejected)",
        snapshot.activities.len(),
        obs.applied,
        obs.rejected,
    );
    println!("Output written to {}", args.out.display());
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PlannerConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };

    let catalog = match &args.catalog {
        Some(path) => load_catalog_csv(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => load_catalog_reader(Cursor::new(CATALOG_CSV))?,
    };
    tracing::info!(places = catalog.len(), "catalog loaded");

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let out: &Path = &args.out;

    match args.format {
        Format::Csv => run_session(&args, config, catalog, CsvWriter::new(out)?),
        Format::Json => run_session(&args, config, catalog, JsonWriter::new(out)?),
    }
}
