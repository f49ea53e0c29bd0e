//! CSV place catalog loader.
//!
//! # CSV format
//!
//! One row per selectable place.  `category`, `location`, and
//! `travel_minutes` may be left empty.
//!
//! ```csv
//! place,label,category,location,stay_minutes,travel_minutes
//! Blue Bottle Coffee,Morning coffee,cafe,Seongsu exit 2,60,15
//! Hongdae Walking Street,Walk and shop,sight,Hongik Univ.,120,
//! ```
//!
//! The result is a list of [`PlaceSeed`]s in file order, ready to be
//! inserted into an itinerary.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::activity::PlaceSeed;
use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    place:          String,
    label:          String,
    category:       Option<String>,
    location:       Option<String>,
    stay_minutes:   Option<u32>,
    travel_minutes: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a place catalog from a CSV file.
pub fn load_catalog_csv(path: &Path) -> Result<Vec<PlaceSeed>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
pub fn load_catalog_reader<R: Read>(reader: R) -> Result<Vec<PlaceSeed>, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut seeds = Vec::new();

    for (row_idx, result) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
        // +2: one for the header line, one for 1-based numbering.
        let line = row_idx + 2;
        let row = result.map_err(|e| ScheduleError::Parse(format!("line {line}: {e}")))?;
        if row.place.is_empty() {
            return Err(ScheduleError::Parse(format!("line {line}: empty place name")));
        }
        seeds.push(PlaceSeed {
            place:            row.place,
            label:            row.label,
            category:         row.category.filter(|c| !c.is_empty()),
            location:         row.location.filter(|l| !l.is_empty()),
            duration_minutes: row.stay_minutes,
            travel_minutes:   row.travel_minutes,
        });
    }

    Ok(seeds)
}

/// First seed in `catalog` whose place name matches `place` exactly.
pub fn find_place<'a>(catalog: &'a [PlaceSeed], place: &str) -> Option<&'a PlaceSeed> {
    catalog.iter().find(|s| s.place == place)
}
