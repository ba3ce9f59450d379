//! CSV location loader.
//!
//! # CSV format
//!
//! Headerless, one location per line:
//!
//! ```csv
//! France,Paris,48.8566,2.3522
//! Belgium,Brussels,50.8503,4.3517
//! Japan,"Tokyo",35.6762,139.6503
//! ```
//!
//! Fields are trimmed.  Quote characters (`"` and `'`) are stripped from the
//! name.  Extra trailing fields are ignored.
//!
//! A record that cannot be turned into a location (too few fields, empty
//! region or name, unparsable or out-of-range coordinate) is logged and
//! skipped; it never aborts the load.  A header line is therefore harmless.
//! Only I/O failures are fatal.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};

use tp_core::GeoPoint;
use tp_network::LocationCatalog;

use crate::DataError;

/// Counts from one load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records that created a new catalog entry.
    pub loaded:     usize,
    /// Well-formed records whose key was already present.
    pub duplicates: usize,
    /// Malformed records.
    pub skipped:    usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a catalog from a CSV file.
pub fn load_locations_csv(path: &Path) -> Result<(LocationCatalog, LoadReport), DataError> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
pub fn load_locations_reader<R: Read>(reader: R) -> Result<(LocationCatalog, LoadReport), DataError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut catalog = LocationCatalog::new();
    let mut report = LoadReport::default();

    for (index, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(DataError::Csv(e)),
            Err(e) => {
                warn!("skipping record {}: {e}", index + 1);
                report.skipped += 1;
                continue;
            }
        };

        let line = record.position().map_or(index as u64 + 1, |p| p.line());
        match parse_record(&record) {
            Ok((region, name, pos)) => {
                let (_, inserted) = catalog.add(region, name, pos)?;
                if inserted {
                    report.loaded += 1;
                } else {
                    report.duplicates += 1;
                }
            }
            Err(reason) => {
                warn!("skipping line {line} {:?}: {reason}", record.iter().collect::<Vec<_>>());
                report.skipped += 1;
            }
        }
    }

    info!(
        "loaded {} locations ({} duplicates, {} skipped)",
        report.loaded, report.duplicates, report.skipped
    );
    Ok((catalog, report))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(record: &StringRecord) -> Result<(String, String, GeoPoint), String> {
    if record.len() < 4 {
        return Err(format!("expected 4 fields, found {}", record.len()));
    }

    let region = record[0].to_owned();
    let name: String = record[1]
        .chars()
        .filter(|c| !matches!(c, '"' | '\''))
        .collect::<String>()
        .trim()
        .to_owned();
    if region.is_empty() || name.is_empty() {
        return Err("empty region or name".to_owned());
    }

    let lat = parse_coord(&record[2], "latitude", 90.0)?;
    let lon = parse_coord(&record[3], "longitude", 180.0)?;
    Ok((region, name, GeoPoint::new(lat, lon)))
}

fn parse_coord(field: &str, what: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = field
        .parse()
        .map_err(|_| format!("invalid {what} {field:?}"))?;
    if !(-limit..=limit).contains(&value) {
        return Err(format!("{what} {value} outside ±{limit}"));
    }
    Ok(value)
}
