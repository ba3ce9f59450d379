//! Itinerary presentation: fixed-width console table and CSV export.

use std::io::{self, Write};

use csv::Writer;

use tp_core::LocationKey;
use tp_network::PathResult;

use crate::DataResult;

const RULE_WIDTH: usize = 60;
/// Regions are cut to this many characters in the From/To columns.
const REGION_CHARS: usize = 15;

/// Write `result` as the console travel plan.
///
/// An empty result prints the "no route" line instead of a table.
pub fn render_table<W: Write>(out: &mut W, result: &PathResult) -> io::Result<()> {
    if result.is_empty() {
        return writeln!(out, "\nNo route found between the specified cities.");
    }

    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "\nOptimal Travel Plan:")?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<25}{:<25}{:<10}{:<10}{:<10}{}",
        "From", "To", "Mode", "Distance", "Time", "Cost"
    )?;
    writeln!(out, "{rule}")?;

    for seg in &result.segments {
        writeln!(
            out,
            "{:<25}{:<25}{:<10}{:<10}{:<10}${:.2}",
            place(&seg.from),
            place(&seg.to),
            seg.mode,
            format!("{:.1}km", seg.distance_km),
            format!("{:.1}hrs", seg.time_h),
            seg.cost,
        )?;
    }

    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:>width$}{:.1}km | {:.1}hrs | ${:.2}",
        "Total: ",
        result.total_distance_km,
        result.total_time_h,
        result.total_cost,
        width = RULE_WIDTH,
    )
}

fn place(key: &LocationKey) -> String {
    let region: String = key.region.chars().take(REGION_CHARS).collect();
    format!("{}, {region}", key.name)
}

/// Export `result` as CSV, one row per segment.
pub fn write_itinerary_csv<W: Write>(out: W, result: &PathResult) -> DataResult<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "from_region", "from_name", "to_region", "to_name", "mode", "distance_km", "time_h", "cost",
    ])?;
    for seg in &result.segments {
        writer.write_record(&[
            seg.from.region.clone(),
            seg.from.name.clone(),
            seg.to.region.clone(),
            seg.to.name.clone(),
            seg.mode.to_string(),
            format!("{:.3}", seg.distance_km),
            format!("{:.3}", seg.time_h),
            format!("{:.2}", seg.cost),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
