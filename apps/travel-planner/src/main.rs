//! travel-planner — multi-modal itineraries between catalogued locations.
//!
//! Loads a location CSV, synthesizes the route graph, then plans one trip
//! given on the command line or entered interactively:
//!
//! ```text
//! travel-planner --locations cities.csv --from France,Paris --to Spain,Madrid
//! travel-planner --from France,Paris --via Belgium,Brussels:Train --to Netherlands,Amsterdam --final-mode Bus
//! RUST_LOG=debug travel-planner          # prompts for every field
//! ```

mod cli;
mod prompt;


use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tp_io::{load_locations_csv, render_table, write_itinerary_csv};
use tp_network::{DijkstraRouter, ItineraryPlanner, RouteSynthesizer, TripRequest};

use cli::{Args, load_config};
use prompt::Prompter;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // 1. Configuration and locations.
    let config = load_config(args.config.as_deref())?;
    let (catalog, _report) = load_locations_csv(&args.locations)
        .with_context(|| format!("loading locations from {}", args.locations.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        writeln!(out, "Available cities:")?;
        for (_, loc) in catalog.iter() {
            writeln!(out, "- {}", loc.key)?;
        }
        return Ok(());
    }
    if let Some(query) = &args.search {
        for key in catalog.search(query) {
            writeln!(out, "{key}")?;
        }
        return Ok(());
    }

    // 2. Trip, from flags or prompts.  Resolved before synthesis so a bad
    //    answer fails fast.
    let trip = match args.trip()? {
        Some(trip) => trip,
        None => {
            writeln!(out, "Travel Planner\n==============\n")?;
            Prompter::new(io::stdin().lock(), &mut out).read_trip(&catalog)?
        }
    };

    // 3. Route graph.
    let t0 = Instant::now();
    let graph = RouteSynthesizer::new(config).synthesize(catalog);
    info!("route graph ready in {:.3} s", t0.elapsed().as_secs_f64());

    // 4. Plan and report.
    writeln!(out, "\n{}", describe(&trip))?;
    let result = ItineraryPlanner::new(DijkstraRouter).plan_trip(&graph, &trip)?;
    render_table(&mut out, &result)?;

    if let Some(path) = &args.csv_out {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_itinerary_csv(BufWriter::new(file), &result)?;
        info!("wrote itinerary to {}", path.display());
    }
    Ok(())
}

/// `"Planning trip from Paris, France to Madrid, Spain with 1 stop(s)"`.
fn describe(trip: &TripRequest) -> String {
    let mut line = format!("Planning trip from {} to {}", trip.start, trip.destination);
    if !trip.stops.is_empty() {
        line.push_str(&format!(" with {} stop(s)", trip.stops.len()));
    }
    line
}
