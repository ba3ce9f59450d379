//! Command-line arguments and their translation into a [`TripRequest`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use tp_core::{LocationKey, PlannerConfig, TransportMode};
use tp_network::{Stop, TripRequest};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "cities.csv", help = "headerless CSV of region,name,lat,lon")]
    pub locations: PathBuf,

    #[arg(long, help = "TOML file overriding mode parameters and distance bands")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "REGION,NAME", help = "trip origin; prompts interactively when omitted")]
    pub from: Option<LocationKey>,

    #[arg(long, value_name = "REGION,NAME", help = "trip destination")]
    pub to: Option<LocationKey>,

    #[arg(
        long = "via",
        value_name = "REGION,NAME:MODE",
        value_parser = parse_stop,
        help = "intermediate stop and the mode used to reach it (repeatable)"
    )]
    pub via: Vec<Stop>,

    #[arg(long, value_name = "MODE", help = "mode for the leg into the destination")]
    pub final_mode: Option<TransportMode>,

    #[arg(long, value_name = "QUERY", help = "list locations matching QUERY and exit")]
    pub search: Option<String>,

    #[arg(long, help = "list all locations and exit")]
    pub list: bool,

    #[arg(long, value_name = "PATH", help = "also write the itinerary as CSV")]
    pub csv_out: Option<PathBuf>,
}

impl Args {
    /// The trip described by flags, or `None` when the user should be
    /// prompted instead.
    pub fn trip(&self) -> Result<Option<TripRequest>> {
        let (start, destination) = match (&self.from, &self.to) {
            (Some(from), Some(to)) => (from.clone(), to.clone()),
            (None, None) => {
                if !self.via.is_empty() || self.final_mode.is_some() {
                    bail!("--via and --final-mode need --from and --to");
                }
                return Ok(None);
            }
            _ => bail!("--from and --to must be given together"),
        };

        let trip = match (self.via.is_empty(), self.final_mode) {
            (true, None) => TripRequest::direct(start, destination),
            (_, Some(mode)) => TripRequest::via(start, self.via.clone(), destination, mode),
            (false, None) => bail!("--final-mode is required when --via is given"),
        };
        Ok(Some(trip))
    }
}

/// Parse `REGION,NAME:MODE`.  The mode follows the last colon.
pub fn parse_stop(s: &str) -> Result<Stop, String> {
    let (key, mode) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected REGION,NAME:MODE, got {s:?}"))?;
    let key = key.parse::<LocationKey>().map_err(|e| e.to_string())?;
    let mode = mode.parse::<TransportMode>().map_err(|e| e.to_string())?;
    Ok(Stop { key, mode })
}

/// Default configuration, or the TOML file at `path` layered over it.
pub fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let config = match path {
        None => PlannerConfig::default(),
        Some(path) => {
            info!("reading planner configuration from {}", path.display());
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<PlannerConfig>(&text).with_context(|| format!("parsing {}", path.display()))?
        }
    };
    config.validate()?;
    Ok(config)
}
