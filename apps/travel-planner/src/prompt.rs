//! Interactive trip entry.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use tp_core::{LocationKey, TransportMode};
use tp_network::{LocationCatalog, Stop, TripRequest};

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }
        Ok(line.trim().to_owned())
    }

    /// Search the catalog; one match is taken as-is, several produce a
    /// numbered menu.
    pub fn select_location(&mut self, catalog: &LocationCatalog, prompt: &str) -> Result<LocationKey> {
        let query = self.ask(prompt)?;
        let mut matches = catalog.search(&query);

        match matches.len() {
            0 => bail!("No cities found matching: {query}"),
            1 => Ok(matches.remove(0)),
            n => {
                writeln!(self.output, "Multiple matches found:")?;
                for (i, key) in matches.iter().enumerate() {
                    writeln!(self.output, "  {}) {key}", i + 1)?;
                }
                let choice = self.ask(&format!("Enter your choice (1-{n}): "))?;
                match choice.parse::<usize>() {
                    Ok(c) if (1..=n).contains(&c) => Ok(matches.swap_remove(c - 1)),
                    _ => bail!("Invalid choice"),
                }
            }
        }
    }

    pub fn read_stop_count(&mut self) -> Result<usize> {
        let answer = self.ask("Enter the number of stops (0 for direct route): ")?;
        answer
            .parse()
            .with_context(|| format!("invalid number of stops: {answer:?}"))
    }

    pub fn read_mode(&mut self, prompt: &str) -> Result<TransportMode> {
        Ok(self.ask(prompt)?.parse()?)
    }

    /// The full question sequence: origin, stop count, each stop and its
    /// mode, destination, and the final leg's mode when there are stops.
    pub fn read_trip(&mut self, catalog: &LocationCatalog) -> Result<TripRequest> {
        let start = self.select_location(catalog, "Enter starting city or country: ")?;
        let count = self.read_stop_count()?;

        // `count` is untrusted input; grow only as stops are actually read.
        let mut stops = Vec::new();
        for i in 1..=count {
            let key = self.select_location(catalog, &format!("Enter stop #{i} city or country: "))?;
            let mode = self.read_mode("Enter transport mode to reach this stop (Flight/Train/Bus/Car): ")?;
            stops.push(Stop { key, mode });
        }

        let destination = self.select_location(catalog, "Enter destination city or country: ")?;
        if stops.is_empty() {
            return Ok(TripRequest::direct(start, destination));
        }
        let final_mode =
            self.read_mode("Enter transport mode from last stop to destination (Flight/Train/Bus/Car): ")?;
        Ok(TripRequest::via(start, stops, destination, final_mode))
    }
}
