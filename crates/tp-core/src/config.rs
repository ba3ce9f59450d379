//! Planner configuration.
//!
//! # Design
//!
//! Per-mode parameters are process-wide constants of the model, but they are
//! carried as an immutable value injected into the synthesizer rather than as
//! global state.  `PlannerConfig::default()` reproduces the stock table:
//!
//! | Mode   | Speed (km/h) | Cost / km | Hop penalty |
//! |--------|--------------|-----------|-------------|
//! | Flight | 900          | 0.12      | 100         |
//! | Train  | 120          | 0.10      | 200         |
//! | Bus    | 60           | 0.08      | 200         |
//! | Car    | 70           | 0.12      | 200         |
//!
//! Hop penalties only bias the path search; they never appear in reported
//! cost or time.

use crate::{TpError, TpResult, TransportMode};

// ── ModeParams ────────────────────────────────────────────────────────────────

/// Fixed parameters of one transport mode.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeParams {
    /// Average speed in km/h.  Travel time = distance / speed.
    pub speed_kmh: f64,
    /// Monetary cost per kilometre.
    pub cost_per_km: f64,
    /// Search-weight bias added per edge of this mode.
    pub hop_penalty: f64,
}

impl ModeParams {
    pub const fn new(speed_kmh: f64, cost_per_km: f64, hop_penalty: f64) -> Self {
        Self { speed_kmh, cost_per_km, hop_penalty }
    }

    #[inline]
    pub fn travel_time_h(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh
    }

    #[inline]
    pub fn cost(&self, distance_km: f64) -> f64 {
        distance_km * self.cost_per_km
    }
}

// ── ModeTable ─────────────────────────────────────────────────────────────────

/// One [`ModeParams`] per [`TransportMode`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModeTable {
    pub flight: ModeParams,
    pub train:  ModeParams,
    pub bus:    ModeParams,
    pub car:    ModeParams,
}

impl ModeTable {
    #[inline]
    pub fn get(&self, mode: TransportMode) -> &ModeParams {
        match mode {
            TransportMode::Flight => &self.flight,
            TransportMode::Train  => &self.train,
            TransportMode::Bus    => &self.bus,
            TransportMode::Car    => &self.car,
        }
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            flight: ModeParams::new(900.0, 0.12, 100.0),
            train:  ModeParams::new(120.0, 0.10, 200.0),
            bus:    ModeParams::new(60.0, 0.08, 200.0),
            car:    ModeParams::new(70.0, 0.12, 200.0),
        }
    }
}

// ── SynthesisRule ─────────────────────────────────────────────────────────────

/// Distance thresholds deciding which modes connect an ordered pair.
///
/// - `d > flight_min_km` → one Flight edge.
/// - `d < ground_max_km` → one Bus, one Train, one Car edge.
/// - otherwise → no edge at all.  With the defaults this leaves pairs in
///   `[500, 1000]` km unconnected.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynthesisRule {
    pub flight_min_km: f64,
    pub ground_max_km: f64,
}

impl SynthesisRule {
    /// Modes to emit for an ordered pair `distance_km` apart, in emission order.
    pub fn modes_for(&self, distance_km: f64) -> &'static [TransportMode] {
        if distance_km > self.flight_min_km {
            &[TransportMode::Flight]
        } else if distance_km < self.ground_max_km {
            &TransportMode::GROUND
        } else {
            &[]
        }
    }
}

impl Default for SynthesisRule {
    fn default() -> Self {
        Self { flight_min_km: 1_000.0, ground_max_km: 500.0 }
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Complete, immutable configuration of the route model.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub modes:     ModeTable,
    pub synthesis: SynthesisRule,
}

impl PlannerConfig {
    /// Check the invariants the synthesizer and router rely on: positive
    /// speeds, non-negative costs and penalties (so search weights stay
    /// non-negative), and ordered thresholds.
    pub fn validate(&self) -> TpResult<()> {
        for mode in TransportMode::ALL {
            let p = self.modes.get(mode);
            if !(p.speed_kmh.is_finite() && p.speed_kmh > 0.0) {
                return Err(TpError::Config(format!(
                    "{mode}: speed_kmh must be positive, got {}",
                    p.speed_kmh
                )));
            }
            if !(p.cost_per_km.is_finite() && p.cost_per_km >= 0.0) {
                return Err(TpError::Config(format!(
                    "{mode}: cost_per_km must be non-negative, got {}",
                    p.cost_per_km
                )));
            }
            if !(p.hop_penalty.is_finite() && p.hop_penalty >= 0.0) {
                return Err(TpError::Config(format!(
                    "{mode}: hop_penalty must be non-negative, got {}",
                    p.hop_penalty
                )));
            }
        }

        let rule = &self.synthesis;
        if rule.ground_max_km.is_nan() || rule.flight_min_km.is_nan() {
            return Err(TpError::Config("synthesis thresholds must be numbers".into()));
        }
        if rule.ground_max_km > rule.flight_min_km {
            return Err(TpError::Config(format!(
                "ground_max_km ({}) exceeds flight_min_km ({})",
                rule.ground_max_km, rule.flight_min_km
            )));
        }
        Ok(())
    }
}
