//! Transportation mode enum shared by the synthesizer, router, and planner.
//!
//! The set is closed.  Per-mode speed, cost, and search bias live in
//! [`ModeTable`](crate::ModeTable), not on the enum, so they can be injected
//! as configuration.

use std::str::FromStr;

use crate::TpError;

/// The means by which a leg is travelled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Car,
}

impl TransportMode {
    /// Every mode, in declaration order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Flight,
        TransportMode::Train,
        TransportMode::Bus,
        TransportMode::Car,
    ];

    /// Ground modes in the order the synthesizer emits them for a short pair.
    pub const GROUND: [TransportMode; 3] = [
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Car,
    ];

    /// Human-readable label, also the canonical input spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Flight => "Flight",
            TransportMode::Train  => "Train",
            TransportMode::Bus    => "Bus",
            TransportMode::Car    => "Car",
        }
    }

    #[inline]
    pub fn is_ground(self) -> bool {
        !matches!(self, TransportMode::Flight)
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Case-insensitive parse of `"Flight"`, `"Train"`, `"Bus"`, or `"Car"`.
/// Surrounding whitespace is ignored.
impl FromStr for TransportMode {
    type Err = TpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TransportMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TpError::InvalidMode(s.to_owned()))
    }
}
