//! Named geographic locations and their identity key.

use std::fmt;
use std::str::FromStr;

use crate::{GeoPoint, TpError};

/// Identity of a location: `(region, name)`, compared case-sensitively.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationKey {
    pub region: String,
    pub name:   String,
}

impl LocationKey {
    pub fn new(region: impl Into<String>, name: impl Into<String>) -> Self {
        Self { region: region.into(), name: name.into() }
    }
}

/// Displays as `"name, region"`, the form users search against.
impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.region)
    }
}

/// Parses the compact `"region,name"` form.  The region ends at the first
/// comma; both halves are trimmed and must be non-empty.
impl FromStr for LocationKey {
    type Err = TpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (region, name) = s
            .split_once(',')
            .ok_or_else(|| TpError::Parse(format!("expected \"region,name\", got {s:?}")))?;
        let (region, name) = (region.trim(), name.trim());
        if region.is_empty() || name.is_empty() {
            return Err(TpError::Parse(format!("empty region or name in {s:?}")));
        }
        Ok(Self::new(region, name))
    }
}

/// A named geographic point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub key: LocationKey,
    pub pos: GeoPoint,
}

impl Location {
    pub fn new(region: impl Into<String>, name: impl Into<String>, pos: GeoPoint) -> Self {
        Self { key: LocationKey::new(region, name), pos }
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.key.region
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.key.name
    }

    /// Great-circle distance to `other` in kilometres.
    #[inline]
    pub fn distance_km(&self, other: &Location) -> f64 {
        self.pos.distance_km(other.pos)
    }
}
