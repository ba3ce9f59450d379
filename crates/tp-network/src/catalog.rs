//! The set of known locations.
//!
//! Locations receive dense, sequential [`LocationId`]s in insertion order.
//! Nothing is ever removed, so ids double as indices into every per-location
//! array in the crate (adjacency offsets, search labels).

use rustc_hash::FxHashMap;

use tp_core::{GeoPoint, Location, LocationId, LocationKey, TpError, TpResult};

/// Location storage plus a `(region, name)` → id index.
#[derive(Clone, Debug, Default)]
pub struct LocationCatalog {
    locations: Vec<Location>,
    by_key:    FxHashMap<LocationKey, LocationId>,
}

impl LocationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location unless its key is already present.
    ///
    /// Returns the id of the stored location and whether it was newly
    /// inserted.  A duplicate key is a no-op: the first coordinates win.
    /// Fails once the id space is exhausted.
    pub fn add(
        &mut self,
        region: impl Into<String>,
        name: impl Into<String>,
        pos: GeoPoint,
    ) -> TpResult<(LocationId, bool)> {
        let key = LocationKey::new(region, name);
        if let Some(&id) = self.by_key.get(&key) {
            return Ok((id, false));
        }
        let id = next_id(self.locations.len())?;
        self.by_key.insert(key.clone(), id);
        self.locations.push(Location { key, pos });
        Ok((id, true))
    }

    /// Resolve a key to its id.
    pub fn id_of(&self, key: &LocationKey) -> TpResult<LocationId> {
        self.by_key
            .get(key)
            .copied()
            .ok_or_else(|| TpError::LocationNotFound(key.clone()))
    }

    /// Stored attributes of `id`, failing for ids outside `[0, len)`.
    pub fn location(&self, id: LocationId) -> TpResult<&Location> {
        self.locations
            .get(id.index())
            .ok_or(TpError::LocationOutOfRange(id))
    }

    /// Case-insensitive substring match against `"name, region"`.
    ///
    /// Returns matching keys in insertion order; an empty `Vec` means no
    /// match.
    pub fn search(&self, query: &str) -> Vec<LocationKey> {
        let needle = query.to_lowercase();
        self.locations
            .iter()
            .filter(|loc| loc.key.to_string().to_lowercase().contains(&needle))
            .map(|loc| loc.key.clone())
            .collect()
    }

    /// All locations in insertion (= id) order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (LocationId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            // `add` keeps every index below `LocationId::INVALID`.
            .map(|(i, loc)| (LocationId(i as u32), loc))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Id for the location stored at position `len`.  `LocationId::INVALID` is
/// reserved, so the last usable id is one below it.
pub(crate) fn next_id(len: usize) -> TpResult<LocationId> {
    match LocationId::try_from(len) {
        Ok(id) if id != LocationId::INVALID => Ok(id),
        _ => Err(TpError::CatalogFull(len)),
    }
}
