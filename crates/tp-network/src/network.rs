//! Route graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing edges are stored in **Compressed Sparse Row (CSR)** format.
//! Given a `LocationId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edges[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! Edges are grouped by source with a *stable* sort, so within one location
//! they keep the order in which they were added.  Iterating a location's
//! edges is a contiguous scan, which is what the router's inner loop wants.
//!
//! Several edges may join the same ordered pair, one per mode.

use tp_core::{EdgeId, Location, LocationId, ModeParams, TpResult, TransportMode};

use crate::LocationCatalog;

// ── DirectedEdge ──────────────────────────────────────────────────────────────

/// One directed, mode-tagged connection between two locations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedEdge {
    pub from:        LocationId,
    pub to:          LocationId,
    pub mode:        TransportMode,
    /// Great-circle length in kilometres.
    pub distance_km: f64,
    /// `distance_km / speed`, in hours.
    pub time_h:      f64,
    /// `distance_km × cost_per_km`.
    pub cost:        f64,
    /// Search-only bias; never reported.
    pub hop_penalty: f64,
}

impl DirectedEdge {
    /// Derive time, cost, and penalty for a `distance_km` edge from the
    /// mode's parameters.
    pub fn new(
        from: LocationId,
        to: LocationId,
        mode: TransportMode,
        distance_km: f64,
        params: &ModeParams,
    ) -> Self {
        Self {
            from,
            to,
            mode,
            distance_km,
            time_h: params.travel_time_h(distance_km),
            cost: params.cost(distance_km),
            hop_penalty: params.hop_penalty,
        }
    }

    /// Contribution of this edge to the search weight.
    #[inline]
    pub fn search_weight(&self) -> f64 {
        self.distance_km + self.hop_penalty
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// The catalog plus its directed edges in CSR form.
///
/// Do not construct directly; use [`RouteGraphBuilder`] or
/// [`RouteSynthesizer`](crate::RouteSynthesizer).
#[derive(Clone, Debug)]
pub struct RouteGraph {
    catalog: LocationCatalog,

    /// CSR row pointer.  Length = `location_count + 1`.
    out_start: Vec<u32>,

    /// Edges sorted (stably) by source, indexed by `EdgeId`.
    edges: Vec<DirectedEdge>,
}

impl RouteGraph {
    /// A graph over `catalog` with no edges.
    pub fn without_edges(catalog: LocationCatalog) -> Self {
        RouteGraphBuilder::new(catalog).build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn location(&self, id: LocationId) -> TpResult<&Location> {
        self.catalog.location(id)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `EdgeId`s of all outgoing edges of `loc`, in insertion order.
    ///
    /// # Panics
    /// Panics if `loc` is not a valid id for this graph.
    #[inline]
    pub fn out_edges(&self, loc: LocationId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.out_start[loc.index()] as usize;
        let end   = self.out_start[loc.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Outgoing edges of `loc` as a slice, in insertion order.
    ///
    /// # Panics
    /// Panics if `loc` is not a valid id for this graph.
    #[inline]
    pub fn edges_from(&self, loc: LocationId) -> &[DirectedEdge] {
        let start = self.out_start[loc.index()] as usize;
        let end   = self.out_start[loc.index() + 1] as usize;
        &self.edges[start..end]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &DirectedEdge {
        &self.edges[id.index()]
    }

    #[inline]
    pub fn out_degree(&self, loc: LocationId) -> usize {
        self.edges_from(loc).len()
    }

    /// All edges, grouped by source.
    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Collect directed edges over a finished catalog, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tp_core::{GeoPoint, ModeTable, TransportMode};
/// use tp_network::{DirectedEdge, LocationCatalog, RouteGraphBuilder};
///
/// let mut catalog = LocationCatalog::new();
/// let (a, _) = catalog.add("France", "Paris", GeoPoint::new(48.8566, 2.3522)).unwrap();
/// let (b, _) = catalog.add("Belgium", "Brussels", GeoPoint::new(50.8503, 4.3517)).unwrap();
///
/// let table = ModeTable::default();
/// let mut builder = RouteGraphBuilder::new(catalog);
/// builder.add_edge(DirectedEdge::new(a, b, TransportMode::Train, 264.0, table.get(TransportMode::Train)));
/// let graph = builder.build();
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.out_degree(b), 0);
/// ```
pub struct RouteGraphBuilder {
    catalog: LocationCatalog,
    edges:   Vec<DirectedEdge>,
}

impl RouteGraphBuilder {
    pub fn new(catalog: LocationCatalog) -> Self {
        Self { catalog, edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of edges.
    pub fn with_capacity(catalog: LocationCatalog, edges: usize) -> Self {
        Self { catalog, edges: Vec::with_capacity(edges) }
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Add a **directed** edge.  Both endpoints must already be in the
    /// catalog.
    pub fn add_edge(&mut self, edge: DirectedEdge) {
        debug_assert!(edge.from.index() < self.catalog.len(), "unknown source {}", edge.from);
        debug_assert!(edge.to.index() < self.catalog.len(), "unknown target {}", edge.to);
        self.edges.push(edge);
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and produce a [`RouteGraph`].
    ///
    /// O(E log E) for the stable sort plus O(N + E) for the row pointer.
    pub fn build(self) -> RouteGraph {
        let location_count = self.catalog.len();

        let mut edges = self.edges;
        edges.sort_by_key(|e| e.from);

        let mut out_start = vec![0u32; location_count + 1];
        for e in &edges {
            out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[location_count] as usize, edges.len());

        RouteGraph { catalog: self.catalog, out_start, edges }
    }
}
