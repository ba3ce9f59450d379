//! Routing trait and the default constrained Dijkstra implementation.
//!
//! # Search weight vs. reported metrics
//!
//! The search minimizes `Σ (distance_km + hop_penalty)` over the path.  Cost
//! and time are *not* part of the objective; they are read off the winning
//! edges afterwards and summed into the [`PathResult`].  The hop penalty
//! makes each extra leg more expensive, most of all on ground modes.
//!
//! # Tie-breaking
//!
//! Each location carries a hop count next to its weight.  On an exact weight
//! tie the label with fewer hops wins, so among equal-weight routes the one
//! with the fewest transfers is returned.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::debug;

use tp_core::{EdgeId, LocationId, LocationKey, TpError, TpResult, TransportMode};

use crate::{PathResult, RouteGraph, RouteResult, Segment};

// ── ModeFilter ────────────────────────────────────────────────────────────────

/// Which edges a search may traverse.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ModeFilter {
    /// Every edge is eligible.
    #[default]
    Any,
    /// Only edges of this mode are eligible.
    Only(TransportMode),
}

impl ModeFilter {
    #[inline]
    pub fn admits(self, mode: TransportMode) -> bool {
        match self {
            ModeFilter::Any     => true,
            ModeFilter::Only(m) => m == mode,
        }
    }
}

impl From<Option<TransportMode>> for ModeFilter {
    fn from(mode: Option<TransportMode>) -> Self {
        mode.map_or(ModeFilter::Any, ModeFilter::Only)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-leg path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`.  The graph is shared read-only;
/// any per-query state must be allocated by the call itself.
pub trait Router: Send + Sync {
    /// Search from `start` to `end` over edges admitted by `filter`.
    ///
    /// "No route" is not an error: it returns an empty [`PathResult`], as
    /// does `start == end`.  Fails only for ids outside the graph.
    fn find_path(
        &self,
        graph: &RouteGraph,
        start: LocationId,
        end: LocationId,
        filter: ModeFilter,
    ) -> RouteResult<PathResult>;

    /// Like [`find_path`](Self::find_path), resolving both keys first.  An
    /// unknown key fails before any search work.
    fn find_path_between(
        &self,
        graph: &RouteGraph,
        start: &LocationKey,
        end: &LocationKey,
        filter: ModeFilter,
    ) -> RouteResult<PathResult> {
        let catalog = graph.catalog();
        let start = catalog.id_of(start)?;
        let end = catalog.id_of(end)?;
        self.find_path(graph, start, end, filter)
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Label-setting shortest path over `distance_km + hop_penalty`, with a
/// fewer-hops tie-break and optional single-mode enforcement.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn find_path(
        &self,
        graph: &RouteGraph,
        start: LocationId,
        end: LocationId,
        filter: ModeFilter,
    ) -> RouteResult<PathResult> {
        for id in [start, end] {
            if id.index() >= graph.location_count() {
                return Err(TpError::LocationOutOfRange(id).into());
            }
        }
        Ok(dijkstra(graph, start, end, filter)?)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Totally ordered search weight for the heap.  Weights are finite and
/// non-negative, so `total_cmp` agrees with `<`.
#[derive(Copy, Clone, PartialEq, Debug)]
struct Weight(f64);

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Per-query labels, indexed by `LocationId`.
struct Labels {
    weight:    Vec<f64>,
    hops:      Vec<u32>,
    /// Edge that reached each location; records predecessor and mode.
    prev_edge: Vec<EdgeId>,
}

impl Labels {
    fn new(n: usize, start: LocationId) -> Self {
        let mut labels = Self {
            weight:    vec![f64::INFINITY; n],
            hops:      vec![u32::MAX; n],
            prev_edge: vec![EdgeId::INVALID; n],
        };
        labels.weight[start.index()] = 0.0;
        labels.hops[start.index()] = 0;
        labels
    }
}

fn dijkstra(
    graph: &RouteGraph,
    start: LocationId,
    end: LocationId,
    filter: ModeFilter,
) -> TpResult<PathResult> {
    let mut labels = Labels::new(graph.location_count(), start);

    // Min-heap: (weight, location).  Reverse turns BinaryHeap (max) into a
    // min-heap; the LocationId breaks heap ties deterministically.
    let mut heap: BinaryHeap<Reverse<(Weight, LocationId)>> = BinaryHeap::new();
    heap.push(Reverse((Weight(0.0), start)));

    while let Some(Reverse((Weight(w), loc))) = heap.pop() {
        if loc == end {
            break;
        }

        // Skip stale heap entries.
        if w > labels.weight[loc.index()] {
            continue;
        }

        let hops = labels.hops[loc.index()] + 1;
        for edge_id in graph.out_edges(loc) {
            let edge = graph.edge(edge_id);
            if !filter.admits(edge.mode) {
                continue;
            }

            let v = edge.to.index();
            let candidate = w + edge.search_weight();
            let best = labels.weight[v];

            if candidate < best || (candidate == best && hops < labels.hops[v]) {
                labels.weight[v] = candidate;
                labels.hops[v] = hops;
                labels.prev_edge[v] = edge_id;
                heap.push(Reverse((Weight(candidate), edge.to)));
            }
        }
    }

    if labels.weight[end.index()].is_infinite() {
        debug!("no route from {start} to {end} ({filter:?})");
        return Ok(PathResult::empty());
    }

    let result = reconstruct(graph, &labels.prev_edge, end)?;
    debug!(
        "route {start} → {end} ({filter:?}): {} segments, weight {:.1}",
        result.len(),
        labels.weight[end.index()]
    );
    Ok(result)
}

fn reconstruct(graph: &RouteGraph, prev_edge: &[EdgeId], end: LocationId) -> TpResult<PathResult> {
    let mut edges = Vec::new();
    let mut cur = end;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = graph.edge(e).from;
    }
    edges.reverse();

    let mut result = PathResult::empty();
    for e in edges {
        let edge = graph.edge(e);
        result.push(Segment {
            from:        graph.location(edge.from)?.key.clone(),
            to:          graph.location(edge.to)?.key.clone(),
            mode:        edge.mode,
            cost:        edge.cost,
            time_h:      edge.time_h,
            distance_km: edge.distance_km,
        });
    }
    Ok(result)
}
