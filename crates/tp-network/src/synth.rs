//! Edge synthesis from the location set.
//!
//! There is no real network topology: every ordered pair of distinct
//! locations is classified by its great-circle distance and receives the
//! mode-tagged edges the [`SynthesisRule`] allows.  O(n²) in locations,
//! deterministic for a given catalog order.

use log::info;

use tp_core::{ModeTable, PlannerConfig, SynthesisRule};

use crate::{DirectedEdge, LocationCatalog, RouteGraph, RouteGraphBuilder};

/// Generates the route graph from a catalog and an injected configuration.
#[derive(Clone, Debug, Default)]
pub struct RouteSynthesizer {
    config: PlannerConfig,
}

impl RouteSynthesizer {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Every edge for `catalog`, grouped by source in id order and, within
    /// one pair, in the rule's mode order.
    pub fn synthesize_edges(&self, catalog: &LocationCatalog) -> Vec<DirectedEdge> {
        let modes: &ModeTable = &self.config.modes;
        let rule: &SynthesisRule = &self.config.synthesis;

        let mut edges = Vec::new();
        for (i, from) in catalog.iter() {
            for (j, to) in catalog.iter() {
                if i == j {
                    continue;
                }
                let distance_km = from.distance_km(to);
                for &mode in rule.modes_for(distance_km) {
                    edges.push(DirectedEdge::new(i, j, mode, distance_km, modes.get(mode)));
                }
            }
        }
        edges
    }

    /// Consume `catalog` and build the complete graph over it.
    pub fn synthesize(&self, catalog: LocationCatalog) -> RouteGraph {
        let edges = self.synthesize_edges(&catalog);
        let mut builder = RouteGraphBuilder::with_capacity(catalog, edges.len());
        for edge in edges {
            builder.add_edge(edge);
        }
        let graph = builder.build();
        info!(
            "synthesized {} edges over {} locations",
            graph.edge_count(),
            graph.location_count()
        );
        graph
    }
}
