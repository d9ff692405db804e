//! Route graph construction.

use std::collections::HashMap;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use rp_core::StationId;
use rp_model::{Line, Station};

/// Edge payload: the owning line (index into the input slice) and the
/// section distance. Kept tiny so the graph stays cheap to build per request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionEdge {
    pub line: usize,
    pub distance: u32,
}

/// A weighted, undirected multigraph over stations.
///
/// Vertices are the union of all stations across the input lines; each
/// section contributes one edge tagged with its owning line. Parallel edges
/// between the same station pair are allowed: two lines may connect the same
/// stations with different distances and surcharges.
///
/// The graph borrows nothing and shares nothing; build one per path
/// computation and let it drop afterwards.
#[derive(Debug)]
pub struct RouteGraph {
    pub(crate) graph: Graph<Station, SectionEdge, Undirected>,
    pub(crate) indices: HashMap<StationId, NodeIndex>,
}

impl RouteGraph {
    /// Build a graph from the given lines.
    ///
    /// Re-adding a station that another line already contributed is a no-op.
    /// An empty slice yields an empty graph; callers reject that upstream.
    pub fn build(lines: &[Line]) -> Self {
        let mut graph = Graph::new_undirected();
        let mut indices = HashMap::new();

        for (line_idx, line) in lines.iter().enumerate() {
            for station in line.stations() {
                indices
                    .entry(station.id())
                    .or_insert_with(|| graph.add_node(station));
            }
            for section in line.sections() {
                let up = indices[&section.up().id()];
                let down = indices[&section.down().id()];
                graph.add_edge(
                    up,
                    down,
                    SectionEdge {
                        line: line_idx,
                        distance: section.distance(),
                    },
                );
            }
        }

        Self { graph, indices }
    }

    /// Number of stations in the graph.
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of section edges in the graph (parallel edges counted).
    pub fn section_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the given station appears on any line.
    pub fn contains(&self, station: StationId) -> bool {
        self.indices.contains_key(&station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rp_core::Id;

    fn station(raw: u64, name: &str) -> Station {
        Station::new(Id::new(raw).unwrap(), name)
    }

    #[test]
    fn shared_stations_are_added_once() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");
        let lines = vec![
            Line::new("L1", "red", a.clone(), b.clone(), 10, 0).unwrap(),
            Line::new("L2", "green", b.clone(), c.clone(), 7, 0).unwrap(),
        ];

        let graph = RouteGraph::build(&lines);

        assert_eq!(graph.station_count(), 3);
        assert_eq!(graph.section_count(), 2);
        assert!(graph.contains(b.id()));
    }

    #[test]
    fn parallel_edges_are_kept() {
        let a = station(1, "A");
        let b = station(2, "B");
        let lines = vec![
            Line::new("L1", "red", a.clone(), b.clone(), 10, 0).unwrap(),
            Line::new("L2", "green", a.clone(), b.clone(), 4, 0).unwrap(),
        ];

        let graph = RouteGraph::build(&lines);

        assert_eq!(graph.station_count(), 2);
        assert_eq!(graph.section_count(), 2);
    }

    #[test]
    fn empty_lines_yield_empty_graph() {
        let graph = RouteGraph::build(&[]);
        assert_eq!(graph.station_count(), 0);
        assert_eq!(graph.section_count(), 0);
    }
}
