//! Shortest-path search over the route graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use rp_core::StationId;
use rp_model::Station;

use crate::error::{RoutingError, RoutingResult};
use crate::graph::RouteGraph;

/// One traversed edge of a shortest path: which input line it belongs to
/// (index into the slice the graph was built from) and its distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversedEdge {
    pub line: usize,
    pub distance: u32,
}

/// Result of a successful shortest-path search.
///
/// `stations` runs from source to target inclusive; `edges` holds one entry
/// per consecutive station pair, in the same order, and their distances sum
/// to `total_distance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub stations: Vec<Station>,
    pub edges: Vec<TraversedEdge>,
    pub total_distance: u32,
}

impl RouteGraph {
    /// Find the minimum-distance path between two stations.
    ///
    /// Classic Dijkstra with a binary-heap frontier. All weights are positive
    /// integers, so no negative-weight handling is needed. Ties between
    /// equal-distance paths are broken by relaxation order; the engine does
    /// not promise which minimum-distance path is returned.
    ///
    /// The predecessor edge is recorded at every relaxation so the owning
    /// line of each traversed segment can be recovered from the result.
    pub fn shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> RoutingResult<ShortestPath> {
        let not_connected = RoutingError::NotConnected {
            source_station: source,
            target,
        };

        let (src, dst) = match (self.indices.get(&source), self.indices.get(&target)) {
            (Some(&src), Some(&dst)) => (src, dst),
            _ => return Err(not_connected),
        };

        let node_count = self.graph.node_count();
        let mut dist: Vec<Option<u32>> = vec![None; node_count];
        let mut prev: Vec<Option<(NodeIndex, EdgeIndex)>> = vec![None; node_count];
        let mut frontier = BinaryHeap::new();

        dist[src.index()] = Some(0);
        frontier.push(Reverse((0u32, src)));

        while let Some(Reverse((d, node))) = frontier.pop() {
            if dist[node.index()] != Some(d) {
                // Stale heap entry; the node was already settled closer.
                continue;
            }
            if node == dst {
                break;
            }
            for edge in self.graph.edges(node) {
                let next = edge.target();
                let next_dist = d + edge.weight().distance;
                if dist[next.index()].map_or(true, |cur| next_dist < cur) {
                    dist[next.index()] = Some(next_dist);
                    prev[next.index()] = Some((node, edge.id()));
                    frontier.push(Reverse((next_dist, next)));
                }
            }
        }

        let total_distance = dist[dst.index()].ok_or(not_connected)?;
        Ok(self.reconstruct(src, dst, total_distance, &prev))
    }

    /// Walk the predecessor chain backwards from target to source.
    fn reconstruct(
        &self,
        src: NodeIndex,
        dst: NodeIndex,
        total_distance: u32,
        prev: &[Option<(NodeIndex, EdgeIndex)>],
    ) -> ShortestPath {
        let mut stations = vec![self.graph[dst].clone()];
        let mut edges = Vec::new();

        let mut current = dst;
        while current != src {
            let (parent, edge) =
                prev[current.index()].expect("settled node has a predecessor");
            let payload = &self.graph[edge];
            edges.push(TraversedEdge {
                line: payload.line,
                distance: payload.distance,
            });
            stations.push(self.graph[parent].clone());
            current = parent;
        }

        stations.reverse();
        edges.reverse();

        ShortestPath {
            stations,
            edges,
            total_distance,
        }
    }
}
