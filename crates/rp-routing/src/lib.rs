//! rp-routing: transient route graph and shortest-path search for railpath.
//!
//! Provides:
//! - `RouteGraph`: an undirected weighted multigraph built from a set of lines
//! - `shortest_path`: Dijkstra search that keeps the traversed edge list so
//!   the owning line of every segment can be recovered afterwards
//!
//! The graph is a per-request value: build it, search it, drop it. Nothing in
//! this crate holds shared mutable state.

pub mod dijkstra;
pub mod error;
pub mod graph;

// Re-exports for ergonomics
pub use dijkstra::{ShortestPath, TraversedEdge};
pub use error::{RoutingError, RoutingResult};
pub use graph::RouteGraph;
