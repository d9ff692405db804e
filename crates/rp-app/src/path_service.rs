//! Path orchestration: validate inputs, build the graph, search, price.

use rp_fare::{calculate_fare, AgeGroup};
use rp_model::{Line, Station};
use rp_routing::{RouteGraph, ShortestPath};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Final answer for a path request: the stations in travel order, the total
/// distance, and the discounted fare.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PathResult {
    pub stations: Vec<Station>,
    pub distance: u32,
    pub fare: u32,
}

/// Compute the shortest path between two stations and price it.
///
/// Fails fast before any graph work: an empty line set and identical
/// endpoints are rejected up front. The route graph is a local value built
/// for this call alone, so concurrent requests never share state.
pub fn compute_path(
    lines: &[Line],
    source: &Station,
    target: &Station,
    rider_age: u32,
) -> AppResult<PathResult> {
    if lines.is_empty() {
        return Err(AppError::NoLinesAvailable);
    }
    if source == target {
        return Err(AppError::SameSourceAndTarget {
            station: source.name().to_string(),
        });
    }

    let graph = RouteGraph::build(lines);
    let path = graph.shortest_path(source.id(), target.id())?;

    let traversed = lines_on_path(lines, &path);
    let undiscounted = calculate_fare(traversed, path.total_distance);
    let fare = AgeGroup::of(rider_age).apply_discount(undiscounted);

    debug!(
        source = source.name(),
        target = target.name(),
        distance = path.total_distance,
        undiscounted,
        fare,
        "computed shortest path"
    );

    Ok(PathResult {
        stations: path.stations,
        distance: path.total_distance,
        fare,
    })
}

/// Distinct lines traversed by the path, in first-traversal order.
fn lines_on_path<'a>(lines: &'a [Line], path: &ShortestPath) -> Vec<&'a Line> {
    let mut seen: Vec<usize> = Vec::new();
    for edge in &path.edges {
        if !seen.contains(&edge.line) {
            seen.push(edge.line);
        }
    }
    seen.into_iter().map(|idx| &lines[idx]).collect()
}
