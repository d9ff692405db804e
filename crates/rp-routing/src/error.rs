//! Routing-specific error types.

use rp_core::StationId;
use thiserror::Error;

/// Errors that can occur during path search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// No path exists between the two stations. This also covers the case
    /// where either station is absent from every line in the graph.
    #[error("Stations {source_station} and {target} are not connected")]
    NotConnected {
        // Named `source_station` rather than `source` so thiserror does not
        // treat it as the error's source() and require StationId: Error.
        source_station: StationId,
        target: StationId,
    },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
