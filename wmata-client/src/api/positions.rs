//! Live train position endpoints.
//!
//! The `/TrainPositions/*` endpoints report train locations in terms of
//! track circuits rather than stations; `standard_routes` and
//! `track_circuits` describe the circuit layout needed to interpret
//! `live_positions`.

use super::client::WmataClient;
use super::error::ApiError;
use super::types::{
    StandardRoute, StandardRoutesResponse, TrackCircuit, TrackCircuitsResponse, TrainPosition,
    TrainPositionsResponse,
};

impl WmataClient {
    /// Get live positions for all revenue trains.
    pub fn live_positions(&self) -> Result<Vec<TrainPosition>, ApiError> {
        self.get_json::<TrainPositionsResponse>(
            "/TrainPositions/TrainPositions",
            &[("contentType", "json".to_string())],
            "get live train positions",
        )
        .map(|r| r.train_positions)
    }

    /// Get the ordered track circuits for each line and track.
    pub fn standard_routes(&self) -> Result<Vec<StandardRoute>, ApiError> {
        self.get_json::<StandardRoutesResponse>(
            "/TrainPositions/StandardRoutes",
            &[("contentType", "json".to_string())],
            "get standard train routes",
        )
        .map(|r| r.standard_routes)
    }

    /// Get the full track circuit inventory with neighbor links.
    pub fn track_circuits(&self) -> Result<Vec<TrackCircuit>, ApiError> {
        self.get_json::<TrackCircuitsResponse>(
            "/TrainPositions/TrackCircuits",
            &[("contentType", "json".to_string())],
            "get track circuits",
        )
        .map(|r| r.track_circuits)
    }
}
