//! Real-time next-train prediction endpoint.

use crate::domain::StationCode;

use super::client::WmataClient;
use super::error::ApiError;
use super::types::{PredictionsResponse, TrainPrediction};

impl WmataClient {
    /// Get next-train predictions for a station, or for every station.
    ///
    /// Unlike the other rail endpoints, the station code is a path
    /// segment here, with the literal segment "All" meaning the whole
    /// system.
    pub fn next_trains(
        &self,
        station: Option<&StationCode>,
    ) -> Result<Vec<TrainPrediction>, ApiError> {
        let code = station.map(StationCode::as_str).unwrap_or("All");
        let path = format!("/StationPrediction.svc/json/GetPrediction/{code}");

        self.get_json::<PredictionsResponse>(&path, &[], "get real time next train predictions")
            .map(|r| r.trains)
    }
}
