//! GTFS-realtime feed endpoints.
//!
//! WMATA publishes vehicle positions, trip updates and service alerts
//! as GTFS-realtime protobuf feeds. These wrappers decode the binary
//! body into the `gtfs-realtime` crate's `FeedMessage`.

use gtfs_realtime::FeedMessage;
use prost::Message;

use super::client::WmataClient;
use super::error::ApiError;

/// Decode a GTFS-realtime protobuf body.
pub fn decode_feed(bytes: &[u8]) -> Result<FeedMessage, ApiError> {
    FeedMessage::decode(bytes).map_err(|e| ApiError::Decode {
        message: e.to_string(),
    })
}

impl WmataClient {
    /// Get the rail vehicle positions feed.
    pub fn rail_vehicle_positions(&self) -> Result<FeedMessage, ApiError> {
        self.get_feed(
            "/gtfs/rail-gtfsrt-vehiclepositions.pb",
            "get rail vehicle positions",
        )
    }

    /// Get the rail trip updates feed.
    pub fn rail_trip_updates(&self) -> Result<FeedMessage, ApiError> {
        self.get_feed("/gtfs/rail-gtfsrt-tripupdates.pb", "get rail trip updates")
    }

    /// Get the rail service alerts feed.
    pub fn rail_alerts(&self) -> Result<FeedMessage, ApiError> {
        self.get_feed("/gtfs/rail-gtfsrt-alerts.pb", "get rail alerts")
    }

    /// Get the bus service alerts feed.
    pub fn bus_alerts(&self) -> Result<FeedMessage, ApiError> {
        self.get_feed("/gtfs/bus-gtfsrt-alerts.pb", "get bus alerts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_valid_feed() {
        let mut feed = FeedMessage::default();
        feed.header.gtfs_realtime_version = "2.0".to_string();
        feed.header.timestamp = Some(1_700_000_000);

        let bytes = feed.encode_to_vec();

        let decoded = decode_feed(&bytes).unwrap();
        assert_eq!(decoded.header.gtfs_realtime_version, "2.0");
        assert_eq!(decoded.header.timestamp, Some(1_700_000_000));
        assert!(decoded.entity.is_empty());
    }

    #[test]
    fn decode_garbage_fails() {
        let err = decode_feed(&[0xff, 0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
