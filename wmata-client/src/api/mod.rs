//! WMATA API client.
//!
//! This module provides an HTTP client for the WMATA developer API.
//! Every wrapper builds query parameters, performs one synchronous GET
//! against `api.wmata.com` with the API key header attached, and
//! decodes one response (JSON, or GTFS-realtime protobuf for the feed
//! endpoints).

mod client;
mod error;
mod positions;
mod predictions;
mod rail;
mod realtime;
mod types;

pub use client::{WmataClient, WmataConfig};
pub use error::ApiError;
pub use gtfs_realtime::FeedMessage;
pub use rail::SearchArea;
pub use realtime::decode_feed;
pub use types::{
    AllDayParking, CircuitNeighbor, DaySchedule, Line, PathItem, RailFare, RailStation,
    RouteCircuit, ShortTermParking, StandardRoute, StationAddress, StationEntrance,
    StationParking, StationTime, StationToStationInfo, TrackCircuit, TrainPosition,
    TrainPrediction, TrainTime,
};
