//! WMATA API client library.
//!
//! A thin client for the Washington Metropolitan Area Transit Authority
//! developer API: JSON endpoints for rail information, predictions and
//! live train positions, GTFS-realtime feeds for vehicle positions,
//! trip updates and service alerts, and a station name resolver backed
//! by the GTFS static stops table.

pub mod api;
pub mod domain;
pub mod gtfs;
pub mod planner;
