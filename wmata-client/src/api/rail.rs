//! Rail system information endpoints.
//!
//! Wrappers over the `/Rail.svc/json/*` endpoints: lines, stations,
//! parking, paths, entrances, timings and station-to-station info.

use crate::domain::{LineCode, StationCode};

use super::client::WmataClient;
use super::error::ApiError;
use super::types::{
    EntrancesResponse, Line, LinesResponse, PathItem, PathResponse, RailStation,
    StationEntrance, StationParking, StationParkingResponse, StationTime, StationTimesResponse,
    StationToStationInfo, StationToStationResponse, StationsResponse,
};

/// Geographic search area for the station entrance lookup.
#[derive(Debug, Clone, Copy)]
pub struct SearchArea {
    pub lat: f64,
    pub lon: f64,
    /// Search radius in meters.
    pub radius_m: f64,
}

impl WmataClient {
    /// Get all Metrorail lines.
    pub fn lines(&self) -> Result<Vec<Line>, ApiError> {
        self.get_json::<LinesResponse>("/Rail.svc/json/jLines", &[], "get rail lines")
            .map(|r| r.lines)
    }

    /// Get parking information, optionally filtered to one station.
    pub fn station_parking(
        &self,
        station: Option<&StationCode>,
    ) -> Result<Vec<StationParking>, ApiError> {
        let params = match station {
            Some(code) => vec![("StationCode", code.as_str().to_string())],
            None => Vec::new(),
        };

        self.get_json::<StationParkingResponse>(
            "/Rail.svc/json/jStationParking",
            &params,
            "get station parking",
        )
        .map(|r| r.stations_parking)
    }

    /// Get the ordered set of stations between two stations.
    ///
    /// The two stations must be on the same line.
    pub fn path_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<Vec<PathItem>, ApiError> {
        let params = vec![
            ("FromStationCode", from.as_str().to_string()),
            ("ToStationCode", to.as_str().to_string()),
        ];

        self.get_json::<PathResponse>(
            "/Rail.svc/json/jPath",
            &params,
            "get path between stations",
        )
        .map(|r| r.path)
    }

    /// Get station entrances, optionally near a point.
    ///
    /// With no search area, or one with a zero radius, all entrances in
    /// the system are returned.
    pub fn station_entrances(
        &self,
        area: Option<SearchArea>,
    ) -> Result<Vec<StationEntrance>, ApiError> {
        let params = match area {
            None => {
                tracing::info!("lat/lon not specified, getting all station entrances");
                Vec::new()
            }
            Some(a) if a.radius_m == 0.0 => {
                tracing::warn!("lat/lon specified but radius is zero, getting all station entrances");
                Vec::new()
            }
            Some(a) => {
                tracing::info!(
                    "getting station entrances near {}, {} radius {}m",
                    a.lat,
                    a.lon,
                    a.radius_m
                );
                vec![
                    ("Lat", a.lat.to_string()),
                    ("Lon", a.lon.to_string()),
                    ("Radius", a.radius_m.to_string()),
                ]
            }
        };

        self.get_json::<EntrancesResponse>(
            "/Rail.svc/json/jStationEntrances",
            &params,
            "get nearby station entrances",
        )
        .map(|r| r.entrances)
    }

    /// Get information for one station.
    pub fn station_info(&self, station: &StationCode) -> Result<RailStation, ApiError> {
        let params = vec![("StationCode", station.as_str().to_string())];

        self.get_json("/Rail.svc/json/jStationInfo", &params, "get station info")
    }

    /// Get the station list, optionally filtered to one line.
    pub fn stations(&self, line: Option<&LineCode>) -> Result<Vec<RailStation>, ApiError> {
        let params = match line {
            Some(code) => vec![("LineCode", code.as_str().to_string())],
            None => Vec::new(),
        };

        self.get_json::<StationsResponse>(
            "/Rail.svc/json/jStations",
            &params,
            "get stations list for rail line",
        )
        .map(|r| r.stations)
    }

    /// Get opening and first/last train times, optionally for one station.
    pub fn station_times(
        &self,
        station: Option<&StationCode>,
    ) -> Result<Vec<StationTime>, ApiError> {
        let params = match station {
            Some(code) => vec![("StationCode", code.as_str().to_string())],
            None => Vec::new(),
        };

        self.get_json::<StationTimesResponse>(
            "/Rail.svc/json/jStationTimes",
            &params,
            "get station timing info",
        )
        .map(|r| r.station_times)
    }

    /// Get distance, fare and travel time between two stations.
    ///
    /// If either station is omitted the API returns information for all
    /// station pairs, which is a large response.
    pub fn station_to_station(
        &self,
        from: Option<&StationCode>,
        to: Option<&StationCode>,
    ) -> Result<Vec<StationToStationInfo>, ApiError> {
        let params = match (from, to) {
            (Some(f), Some(t)) => vec![
                ("FromStationCode", f.as_str().to_string()),
                ("ToStationCode", t.as_str().to_string()),
            ],
            (Some(_), None) => {
                tracing::error!("destination station not specified, getting all station pair info");
                Vec::new()
            }
            _ => Vec::new(),
        };

        self.get_json::<StationToStationResponse>(
            "/Rail.svc/json/jSrcStationToDstStationInfo",
            &params,
            "get station to station info",
        )
        .map(|r| r.station_to_station_infos)
    }
}
