//! WMATA API response DTOs.
//!
//! These types map directly to the WMATA JSON API responses. They use
//! `Option` liberally because the API sends null or omits fields for
//! many optional values, and keeps numbers-as-strings where the API
//! does (notably the prediction `Min` field, which can be "ARR", "BRD"
//! or a minute count).

use serde::Deserialize;

/// Response from `/Rail.svc/json/jLines`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinesResponse {
    pub lines: Vec<Line>,
}

/// A Metrorail line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Line {
    /// Two-letter line code (e.g. "RD").
    pub line_code: String,

    /// Full line name (e.g. "Red").
    pub display_name: String,

    /// Station code of one terminus.
    pub start_station_code: String,

    /// Station code of the other terminus.
    pub end_station_code: String,

    /// Intermediate terminal for short-turn services, if any.
    pub internal_destination1: Option<String>,

    /// Second intermediate terminal, if any.
    pub internal_destination2: Option<String>,
}

/// Response from `/Rail.svc/json/jStationParking`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationParkingResponse {
    pub stations_parking: Vec<StationParking>,
}

/// Parking availability at one station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationParking {
    /// Station code.
    pub code: String,

    /// Free-form notes about the lot.
    pub notes: Option<String>,

    pub all_day_parking: Option<AllDayParking>,

    pub short_term_parking: Option<ShortTermParking>,
}

/// All-day (commuter) parking details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllDayParking {
    pub total_count: Option<u32>,
    pub rider_cost: Option<f64>,
    pub non_rider_cost: Option<f64>,
    pub saturday_rider_cost: Option<f64>,
    pub saturday_non_rider_cost: Option<f64>,
}

/// Short-term (kiss and ride) parking details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShortTermParking {
    pub total_count: Option<u32>,
    pub notes: Option<String>,
}

/// Response from `/Rail.svc/json/jPath`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathResponse {
    pub path: Vec<PathItem>,
}

/// One station along a path between two stations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathItem {
    /// Line the path segment belongs to.
    pub line_code: String,

    /// Station code at this step.
    pub station_code: String,

    /// Display name of the station.
    pub station_name: String,

    /// Ordinal position along the path.
    pub seq_num: u32,

    /// Distance to the previous station, in feet.
    pub distance_to_prev: Option<u32>,
}

/// Response from `/Rail.svc/json/jStationEntrances`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntrancesResponse {
    pub entrances: Vec<StationEntrance>,
}

/// A street-level station entrance.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationEntrance {
    #[serde(rename = "ID")]
    pub id: Option<String>,

    pub name: String,

    /// Code of the station this entrance serves.
    pub station_code1: String,

    /// Second station code, for transfer stations.
    pub station_code2: Option<String>,

    pub description: Option<String>,

    pub lat: f64,
    pub lon: f64,
}

/// A Metrorail station, from `/Rail.svc/json/jStationInfo` (as the
/// whole response body) or `/Rail.svc/json/jStations` (as a list item).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailStation {
    /// Station code.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Code of the co-located station at transfer stations
    /// (e.g. Metro Center is both A01 and C01).
    pub station_together1: Option<String>,

    pub station_together2: Option<String>,

    pub line_code1: Option<String>,
    pub line_code2: Option<String>,
    pub line_code3: Option<String>,
    pub line_code4: Option<String>,

    pub lat: f64,
    pub lon: f64,

    pub address: Option<StationAddress>,
}

/// Street address of a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

/// Response from `/Rail.svc/json/jStations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationsResponse {
    pub stations: Vec<RailStation>,
}

/// Response from `/Rail.svc/json/jStationTimes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationTimesResponse {
    pub station_times: Vec<StationTime>,
}

/// Opening and first/last train times for one station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationTime {
    pub code: String,
    pub station_name: String,
    pub monday: Option<DaySchedule>,
    pub tuesday: Option<DaySchedule>,
    pub wednesday: Option<DaySchedule>,
    pub thursday: Option<DaySchedule>,
    pub friday: Option<DaySchedule>,
    pub saturday: Option<DaySchedule>,
    pub sunday: Option<DaySchedule>,
}

/// One day's schedule at a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DaySchedule {
    /// Station opening time, "HH:mm".
    pub opening_time: Option<String>,

    pub first_trains: Option<Vec<TrainTime>>,

    pub last_trains: Option<Vec<TrainTime>>,
}

/// A first/last train departure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainTime {
    /// Departure time, "HH:mm".
    pub time: String,

    /// Destination station code.
    pub destination_station: String,
}

/// Response from `/Rail.svc/json/jSrcStationToDstStationInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationToStationResponse {
    pub station_to_station_infos: Vec<StationToStationInfo>,
}

/// Distance, fare and travel time between two stations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationToStationInfo {
    pub source_station: String,

    pub destination_station: String,

    /// Track distance in miles.
    pub composite_miles: Option<f64>,

    /// Scheduled travel time in minutes.
    pub rail_time: u32,

    pub rail_fare: Option<RailFare>,
}

/// Fare between two stations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailFare {
    pub peak_time: Option<f64>,
    pub off_peak_time: Option<f64>,
    pub senior_disabled: Option<f64>,
}

/// Response from `/StationPrediction.svc/json/GetPrediction/{codes}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionsResponse {
    pub trains: Vec<TrainPrediction>,
}

/// A real-time next-train prediction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainPrediction {
    /// Number of cars ("6", "8"), sometimes null.
    pub car: Option<String>,

    /// Abbreviated destination name.
    pub destination: Option<String>,

    /// Destination station code.
    pub destination_code: Option<String>,

    /// Full destination name.
    pub destination_name: Option<String>,

    /// Track group ("1" or "2").
    pub group: Option<String>,

    /// Line code of the arriving train.
    pub line: Option<String>,

    /// Station code the prediction is for.
    pub location_code: String,

    /// Station name the prediction is for.
    pub location_name: Option<String>,

    /// Minutes until arrival: a number as a string, or "ARR", "BRD".
    pub min: Option<String>,
}

impl TrainPrediction {
    /// Minutes until arrival, if the prediction carries a numeric value.
    ///
    /// Trains that are arriving ("ARR") or boarding ("BRD") have no
    /// usable minute count and return `None`.
    pub fn minutes(&self) -> Option<f64> {
        self.min.as_deref().and_then(|m| m.parse().ok())
    }
}

/// Response from `/TrainPositions/TrainPositions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainPositionsResponse {
    pub train_positions: Vec<TrainPosition>,
}

/// Live position of one train, by track circuit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainPosition {
    pub train_id: String,
    pub train_number: Option<String>,
    pub car_count: Option<u32>,
    pub direction_num: Option<u32>,
    pub circuit_id: u32,
    pub destination_station_code: Option<String>,
    pub line_code: Option<String>,
    pub seconds_at_location: Option<u32>,
    pub service_type: Option<String>,
}

/// Response from `/TrainPositions/StandardRoutes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardRoutesResponse {
    pub standard_routes: Vec<StandardRoute>,
}

/// Ordered track circuits for one line and track.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardRoute {
    pub line_code: String,
    pub track_num: u32,
    pub track_circuits: Vec<RouteCircuit>,
}

/// One circuit along a standard route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteCircuit {
    pub seq_num: u32,
    pub circuit_id: u32,
    /// Station code if the circuit is at a platform.
    pub station_code: Option<String>,
}

/// Response from `/TrainPositions/TrackCircuits`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackCircuitsResponse {
    pub track_circuits: Vec<TrackCircuit>,
}

/// A track circuit and its neighbors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackCircuit {
    pub track: u32,
    pub circuit_id: u32,
    pub neighbors: Vec<CircuitNeighbor>,
}

/// Adjacency record for a track circuit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CircuitNeighbor {
    /// "Left" or "Right".
    pub neighbor_type: String,
    pub circuit_ids: Vec<u32>,
}
