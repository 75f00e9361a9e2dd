//! Trip-planning convenience.
//!
//! Composes the station-to-station and next-train endpoints into a
//! list of upcoming departures with expected trip durations and
//! arrival times.

use chrono::{DateTime, Duration, Local};

use crate::api::{ApiError, WmataClient};
use crate::domain::StationCode;

/// Errors from the trip planner.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// An underlying API call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The API returned no station-to-station info for the pair
    #[error("no station-to-station info for {from} -> {to}")]
    NoRouteInfo { from: StationCode, to: StationCode },
}

/// An upcoming departure with its expected arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    /// Expected departure time from the origin station.
    pub departs_at: DateTime<Local>,

    /// Scheduled travel time in minutes.
    pub duration_min: i64,

    /// Expected arrival time at the destination station.
    pub arrives_at: DateTime<Local>,
}

/// Get the next departures from one station towards another.
///
/// Fetches the scheduled travel time for the pair, then turns the next
/// train predictions at the origin into concrete departure and arrival
/// instants. Predictions without a numeric minute count (trains already
/// arriving or boarding) are skipped.
pub fn next_departures(
    client: &WmataClient,
    from: &StationCode,
    to: &StationCode,
    max_trips: usize,
) -> Result<Vec<Departure>, PlannerError> {
    let now = Local::now();

    let infos = client.station_to_station(Some(from), Some(to))?;
    let info = infos.first().ok_or(PlannerError::NoRouteInfo {
        from: *from,
        to: *to,
    })?;

    let trains = client.next_trains(Some(from))?;
    let offsets: Vec<f64> = trains.iter().filter_map(|t| t.minutes()).collect();

    Ok(build_departures(now, info.rail_time, &offsets, max_trips))
}

/// Turn minute offsets from `now` into departures.
fn build_departures(
    now: DateTime<Local>,
    rail_time_min: u32,
    minute_offsets: &[f64],
    max_trips: usize,
) -> Vec<Departure> {
    let duration = Duration::minutes(i64::from(rail_time_min));

    minute_offsets
        .iter()
        .take(max_trips)
        .map(|&min| {
            let departs_at = now + Duration::seconds((min * 60.0) as i64);
            Departure {
                departs_at,
                duration_min: i64::from(rail_time_min),
                arrives_at: departs_at + duration,
            }
        })
        .collect()
}
