//! Station name and code resolution.
//!
//! Resolves free-text station names to three-character station codes
//! and back, by scanning the `stops.txt` table extracted from the rail
//! GTFS static archive.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::StationCode;

use super::error::GtfsError;

/// Identifier prefix marking station-level rows in stops.txt.
/// Platform and entrance rows carry other prefixes and are not
/// resolution candidates.
const STATION_PREFIX: &str = "STN_";

/// Similarity floor for the fuzzy fallback, out of 1.0.
const SIMILARITY_FLOOR: f64 = 0.2;

/// A stops.txt row. Only the columns the resolver needs.
#[derive(Debug, Clone, Deserialize)]
struct StopRow {
    stop_id: String,
    stop_name: String,
}

/// Station name lookup over the extracted rail stops table.
///
/// The table is re-read from disk on every call, so lookups always see
/// the most recently rebuilt data. At a few hundred station rows the
/// cost of a fresh read is negligible.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stops_path: PathBuf,
}

impl StationDirectory {
    /// Create a directory reading from the given stops.txt path.
    pub fn new(stops_path: impl Into<PathBuf>) -> Self {
        Self {
            stops_path: stops_path.into(),
        }
    }

    /// Create a directory over the layout produced by
    /// [`StaticData::rebuild`](super::StaticData::rebuild).
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(
            data_dir
                .as_ref()
                .join("rail_gtfs_static")
                .join("stops.txt"),
        )
    }

    /// Path to the stops table this directory reads.
    pub fn stops_path(&self) -> &Path {
        &self.stops_path
    }

    /// Resolve a station name to its three-character code.
    ///
    /// Matching is case-insensitive. If no name matches exactly, the
    /// closest name by normalized similarity is tried instead, provided
    /// it clears a low floor; an advisory is logged when that happens.
    pub fn resolve_code(&self, name: &str) -> Result<StationCode, GtfsError> {
        let stations = self.load_stations()?;

        // At most one fallback pass: the fuzzy candidate is drawn from
        // the table, so the second iteration always matches exactly.
        let mut query = name.to_lowercase();
        for _ in 0..2 {
            if let Some(row) = stations
                .iter()
                .find(|r| r.stop_name.to_lowercase() == query)
            {
                return station_code_of(row);
            }

            match closest_name(&query, &stations) {
                Some(candidate) => {
                    tracing::warn!("could not find station {name}, did you mean {candidate}?");
                    query = candidate;
                }
                None => break,
            }
        }

        tracing::error!("could not find station {name}");
        Err(GtfsError::UnknownStation(name.to_string()))
    }

    /// Resolve a station code to its display name.
    pub fn resolve_name(&self, code: &StationCode) -> Result<String, GtfsError> {
        let stations = self.load_stations()?;

        stations
            .into_iter()
            .find(|r| &r.stop_id[STATION_PREFIX.len()..] == code.as_str())
            .map(|r| r.stop_name)
            .ok_or(GtfsError::UnknownCode(*code))
    }

    /// Read the stops table, keeping station-level rows only.
    fn load_stations(&self) -> Result<Vec<StopRow>, GtfsError> {
        if !self.stops_path.exists() {
            return Err(GtfsError::MissingStops(self.stops_path.clone()));
        }

        let mut reader = csv::Reader::from_path(&self.stops_path)?;

        let mut stations = Vec::new();
        for row in reader.deserialize() {
            let row: StopRow = row?;
            if row.stop_id.starts_with(STATION_PREFIX) {
                stations.push(row);
            }
        }

        Ok(stations)
    }
}

/// The three-character station code is the final three characters of a
/// station-level stop_id (e.g. "STN_A01" -> "A01").
fn station_code_of(row: &StopRow) -> Result<StationCode, GtfsError> {
    let suffix = row
        .stop_id
        .get(row.stop_id.len().saturating_sub(3)..)
        .unwrap_or("");

    StationCode::parse(suffix).map_err(|_| GtfsError::MalformedStopId(row.stop_id.clone()))
}

/// The candidate display name most similar to `query`, if any clears
/// the similarity floor. Both sides are compared lowercased.
fn closest_name(query: &str, stations: &[StopRow]) -> Option<String> {
    stations
        .iter()
        .map(|r| {
            let name = r.stop_name.to_lowercase();
            let score = strsim::normalized_levenshtein(query, &name);
            (name, score)
        })
        .filter(|(_, score)| *score >= SIMILARITY_FLOOR)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const STOPS: &str = "\
stop_id,stop_name
STN_A01,Metro Center
STN_C02,McPherson Square
STN_K08,Vienna
PF_A01_C,Metro Center
ENT_C02_NW,McPherson Square Northwest Entrance
";

    fn directory_with_stops(dir: &tempfile::TempDir) -> StationDirectory {
        let path = dir.path().join("stops.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(STOPS.as_bytes()).unwrap();
        StationDirectory::new(path)
    }

    #[test]
    fn exact_match_any_case() {
        let dir = tempdir().unwrap();
        let directory = directory_with_stops(&dir);

        for name in ["Metro Center", "metro center", "METRO CENTER"] {
            let code = directory.resolve_code(name).unwrap();
            assert_eq!(code.as_str(), "A01", "resolving {name:?}");
        }
    }

    #[test]
    fn platform_and_entrance_rows_are_not_candidates() {
        let dir = tempdir().unwrap();
        let directory = directory_with_stops(&dir);

        // A PF_ row shares the name "Metro Center"; only the STN_ row
        // may supply the code.
        let code = directory.resolve_code("Metro Center").unwrap();
        assert_eq!(code.as_str(), "A01");
    }

    #[test]
    fn fuzzy_fallback_finds_closest_name() {
        let dir = tempdir().unwrap();
        let directory = directory_with_stops(&dir);

        let code = directory.resolve_code("Mcpherson").unwrap();
        assert_eq!(code.as_str(), "C02");
    }

    #[test]
    fn fuzzy_floor_rejects_distant_names() {
        let dir = tempdir().unwrap();
        let directory = directory_with_stops(&dir);

        let err = directory.resolve_code("zzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
        assert!(matches!(err, GtfsError::UnknownStation(_)));
    }

    #[test]
    fn resolve_name_by_code() {
        let dir = tempdir().unwrap();
        let directory = directory_with_stops(&dir);

        let code = StationCode::parse("C02").unwrap();
        assert_eq!(directory.resolve_name(&code).unwrap(), "McPherson Square");
    }

    #[test]
    fn unknown_code_is_an_error() {
        let dir = tempdir().unwrap();
        let directory = directory_with_stops(&dir);

        let code = StationCode::parse("Z99").unwrap();
        let err = directory.resolve_name(&code).unwrap_err();
        assert!(matches!(err, GtfsError::UnknownCode(_)));
    }

    #[test]
    fn missing_stops_file_is_an_error_in_both_directions() {
        let dir = tempdir().unwrap();
        let directory = StationDirectory::new(dir.path().join("absent.txt"));

        assert!(matches!(
            directory.resolve_code("Metro Center"),
            Err(GtfsError::MissingStops(_))
        ));

        let code = StationCode::parse("A01").unwrap();
        assert!(matches!(
            directory.resolve_name(&code),
            Err(GtfsError::MissingStops(_))
        ));
    }

    #[test]
    fn round_trip_every_station() {
        let dir = tempdir().unwrap();
        let directory = directory_with_stops(&dir);

        for (code, name) in [("A01", "Metro Center"), ("C02", "McPherson Square"), ("K08", "Vienna")] {
            let resolved = directory.resolve_code(name).unwrap();
            assert_eq!(resolved.as_str(), code);
            assert_eq!(directory.resolve_name(&resolved).unwrap(), name);
        }
    }

    #[test]
    fn from_data_dir_layout() {
        let directory = StationDirectory::from_data_dir("data");
        assert!(
            directory
                .stops_path()
                .ends_with("rail_gtfs_static/stops.txt")
        );
    }
}
