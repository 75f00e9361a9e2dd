//! Static GTFS archive download and extraction.
//!
//! The API publishes the full static schedule dataset as zip archives,
//! one for rail and one for bus. Rebuilding downloads both, saves them
//! to disk and extracts each into its own directory; the extracted rail
//! `stops.txt` is what the station resolver reads.

use std::fs;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::api::WmataClient;

use super::error::GtfsError;

/// The static schedule archives and their output directory names.
const ARCHIVES: [(&str, &str); 2] = [
    ("/gtfs/rail-gtfs-static.zip", "rail_gtfs_static"),
    ("/gtfs/bus-gtfs-static.zip", "bus_gtfs_static"),
];

/// Manages the locally extracted GTFS static dataset.
#[derive(Debug, Clone)]
pub struct StaticData {
    data_dir: PathBuf,
}

impl StaticData {
    /// Create a handle rooted at the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path to the extracted rail stops table.
    pub fn stops_path(&self) -> PathBuf {
        self.data_dir.join("rail_gtfs_static").join("stops.txt")
    }

    /// Download and extract the rail and bus static archives.
    ///
    /// Existing data is cleared first. A failure on one archive is
    /// logged and the other archive is still attempted; the first
    /// failure is returned.
    pub fn rebuild(&self, client: &WmataClient) -> Result<(), GtfsError> {
        if self.data_dir.is_dir() {
            tracing::debug!("clearing existing static data");
            fs::remove_dir_all(&self.data_dir)?;
        }
        fs::create_dir_all(&self.data_dir)?;

        let mut first_err = None;

        for (path, dir_name) in ARCHIVES {
            if let Err(e) = self.fetch_archive(client, path, dir_name) {
                tracing::warn!("error getting {dir_name} archive: {e}");
                first_err.get_or_insert(e);
            }
        }

        match first_err {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// Download one archive, save it next to its output directory and
    /// extract it.
    fn fetch_archive(
        &self,
        client: &WmataClient,
        path: &str,
        dir_name: &str,
    ) -> Result<(), GtfsError> {
        tracing::info!("downloading {dir_name} archive");
        let desc = format!("download {dir_name} archive");
        let bytes = client.get_bytes(path, &desc)?;

        let zip_path = self.data_dir.join(format!("{dir_name}.zip"));
        fs::write(&zip_path, &bytes)?;

        tracing::debug!("extracting {dir_name}");
        extract_archive(&zip_path, &self.data_dir.join(dir_name))?;

        tracing::debug!("{dir_name} complete");
        Ok(())
    }
}

/// Extract a zip archive into the given directory.
fn extract_archive(zip_path: &Path, out_dir: &Path) -> Result<(), GtfsError> {
    let file = fs::File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;
    archive.extract(out_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gtfs::StationDirectory;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        for (name, contents) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents.as_bytes()).unwrap();
        }

        writer.finish().unwrap();
    }

    #[test]
    fn extracts_archive_contents() {
        let dir = tempdir().unwrap();
        let zip_path = dir.path().join("rail.zip");
        write_zip(
            &zip_path,
            &[("stops.txt", "stop_id,stop_name\nSTN_A01,Metro Center\n")],
        );

        let out_dir = dir.path().join("rail_gtfs_static");
        extract_archive(&zip_path, &out_dir).unwrap();

        let contents = fs::read_to_string(out_dir.join("stops.txt")).unwrap();
        assert!(contents.contains("Metro Center"));
    }

    #[test]
    fn extracted_stops_feed_the_resolver() {
        let dir = tempdir().unwrap();
        let zip_path = dir.path().join("rail.zip");
        write_zip(
            &zip_path,
            &[("stops.txt", "stop_id,stop_name\nSTN_K08,Vienna\n")],
        );

        extract_archive(&zip_path, &dir.path().join("rail_gtfs_static")).unwrap();

        let directory = StationDirectory::from_data_dir(dir.path());
        assert_eq!(directory.resolve_code("Vienna").unwrap().as_str(), "K08");
    }

    #[test]
    fn extract_missing_archive_fails() {
        let dir = tempdir().unwrap();
        let result = extract_archive(&dir.path().join("absent.zip"), dir.path());
        assert!(matches!(result, Err(GtfsError::Io(_))));
    }

    #[test]
    fn stops_path_layout() {
        let data = StaticData::new("data");
        assert!(data.stops_path().ends_with("rail_gtfs_static/stops.txt"));
    }
}
