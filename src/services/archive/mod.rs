//! Dataset acquisition: download the GeoLite2 CSV archive once, extract it,
//! and find the extracted directory on later runs.

mod download;
mod extract;

pub use download::{Downloader, HttpDownloader};
pub use extract::extract_zip;

use crate::types::{GenError, GenResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary archive name inside the data directory.
const ARCHIVE_FILE: &str = "csv.zip";

/// Make the dataset available under `dest` and return the directory that
/// holds the CSV files.
///
/// A missing `dest` is created and populated from `url`. An existing `dest`
/// is trusted as-is. Either way the result is the single subdirectory of
/// `dest` starting with `dir_prefix`.
pub fn acquire(
    dest: &Path,
    url: &str,
    dir_prefix: &str,
    downloader: &dyn Downloader,
) -> GenResult<PathBuf> {
    if dest.exists() {
        log::info!("{} already exists, skipping download", dest.display());
        return find_extracted_dir(dest, dir_prefix);
    }

    fs::create_dir_all(dest).map_err(|e| GenError::io(format!("create {}", dest.display()), e))?;

    match download_and_extract(dest, url, dir_prefix, downloader) {
        Ok(dir) => Ok(dir),
        Err(e) => {
            // A half-populated data dir would be taken as complete next run
            if let Err(cleanup) = fs::remove_dir_all(dest) {
                log::warn!("Failed to clean up {}: {cleanup}", dest.display());
            }
            Err(e)
        }
    }
}

// The data dir is resolved by prefix, exactly as on a later run against
// the existing `dest`.
fn download_and_extract(
    dest: &Path,
    url: &str,
    dir_prefix: &str,
    downloader: &dyn Downloader,
) -> GenResult<PathBuf> {
    let archive_path = dest.join(ARCHIVE_FILE);
    downloader.download(url, &archive_path)?;

    log::info!("Extracting...");
    let extracted = extract_zip(&archive_path, dest)?;

    fs::remove_file(&archive_path)
        .map_err(|e| GenError::io(format!("remove {}", archive_path.display()), e))?;

    let data_dir = find_extracted_dir(dest, dir_prefix)?;
    if data_dir != extracted {
        log::debug!(
            "Archive top-level dir {} differs from data dir {}",
            extracted.display(),
            data_dir.display()
        );
    }
    Ok(data_dir)
}

/// Find the one subdirectory of `dir` whose name starts with `prefix`.
///
/// Archives are named by release date (`GeoLite2-City-CSV_20190219`), so
/// the exact name is not known up front. Zero or several matches is an error.
pub fn find_extracted_dir(dir: &Path, prefix: &str) -> GenResult<PathBuf> {
    let entries =
        fs::read_dir(dir).map_err(|e| GenError::io(format!("read {}", dir.display()), e))?;

    let mut candidates: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GenError::io(format!("read {}", dir.display()), e))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let name = entry.file_name().to_string_lossy().to_string();
        if is_dir && name.starts_with(prefix) {
            candidates.push(name);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(GenError::DataDirNotFound {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
        }),
        1 => Ok(dir.join(&candidates[0])),
        _ => Err(GenError::AmbiguousDataDir {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
            candidates,
        }),
    }
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
