use crate::services::archive::Downloader;
use crate::types::{GenError, GenResult};
use std::cell::Cell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub const GEOLITE_HEADER: &str =
    "geoname_id,locale_code,continent_code,continent_name,country_iso_code,country_name";

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Helper: write a stored (uncompressed) ZIP with the given entries.
/// Names ending in `/` become directory entries.
pub fn write_test_zip(zip_path: &Path, files: &[(&str, &[u8])]) {
    let file = fs::File::create(zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        if entry_name.ends_with('/') {
            writer.add_directory(entry_name.to_string(), options).unwrap();
        } else {
            writer.start_file(entry_name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
    }
    writer.finish().unwrap();
}

/// Helper: a GeoLite2 locations CSV with the given `(code, name)` rows.
pub fn geolite_csv(locale: &str, rows: &[(&str, &str)]) -> String {
    let mut out = format!("{GEOLITE_HEADER}\n");
    for (i, (code, name)) in rows.iter().enumerate() {
        out.push_str(&format!("{},{locale},EU,Europe,{code},{name}\n", i + 1));
    }
    out
}

/// Serves a prepared local ZIP instead of hitting the network.
pub struct LocalZipDownloader {
    pub source: PathBuf,
    pub calls: Cell<usize>,
}

impl LocalZipDownloader {
    pub fn new(source: PathBuf) -> Self {
        Self {
            source,
            calls: Cell::new(0),
        }
    }
}

impl Downloader for LocalZipDownloader {
    fn download(&self, _url: &str, dest: &Path) -> GenResult<u64> {
        self.calls.set(self.calls.get() + 1);
        fs::copy(&self.source, dest).map_err(|e| GenError::io("copy test zip", e))
    }
}

/// Always fails, like an unreachable host.
pub struct FailingDownloader;

impl Downloader for FailingDownloader {
    fn download(&self, url: &str, _dest: &Path) -> GenResult<u64> {
        Err(GenError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }
}
