use countrygen_lib::{Downloader, GenError, GenResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Serves a ZIP built in memory instead of hitting the network.
pub struct FixtureDownloader {
    zip_bytes: Vec<u8>,
}

impl FixtureDownloader {
    /// `files` are `(entry path, content)` pairs.
    pub fn new(files: &[(String, String)]) -> Self {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in files {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        let zip_bytes = writer.finish().unwrap().into_inner();
        Self { zip_bytes }
    }
}

impl Downloader for FixtureDownloader {
    fn download(&self, _url: &str, dest: &Path) -> GenResult<u64> {
        fs::write(dest, &self.zip_bytes).map_err(|e| GenError::io("write fixture zip", e))?;
        Ok(self.zip_bytes.len() as u64)
    }
}

/// Entry path of a locale file inside the release directory.
pub fn locale_entry(release: &str, locale: &str) -> String {
    format!("{release}/GeoLite2-City-Locations-{locale}.csv")
}

pub fn read(path: PathBuf) -> String {
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}
