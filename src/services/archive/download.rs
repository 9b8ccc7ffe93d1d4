use crate::types::{GenError, GenResult};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Fetches `url` into a local file.
pub trait Downloader {
    /// Download `url` to `dest`, returning the number of bytes written.
    fn download(&self, url: &str, dest: &Path) -> GenResult<u64>;
}

/// Blocking HTTP downloader. No retries; a failed request fails the run.
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    /// `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> GenResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> GenResult<u64> {
        log::info!("Downloading {url}...");
        let mut response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(GenError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let mut file = fs::File::create(dest)
            .map_err(|e| GenError::io(format!("create {}", dest.display()), e))?;
        let bytes = response.copy_to(&mut file)?;
        log::debug!("Downloaded {bytes} bytes to {}", dest.display());
        Ok(bytes)
    }
}
