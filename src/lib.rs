//! Generates JavaScript country-name modules from the GeoLite2 City CSV
//! dataset: one set of modules per locale plus a shared code list.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::archive::{Downloader, HttpDownloader};
pub use services::config::GenConfig;
pub use services::pipeline::{run, LocaleSummary, RunSummary};
pub use types::{Country, GenError, GenResult};
