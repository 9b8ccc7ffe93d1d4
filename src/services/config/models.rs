use crate::services::emitter::{ExportStyle, OutputLayout};
use crate::services::loader::NameForm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SOURCE_URL: &str =
    "https://geolite.maxmind.com/download/geoip/database/GeoLite2-City-CSV.zip";
pub const DEFAULT_CSV_PREFIX: &str = "GeoLite2-City-Locations";
pub const DEFAULT_ARCHIVE_DIR_PREFIX: &str = "GeoLite2-City-CSV";

/// Source of the root-level `codes.js`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CodesPolicy {
    /// Sorted union of every locale's codes.
    #[default]
    Union,
    /// Codes of the last processed locale only.
    LastLocale,
}

fn default_locales() -> Vec<String> {
    ["de", "es", "pt-BR", "en", "fr", "ru", "ja", "zh-CN"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_out_dir() -> PathBuf {
    PathBuf::from("js")
}
fn default_csv_prefix() -> String {
    DEFAULT_CSV_PREFIX.to_string()
}
fn default_archive_dir_prefix() -> String {
    DEFAULT_ARCHIVE_DIR_PREFIX.to_string()
}

/// Everything a run needs. Missing JSON fields take the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenConfig {
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_source_url")]
    pub source_url: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Locale files are `<csv_prefix>-<locale>.csv`.
    #[serde(default = "default_csv_prefix")]
    pub csv_prefix: String,
    /// Name prefix of the directory the archive extracts to.
    #[serde(default = "default_archive_dir_prefix")]
    pub archive_dir_prefix: String,
    /// When set, each locale's country list is also written to
    /// `<dump_dir>/<locale>.csv`.
    #[serde(default)]
    pub dump_dir: Option<PathBuf>,
    #[serde(default)]
    pub name_form: NameForm,
    #[serde(default)]
    pub layout: OutputLayout,
    #[serde(default)]
    pub export_style: ExportStyle,
    #[serde(default)]
    pub codes_policy: CodesPolicy,
    #[serde(default)]
    pub download_timeout_secs: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            source_url: default_source_url(),
            data_dir: default_data_dir(),
            out_dir: default_out_dir(),
            csv_prefix: default_csv_prefix(),
            archive_dir_prefix: default_archive_dir_prefix(),
            dump_dir: None,
            name_form: NameForm::default(),
            layout: OutputLayout::default(),
            export_style: ExportStyle::default(),
            codes_policy: CodesPolicy::default(),
            download_timeout_secs: None,
        }
    }
}
