pub mod models;

pub use models::*;

use crate::types::{GenError, GenResult};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

impl GenConfig {
    /// Read a JSON config file. Absent fields fall back to defaults.
    pub fn load(path: &Path) -> GenResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GenError::io(format!("read config {}", path.display()), e))?;
        let config: GenConfig = serde_json::from_str(&content)
            .map_err(|e| GenError::Config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Reject configs that would fail halfway through a run.
    pub fn validate(&self) -> GenResult<()> {
        if self.locales.is_empty() {
            return Err(GenError::Config("locale list is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            if locale.trim().is_empty() {
                return Err(GenError::Config("empty locale tag".to_string()));
            }
            if locale.contains(['/', '\\']) || locale.contains("..") {
                return Err(GenError::Config(format!("invalid locale tag '{locale}'")));
            }
            // pt-BR and ptbr would write to the same directory
            let short = crate::services::emitter::short_locale(locale);
            if short.is_empty() {
                return Err(GenError::Config(format!("locale '{locale}' has an empty output name")));
            }
            if !seen.insert(short.clone()) {
                return Err(GenError::Config(format!(
                    "locale '{locale}' collides with another locale on output name '{short}'"
                )));
            }
        }

        if self.source_url.trim().is_empty() {
            return Err(GenError::Config("source URL is empty".to_string()));
        }
        Ok(())
    }

    /// `<data>/<csv_prefix>-<locale>.csv`
    pub fn locale_csv_path(&self, data_dir: &Path, locale: &str) -> PathBuf {
        data_dir.join(format!("{}-{}.csv", self.csv_prefix, locale))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
