//! Orchestration of a full generation run.

use crate::services::archive::{self, Downloader};
use crate::services::config::{CodesPolicy, GenConfig};
use crate::services::emitter::Emitter;
use crate::services::fs_utils::ensure_dir;
use crate::services::loader::{load_countries, write_country_csv, CsvLayout, LoadOptions};
use crate::services::registry::CountryRegistry;
use crate::types::GenResult;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    pub locale: String,
    pub countries: usize,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub data_dir: PathBuf,
    pub locales: Vec<LocaleSummary>,
    pub codes_file: PathBuf,
    pub codes: usize,
}

/// Run the whole pipeline: acquire the dataset, then load, register and
/// emit each configured locale in order, then write `codes.js`.
///
/// Stops at the first error. Files already written for earlier locales are
/// left in place.
pub fn run(config: &GenConfig, downloader: &dyn Downloader) -> GenResult<RunSummary> {
    config.validate()?;

    let data_dir = archive::acquire(
        &config.data_dir,
        &config.source_url,
        &config.archive_dir_prefix,
        downloader,
    )?;

    ensure_dir(&config.out_dir)?;
    if let Some(dump_dir) = &config.dump_dir {
        ensure_dir(dump_dir)?;
    }
    let emitter = Emitter::new(&config.out_dir, config.layout, config.export_style);
    let options = LoadOptions {
        layout: CsvLayout::GEOLITE,
        name_form: config.name_form,
    };

    log::info!("Parsing {}", data_dir.display());
    let mut reference: Option<(String, BTreeSet<String>)> = None;
    let mut all_codes: BTreeSet<String> = BTreeSet::new();
    let mut last_codes: BTreeSet<String> = BTreeSet::new();
    let mut locales = Vec::with_capacity(config.locales.len());

    for locale in &config.locales {
        let csv_path = config.locale_csv_path(&data_dir, locale);
        let countries = load_countries(&csv_path, options)?;

        if let Some(dump_dir) = &config.dump_dir {
            write_country_csv(&countries, &dump_dir.join(format!("{locale}.csv")))?;
        }

        let registry = CountryRegistry::new(locale.as_str(), countries);
        let files = emitter.emit_locale(&registry)?;
        let codes = registry.codes();

        match &reference {
            Some((first_locale, first_codes)) => {
                warn_on_coverage_gap(first_locale, first_codes, locale, &codes)
            }
            None => reference = Some((locale.clone(), codes.clone())),
        }

        locales.push(LocaleSummary {
            locale: locale.clone(),
            countries: registry.len(),
            files,
        });
        all_codes.extend(codes.iter().cloned());
        last_codes = codes;
    }

    let codes = match config.codes_policy {
        CodesPolicy::Union => all_codes,
        CodesPolicy::LastLocale => last_codes,
    };
    let codes_file = emitter.emit_codes(codes.iter().map(String::as_str))?;

    log::info!("Done");
    Ok(RunSummary {
        data_dir,
        locales,
        codes_file,
        codes: codes.len(),
    })
}

fn warn_on_coverage_gap(
    first_locale: &str,
    first_codes: &BTreeSet<String>,
    locale: &str,
    codes: &BTreeSet<String>,
) {
    let missing: Vec<&str> = first_codes.difference(codes).map(String::as_str).collect();
    let extra: Vec<&str> = codes.difference(first_codes).map(String::as_str).collect();
    if !missing.is_empty() || !extra.is_empty() {
        log::warn!(
            "Locale {locale} covers different codes than {first_locale}: missing [{}], extra [{}]",
            missing.join(", "),
            extra.join(", ")
        );
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
