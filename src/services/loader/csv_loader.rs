use super::normalize::NameForm;
use crate::services::fs_utils::write_atomic;
use crate::types::{Country, GenError, GenResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Where the code and name live in a CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvLayout {
    pub code_column: usize,
    pub name_column: usize,
    pub has_header: bool,
}

impl CsvLayout {
    /// `GeoLite2-City-Locations-<locale>.csv`: `country_iso_code` is column 4,
    /// `country_name` column 5, first row is a header.
    pub const GEOLITE: Self = Self {
        code_column: 4,
        name_column: 5,
        has_header: true,
    };

    /// The two-column `code,name` file written by [`write_country_csv`].
    pub const DUMP: Self = Self {
        code_column: 0,
        name_column: 1,
        has_header: false,
    };

    pub fn required_columns(&self) -> usize {
        self.code_column.max(self.name_column) + 1
    }
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self::GEOLITE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub layout: CsvLayout,
    pub name_form: NameForm,
}

/// Load one locale file into a list of countries, unique by code and
/// sorted ascending by code.
///
/// Rows are read in file order and a later row overwrites an earlier one
/// with the same code. The header row and rows with an empty code or name
/// are skipped. A row with too few columns fails the whole load.
pub fn load_countries(path: &Path, options: LoadOptions) -> GenResult<Vec<Country>> {
    let file =
        File::open(path).map_err(|e| GenError::io(format!("open {}", path.display()), e))?;
    read_countries(file, path, options)
}

/// Same as [`load_countries`] over any reader. `origin` is only used in
/// error messages.
pub fn read_countries<R: Read>(
    reader: R,
    origin: &Path,
    options: LoadOptions,
) -> GenResult<Vec<Country>> {
    let layout = options.layout;
    let required = layout.required_columns();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut by_code: BTreeMap<String, Country> = BTreeMap::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result.map_err(|source| GenError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;

        if record.len() < required {
            return Err(GenError::ShortRow {
                path: origin.to_path_buf(),
                row,
                columns: record.len(),
                required,
            });
        }
        if row == 0 && layout.has_header {
            continue;
        }

        let code = &record[layout.code_column];
        let name = &record[layout.name_column];
        if code.is_empty() || name.is_empty() {
            continue;
        }
        // A name made only of combining marks is empty once stripped
        let name = options.name_form.apply(name);
        if name.is_empty() {
            log::debug!(
                "Skipping {code} in {}: name is empty after normalization",
                origin.display()
            );
            continue;
        }

        by_code.insert(code.to_string(), Country::new(code, name));
    }

    log::debug!(
        "Loaded {} countries from {}",
        by_code.len(),
        origin.display()
    );
    Ok(by_code.into_values().collect())
}

/// Write `countries` as a headerless `code,name` CSV, sorted by code.
///
/// Reading the file back with [`CsvLayout::DUMP`] yields the same mapping.
pub fn write_country_csv(countries: &[Country], path: &Path) -> GenResult<()> {
    let mut sorted: Vec<&Country> = countries.iter().collect();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));

    let csv_err = |source: csv::Error| GenError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    for country in sorted {
        writer
            .write_record([country.code.as_str(), country.name.as_str()])
            .map_err(csv_err)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| GenError::io(format!("flush CSV for {}", path.display()), e.into_error()))?;

    write_atomic(path, &bytes)
}

#[cfg(test)]
#[path = "tests/csv_loader_tests.rs"]
mod tests;
