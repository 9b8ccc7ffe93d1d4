use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Download of {url} failed: HTTP {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("Invalid or corrupt ZIP: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("I/O error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error(
        "Row {row} of {} has {columns} columns, at least {required} required",
        .path.display()
    )]
    ShortRow {
        path: PathBuf,
        row: usize,
        columns: usize,
        required: usize,
    },
    #[error("No directory starting with '{prefix}' found in {}", .dir.display())]
    DataDirNotFound { dir: PathBuf, prefix: String },
    #[error(
        "Several directories starting with '{prefix}' found in {}: {}",
        .dir.display(),
        .candidates.join(", ")
    )]
    AmbiguousDataDir {
        dir: PathBuf,
        prefix: String,
        candidates: Vec<String>,
    },
    #[error("Config error: {0}")]
    Config(String),
}

impl GenError {
    /// Wrap an I/O error with a short description of what was being done.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        GenError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
