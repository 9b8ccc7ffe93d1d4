//! Locale CSV loading: one GeoLite2 locations file in, a deduplicated
//! code-sorted country list out.

mod csv_loader;
mod normalize;

pub use csv_loader::{load_countries, read_countries, write_country_csv, CsvLayout, LoadOptions};
pub use normalize::{strip_diacritics, transliterate_ascii, NameForm};
