//! Country name normalization.
//!
//! Mark stripping runs NFD, drops every nonspacing mark (general category
//! `Mn`), then recomposes with NFC. Letters without a canonical decomposition
//! (`ø`, `ł`, CJK ideographs) are left alone. The ASCII form goes further
//! and transliterates everything via deunicode.

use deunicode::deunicode;
use icu_normalizer::{ComposingNormalizerBorrowed, DecomposingNormalizerBorrowed};
use icu_properties::props::GeneralCategory;
use icu_properties::CodePointMapData;
use serde::{Deserialize, Serialize};

/// Which form of the localized name ends up in the generated modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NameForm {
    /// Name exactly as it appears in the CSV.
    Raw,
    /// Diacritics removed, other characters untouched.
    #[default]
    StripMarks,
    /// Full ASCII transliteration.
    Ascii,
}

impl NameForm {
    pub fn apply(self, name: &str) -> String {
        match self {
            NameForm::Raw => name.to_string(),
            NameForm::StripMarks => strip_diacritics(name),
            NameForm::Ascii => transliterate_ascii(name),
        }
    }
}

/// Remove combining marks: `"Côte d'Ivoire"` → `"Cote d'Ivoire"`.
pub fn strip_diacritics(name: &str) -> String {
    let decomposed = DecomposingNormalizerBorrowed::new_nfd().normalize(name);
    let general_category = CodePointMapData::<GeneralCategory>::new();
    let unmarked: String = decomposed
        .chars()
        .filter(|&c| general_category.get(c) != GeneralCategory::NonspacingMark)
        .collect();
    ComposingNormalizerBorrowed::new_nfc()
        .normalize(&unmarked)
        .into_owned()
}

/// Transliterate to plain ASCII (`"日本"` → `"Ri Ben"`).
pub fn transliterate_ascii(name: &str) -> String {
    let latin = deunicode(name);
    latin.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
