//! Per-locale country registry with the two orders the emitter needs.
//!
//! Both orders compare raw strings, which for Rust `str` means UTF-8 byte
//! order (equivalently, code point order). No collation is applied, so
//! `"Zambia"` sorts before `"Åland"` and CJK names sort by code point.

use crate::types::Country;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct CountryRegistry {
    locale: String,
    countries: Vec<Country>,
}

impl CountryRegistry {
    /// Build a registry from a loader result. The list is kept in code order.
    pub fn new(locale: impl Into<String>, mut countries: Vec<Country>) -> Self {
        countries.sort_by(|a, b| a.code.cmp(&b.code));
        Self {
            locale: locale.into(),
            countries,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn by_code(&self) -> Vec<&Country> {
        let mut sorted: Vec<&Country> = self.countries.iter().collect();
        sorted.sort_by(|a, b| a.code.cmp(&b.code));
        sorted
    }

    pub fn by_name(&self) -> Vec<&Country> {
        let mut sorted: Vec<&Country> = self.countries.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn codes(&self) -> BTreeSet<String> {
        self.countries.iter().map(|c| c.code.clone()).collect()
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.countries
            .binary_search_by(|c| c.code.as_str().cmp(code))
            .ok()
            .map(|idx| self.countries[idx].name.as_str())
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
