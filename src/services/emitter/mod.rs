//! Module emission: turns a [`CountryRegistry`] into JavaScript modules on disk.
//!
//! Builders produce a [`JsModule`] in the required order; [`write_module`]
//! renders and writes it atomically.

mod js_literal;
mod module;

pub use js_literal::{is_identifier, property_key, quote};
pub use module::{ExportStyle, JsLiteral, JsModule, KeyStyle};

use crate::services::fs_utils::{ensure_dir, write_atomic};
use crate::services::registry::CountryRegistry;
use crate::types::GenResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const CODE_NAME_FILE: &str = "map-code-name.js";
pub const NAME_CODE_FILE: &str = "map-name-code.js";
pub const NAMES_FILE: &str = "names.js";
pub const CODES_FILE: &str = "codes.js";

/// Where per-locale modules go under the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLayout {
    /// `<out>/<short>/{map-code-name,map-name-code,names}.js`
    #[default]
    Nested,
    /// `<out>/country-<short>.js` with the code→name map only.
    Flat,
}

/// Directory-safe locale tag: lowercase, hyphens removed (`pt-BR` → `ptbr`).
pub fn short_locale(locale: &str) -> String {
    locale.replace('-', "").to_lowercase()
}

/// `{ code: 'name' }` in code order.
pub fn code_name_map(registry: &CountryRegistry, style: ExportStyle) -> JsModule {
    let entries = registry
        .by_code()
        .into_iter()
        .map(|c| (c.code.clone(), c.name.clone()))
        .collect();
    JsModule::object(style, KeyStyle::Auto, entries)
}

/// `{ 'name': 'code' }` in name order.
pub fn name_code_map(registry: &CountryRegistry, style: ExportStyle) -> JsModule {
    let by_name = registry.by_name();

    let mut seen = HashSet::new();
    for country in &by_name {
        if !seen.insert(country.name.as_str()) {
            log::warn!(
                "[{}] Name '{}' is shared by several codes; the last one wins in {}",
                registry.locale(),
                country.name,
                NAME_CODE_FILE
            );
        }
    }

    let entries = by_name
        .into_iter()
        .map(|c| (c.name.clone(), c.code.clone()))
        .collect();
    JsModule::object(style, KeyStyle::Quoted, entries)
}

/// `[ 'name', ... ]` in name order.
pub fn name_list(registry: &CountryRegistry, style: ExportStyle) -> JsModule {
    let names = registry
        .by_name()
        .into_iter()
        .map(|c| c.name.clone())
        .collect();
    JsModule::array(style, names)
}

/// `[ 'code', ... ]` sorted ascending, duplicates dropped.
pub fn code_list<I, S>(codes: I, style: ExportStyle) -> JsModule
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut codes: Vec<String> = codes.into_iter().map(Into::into).collect();
    codes.sort();
    codes.dedup();
    JsModule::array(style, codes)
}

/// Render `module` and write it to `path`, replacing any existing file.
pub fn write_module(module: &JsModule, path: &Path) -> GenResult<()> {
    log::info!("Generating {}...", path.display());
    write_atomic(path, module.render().as_bytes())
}

/// Writes every module of a run under one output root.
#[derive(Debug, Clone)]
pub struct Emitter {
    out_dir: PathBuf,
    layout: OutputLayout,
    style: ExportStyle,
}

impl Emitter {
    pub fn new(out_dir: impl Into<PathBuf>, layout: OutputLayout, style: ExportStyle) -> Self {
        Self {
            out_dir: out_dir.into(),
            layout,
            style,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write the per-locale modules and return their paths.
    pub fn emit_locale(&self, registry: &CountryRegistry) -> GenResult<Vec<PathBuf>> {
        let short = short_locale(registry.locale());

        match self.layout {
            OutputLayout::Nested => {
                let dir = self.out_dir.join(&short);
                ensure_dir(&dir)?;

                let modules = [
                    (CODE_NAME_FILE, code_name_map(registry, self.style)),
                    (NAME_CODE_FILE, name_code_map(registry, self.style)),
                    (NAMES_FILE, name_list(registry, self.style)),
                ];
                let mut written = Vec::with_capacity(modules.len());
                for (file_name, module) in &modules {
                    let path = dir.join(file_name);
                    write_module(module, &path)?;
                    written.push(path);
                }
                Ok(written)
            }
            OutputLayout::Flat => {
                ensure_dir(&self.out_dir)?;
                let path = self.out_dir.join(format!("country-{short}.js"));
                write_module(&code_name_map(registry, self.style), &path)?;
                Ok(vec![path])
            }
        }
    }

    /// Write the root-level `codes.js`.
    pub fn emit_codes<I, S>(&self, codes: I) -> GenResult<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ensure_dir(&self.out_dir)?;
        let path = self.out_dir.join(CODES_FILE);
        write_module(&code_list(codes, self.style), &path)?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "tests/emitter_tests.rs"]
mod tests;
