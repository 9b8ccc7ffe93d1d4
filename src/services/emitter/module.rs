use super::js_literal::{property_key, quote};
use serde::{Deserialize, Serialize};

/// How the literal is exported from the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExportStyle {
    /// `export default () => ({ ... })`, a fresh copy per call.
    #[default]
    Factory,
    /// `export default { ... }`
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// Bare identifier when valid, quoted otherwise.
    Auto,
    Quoted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsLiteral {
    Object {
        keys: KeyStyle,
        entries: Vec<(String, String)>,
    },
    Array(Vec<String>),
}

/// An ordered data literal plus the way it is exported. Rendering is the
/// only place where strings are turned into JavaScript source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsModule {
    pub style: ExportStyle,
    pub literal: JsLiteral,
}

impl JsModule {
    pub fn object(style: ExportStyle, keys: KeyStyle, entries: Vec<(String, String)>) -> Self {
        Self {
            style,
            literal: JsLiteral::Object { keys, entries },
        }
    }

    pub fn array(style: ExportStyle, items: Vec<String>) -> Self {
        Self {
            style,
            literal: JsLiteral::Array(items),
        }
    }

    pub fn len(&self) -> usize {
        match &self.literal {
            JsLiteral::Object { entries, .. } => entries.len(),
            JsLiteral::Array(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render to source text: one entry per line, two-space indent, a comma
    /// after every entry but the last, trailing newline.
    pub fn render(&self) -> String {
        let (open, close, lines): (&str, &str, Vec<String>) = match &self.literal {
            JsLiteral::Object { keys, entries } => {
                let lines = entries
                    .iter()
                    .map(|(key, value)| {
                        let key = match keys {
                            KeyStyle::Auto => property_key(key),
                            KeyStyle::Quoted => quote(key),
                        };
                        format!("{key}: {}", quote(value))
                    })
                    .collect();
                ("{", "}", lines)
            }
            JsLiteral::Array(items) => ("[", "]", items.iter().map(|item| quote(item)).collect()),
        };

        let mut out = match self.style {
            ExportStyle::Factory => format!("export default () => ({open}\n"),
            ExportStyle::Object => format!("export default {open}\n"),
        };
        for (i, line) in lines.iter().enumerate() {
            out.push_str("  ");
            out.push_str(line);
            if i + 1 < lines.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str(close);
        if self.style == ExportStyle::Factory {
            out.push(')');
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[path = "tests/module_tests.rs"]
mod tests;
