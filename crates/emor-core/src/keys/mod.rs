//! Key classification and the emission order of a parameter table.
//!
//! Keys shaped like `h(3)` are indexed and emitted under a padded display name
//! (`h03`). Plain keys come first in table order, then indexed keys sorted by
//! display name as plain strings, so `h100` lands before `h02`.

use crate::domain::ParameterTable;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_INDEX_WIDTH: usize = 2;

// ASCII whitespace and digits only; other characters count as part of a name.
static INDEXED_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\t\n\x0B\x0C\r ]+)\(([0-9]+)\)").expect("indexed key pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyClass {
    Plain,
    Indexed { display_name: String },
}

pub fn classify_key(key: &str, index_width: usize) -> KeyClass {
    let Some(captures) = INDEXED_KEY.captures(key) else {
        return KeyClass::Plain;
    };
    KeyClass::Indexed {
        display_name: display_name(&captures[1], &captures[2], index_width),
    }
}

/// Joins `name` with the decimal `digits`, zero-padded to `width`.
///
/// Leading zeros in `digits` are dropped first, matching integer formatting
/// without limiting the magnitude of the index.
pub fn display_name(name: &str, digits: &str, width: usize) -> String {
    let trimmed = digits.trim_start_matches('0');
    let number = if trimmed.is_empty() { "0" } else { trimmed };
    format!("{name}{number:0>width$}")
}

/// One array declaration to emit: the identifier and the table key it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission<'a> {
    pub name: &'a str,
    pub key: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionPlan<'a> {
    plain: Vec<&'a str>,
    indexed: Vec<String>,
    sources: IndexMap<String, &'a str>,
}

impl<'a> EmissionPlan<'a> {
    pub fn new(table: &'a ParameterTable, index_width: usize) -> Self {
        let mut plain = Vec::new();
        let mut indexed = Vec::new();
        let mut sources = IndexMap::new();
        for key in table.keys() {
            match classify_key(key, index_width) {
                KeyClass::Plain => plain.push(key),
                KeyClass::Indexed { display_name } => {
                    // A display name reached by several keys reads the values
                    // of the last one, once per key.
                    sources.insert(display_name.clone(), key);
                    indexed.push(display_name);
                }
            }
        }
        indexed.sort();
        Self {
            plain,
            indexed,
            sources,
        }
    }

    pub fn len(&self) -> usize {
        self.plain.len() + self.indexed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Emission<'_>> {
        let plain = self.plain.iter().map(|&key| Emission { name: key, key });
        let indexed = self.indexed.iter().filter_map(|display_name| {
            self.sources.get(display_name).map(|&key| Emission {
                name: display_name.as_str(),
                key,
            })
        });
        plain.chain(indexed)
    }
}
