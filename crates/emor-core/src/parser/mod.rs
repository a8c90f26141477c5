//! Line classification and value accumulation for EMoR parameter files.
//!
//! A parameter file is a sequence of key lines (`f0 = ...`, `h(3) = ...`) each
//! followed by data lines holding whitespace-separated numbers. Tokens that do
//! not parse as `f64` are skipped.

use crate::domain::ParameterTable;
use regex::Regex;
use std::sync::LazyLock;

// Whitespace is the ASCII set `\t \n \v \f \r` and space.
static KEY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\t\n\x0B\x0C\r ]*([^\t\n\x0B\x0C\r ]+.*?)[\t\n\x0B\x0C\r ]*=")
        .expect("key line pattern is valid")
});

const fn is_separator(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' ')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Key(&'a str),
    Data(&'a str),
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    match KEY_LINE.captures(line).and_then(|captures| captures.get(1)) {
        Some(key) => LineKind::Key(key.as_str()),
        None => LineKind::Data(line),
    }
}

pub fn parse_numeric_tokens(line: &str) -> impl Iterator<Item = f64> + '_ {
    line.split(is_separator)
        .filter_map(|token| token.parse::<f64>().ok())
}

/// Single forward pass over the lines of one parameter file.
#[derive(Debug, Default)]
pub struct TableBuilder {
    table: ParameterTable,
    active_key: Option<String>,
    pending: Vec<f64>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::Key(key) => {
                // Values seen before the first key line stay pending and are
                // credited to that first key.
                if let Some(previous) = self.active_key.replace(key.to_string()) {
                    let values = std::mem::take(&mut self.pending);
                    self.commit(previous, values);
                }
            }
            LineKind::Data(data) => self.pending.extend(parse_numeric_tokens(data)),
        }
    }

    pub fn finish(mut self) -> ParameterTable {
        let key = match self.active_key.take() {
            Some(key) => key,
            None => {
                tracing::warn!(
                    values = self.pending.len(),
                    "no key line found; storing values under an empty key"
                );
                String::new()
            }
        };
        let values = std::mem::take(&mut self.pending);
        self.commit(key, values);
        self.table
    }

    fn commit(&mut self, key: String, values: Vec<f64>) {
        tracing::trace!(key = %key, values = values.len(), "committing parameter sequence");
        if let Some(replaced) = self.table.commit(key.clone(), values) {
            tracing::warn!(
                key = %key,
                discarded = replaced.len(),
                "parameter key repeated; keeping the last sequence"
            );
        }
    }
}

pub fn parse_parameter_table(source: &str) -> ParameterTable {
    let mut builder = TableBuilder::new();
    for line in source.lines() {
        builder.push_line(line);
    }
    builder.finish()
}
