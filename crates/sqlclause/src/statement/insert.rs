//! INSERT statement builder.

use super::Pieces;
use super::traits::Statement;
use crate::clause::{Clause, Generated, Part, RowEntry};
use crate::error::{ClauseError, ClauseResult};
use crate::format::Format;
use crate::ident::{Ident, write_quoted};
use crate::trace::TraceConfig;
use serde_json::Value;
use std::collections::HashSet;

/// INSERT builder.
///
/// The column list comes from the first VALUES row; every later row must
/// name the same columns in the same order. Rows of positional values render
/// without a column list and must all have the same length.
#[derive(Clone, Debug)]
#[must_use]
pub struct Insert {
    table: Ident,
    options: Clause,
    values: Clause,
    trace: TraceConfig,
}

impl Insert {
    /// Create a new INSERT builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: Ident::parse(table),
            options: Clause::options(),
            values: Clause::values(),
            trace: TraceConfig::default(),
        }
    }

    /// Override the `tracing` settings.
    pub fn trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    pub fn options_mut(&mut self) -> &mut Clause {
        &mut self.options
    }

    pub fn values_mut(&mut self) -> &mut Clause {
        &mut self.values
    }

    /// Add a statement option, e.g. `IGNORE`.
    pub fn option(mut self, option: &str) -> Self {
        self.options.push(option);
        self
    }

    /// Add one row of `(column, value)` pairs.
    pub fn row<K, V>(mut self, row: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.values.row(row);
        self
    }

    fn rows(&self) -> impl Iterator<Item = Option<&[RowEntry]>> {
        self.values.parts().iter().map(|part| match part {
            Part::Row(row) => Some(row.as_slice()),
            _ => None,
        })
    }

    /// Column names taken from the first row.
    ///
    /// Empty when the first row holds any positional value.
    pub fn columns(&self) -> Vec<&str> {
        match self.rows().next() {
            Some(Some(row)) => row
                .iter()
                .map(|(name, _)| name.as_deref())
                .collect::<Option<Vec<_>>>()
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn target_line(&self) -> String {
        let mut line = String::from("INTO ");
        self.table.write_sql(&mut line);
        let columns = self.columns();
        if !columns.is_empty() {
            line.push_str(" (");
            for (i, column) in columns.into_iter().enumerate() {
                if i > 0 {
                    line.push(',');
                }
                write_quoted(&mut line, column);
            }
            line.push(')');
        }
        line
    }
}

impl Statement for Insert {
    fn verb(&self) -> &'static str {
        "INSERT"
    }

    fn render_with(&self, fmt: &Format) -> Generated {
        let mut pieces = Pieces::new(self.verb(), fmt);
        pieces
            .clause(&self.options)
            .text(self.target_line())
            .clause(&self.values);
        pieces.finish()
    }

    fn trace_config(&self) -> &TraceConfig {
        &self.trace
    }

    fn validate(&self) -> ClauseResult<()> {
        if !self.values.is_present() {
            return Err(ClauseError::validation(
                "Insert: VALUES clause cannot be empty",
            ));
        }

        let mut expected: Option<&[RowEntry]> = None;
        for (i, row) in self.rows().enumerate() {
            let Some(row) = row else {
                return Err(ClauseError::validation(format!(
                    "Insert: VALUES entry {i} is not a row"
                )));
            };
            check_row(i, row)?;

            let first = *expected.get_or_insert(row);
            let same_shape = first.len() == row.len()
                && first.iter().zip(row).all(|((a, _), (b, _))| a == b);
            if !same_shape {
                return Err(ClauseError::RowShape {
                    row: i,
                    expected: column_labels(first),
                    found: column_labels(row),
                });
            }
        }
        Ok(())
    }
}

/// A row is either all named or all positional, and names no column twice.
fn check_row(index: usize, row: &[RowEntry]) -> ClauseResult<()> {
    let named = row.iter().filter(|(name, _)| name.is_some()).count();
    if named != 0 && named != row.len() {
        return Err(ClauseError::validation(format!(
            "Insert: row {index} mixes positional and named values"
        )));
    }

    let mut seen = HashSet::with_capacity(named);
    for name in row.iter().filter_map(|(name, _)| name.as_deref()) {
        if !seen.insert(name) {
            return Err(ClauseError::validation(format!(
                "Insert: row {index} names column `{name}` more than once"
            )));
        }
    }
    Ok(())
}

/// Column names for error reports; positional values show as `#<position>`.
fn column_labels(row: &[RowEntry]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(i, (name, _))| match name {
            Some(name) => name.clone(),
            None => format!("#{i}"),
        })
        .collect()
}
