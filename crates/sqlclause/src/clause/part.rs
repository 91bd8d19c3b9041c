//! Atomic clause content.

use crate::format::Format;
use crate::ident::{PLACEHOLDER, write_quoted};
use crate::param::ParamList;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Sort direction for ORDER BY entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    Desc,
}

/// Ascending sort marker.
pub const ASC: Direction = Direction::Asc;

/// Descending sort marker.
pub const DESC: Direction = Direction::Desc;

impl Direction {
    /// The SQL keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    /// Interpret a named ORDER BY value (`"asc"`/`"desc"`, any case).
    pub fn from_value(value: &Value) -> Option<Self> {
        let s = value.as_str()?.trim();
        if s.eq_ignore_ascii_case("ASC") {
            Some(Direction::Asc)
        } else if s.eq_ignore_ascii_case("DESC") {
            Some(Direction::Desc)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Direction> for Value {
    fn from(direction: Direction) -> Self {
        Value::String(direction.as_str().to_string())
    }
}

/// One VALUES entry: the column it fills, if named, and its bound value.
pub type RowEntry = (Option<String>, Value);

/// One accumulated element of a clause.
///
/// Parts are never mutated after they are appended. Rendering a part writes
/// its SQL text and pushes every bound value it carries, in the same order
/// as the placeholders it writes.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// A table/column reference, rendered quoted.
    Identifier(String),
    /// An opaque SQL fragment, rendered verbatim.
    Raw(String),
    /// `<expr> AS <quoted alias>` where `expr` is an identifier or raw part.
    Aliased { expr: Box<Part>, alias: String },
    /// `<quoted column>=%s`
    Condition { column: String, value: Value },
    /// A lone `%s`.
    BoundValue(Value),
    /// `<quoted column>` optionally followed by `ASC`/`DESC`.
    Direction {
        column: String,
        direction: Option<Direction>,
    },
    /// `<quoted column>=%s` inside SET.
    Assignment { column: String, value: Value },
    /// One parenthesized VALUES row. Entries keep their order, duplicate
    /// names included.
    Row(Vec<RowEntry>),
}

impl Part {
    /// Build an aliased part whose expression is a quoted identifier.
    pub fn aliased(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Part::Aliased {
            expr: Box::new(Part::Identifier(expr.into())),
            alias: alias.into(),
        }
    }

    /// Build an aliased part whose expression is raw SQL.
    pub fn aliased_raw(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Part::Aliased {
            expr: Box::new(Part::Raw(expr.into())),
            alias: alias.into(),
        }
    }

    /// Build an aliased part from a named FIELDS/FROM value.
    ///
    /// Strings name an identifier; any other value is a literal written as
    /// its JSON text.
    pub(crate) fn aliased_value(alias: String, value: Value) -> Self {
        let expr = match value {
            Value::String(s) => Part::Identifier(s),
            other => Part::Raw(other.to_string()),
        };
        Part::Aliased {
            expr: Box::new(expr),
            alias,
        }
    }

    /// Number of placeholders this part renders.
    pub fn placeholder_count(&self) -> usize {
        match self {
            Part::Condition { .. } | Part::BoundValue(_) | Part::Assignment { .. } => 1,
            Part::Row(row) => row.len(),
            Part::Aliased { expr, .. } => expr.placeholder_count(),
            Part::Identifier(_) | Part::Raw(_) | Part::Direction { .. } => 0,
        }
    }

    /// Write this part at nesting `depth`, collecting bound values.
    pub(crate) fn write_sql(
        &self,
        out: &mut String,
        params: &mut ParamList,
        fmt: &Format,
        depth: usize,
    ) {
        match self {
            Part::Identifier(name) => write_quoted(out, name),
            Part::Raw(sql) => out.push_str(sql),
            Part::Aliased { expr, alias } => {
                expr.write_sql(out, params, fmt, depth);
                out.push_str(" AS ");
                write_quoted(out, alias);
            }
            Part::Condition { column, value } | Part::Assignment { column, value } => {
                write_quoted(out, column);
                out.push('=');
                out.push_str(PLACEHOLDER);
                params.push(value.clone());
            }
            Part::BoundValue(value) => {
                out.push_str(PLACEHOLDER);
                params.push(value.clone());
            }
            Part::Direction { column, direction } => {
                write_quoted(out, column);
                if let Some(direction) = direction {
                    out.push(' ');
                    out.push_str(direction.as_str());
                }
            }
            Part::Row(row) => write_row(out, params, fmt, depth, row),
        }
    }
}

fn write_row(
    out: &mut String,
    params: &mut ParamList,
    fmt: &Format,
    depth: usize,
    row: &[RowEntry],
) {
    out.push('(');
    if fmt.is_multiline() {
        for (i, (_, value)) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('\n');
            fmt.pad(out, depth + 1);
            out.push_str(PLACEHOLDER);
            params.push(value.clone());
        }
        out.push('\n');
        fmt.pad(out, depth);
    } else {
        for (i, (_, value)) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(PLACEHOLDER);
            params.push(value.clone());
        }
    }
    out.push(')');
}
