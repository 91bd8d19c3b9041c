//! Per-kind rendering configuration.

use super::part::{Direction, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The SQL clause a [`Clause`](super::Clause) renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClauseKind {
    Options,
    Fields,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Set,
    Values,
}

/// Separator placed between two rendered parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joiner {
    /// `a b`, one part per line when pretty.
    Space,
    /// `a,b`, trailing comma and line break when pretty.
    Comma,
    /// `a AND b`, trailing ` AND` and line break when pretty.
    And,
    /// `a,b` with no line break even when pretty (VALUES rows).
    Adjacent,
    /// `a OFFSET b` (LIMIT only).
    Offset,
}

impl Joiner {
    /// Separator for single-line output.
    pub fn inline(&self) -> &'static str {
        match self {
            Joiner::Space => " ",
            Joiner::Comma | Joiner::Adjacent => ",",
            Joiner::And => " AND ",
            Joiner::Offset => " OFFSET ",
        }
    }

    /// Text ending a line before the next part when pretty.
    pub fn trailing(&self) -> &'static str {
        match self {
            Joiner::Space => "",
            Joiner::Comma | Joiner::Adjacent => ",",
            Joiner::And => " AND",
            Joiner::Offset => " OFFSET ",
        }
    }

    /// Whether the next part starts on a new line when pretty.
    pub fn breaks(&self) -> bool {
        matches!(self, Joiner::Space | Joiner::Comma | Joiner::And)
    }
}

/// How a clause is laid out when pretty-printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// No keyword: the first part sits one indent in, the rest one level deep.
    Bare,
    /// Keyword alone on the first line, each part one level deep.
    Keyword,
    /// Always single-line.
    Inline,
}

/// The four facets that distinguish one clause kind from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    pub keyword: Option<&'static str>,
    pub joiner: Joiner,
    pub layout: Layout,
    /// Parts past this count are not rendered.
    pub max_parts: Option<usize>,
}

impl ClauseKind {
    pub const ALL: [ClauseKind; 10] = [
        ClauseKind::Options,
        ClauseKind::Fields,
        ClauseKind::From,
        ClauseKind::Where,
        ClauseKind::GroupBy,
        ClauseKind::Having,
        ClauseKind::OrderBy,
        ClauseKind::Limit,
        ClauseKind::Set,
        ClauseKind::Values,
    ];

    /// Rendering configuration for this kind.
    pub fn spec(&self) -> KindSpec {
        let (keyword, joiner, layout, max_parts) = match self {
            ClauseKind::Options => (None, Joiner::Space, Layout::Bare, None),
            ClauseKind::Fields => (None, Joiner::Comma, Layout::Bare, None),
            ClauseKind::From => (Some("FROM"), Joiner::Comma, Layout::Keyword, None),
            ClauseKind::Where => (Some("WHERE"), Joiner::And, Layout::Keyword, None),
            ClauseKind::GroupBy => (Some("GROUP BY"), Joiner::Comma, Layout::Keyword, None),
            ClauseKind::Having => (Some("HAVING"), Joiner::And, Layout::Keyword, None),
            ClauseKind::OrderBy => (Some("ORDER BY"), Joiner::Comma, Layout::Keyword, None),
            ClauseKind::Limit => (Some("LIMIT"), Joiner::Offset, Layout::Inline, Some(2)),
            ClauseKind::Set => (Some("SET"), Joiner::Comma, Layout::Keyword, None),
            ClauseKind::Values => (Some("VALUES"), Joiner::Adjacent, Layout::Keyword, None),
        };
        KindSpec {
            keyword,
            joiner,
            layout,
            max_parts,
        }
    }

    /// Interpret one positional value.
    pub(crate) fn positional(&self, value: Value) -> Part {
        match self {
            ClauseKind::Options | ClauseKind::Fields | ClauseKind::Set => {
                Part::Raw(value_text(value))
            }
            ClauseKind::From | ClauseKind::GroupBy | ClauseKind::OrderBy => {
                Part::Identifier(value_text(value))
            }
            ClauseKind::Where | ClauseKind::Having | ClauseKind::Limit => Part::BoundValue(value),
            ClauseKind::Values => Part::Row(vec![(None, value)]),
        }
    }

    /// Interpret one named value.
    ///
    /// For VALUES a lone named value is a single-column row; accumulation
    /// folds a whole call into one row before it gets here.
    pub(crate) fn named(&self, name: String, value: Value) -> Part {
        match self {
            ClauseKind::Options | ClauseKind::GroupBy => Part::Identifier(name),
            ClauseKind::Fields | ClauseKind::From => Part::aliased_value(name, value),
            ClauseKind::Where | ClauseKind::Having => Part::Condition {
                column: name,
                value,
            },
            ClauseKind::OrderBy => Part::Direction {
                direction: Direction::from_value(&value),
                column: name,
            },
            ClauseKind::Limit => Part::BoundValue(value),
            ClauseKind::Set => Part::Assignment {
                column: name,
                value,
            },
            ClauseKind::Values => Part::Row(vec![(Some(name), value)]),
        }
    }

    /// Short upper-case name, e.g. `GROUP_BY`.
    pub fn name(&self) -> &'static str {
        match self {
            ClauseKind::Options => "OPTIONS",
            ClauseKind::Fields => "FIELDS",
            ClauseKind::From => "FROM",
            ClauseKind::Where => "WHERE",
            ClauseKind::GroupBy => "GROUP_BY",
            ClauseKind::Having => "HAVING",
            ClauseKind::OrderBy => "ORDER_BY",
            ClauseKind::Limit => "LIMIT",
            ClauseKind::Set => "SET",
            ClauseKind::Values => "VALUES",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text of a value used where a name or fragment is expected.
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
