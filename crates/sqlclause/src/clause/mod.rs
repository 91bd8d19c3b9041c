//! SQL clauses.
//!
//! A [`Clause`] is an append-only list of [`Part`]s plus a [`ClauseKind`]
//! that decides how those parts render. Callers accumulate parts, then
//! generate the clause into SQL text and the matching bound arguments.
//!
//! # Example
//!
//! ```ignore
//! use sqlclause::{Clause, DESC};
//!
//! let mut order = Clause::order_by();
//! order.push("people").push_named("things", DESC);
//! order.generate(0, 0);
//! assert_eq!(order.sql(), "ORDER BY `people`,`things` DESC");
//!
//! let mut filter = Clause::where_();
//! filter.push_named("stuff", "things");
//! filter.generate(2, 0);
//! assert_eq!(filter.sql(), "WHERE\n  `stuff`=%s");
//! assert_eq!(filter.args(), ["things"]);
//! ```

mod kind;
mod part;

#[cfg(test)]
mod tests;

pub use kind::{ClauseKind, Joiner, KindSpec, Layout};
pub use part::{ASC, DESC, Direction, Part, RowEntry};

use crate::format::{Format, pad};
use crate::param::ParamList;
use serde::Serialize;
use serde_json::Value;

/// Rendered SQL text plus the bound arguments for its placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Generated {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Generated {
    /// Create from text and arguments.
    pub fn new(sql: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// Whether nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Split into `(sql, args)`.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

/// One SQL clause: an ordered list of parts and the rule to render them.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Clause {
    kind: ClauseKind,
    parts: Vec<Part>,
    generated: Generated,
}

impl Clause {
    /// Create an empty clause of the given kind.
    pub fn new(kind: ClauseKind) -> Self {
        Self {
            kind,
            parts: Vec::new(),
            generated: Generated::default(),
        }
    }

    /// Free-text statement options, e.g. `SQL_CALC_FOUND_ROWS`.
    pub fn options() -> Self {
        Self::new(ClauseKind::Options)
    }

    /// SELECT list.
    pub fn fields() -> Self {
        Self::new(ClauseKind::Fields)
    }

    /// `FROM` tables.
    pub fn from() -> Self {
        Self::new(ClauseKind::From)
    }

    /// `WHERE` predicates.
    pub fn where_() -> Self {
        Self::new(ClauseKind::Where)
    }

    /// `GROUP BY` columns.
    pub fn group_by() -> Self {
        Self::new(ClauseKind::GroupBy)
    }

    /// `HAVING` predicates.
    pub fn having() -> Self {
        Self::new(ClauseKind::Having)
    }

    /// `ORDER BY` columns.
    pub fn order_by() -> Self {
        Self::new(ClauseKind::OrderBy)
    }

    /// `LIMIT ... OFFSET ...`
    pub fn limit() -> Self {
        Self::new(ClauseKind::Limit)
    }

    /// `SET` assignments.
    pub fn set() -> Self {
        Self::new(ClauseKind::Set)
    }

    /// `VALUES` rows.
    pub fn values() -> Self {
        Self::new(ClauseKind::Values)
    }

    pub fn kind(&self) -> ClauseKind {
        self.kind
    }

    /// Accumulated parts in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// True iff at least one part has been accumulated.
    ///
    /// An absent clause renders to nothing and is skipped by statements.
    pub fn is_present(&self) -> bool {
        !self.parts.is_empty()
    }

    // ==================== Accumulation ====================

    /// Append parts from positional and named values.
    ///
    /// Positional values are appended first, then named values in iteration
    /// order. How each value becomes a part depends on the clause kind; a
    /// VALUES clause turns the whole call into a single row.
    pub fn accumulate<P, K, V>(
        &mut self,
        positional: impl IntoIterator<Item = P>,
        named: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        P: Into<Value>,
        K: Into<String>,
        V: Into<Value>,
    {
        if self.kind == ClauseKind::Values {
            let row: Vec<RowEntry> = positional
                .into_iter()
                .map(|v| (None, v.into()))
                .chain(named.into_iter().map(|(k, v)| (Some(k.into()), v.into())))
                .collect();
            if !row.is_empty() {
                self.parts.push(Part::Row(row));
            }
            return self;
        }

        for value in positional {
            let part = self.kind.positional(value.into());
            self.parts.push(part);
        }
        for (name, value) in named {
            let part = self.kind.named(name.into(), value.into());
            self.parts.push(part);
        }
        self
    }

    /// Append one positional value.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        let part = self.kind.positional(value.into());
        self.parts.push(part);
        self
    }

    /// Append one named value.
    pub fn push_named(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let part = self.kind.named(name.into(), value.into());
        self.parts.push(part);
        self
    }

    /// Append a pre-built part.
    pub fn push_part(&mut self, part: Part) -> &mut Self {
        self.parts.push(part);
        self
    }

    /// Append one VALUES row.
    ///
    /// Column order is the iteration order of `row`; a repeated column is
    /// kept, not merged. An empty row is ignored.
    pub fn row<K, V>(&mut self, row: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let row: Vec<RowEntry> = row
            .into_iter()
            .map(|(k, v)| (Some(k.into()), v.into()))
            .collect();
        if !row.is_empty() {
            self.parts.push(Part::Row(row));
        }
        self
    }

    /// Append a LIMIT and OFFSET pair.
    pub fn limit_offset(&mut self, limit: impl Into<Value>, offset: impl Into<Value>) -> &mut Self {
        self.parts.push(Part::BoundValue(limit.into()));
        self.parts.push(Part::BoundValue(offset.into()));
        self
    }

    // ==================== Generation ====================

    /// Render without touching clause state.
    pub fn render(&self, indent: usize, count: usize) -> Generated {
        self.render_with(&Format { indent, count })
    }

    /// Render with a [`Format`] without touching clause state.
    pub fn render_with(&self, fmt: &Format) -> Generated {
        if self.parts.is_empty() {
            return Generated::default();
        }

        let spec = self.kind.spec();
        let fmt = match spec.layout {
            Layout::Inline => Format::compact(),
            _ => *fmt,
        };
        let multiline = fmt.is_multiline();
        let parts = match spec.max_parts {
            Some(max) => &self.parts[..max.min(self.parts.len())],
            None => &self.parts[..],
        };

        let mut sql = String::new();
        let mut params = ParamList::new();

        match spec.keyword {
            Some(keyword) => {
                sql.push_str(keyword);
                if multiline {
                    sql.push('\n');
                    fmt.pad(&mut sql, 1);
                } else {
                    sql.push(' ');
                }
            }
            // The first bare entry sits one indent in; the offset only applies to continuation lines.
            None if multiline => pad(&mut sql, fmt.indent),
            None => {}
        }

        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                if !multiline {
                    sql.push_str(spec.joiner.inline());
                } else {
                    sql.push_str(spec.joiner.trailing());
                    if spec.joiner.breaks() {
                        sql.push('\n');
                        fmt.pad(&mut sql, 1);
                    }
                }
            }
            part.write_sql(&mut sql, &mut params, &fmt, 1);
        }

        Generated::new(sql, params.into_vec())
    }

    /// Render and keep the result as this clause's current `sql`/`args`.
    ///
    /// Arguments are rebuilt from scratch on every call.
    pub fn generate(&mut self, indent: usize, count: usize) -> &Generated {
        self.generate_with(&Format { indent, count })
    }

    /// [`generate`](Clause::generate) with a [`Format`].
    pub fn generate_with(&mut self, fmt: &Format) -> &Generated {
        self.generated = self.render_with(fmt);
        tracing::trace!(
            target: "sqlclause.clause",
            kind = %self.kind,
            parts = self.parts.len(),
            param_count = self.generated.args.len(),
            "generated clause"
        );
        &self.generated
    }

    /// SQL text from the last [`generate`](Clause::generate).
    pub fn sql(&self) -> &str {
        &self.generated.sql
    }

    /// Arguments from the last [`generate`](Clause::generate).
    pub fn args(&self) -> &[Value] {
        &self.generated.args
    }

    /// The last generated result.
    pub fn generated(&self) -> &Generated {
        &self.generated
    }
}
