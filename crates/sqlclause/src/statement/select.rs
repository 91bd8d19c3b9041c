//! SELECT statement builder.

use super::Pieces;
use super::traits::Statement;
use crate::clause::{Clause, Direction, Generated, Part};
use crate::format::Format;
use crate::trace::TraceConfig;
use serde_json::Value;

/// SELECT builder.
///
/// Clauses render in the order OPTIONS, FIELDS, FROM, WHERE, GROUP BY,
/// HAVING, ORDER BY, LIMIT. An empty field list renders as `*`.
#[derive(Clone, Debug)]
#[must_use]
pub struct Select {
    options: Clause,
    fields: Clause,
    from: Clause,
    where_clause: Clause,
    group_by: Clause,
    having: Clause,
    order_by: Clause,
    limit: Clause,
    trace: TraceConfig,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    /// Create an empty SELECT builder.
    pub fn new() -> Self {
        Self {
            options: Clause::options(),
            fields: Clause::fields(),
            from: Clause::from(),
            where_clause: Clause::where_(),
            group_by: Clause::group_by(),
            having: Clause::having(),
            order_by: Clause::order_by(),
            limit: Clause::limit(),
            trace: TraceConfig::default(),
        }
    }

    /// Override the `tracing` settings.
    pub fn trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    // ==================== Clause access ====================

    pub fn options_mut(&mut self) -> &mut Clause {
        &mut self.options
    }

    pub fn fields_mut(&mut self) -> &mut Clause {
        &mut self.fields
    }

    pub fn from_mut(&mut self) -> &mut Clause {
        &mut self.from
    }

    pub fn where_mut(&mut self) -> &mut Clause {
        &mut self.where_clause
    }

    pub fn group_by_mut(&mut self) -> &mut Clause {
        &mut self.group_by
    }

    pub fn having_mut(&mut self) -> &mut Clause {
        &mut self.having
    }

    pub fn order_by_mut(&mut self) -> &mut Clause {
        &mut self.order_by
    }

    pub fn limit_mut(&mut self) -> &mut Clause {
        &mut self.limit
    }

    // ==================== Consuming builder ====================

    /// Add a statement option, e.g. `SQL_CALC_FOUND_ROWS`.
    pub fn option(mut self, option: &str) -> Self {
        self.options.push(option);
        self
    }

    /// Add a select-list entry rendered verbatim (`*`, `COUNT(*)`).
    pub fn field(mut self, expr: &str) -> Self {
        self.fields.push(expr);
        self
    }

    /// Add `<quoted column> AS <quoted alias>`.
    pub fn field_as(mut self, column: &str, alias: &str) -> Self {
        self.fields.push_part(Part::aliased(column, alias));
        self
    }

    /// Add `<raw expression> AS <quoted alias>`.
    pub fn field_raw_as(mut self, expr: &str, alias: &str) -> Self {
        self.fields.push_part(Part::aliased_raw(expr, alias));
        self
    }

    /// Add a FROM table.
    pub fn from(mut self, table: &str) -> Self {
        self.from.push(table);
        self
    }

    /// Add an aliased FROM table.
    pub fn from_as(mut self, table: &str, alias: &str) -> Self {
        self.from.push_part(Part::aliased(table, alias));
        self
    }

    /// Add a bare WHERE placeholder bound to `value`.
    pub fn filter(mut self, value: impl Into<Value>) -> Self {
        self.where_clause.push(value);
        self
    }

    /// Add WHERE: column = value
    pub fn where_eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_clause.push_named(column, value);
        self
    }

    /// Add a GROUP BY column.
    pub fn group_by(mut self, column: &str) -> Self {
        self.group_by.push(column);
        self
    }

    /// Add a bare HAVING placeholder bound to `value`.
    pub fn having(mut self, value: impl Into<Value>) -> Self {
        self.having.push(value);
        self
    }

    /// Add HAVING: column = value
    pub fn having_eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.having.push_named(column, value);
        self
    }

    /// Add an ORDER BY column with no explicit direction.
    pub fn order_by(mut self, column: &str) -> Self {
        self.order_by.push(column);
        self
    }

    /// Add an ORDER BY column with a direction.
    pub fn order_by_dir(mut self, column: &str, direction: Direction) -> Self {
        self.order_by.push_named(column, direction);
        self
    }

    /// Set LIMIT (replaces any previous LIMIT/OFFSET).
    pub fn limit(mut self, limit: impl Into<Value>) -> Self {
        self.limit = Clause::limit();
        self.limit.push(limit);
        self
    }

    /// Set LIMIT and OFFSET (replaces any previous LIMIT/OFFSET).
    pub fn limit_offset(mut self, limit: impl Into<Value>, offset: impl Into<Value>) -> Self {
        self.limit = Clause::limit();
        self.limit.limit_offset(limit, offset);
        self
    }
}

impl Statement for Select {
    fn verb(&self) -> &'static str {
        "SELECT"
    }

    fn render_with(&self, fmt: &Format) -> Generated {
        let mut pieces = Pieces::new(self.verb(), fmt);
        pieces.clause(&self.options);
        if self.fields.is_present() {
            pieces.clause(&self.fields);
        } else {
            let mut star = Clause::fields();
            star.push("*");
            pieces.clause(&star);
        }
        pieces
            .clause(&self.from)
            .clause(&self.where_clause)
            .clause(&self.group_by)
            .clause(&self.having)
            .clause(&self.order_by)
            .clause(&self.limit);
        pieces.finish()
    }

    fn trace_config(&self) -> &TraceConfig {
        &self.trace
    }
}
