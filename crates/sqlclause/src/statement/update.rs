//! UPDATE statement builder.

use super::traits::Statement;
use super::{Pieces, table_clause};
use crate::clause::{Clause, Direction, Generated};
use crate::error::{ClauseError, ClauseResult};
use crate::format::Format;
use crate::trace::TraceConfig;
use serde_json::Value;

/// UPDATE builder.
///
/// Renders OPTIONS, table, SET, WHERE, ORDER BY, LIMIT. SET is required.
#[derive(Clone, Debug)]
#[must_use]
pub struct Update {
    table: Clause,
    options: Clause,
    set: Clause,
    where_clause: Clause,
    order_by: Clause,
    limit: Clause,
    trace: TraceConfig,
}

impl Update {
    /// Create a new UPDATE builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table_clause(table),
            options: Clause::options(),
            set: Clause::set(),
            where_clause: Clause::where_(),
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

    pub fn options_mut(&mut self) -> &mut Clause {
        &mut self.options
    }

    pub fn set_mut(&mut self) -> &mut Clause {
        &mut self.set
    }

    pub fn where_mut(&mut self) -> &mut Clause {
        &mut self.where_clause
    }

    pub fn order_by_mut(&mut self) -> &mut Clause {
        &mut self.order_by
    }

    pub fn limit_mut(&mut self) -> &mut Clause {
        &mut self.limit
    }

    /// Add a statement option, e.g. `LOW_PRIORITY`.
    pub fn option(mut self, option: &str) -> Self {
        self.options.push(option);
        self
    }

    /// Add SET: column = value
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.set.push_named(column, value);
        self
    }

    /// Add a raw SET expression, e.g. `` `hits`=`hits`+1 ``.
    pub fn set_raw(mut self, expr: &str) -> Self {
        self.set.push(expr);
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

    /// Add an ORDER BY column with a direction.
    pub fn order_by_dir(mut self, column: &str, direction: Direction) -> Self {
        self.order_by.push_named(column, direction);
        self
    }

    /// Set LIMIT (replaces any previous LIMIT).
    pub fn limit(mut self, limit: impl Into<Value>) -> Self {
        self.limit = Clause::limit();
        self.limit.push(limit);
        self
    }
}

impl Statement for Update {
    fn verb(&self) -> &'static str {
        "UPDATE"
    }

    fn render_with(&self, fmt: &Format) -> Generated {
        let mut pieces = Pieces::new(self.verb(), fmt);
        pieces
            .clause(&self.options)
            .clause(&self.table)
            .clause(&self.set)
            .clause(&self.where_clause)
            .clause(&self.order_by)
            .clause(&self.limit);
        pieces.finish()
    }

    fn trace_config(&self) -> &TraceConfig {
        &self.trace
    }

    fn validate(&self) -> ClauseResult<()> {
        if !self.set.is_present() {
            return Err(ClauseError::validation(
                "Update: SET clause cannot be empty",
            ));
        }
        Ok(())
    }
}
