//! DELETE statement builder.

use super::Pieces;
use super::traits::Statement;
use crate::clause::{Clause, Direction, Generated};
use crate::error::{ClauseError, ClauseResult};
use crate::format::Format;
use crate::trace::TraceConfig;
use serde_json::Value;

/// DELETE builder.
///
/// Renders OPTIONS, FROM, WHERE, ORDER BY, LIMIT.
#[derive(Clone, Debug)]
#[must_use]
pub struct Delete {
    options: Clause,
    from: Clause,
    where_clause: Clause,
    order_by: Clause,
    limit: Clause,
    /// Whether to allow DELETE without WHERE (dangerous!)
    allow_delete_all: bool,
    trace: TraceConfig,
}

impl Delete {
    /// Create a new DELETE builder.
    pub fn new(table: &str) -> Self {
        let mut from = Clause::from();
        from.push(table);
        Self {
            options: Clause::options(),
            from,
            where_clause: Clause::where_(),
            order_by: Clause::order_by(),
            limit: Clause::limit(),
            allow_delete_all: false,
            trace: TraceConfig::default(),
        }
    }

    /// Allow DELETE without WHERE conditions (dangerous!).
    ///
    /// By default, generating a DELETE without WHERE is a validation error.
    pub fn allow_delete_all(mut self, allow: bool) -> Self {
        self.allow_delete_all = allow;
        self
    }

    /// Override the `tracing` settings.
    pub fn trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    pub fn options_mut(&mut self) -> &mut Clause {
        &mut self.options
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

    /// Add a statement option, e.g. `QUICK`.
    pub fn option(mut self, option: &str) -> Self {
        self.options.push(option);
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

impl Statement for Delete {
    fn verb(&self) -> &'static str {
        "DELETE"
    }

    fn render_with(&self, fmt: &Format) -> Generated {
        let mut pieces = Pieces::new(self.verb(), fmt);
        pieces
            .clause(&self.options)
            .clause(&self.from)
            .clause(&self.where_clause)
            .clause(&self.order_by)
            .clause(&self.limit);
        pieces.finish()
    }

    fn trace_config(&self) -> &TraceConfig {
        &self.trace
    }

    fn validate(&self) -> ClauseResult<()> {
        if !self.where_clause.is_present() && !self.allow_delete_all {
            return Err(ClauseError::validation(
                "Delete: WHERE clause required (use allow_delete_all to override)",
            ));
        }
        Ok(())
    }
}
