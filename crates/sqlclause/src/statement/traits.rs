//! Trait shared by the statement builders.

use crate::clause::Generated;
use crate::error::ClauseResult;
use crate::format::Format;
use crate::trace::TraceConfig;

/// A complete SQL statement built from clauses.
pub trait Statement {
    /// Leading keyword, e.g. `SELECT`.
    fn verb(&self) -> &'static str;

    /// Render without validation.
    fn render_with(&self, fmt: &Format) -> Generated;

    /// `tracing` settings for [`generate_with`](Statement::generate_with).
    fn trace_config(&self) -> &TraceConfig;

    /// Validate builder state before generation.
    fn validate(&self) -> ClauseResult<()> {
        Ok(())
    }

    /// Validate, then render SQL text and arguments.
    fn generate(&self, indent: usize, count: usize) -> ClauseResult<Generated> {
        self.generate_with(&Format { indent, count })
    }

    /// [`generate`](Statement::generate) with a [`Format`].
    fn generate_with(&self, fmt: &Format) -> ClauseResult<Generated> {
        self.validate()?;
        let generated = self.render_with(fmt);
        self.trace_config().emit(self.verb(), &generated);
        Ok(generated)
    }

    /// Debug helper: single-line SQL without validation.
    fn to_sql(&self) -> String {
        self.render_with(&Format::compact()).sql
    }
}
