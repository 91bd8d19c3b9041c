//! Statement builders composed from clauses.
//!
//! Each builder owns one [`Clause`] per slot and concatenates the present
//! ones in a fixed order, so the final argument list is every clause's
//! arguments in the same order as their text.
//!
//! # Usage
//!
//! ```ignore
//! use sqlclause::{statement, Statement, DESC};
//!
//! let q = statement::select()
//!     .field("id")
//!     .from("people")
//!     .where_eq("status", "active")
//!     .order_by_dir("created", DESC)
//!     .limit_offset(10, 20);
//!
//! let generated = q.generate(0, 0)?;
//! assert_eq!(
//!     generated.sql,
//!     "SELECT id FROM `people` WHERE `status`=%s ORDER BY `created` DESC LIMIT %s OFFSET %s"
//! );
//! assert_eq!(generated.args.len(), 3);
//! # Ok::<(), sqlclause::ClauseError>(())
//! ```

mod delete;
mod insert;
mod select;
mod traits;
mod update;


pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use traits::Statement;
pub use update::Update;

use crate::clause::{Clause, Generated, Part};
use crate::format::Format;
use crate::param::ParamList;

/// Create a SELECT builder.
pub fn select() -> Select {
    Select::new()
}

/// Create an INSERT builder for the given table.
pub fn insert(table: &str) -> Insert {
    Insert::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> Update {
    Update::new(table)
}

/// Create a DELETE builder for the given table.
///
/// DELETE without WHERE fails validation unless
/// [`allow_delete_all`](Delete::allow_delete_all) is set.
pub fn delete(table: &str) -> Delete {
    Delete::new(table)
}

/// Accumulates rendered pieces of one statement.
struct Pieces {
    fmt: Format,
    sql: Vec<String>,
    params: ParamList,
}

impl Pieces {
    fn new(verb: &str, fmt: &Format) -> Self {
        Self {
            fmt: *fmt,
            sql: vec![verb.to_string()],
            params: ParamList::new(),
        }
    }

    fn text(&mut self, sql: String) -> &mut Self {
        if !sql.is_empty() {
            self.sql.push(sql);
        }
        self
    }

    /// Append a clause; absent clauses contribute nothing.
    fn clause(&mut self, clause: &Clause) -> &mut Self {
        if clause.is_present() {
            let (sql, args) = clause.render_with(&self.fmt).into_parts();
            self.sql.push(sql);
            self.params.extend_values(args);
        }
        self
    }

    fn finish(self) -> Generated {
        let sep = if self.fmt.is_multiline() { "\n" } else { " " };
        Generated::new(self.sql.join(sep), self.params.into_vec())
    }
}

/// A bare one-entry clause naming a table, laid out like the SELECT list.
fn table_clause(table: &str) -> Clause {
    let mut clause = Clause::fields();
    clause.push_part(Part::Identifier(table.to_string()));
    clause
}
