//! # sqlclause
//!
//! Composable SQL clauses rendered to MySQL-style text plus an ordered list of
//! bound arguments, ready for a prepared-statement API.
//!
//! ## Features
//!
//! - **Clauses as data**: OPTIONS, FIELDS, FROM, WHERE, GROUP BY, HAVING,
//!   ORDER BY, LIMIT, SET and VALUES share one accumulate/generate contract
//! - **Placeholders in order**: every bound value renders as `%s`, and the
//!   argument list always matches placeholders left to right
//! - **Backtick quoting**: identifiers are quoted per dotted segment
//! - **Pretty printing**: `generate(indent, count)` lays clauses out over
//!   multiple lines, nested `count` levels deep
//! - **Statements**: SELECT / INSERT / UPDATE / DELETE builders that
//!   concatenate clauses in a fixed order
//!
//! ## Example
//!
//! ```ignore
//! use sqlclause::{Clause, ASC, DESC};
//!
//! let mut order = Clause::order_by();
//! order.accumulate(["people"], [("stuff", ASC), ("things", DESC)]);
//! order.generate(0, 0);
//! assert_eq!(order.sql(), "ORDER BY `people`,`stuff` ASC,`things` DESC");
//!
//! let mut set = Clause::set();
//! set.push_named("fee", "fie").push_named("foe", "fum");
//! let generated = set.generate(0, 0);
//! assert_eq!(generated.sql, "SET `fee`=%s,`foe`=%s");
//! assert_eq!(generated.args, ["fie", "fum"]);
//! ```

pub mod clause;
pub mod error;
pub mod format;
pub mod ident;
pub mod param;
pub mod statement;
pub mod trace;

pub use clause::{ASC, Clause, ClauseKind, DESC, Direction, Generated, Part, RowEntry};
pub use error::{ClauseError, ClauseResult};
pub use format::Format;
pub use ident::{Ident, PLACEHOLDER, quote};
pub use param::ParamList;
pub use statement::{Delete, Insert, Select, Statement, Update, delete, insert, select, update};
pub use trace::TraceConfig;

// Re-export the value type used for bound arguments.
pub use serde_json::Value;
