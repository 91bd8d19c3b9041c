//! Identifier quoting and placeholder conventions.
//!
//! Every identifier is rendered with MySQL backtick quoting and every bound
//! value is rendered as the single [`PLACEHOLDER`] token.
//!
//! - Dotted names quote each segment: `db.people` -> `` `db`.`people` ``
//! - A `*` segment stays bare: `people.*` -> `` `people`.* ``
//! - Segments already wrapped in backticks are taken verbatim (`` `a.b` `` is one segment)
//! - Text between a closing backtick and the next `.` joins that segment:
//!   `` a.`b.c`d.e `` -> `` `a`.`b.cd`.`e` ``
//! - Embedded backticks are escaped as ` `` `
//!
//! # Example
//! ```ignore
//! use sqlclause::ident::quote;
//!
//! assert_eq!(quote("db.people"), "`db`.`people`");
//! ```

/// Token standing in for each bound argument in generated SQL.
pub const PLACEHOLDER: &str = "%s";

/// Identifier quote character.
pub const QUOTE: char = '`';

/// A part of a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    /// A name, always rendered quoted.
    Name(String),
    /// The `*` wildcard, rendered bare.
    Wildcard,
}

/// A SQL identifier (column, table, or schema name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Parse an identifier string, splitting dotted names into segments.
    ///
    /// Parsing never fails: an unclosed backtick swallows the rest of the
    /// input into the final segment.
    pub fn parse(s: &str) -> Self {
        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        loop {
            let mut name = String::new();

            if chars.peek() == Some(&QUOTE) {
                chars.next(); // opening quote
                while let Some(c) = chars.next() {
                    if c == QUOTE {
                        // Escaped quote: ``
                        if chars.peek() == Some(&QUOTE) {
                            chars.next();
                            name.push(QUOTE);
                        } else {
                            break;
                        }
                    } else {
                        name.push(c);
                    }
                }
                // Anything between the closing quote and the next '.' belongs to this segment.
                while let Some(&c) = chars.peek() {
                    if c == '.' {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                parts.push(IdentPart::Name(name));
            } else {
                while let Some(&c) = chars.peek() {
                    if c == '.' {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                if name == "*" {
                    parts.push(IdentPart::Wildcard);
                } else {
                    parts.push(IdentPart::Name(name));
                }
            }

            match chars.next() {
                Some('.') => continue,
                _ => break,
            }
        }

        Self { parts }
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        let mut cap = self.parts.len().saturating_sub(1); // dots
        for part in &self.parts {
            match part {
                IdentPart::Name(s) => cap += s.len() + 2,
                IdentPart::Wildcard => cap += 1,
            }
        }
        let mut out = String::with_capacity(cap);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Wildcard => out.push('*'),
                IdentPart::Name(s) => {
                    out.push(QUOTE);
                    for ch in s.chars() {
                        if ch == QUOTE {
                            out.push(QUOTE);
                            out.push(QUOTE);
                        } else {
                            out.push(ch);
                        }
                    }
                    out.push(QUOTE);
                }
            }
        }
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Ident::parse(s)
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Ident::parse(&s)
    }
}

/// Quote a (possibly dotted) name.
pub fn quote(name: &str) -> String {
    Ident::parse(name).to_sql()
}

/// Append a quoted (possibly dotted) name to `out`.
pub(crate) fn write_quoted(out: &mut String, name: &str) {
    Ident::parse(name).write_sql(out);
}
