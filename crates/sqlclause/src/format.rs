//! Rendering configuration.

/// Pretty-printing settings for clause and statement generation.
///
/// `indent` is the number of spaces per nesting level and `count` is an
/// extra nesting offset, so a line nested `depth` levels deep starts at
/// column `indent * (count + depth)`. With `indent == 0` everything is
/// rendered on one line regardless of `count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format {
    /// Spaces per nesting level. `0` means single-line output (default).
    pub indent: usize,
    /// Additional nesting offset applied to every nested line.
    pub count: usize,
}

impl Format {
    /// Single-line rendering.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Multi-line rendering with `indent` spaces per level.
    pub fn pretty(indent: usize) -> Self {
        Self { indent, count: 0 }
    }

    /// Set the nesting offset.
    pub fn nested(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Whether this configuration produces multi-line output.
    pub fn is_multiline(&self) -> bool {
        self.indent > 0
    }

    /// Left margin for a line nested `depth` levels below the clause keyword.
    pub fn margin(&self, depth: usize) -> usize {
        self.indent * (self.count + depth)
    }

    /// Write the margin for `depth` into `out`.
    pub(crate) fn pad(&self, out: &mut String, depth: usize) {
        pad(out, self.margin(depth));
    }
}

pub(crate) fn pad(out: &mut String, width: usize) {
    out.extend(std::iter::repeat_n(' ', width));
}
