//! Ordered storage for bound arguments.

use serde_json::Value;

/// An ordered list of bound arguments.
///
/// Position `i` in the list matches the `i`-th placeholder (left to right)
/// of the SQL text it was collected alongside.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamList {
    params: Vec<Value>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a parameter and return its 1-based position.
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.params.push(value.into());
        self.params.len()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Borrow the parameters in placeholder order.
    pub fn as_slice(&self) -> &[Value] {
        &self.params
    }

    /// Extend this list with another list's parameters.
    pub fn extend(&mut self, other: &ParamList) {
        self.params.extend(other.params.iter().cloned());
    }

    /// Extend this list with parameters from an iterator.
    pub fn extend_values(&mut self, values: impl IntoIterator<Item = Value>) {
        self.params.extend(values);
    }

    /// Clear all parameters.
    pub fn clear(&mut self) {
        self.params.clear();
    }

    /// Consume the list, yielding the parameters in placeholder order.
    pub fn into_vec(self) -> Vec<Value> {
        self.params
    }
}

impl From<ParamList> for Vec<Value> {
    fn from(list: ParamList) -> Self {
        list.params
    }
}
