//! Truth assignments of variables.

use std::collections::BTreeMap;
use std::fmt;

/// A mapping from variable identifiers to boolean values, ordered by identifier.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Assignment {
    values: BTreeMap<String, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a bitmask: bit `i` of `mask` is the value of `ids[i]`.
    ///
    /// `ids` must hold at most 64 identifiers.
    ///
    /// ```
    /// use bool_sat::assignment::Assignment;
    ///
    /// let a = Assignment::from_mask(&["a", "b", "c"], 0b101);
    /// assert_eq!(a.get("a"), Some(true));
    /// assert_eq!(a.get("b"), Some(false));
    /// assert_eq!(a.get("c"), Some(true));
    /// ```
    pub fn from_mask(ids: &[&str], mask: u64) -> Self {
        debug_assert!(ids.len() <= 64);
        ids.iter()
            .enumerate()
            .map(|(i, &id)| (id.to_string(), mask & (1 << i) != 0))
            .collect()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: bool) {
        self.values.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.values.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(id, value)` pairs in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(id, &value)| (id.as_str(), value))
    }
}

impl FromIterator<(String, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Renders as `id: value, id: value, ...`.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", id, value)?;
        }
        Ok(())
    }
}
