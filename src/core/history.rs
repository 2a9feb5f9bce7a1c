//! History of completed computations.
//!
//! Provides an immutable, ordered log of the expressions evaluated with
//! `=`, following functional programming principles.

use serde::{Deserialize, Serialize};

/// Record of a single completed computation.
///
/// Entries are immutable values: the rendered expression and the number
/// it evaluated to.
///
/// # Example
///
/// ```rust
/// use tally::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("5 + 3", 8.0);
/// assert_eq!(entry.expression(), "5 + 3");
/// assert_eq!(entry.result(), 8.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    expression: String,
    #[serde(with = "crate::core::serde_float")]
    result: f64,
}

impl HistoryEntry {
    /// Create an entry from a rendered expression and its result.
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    /// The expression as shown in the history panel, e.g. `"5 + 3"`.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The value the expression evaluated to.
    pub fn result(&self) -> f64 {
        self.result
    }
}

/// Ordered log of completed computations, most recent last.
///
/// The log is immutable - `record` returns a new log with the entry
/// appended. Only replacing the whole log removes entries.
///
/// # Example
///
/// ```rust
/// use tally::core::{HistoryEntry, HistoryLog};
///
/// let log = HistoryLog::new();
/// let log = log.record(HistoryEntry::new("5 + 3", 8.0));
/// let log = log.record(HistoryEntry::new("8 * 2", 16.0));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.last().map(|e| e.result()), Some(16.0));
/// assert_eq!(log.results(), vec![8.0, 16.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, returning a new log.
    ///
    /// This is a pure function - the existing log is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{HistoryEntry, HistoryLog};
    ///
    /// let log = HistoryLog::new();
    /// let updated = log.record(HistoryEntry::new("1 + 1", 2.0));
    ///
    /// assert_eq!(updated.len(), 1);
    /// assert!(log.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterate entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded since the last full clear.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Entry at `index`, counting from the oldest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Results in insertion order, ready to feed back via reuse.
    pub fn results(&self) -> Vec<f64> {
        self.entries.iter().map(HistoryEntry::result).collect()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = HistoryLog::new();
        assert_eq!(log.len(), 0);
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert!(log.results().is_empty());
    }

    #[test]
    fn record_adds_entry() {
        let log = HistoryLog::new().record(HistoryEntry::new("2 * 3", 6.0));

        assert_eq!(log.len(), 1);
        assert_eq!(log.get(0).map(HistoryEntry::expression), Some("2 * 3"));
    }

    #[test]
    fn record_is_immutable() {
        let log = HistoryLog::new();
        let new_log = log.record(HistoryEntry::new("2 * 3", 6.0));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let log = HistoryLog::new()
            .record(HistoryEntry::new("1 + 1", 2.0))
            .record(HistoryEntry::new("2 + 2", 4.0))
            .record(HistoryEntry::new("4 + 4", 8.0));

        let expressions: Vec<&str> = log.iter().map(HistoryEntry::expression).collect();
        assert_eq!(expressions, vec!["1 + 1", "2 + 2", "4 + 4"]);
        assert_eq!(log.last().map(HistoryEntry::result), Some(8.0));
    }

    #[test]
    fn borrowed_log_iterates() {
        let log = HistoryLog::new().record(HistoryEntry::new("9 - 4", 5.0));
        let mut count = 0;
        for entry in &log {
            assert_eq!(entry.result(), 5.0);
            count += 1;
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn non_finite_results_serialize() {
        let log = HistoryLog::new()
            .record(HistoryEntry::new("1e+308 * 10", f64::INFINITY))
            .record(HistoryEntry::new("0 * Infinity", f64::NAN));

        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains(r#""result":"Infinity""#));
        assert!(json.contains(r#""result":"NaN""#));

        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.entries()[0], log.entries()[0]);
        assert!(deserialized.entries()[1].result().is_nan());
    }

    #[test]
    fn log_serializes_correctly() {
        let log = HistoryLog::new().record(HistoryEntry::new("5 + 3", 8.0));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();

        assert_eq!(log, deserialized);
    }
}
