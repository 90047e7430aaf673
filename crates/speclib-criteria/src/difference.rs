//! Difference items produced when comparing two criteria modules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Old and new values carried by a difference item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DifferencePayload {
    String { old: String, new: String },
    Index { old: i64, new: i64 },
    Double { old: f64, new: f64 },
    Bool { old: bool, new: bool },
}

/// One reported difference, always labelled with the rule it concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceItem {
    pub item: String,
    pub payload: DifferencePayload,
}

impl DifferenceItem {
    /// A group-level item with no values.
    pub fn group(label: impl Into<String>) -> Self {
        Self::string(label, "", "")
    }

    pub fn string(label: impl Into<String>, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            item: label.into(),
            payload: DifferencePayload::String {
                old: old.into(),
                new: new.into(),
            },
        }
    }

    pub fn index(label: impl Into<String>, old: i64, new: i64) -> Self {
        Self {
            item: label.into(),
            payload: DifferencePayload::Index { old, new },
        }
    }

    pub fn double(label: impl Into<String>, old: f64, new: f64) -> Self {
        Self {
            item: label.into(),
            payload: DifferencePayload::Double { old, new },
        }
    }

    pub fn bool(label: impl Into<String>, old: bool, new: bool) -> Self {
        Self {
            item: label.into(),
            payload: DifferencePayload::Bool { old, new },
        }
    }

    /// The receiver's value, formatted.
    pub fn old_value(&self) -> String {
        match &self.payload {
            DifferencePayload::String { old, .. } => old.clone(),
            DifferencePayload::Index { old, .. } => old.to_string(),
            DifferencePayload::Double { old, .. } => old.to_string(),
            DifferencePayload::Bool { old, .. } => yes_no(*old).to_string(),
        }
    }

    /// The other side's value, formatted.
    pub fn new_value(&self) -> String {
        match &self.payload {
            DifferencePayload::String { new, .. } => new.clone(),
            DifferencePayload::Index { new, .. } => new.to_string(),
            DifferencePayload::Double { new, .. } => new.to_string(),
            DifferencePayload::Bool { new, .. } => yes_no(*new).to_string(),
        }
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for DifferenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (old, new) = (self.old_value(), self.new_value());
        if old.is_empty() && new.is_empty() {
            write!(f, "{}", self.item)
        } else {
            write!(f, "{}: {} -> {}", self.item, old, new)
        }
    }
}

/// Accumulates differences for one compare call.
///
/// ```ignore
/// let mut d = DiffCollector::new(diffs, stop_on_first);
/// if d.group(a != b, "Rule A is different") {
///     return false;
/// }
/// d.finish()
/// ```
#[derive(Debug)]
pub struct DiffCollector<'a> {
    diffs: &'a mut Vec<DifferenceItem>,
    start: usize,
    stop_on_first: bool,
}

impl<'a> DiffCollector<'a> {
    pub fn new(diffs: &'a mut Vec<DifferenceItem>, stop_on_first: bool) -> Self {
        let start = diffs.len();
        Self {
            diffs,
            start,
            stop_on_first,
        }
    }

    /// Record a group-level difference when `differs`. Returns `true` when the
    /// caller should stop comparing.
    pub fn group(&mut self, differs: bool, label: &str) -> bool {
        if differs {
            self.push(DifferenceItem::group(label))
        } else {
            false
        }
    }

    /// Record `item`. Returns `true` when the caller should stop comparing.
    pub fn push(&mut self, item: DifferenceItem) -> bool {
        self.diffs.push(item);
        self.stop_on_first
    }

    /// Run a nested compare into the same list. Returns `true` when the caller
    /// should stop comparing.
    pub fn nested(&mut self, compare: impl FnOnce(&mut Vec<DifferenceItem>, bool) -> bool) -> bool {
        let same = compare(&mut *self.diffs, self.stop_on_first);
        !same && self.stop_on_first
    }

    pub fn stop_on_first(&self) -> bool {
        self.stop_on_first
    }

    /// `true` when nothing was recorded.
    pub fn finish(self) -> bool {
        self.diffs.len() == self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            DifferenceItem::group("Units are different").to_string(),
            "Units are different"
        );
        assert_eq!(
            DifferenceItem::bool("Impact", false, true).to_string(),
            "Impact: No -> Yes"
        );
        assert_eq!(
            DifferenceItem::double("Limit", 1.5, 2.0).to_string(),
            "Limit: 1.5 -> 2"
        );
        assert_eq!(DifferenceItem::index("Count", 3, 4).new_value(), "4");
    }

    #[test]
    fn collector_continues_without_stop() {
        let mut diffs = Vec::new();
        let mut d = DiffCollector::new(&mut diffs, false);
        assert!(!d.group(true, "A"));
        assert!(!d.group(false, "B"));
        assert!(!d.group(true, "C"));
        assert!(!d.finish());
        let labels: Vec<_> = diffs.iter().map(|d| d.item.as_str()).collect();
        assert_eq!(labels, ["A", "C"]);
    }

    #[test]
    fn collector_stops_on_first() {
        let mut diffs = Vec::new();
        let mut d = DiffCollector::new(&mut diffs, true);
        assert!(!d.group(false, "A"));
        assert!(d.group(true, "B"));
        assert_eq!(diffs.len(), 1);
    }

    #[test]
    fn collector_ignores_earlier_items() {
        let mut diffs = vec![DifferenceItem::group("earlier")];
        let d = DiffCollector::new(&mut diffs, false);
        assert!(d.finish());
    }

    #[test]
    fn nested_compare() {
        let mut diffs = Vec::new();
        let mut d = DiffCollector::new(&mut diffs, true);
        let stop = d.nested(|diffs, _| {
            diffs.push(DifferenceItem::group("inner"));
            false
        });
        assert!(stop);
        assert!(!d.finish());
    }
}
