use crate::utils::{IDENTIFIER_FIELD, MIN_COLUMNS, STATUS_FIELD};

/// A single ledger record: an ordered sequence of string fields.
///
/// Rows are variable-width. Field 0 is the image identifier, field 2 the
/// status label; fields beyond that are opaque and preserved verbatim.
/// A row may be shorter than three fields until it is first touched by a
/// status update, which pads it with empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The image identifier (field 0), or empty for a degenerate empty row
    pub fn identifier(&self) -> &str {
        self.fields
            .get(IDENTIFIER_FIELD)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The status label (field 2), if the row is wide enough to have one
    pub fn status(&self) -> Option<&str> {
        self.fields.get(STATUS_FIELD).map(String::as_str)
    }

    /// Pad the row with empty fields until it has at least `width` fields
    pub fn ensure_width(&mut self, width: usize) {
        while self.fields.len() < width {
            self.fields.push(String::new());
        }
    }

    /// Set the status label, padding the row to minimum width first.
    ///
    /// Returns `true` if the stored value actually changed.
    pub fn set_status(&mut self, label: &str) -> bool {
        self.ensure_width(MIN_COLUMNS);
        if self.fields[STATUS_FIELD] == label {
            return false;
        }
        self.fields[STATUS_FIELD] = label.to_string();
        true
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        Row::new(fields.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_ensure_width_pads_short_row() {
        let mut r = row(&["img001"]);
        r.ensure_width(3);
        assert_eq!(r.fields(), &["img001", "", ""]);
    }

    #[test]
    fn test_ensure_width_leaves_wide_row_alone() {
        let mut r = row(&["img001", "a", "b", "c"]);
        r.ensure_width(3);
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn test_set_status_pads_and_reports_change() {
        let mut r = row(&["img001"]);
        assert!(r.set_status("Extracted"));
        assert_eq!(r.status(), Some("Extracted"));
        assert_eq!(r.fields()[1], "");
    }

    #[test]
    fn test_set_status_idempotent() {
        let mut r = row(&["img001", "x", "Extracted"]);
        assert!(!r.set_status("Extracted"));
    }

    #[test]
    fn test_set_status_overwrites_unrelated_value() {
        let mut r = row(&["img001", "x", "hand-edited"]);
        assert!(r.set_status("Partial"));
        assert_eq!(r.status(), Some("Partial"));
    }

    #[test]
    fn test_opaque_fields_preserved() {
        let mut r = row(&["img001", "x", "old", "keep", "these"]);
        r.set_status("Processed");
        assert_eq!(r.fields(), &["img001", "x", "Processed", "keep", "these"]);
    }
}
