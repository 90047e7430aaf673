//! Plain-text reporting of criteria values.

use speclib_store::{Archive, StoreError};

/// Write-only destination for formatted report text.
pub trait ReportSink {
    fn heading(&mut self, text: &str);

    fn line(&mut self, text: &str);
}

/// A [`ReportSink`] that accumulates into a `String`.
#[derive(Debug, Default, Clone)]
pub struct TextReport {
    text: String,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl ReportSink for TextReport {
    fn heading(&mut self, text: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(text);
        self.text.push('\n');
        self.text.push_str(&"=".repeat(text.chars().count()));
        self.text.push('\n');
    }

    fn line(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }
}

/// An [`Archive`] that prints each property as `name = value`, indented by
/// unit depth. Values are never modified.
pub struct ReportArchive<'a> {
    sink: &'a mut dyn ReportSink,
    depth: usize,
    omitted: &'static [&'static str],
}

impl<'a> ReportArchive<'a> {
    pub fn new(sink: &'a mut dyn ReportSink) -> Self {
        Self {
            sink,
            depth: 0,
            omitted: &[],
        }
    }

    /// Leave the named properties out of the report.
    pub fn omitting(mut self, names: &'static [&'static str]) -> Self {
        self.omitted = names;
        self
    }

    fn emit(&mut self, text: String) {
        let indent = "  ".repeat(self.depth.saturating_sub(1));
        self.sink.line(&format!("{indent}{text}"));
    }

    fn field(&mut self, name: &str, value: impl std::fmt::Display) {
        if !self.omitted.iter().any(|n| *n == name) {
            self.emit(format!("{name} = {value}"));
        }
    }
}

impl Archive for ReportArchive<'_> {
    fn is_loading(&self) -> bool {
        false
    }

    fn begin_unit(&mut self, name: &str, version: f64) -> Result<f64, StoreError> {
        // the module's own unit is already introduced by its heading
        if self.depth > 0 {
            self.emit(format!("[{name}]"));
        }
        self.depth += 1;
        Ok(version)
    }

    fn end_unit(&mut self) -> Result<(), StoreError> {
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or_else(|| StoreError::malformed("end_unit without a matching begin_unit"))?;
        Ok(())
    }

    fn bool(&mut self, name: &str, value: &mut bool) -> Result<(), StoreError> {
        self.field(name, if *value { "Yes" } else { "No" });
        Ok(())
    }

    fn integer(&mut self, name: &str, value: &mut i64) -> Result<(), StoreError> {
        self.field(name, value);
        Ok(())
    }

    fn float(&mut self, name: &str, value: &mut f64) -> Result<(), StoreError> {
        self.field(name, value);
        Ok(())
    }

    fn string(&mut self, name: &str, value: &mut String) -> Result<(), StoreError> {
        self.field(name, format!("{value:?}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_layout() {
        let mut report = TextReport::new();
        report.heading("Bearings");
        report.line("a = 1");
        report.heading("Creep");
        assert_eq!(
            report.as_str(),
            "Bearings\n========\na = 1\n\nCreep\n=====\n"
        );
    }

    #[test]
    fn archive_prints_nested_units() {
        let mut report = TextReport::new();
        {
            let mut ar = ReportArchive::new(&mut report);
            ar.begin_unit("Module", 1.0).unwrap();
            ar.bool("bCheck", &mut true).unwrap();
            ar.begin_unit("Sub", 1.0).unwrap();
            ar.float("Limit", &mut 0.5).unwrap();
            ar.end_unit().unwrap();
            ar.end_unit().unwrap();
            assert!(ar.end_unit().is_err());
        }
        assert_eq!(report.as_str(), "bCheck = Yes\n[Sub]\n  Limit = 0.5\n");
    }

    #[test]
    fn archive_omits_named_properties() {
        let mut report = TextReport::new();
        {
            let mut ar = ReportArchive::new(&mut report).omitting(&["Hidden"]);
            ar.begin_unit("Module", 1.0).unwrap();
            ar.float("Hidden", &mut 2.0).unwrap();
            ar.float("Shown", &mut 3.0).unwrap();
            ar.end_unit().unwrap();
        }
        assert_eq!(report.as_str(), "Shown = 3\n");
    }
}
