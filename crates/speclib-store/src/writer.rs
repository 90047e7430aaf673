//! Unit tree writer with enforced LIFO nesting.

use tracing::trace;

use crate::archive::Archive;
use crate::error::StoreError;
use crate::unit::{Entry, Unit, Value};

/// Builds a single-rooted [`Unit`] tree.
///
/// Every `begin_unit` must be matched by an `end_unit` before [`finish`](Self::finish)
/// succeeds; properties may only be written inside an open unit.
#[derive(Debug, Default)]
pub struct UnitWriter {
    open: Vec<Unit>,
    root: Option<Unit>,
}

impl UnitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of units currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Write a property into the innermost open unit. Floats must be finite.
    pub fn property(&mut self, name: &str, value: Value) -> Result<(), StoreError> {
        if let Value::Float(v) = value {
            if !v.is_finite() {
                return Err(StoreError::NonFiniteFloat {
                    name: name.to_string(),
                    value: v,
                });
            }
        }
        let unit = self.open.last_mut().ok_or_else(|| {
            StoreError::malformed(format!("property `{name}` written outside of any unit"))
        })?;
        unit.entries.push(Entry::Property {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    /// Close the writer and return the root unit.
    pub fn finish(self) -> Result<Unit, StoreError> {
        if let Some(unit) = self.open.last() {
            return Err(StoreError::malformed(format!(
                "unit `{}` is still open",
                unit.name
            )));
        }
        self.root
            .ok_or_else(|| StoreError::malformed("no unit was written"))
    }
}

impl Archive for UnitWriter {
    fn is_loading(&self) -> bool {
        false
    }

    fn begin_unit(&mut self, name: &str, version: f64) -> Result<f64, StoreError> {
        if self.open.is_empty() && self.root.is_some() {
            return Err(StoreError::malformed(format!(
                "unit `{name}` would be a second root unit"
            )));
        }
        trace!(unit = name, version, depth = self.open.len(), "begin unit");
        self.open.push(Unit::new(name, version));
        Ok(version)
    }

    fn end_unit(&mut self) -> Result<(), StoreError> {
        let unit = self
            .open
            .pop()
            .ok_or_else(|| StoreError::malformed("end_unit without a matching begin_unit"))?;
        trace!(unit = %unit.name, depth = self.open.len(), "end unit");
        match self.open.last_mut() {
            Some(parent) => parent.entries.push(Entry::Unit(unit)),
            None => self.root = Some(unit),
        }
        Ok(())
    }

    fn bool(&mut self, name: &str, value: &mut bool) -> Result<(), StoreError> {
        self.property(name, Value::Bool(*value))
    }

    fn integer(&mut self, name: &str, value: &mut i64) -> Result<(), StoreError> {
        self.property(name, Value::Integer(*value))
    }

    fn float(&mut self, name: &str, value: &mut f64) -> Result<(), StoreError> {
        self.property(name, Value::Float(*value))
    }

    fn string(&mut self, name: &str, value: &mut String) -> Result<(), StoreError> {
        self.property(name, Value::String(value.clone()))
    }
}
