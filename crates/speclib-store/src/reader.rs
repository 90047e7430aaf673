//! Cursor-based unit tree reader.
//!
//! Each open unit keeps a cursor. Looking up a property or child unit scans
//! forward from the cursor, and a successful lookup moves the cursor past the
//! entry it found. Entries skipped over are ignored, which lets older layouts
//! be read by name without knowing every property they contain.

use tracing::trace;

use crate::archive::Archive;
use crate::error::StoreError;
use crate::unit::{Entry, Unit, Value};

#[derive(Debug)]
struct Frame<'a> {
    unit: &'a Unit,
    cursor: usize,
}

/// Reads a [`Unit`] tree produced by a [`UnitWriter`](crate::UnitWriter).
#[derive(Debug)]
pub struct UnitReader<'a> {
    root: &'a Unit,
    root_opened: bool,
    frames: Vec<Frame<'a>>,
}

impl<'a> UnitReader<'a> {
    /// Create a reader positioned before the root unit.
    pub fn new(root: &'a Unit) -> Self {
        Self {
            root,
            root_opened: false,
            frames: Vec::new(),
        }
    }

    /// Version of the innermost open unit.
    pub fn version(&self) -> Option<f64> {
        self.frames.last().map(|f| f.unit.version)
    }

    /// Name of the innermost open unit.
    pub fn unit_name(&self) -> Option<&'a str> {
        self.frames.last().map(|f| f.unit.name.as_str())
    }

    /// Number of units currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Open the next unit named `name`, or return `None` without moving when
    /// there is none.
    pub fn try_begin_unit(
        &mut self,
        name: &str,
        max_version: f64,
    ) -> Result<Option<f64>, StoreError> {
        let unit = match self.frames.last_mut() {
            None => {
                if self.root_opened {
                    return Err(StoreError::malformed(format!(
                        "unit `{name}` requested after the root unit was closed"
                    )));
                }
                if self.root.name != name {
                    return Ok(None);
                }
                self.root_opened = true;
                self.root
            }
            Some(frame) => {
                let parent = frame.unit;
                let found = parent
                    .entries
                    .iter()
                    .enumerate()
                    .skip(frame.cursor)
                    .find_map(|(i, e)| match e {
                        Entry::Unit(u) if u.name == name => Some((i, u)),
                        _ => None,
                    });
                match found {
                    Some((i, u)) => {
                        frame.cursor = i + 1;
                        u
                    }
                    None => return Ok(None),
                }
            }
        };

        check_version(unit, max_version)?;
        trace!(unit = name, version = unit.version, depth = self.frames.len(), "begin unit");
        self.frames.push(Frame { unit, cursor: 0 });
        Ok(Some(unit.version))
    }

    /// Verify that every opened unit has been closed.
    pub fn finish(self) -> Result<(), StoreError> {
        if let Some(frame) = self.frames.last() {
            return Err(StoreError::malformed(format!(
                "unit `{}` was never closed",
                frame.unit.name
            )));
        }
        if !self.root_opened {
            return Err(StoreError::malformed(format!(
                "root unit `{}` was never read",
                self.root.name
            )));
        }
        Ok(())
    }

    // --- Property lookup ---

    fn find_property(&mut self, name: &str) -> Result<Option<&'a Value>, StoreError> {
        let frame = self.frames.last_mut().ok_or_else(|| {
            StoreError::malformed(format!("property `{name}` read outside of any unit"))
        })?;
        let unit = frame.unit;
        let found = unit
            .entries
            .iter()
            .enumerate()
            .skip(frame.cursor)
            .find_map(|(i, e)| match e {
                Entry::Property { name: n, value } if n == name => Some((i, value)),
                _ => None,
            });
        Ok(found.map(|(i, value)| {
            frame.cursor = i + 1;
            value
        }))
    }

    fn required(&mut self, name: &str) -> Result<&'a Value, StoreError> {
        match self.find_property(name)? {
            Some(value) => Ok(value),
            None => Err(StoreError::MissingField {
                unit: self.unit_name().unwrap_or_default().to_string(),
                name: name.to_string(),
            }),
        }
    }

    pub fn read_bool(&mut self, name: &str) -> Result<bool, StoreError> {
        let value = self.required(name)?;
        as_bool(name, value)
    }

    pub fn read_integer(&mut self, name: &str) -> Result<i64, StoreError> {
        let value = self.required(name)?;
        as_integer(name, value)
    }

    pub fn read_float(&mut self, name: &str) -> Result<f64, StoreError> {
        let value = self.required(name)?;
        as_float(name, value)
    }

    pub fn read_string(&mut self, name: &str) -> Result<String, StoreError> {
        let value = self.required(name)?;
        as_string(name, value)
    }

    pub fn read_bool_opt(&mut self, name: &str) -> Result<Option<bool>, StoreError> {
        self.find_property(name)?
            .map(|v| as_bool(name, v))
            .transpose()
    }

    pub fn read_integer_opt(&mut self, name: &str) -> Result<Option<i64>, StoreError> {
        self.find_property(name)?
            .map(|v| as_integer(name, v))
            .transpose()
    }

    pub fn read_float_opt(&mut self, name: &str) -> Result<Option<f64>, StoreError> {
        self.find_property(name)?
            .map(|v| as_float(name, v))
            .transpose()
    }

    pub fn read_string_opt(&mut self, name: &str) -> Result<Option<String>, StoreError> {
        self.find_property(name)?
            .map(|v| as_string(name, v))
            .transpose()
    }
}

fn check_version(unit: &Unit, max_version: f64) -> Result<(), StoreError> {
    if !unit.version.is_finite() || unit.version <= 0.0 {
        return Err(StoreError::malformed(format!(
            "unit `{}` has invalid version {}",
            unit.name, unit.version
        )));
    }
    if unit.version > max_version {
        return Err(StoreError::UnsupportedVersion {
            unit: unit.name.clone(),
            found: unit.version,
            max: max_version,
        });
    }
    Ok(())
}

fn mismatch(name: &str, expected: &'static str, found: &Value) -> StoreError {
    StoreError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

fn as_bool(name: &str, value: &Value) -> Result<bool, StoreError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch(name, "bool", other)),
    }
}

fn as_integer(name: &str, value: &Value) -> Result<i64, StoreError> {
    match value {
        Value::Integer(i) => Ok(*i),
        other => Err(mismatch(name, "integer", other)),
    }
}

fn as_float(name: &str, value: &Value) -> Result<f64, StoreError> {
    match value {
        Value::Float(x) => Ok(*x),
        Value::Integer(i) => Ok(*i as f64),
        other => Err(mismatch(name, "float", other)),
    }
}

fn as_string(name: &str, value: &Value) -> Result<String, StoreError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(name, "string", other)),
    }
}

impl Archive for UnitReader<'_> {
    fn is_loading(&self) -> bool {
        true
    }

    fn begin_unit(&mut self, name: &str, version: f64) -> Result<f64, StoreError> {
        match self.try_begin_unit(name, version)? {
            Some(stored) => Ok(stored),
            None => Err(StoreError::malformed(format!(
                "expected unit `{name}` in `{}`",
                self.unit_name().unwrap_or("<document>")
            ))),
        }
    }

    fn end_unit(&mut self) -> Result<(), StoreError> {
        let frame = self
            .frames
            .pop()
            .ok_or_else(|| StoreError::malformed("end_unit without a matching begin_unit"))?;
        trace!(unit = %frame.unit.name, depth = self.frames.len(), "end unit");
        Ok(())
    }

    fn bool(&mut self, name: &str, value: &mut bool) -> Result<(), StoreError> {
        *value = self.read_bool(name)?;
        Ok(())
    }

    fn integer(&mut self, name: &str, value: &mut i64) -> Result<(), StoreError> {
        *value = self.read_integer(name)?;
        Ok(())
    }

    fn float(&mut self, name: &str, value: &mut f64) -> Result<(), StoreError> {
        *value = self.read_float(name)?;
        Ok(())
    }

    fn string(&mut self, name: &str, value: &mut String) -> Result<(), StoreError> {
        *value = self.read_string(name)?;
        Ok(())
    }
}
