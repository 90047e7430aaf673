//! The unit tree: named, versioned containers of typed properties.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Short name of the value kind, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// One entry of a unit, in write order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    Property { name: String, value: Value },
    Unit(Unit),
}

/// A named unit carrying its own schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub version: f64,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Unit {
    /// Create an empty unit.
    pub fn new(name: impl Into<String>, version: f64) -> Self {
        Self {
            name: name.into(),
            version,
            entries: Vec::new(),
        }
    }

    /// Append a property (builder style).
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.push_property(name, value);
        self
    }

    /// Append a child unit (builder style).
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.entries.push(Entry::Unit(unit));
        self
    }

    /// Append a property.
    pub fn push_property(&mut self, name: impl Into<String>, value: Value) {
        self.entries.push(Entry::Property {
            name: name.into(),
            value,
        });
    }

    /// First property with the given name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find_map(|e| match e {
            Entry::Property { name: n, value } if n == name => Some(value),
            _ => None,
        })
    }

    /// First child unit with the given name.
    pub fn child(&self, name: &str) -> Option<&Unit> {
        self.units().find(|u| u.name == name)
    }

    /// Iterate over the direct child units.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Unit(u) => Some(u),
            Entry::Property { .. } => None,
        })
    }

    /// Number of properties directly in this unit.
    pub fn property_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Property { .. }))
            .count()
    }
}
