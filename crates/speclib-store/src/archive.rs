//! Bidirectional property exchange.
//!
//! A criteria module describes its persisted fields once, as a sequence of
//! calls against an [`Archive`]. The same sequence saves the fields when
//! driven by a [`UnitWriter`](crate::UnitWriter), loads them when driven by a
//! [`UnitReader`](crate::UnitReader), and prints them when driven by a report
//! archive.

use crate::error::StoreError;

/// A sink or source of named, typed properties grouped into versioned units.
///
/// Writers take values from the `&mut` arguments; readers overwrite them.
pub trait Archive {
    /// `true` when values flow from the store into the caller.
    fn is_loading(&self) -> bool;

    /// Open a unit. Writers record `version` and return it; readers return
    /// the stored version after checking it does not exceed `version`.
    fn begin_unit(&mut self, name: &str, version: f64) -> Result<f64, StoreError>;

    /// Close the innermost open unit.
    fn end_unit(&mut self) -> Result<(), StoreError>;

    fn bool(&mut self, name: &str, value: &mut bool) -> Result<(), StoreError>;

    fn integer(&mut self, name: &str, value: &mut i64) -> Result<(), StoreError>;

    fn float(&mut self, name: &str, value: &mut f64) -> Result<(), StoreError>;

    fn string(&mut self, name: &str, value: &mut String) -> Result<(), StoreError>;
}
