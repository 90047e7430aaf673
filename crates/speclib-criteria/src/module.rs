//! The contract every criteria module implements.
//!
//! A module lists its persisted fields once, in [`CriteriaModule::exchange`].
//! Save, load, and report are all driven by that single list, so the three
//! cannot drift apart.

use std::fmt::Debug;

use speclib_store::{Archive, StoreError, UnitReader};

use crate::concrete::{ConcreteArray, ConcreteType};
use crate::difference::DifferenceItem;
use crate::edition::Edition;
use crate::report::{ReportArchive, ReportSink};

/// A named bundle of design-rule parameters with its own versioned unit.
pub trait CriteriaModule: Clone + Default + Debug {
    /// Name of the unit this module is stored in.
    const UNIT_NAME: &'static str;

    /// Highest unit version this build writes and reads.
    const VERSION: f64;

    /// Heading used when reporting.
    const TITLE: &'static str;

    /// Exchange every persisted field with `ar`, inside this module's unit.
    ///
    /// `version` is [`Self::VERSION`] when saving and the stored unit version
    /// when loading. Fields introduced at version `N` must only be exchanged
    /// when `version >= N`.
    fn exchange(&mut self, ar: &mut dyn Archive, version: f64) -> Result<(), StoreError>;

    /// Append one group-level item to `diffs` for every rule group that
    /// differs from `other`. Returns `true` when nothing was appended.
    fn compare(
        &self,
        other: &Self,
        edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool;

    /// Write this module as a unit.
    fn save(&self, ar: &mut dyn Archive) -> Result<(), StoreError> {
        let mut fields = self.clone();
        ar.begin_unit(Self::UNIT_NAME, Self::VERSION)?;
        fields.exchange(ar, Self::VERSION)?;
        ar.end_unit()
    }

    /// Read a fresh value from the next unit named [`Self::UNIT_NAME`].
    fn read(reader: &mut UnitReader<'_>) -> Result<Self, StoreError> {
        let mut value = Self::default();
        let version = reader.begin_unit(Self::UNIT_NAME, Self::VERSION)?;
        value.exchange(&mut *reader, version)?;
        reader.end_unit()?;
        Ok(value)
    }

    /// Replace `self` with the next stored unit. On error `self` is unchanged.
    fn load(&mut self, reader: &mut UnitReader<'_>) -> Result<(), StoreError> {
        *self = Self::read(reader)?;
        Ok(())
    }

    /// Write every persisted field to `sink` under a heading. Modules with
    /// fields that only apply in some editions override this.
    fn report(&self, _edition: Edition, sink: &mut dyn ReportSink) -> Result<(), StoreError> {
        sink.heading(Self::TITLE);
        let mut ar = ReportArchive::new(sink);
        self.save(&mut ar)
    }
}

/// An enumeration stored as its underlying integer.
pub trait StoredEnum: Copy + Sized {
    /// Type name used in error messages.
    const KIND: &'static str;

    fn to_stored(self) -> i64;

    fn from_stored(value: i64) -> Option<Self>;
}

/// Define a closed enumeration with fixed stored integers and display labels.
macro_rules! stored_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::module::StoredEnum for $name {
            const KIND: &'static str = stringify!($name);

            fn to_stored(self) -> i64 {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            fn from_stored(value: i64) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( $name::$variant => f.write_str($label) ),+
                }
            }
        }
    };
}

pub(crate) use stored_enum;

/// Exchange an enum as its stored integer, rejecting out-of-range values.
pub fn exchange_enum<E: StoredEnum>(
    ar: &mut dyn Archive,
    name: &str,
    value: &mut E,
) -> Result<(), StoreError> {
    let mut stored = value.to_stored();
    ar.integer(name, &mut stored)?;
    if ar.is_loading() {
        *value = decode_enum(name, stored)?;
    }
    Ok(())
}

/// Map a stored integer back to its enum value.
pub fn decode_enum<E: StoredEnum>(name: &str, stored: i64) -> Result<E, StoreError> {
    E::from_stored(stored).ok_or_else(|| StoreError::InvalidEnumValue {
        name: name.to_string(),
        kind: E::KIND,
        value: stored,
    })
}

/// Exchange a non-negative count.
pub fn exchange_count(ar: &mut dyn Archive, name: &str, value: &mut u32) -> Result<(), StoreError> {
    let mut stored = i64::from(*value);
    ar.integer(name, &mut stored)?;
    if ar.is_loading() {
        *value = u32::try_from(stored).map_err(|_| StoreError::InvalidEnumValue {
            name: name.to_string(),
            kind: "count",
            value: stored,
        })?;
    }
    Ok(())
}

/// Exchange the given slots of a concrete-type array as a sub-unit with one
/// property per concrete type.
pub fn exchange_concrete(
    ar: &mut dyn Archive,
    unit: &str,
    values: &mut ConcreteArray<f64>,
    types: &[ConcreteType],
) -> Result<(), StoreError> {
    ar.begin_unit(unit, 1.0)?;
    for &ct in types {
        ar.float(ct.key(), &mut values[ct])?;
    }
    ar.end_unit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use speclib_store::{Unit, UnitWriter, Value};

    stored_enum! {
        enum Fruit {
            #[default]
            Apple = 0 => "apple",
            Pear = 1 => "pear",
            Plum = 5 => "plum",
        }
    }

    #[test]
    fn stored_enum_mapping() {
        assert_eq!(Fruit::Plum.to_stored(), 5);
        assert_eq!(Fruit::from_stored(1), Some(Fruit::Pear));
        assert_eq!(Fruit::from_stored(2), None);
        assert_eq!(Fruit::default(), Fruit::Apple);
        assert_eq!(Fruit::Pear.to_string(), "pear");
        assert_eq!(Fruit::KIND, "Fruit");
    }

    #[test]
    fn exchange_enum_round_trip() {
        let mut w = UnitWriter::new();
        w.begin_unit("U", 1.0).unwrap();
        exchange_enum(&mut w, "Fruit", &mut Fruit::Plum).unwrap();
        w.end_unit().unwrap();
        let root = w.finish().unwrap();
        assert_eq!(root.property("Fruit"), Some(&Value::Integer(5)));

        let mut r = UnitReader::new(&root);
        r.begin_unit("U", 1.0).unwrap();
        let mut fruit = Fruit::Apple;
        exchange_enum(&mut r, "Fruit", &mut fruit).unwrap();
        assert_eq!(fruit, Fruit::Plum);
    }

    #[test]
    fn out_of_range_enum_rejected() {
        let root = Unit::new("U", 1.0).with_property("Fruit", Value::Integer(9));
        let mut r = UnitReader::new(&root);
        r.begin_unit("U", 1.0).unwrap();
        let mut fruit = Fruit::Apple;
        let err = exchange_enum(&mut r, "Fruit", &mut fruit).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidEnumValue { value: 9, kind: "Fruit", .. }
        ));
        assert_eq!(fruit, Fruit::Apple);
    }

    #[test]
    fn negative_count_rejected() {
        let root = Unit::new("U", 1.0).with_property("N", Value::Integer(-1));
        let mut r = UnitReader::new(&root);
        r.begin_unit("U", 1.0).unwrap();
        let mut n = 4;
        assert!(exchange_count(&mut r, "N", &mut n).is_err());
    }
}
