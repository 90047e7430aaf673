//! Concrete types and fixed arrays indexed by them.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::edition::Edition;

/// Closed enumeration of concrete classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConcreteType {
    Normal,
    SandLightweight,
    AllLightweight,
    PciUhpc,
    Uhpc,
}

impl ConcreteType {
    pub const COUNT: usize = 5;

    pub const ALL: [ConcreteType; Self::COUNT] = [
        ConcreteType::Normal,
        ConcreteType::SandLightweight,
        ConcreteType::AllLightweight,
        ConcreteType::PciUhpc,
        ConcreteType::Uhpc,
    ];

    /// Conventional concrete types, the ones persisted before UHPC support.
    pub const CONVENTIONAL: [ConcreteType; 3] = [
        ConcreteType::Normal,
        ConcreteType::SandLightweight,
        ConcreteType::AllLightweight,
    ];

    /// First edition in which sand- and all-lightweight concrete are one class.
    pub const LIGHTWEIGHT_MERGED_IN: Edition = Edition::SeventhEditionWith2016Interims;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Persisted name.
    pub fn key(self) -> &'static str {
        match self {
            ConcreteType::Normal => "Normal",
            ConcreteType::SandLightweight => "SandLightweight",
            ConcreteType::AllLightweight => "AllLightweight",
            ConcreteType::PciUhpc => "PCI_UHPC",
            ConcreteType::Uhpc => "UHPC",
        }
    }

    /// `true` when sand- and all-lightweight concrete are distinct in `edition`.
    pub fn lightweight_is_split(edition: Edition) -> bool {
        edition < Self::LIGHTWEIGHT_MERGED_IN
    }

    /// Slot holding this type's value in `edition`. All-lightweight aliases
    /// the sand-lightweight slot once the two classes merge.
    pub fn storage_key(self, edition: Edition) -> ConcreteType {
        if self == ConcreteType::AllLightweight && !Self::lightweight_is_split(edition) {
            ConcreteType::SandLightweight
        } else {
            self
        }
    }

    /// Types with an independent slot in `edition`, out of `types`.
    pub fn distinct_in(edition: Edition, types: &[ConcreteType]) -> Vec<ConcreteType> {
        types
            .iter()
            .copied()
            .filter(|ct| ct.storage_key(edition) == *ct)
            .collect()
    }
}

/// One value per [`ConcreteType`]; never sparse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteArray<T>([T; ConcreteType::COUNT]);

impl<T: Copy> ConcreteArray<T> {
    /// Values in [`ConcreteType::ALL`] order.
    pub const fn new(values: [T; ConcreteType::COUNT]) -> Self {
        Self(values)
    }

    /// The same value for every type.
    pub const fn splat(value: T) -> Self {
        Self([value; ConcreteType::COUNT])
    }

    pub fn get(&self, ct: ConcreteType) -> T {
        self.0[ct.index()]
    }

    /// Value for `ct` as seen in `edition`, following lightweight aliasing.
    pub fn get_for(&self, ct: ConcreteType, edition: Edition) -> T {
        self.get(ct.storage_key(edition))
    }

    pub fn set(&mut self, ct: ConcreteType, value: T) {
        self.0[ct.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConcreteType, T)> + '_ {
        ConcreteType::ALL.into_iter().map(move |ct| (ct, self.get(ct)))
    }
}

impl ConcreteArray<f64> {
    /// Tolerant equality over the given types.
    pub fn is_equal_for(&self, other: &Self, types: &[ConcreteType]) -> bool {
        types
            .iter()
            .all(|&ct| crate::tolerance::is_equal(self.get(ct), other.get(ct)))
    }
}

impl<T> Index<ConcreteType> for ConcreteArray<T> {
    type Output = T;

    fn index(&self, ct: ConcreteType) -> &T {
        &self.0[ct as usize]
    }
}

impl<T> IndexMut<ConcreteType> for ConcreteArray<T> {
    fn index_mut(&mut self, ct: ConcreteType) -> &mut T {
        &mut self.0[ct as usize]
    }
}
