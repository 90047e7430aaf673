//! Named collection of specification entries.

use std::collections::{BTreeMap, BTreeSet};

use speclib_store::{Archive, LibraryFile, StoreError, Unit, UnitReader, UnitWriter};
use tracing::{debug, info};

use crate::entry::{self, SpecificationEntry};
use crate::error::CriteriaError;
use crate::legacy::RefactoredParameters;

/// Identifier of the specification library.
pub const LIBRARY_ID: &str = "SPECIFICATION_LIBRARY";

/// Display name of the specification library.
pub const DISPLAY_NAME: &str = "Project Criteria";

const UNIT_NAME: &str = "SpecificationLibrary";
const VERSION: f64 = 1.0;

/// Names that belong to built-in live loads and can never name an entry.
pub const RESERVED_NAMES: [&str; 7] = [
    "HL-93",
    "Fatigue",
    "Pedestrian on Sidewalk",
    "AASHTO Legal Loads",
    "Notional Rating Load (NRL)",
    "Single-Unit SHVs",
    "Emergency Vehicles",
];

/// Keyed specification entries. Keys are unique and matched exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryManager {
    entries: BTreeMap<String, SpecificationEntry>,
    reserved: BTreeSet<String>,
}

impl Default for LibraryManager {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            reserved: RESERVED_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LibraryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_reserved_name(&mut self, name: impl Into<String>) {
        self.reserved.insert(name.into());
    }

    pub fn is_reserved_name(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    fn check_key(&self, key: &str) -> Result<(), CriteriaError> {
        if self.is_reserved_name(key) {
            return Err(CriteriaError::ReservedName(key.to_string()));
        }
        if self.entries.contains_key(key) {
            return Err(CriteriaError::DuplicateEntry(key.to_string()));
        }
        Ok(())
    }

    /// Add a default entry under `key`. Fails without changing anything when
    /// `key` is reserved or taken.
    pub fn new_entry(&mut self, key: &str) -> Result<&mut SpecificationEntry, CriteriaError> {
        self.check_key(key)?;
        info!(key, "created specification entry");
        Ok(self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| SpecificationEntry::new(key)))
    }

    /// Add a copy of `source` under `new_key`.
    pub fn clone_entry(
        &mut self,
        source: &str,
        new_key: &str,
    ) -> Result<&mut SpecificationEntry, CriteriaError> {
        let mut copy = self
            .entries
            .get(source)
            .cloned()
            .ok_or_else(|| CriteriaError::EntryNotFound(source.to_string()))?;
        self.check_key(new_key)?;
        copy.set_name(new_key);
        info!(source, key = new_key, "cloned specification entry");
        Ok(self.entries.entry(new_key.to_string()).or_insert(copy))
    }

    pub fn rename_entry(&mut self, old: &str, new: &str) -> Result<(), CriteriaError> {
        if !self.entries.contains_key(old) {
            return Err(CriteriaError::EntryNotFound(old.to_string()));
        }
        self.check_key(new)?;
        if let Some(mut entry) = self.entries.remove(old) {
            entry.set_name(new);
            self.entries.insert(new.to_string(), entry);
        }
        info!(old, new, "renamed specification entry");
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<SpecificationEntry, CriteriaError> {
        let entry = self
            .entries
            .remove(key)
            .ok_or_else(|| CriteriaError::EntryNotFound(key.to_string()))?;
        info!(key, "removed specification entry");
        Ok(entry)
    }

    pub fn get(&self, key: &str) -> Option<&SpecificationEntry> {
        self.entries.get(key)
    }

    /// Mutable access to an entry. Its key stays fixed; use
    /// [`Self::rename_entry`] to change it.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut SpecificationEntry> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entry keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecificationEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize every entry, in key order, into one unit tree. Each entry is
    /// stored under its key.
    pub fn to_unit(&self) -> Result<Unit, CriteriaError> {
        let mut w = UnitWriter::new();
        w.begin_unit(UNIT_NAME, VERSION).map_err(CriteriaError::Store)?;
        for (key, entry) in &self.entries {
            entry.save_as(key, &mut w)?;
        }
        w.end_unit().map_err(CriteriaError::Store)?;
        w.finish().map_err(CriteriaError::Store)
    }

    /// Replace the entries with those stored in `unit`. Returns the
    /// refactored parameters of every entry that went through a legacy load,
    /// by key. On error nothing changes.
    pub fn load_unit(
        &mut self,
        unit: &Unit,
    ) -> Result<BTreeMap<String, RefactoredParameters>, CriteriaError> {
        Self::check_root(unit).map_err(CriteriaError::invalid_format)?;

        let mut refactored = BTreeMap::new();
        let mut loaded = BTreeMap::new();
        for child in unit.units().filter(|u| u.name == entry::UNIT_NAME) {
            let mut entry = SpecificationEntry::from_unit(child)?;
            if self.is_reserved_name(entry.name()) {
                return Err(CriteriaError::ReservedName(entry.name().to_string()));
            }
            if let Some(params) = entry.take_refactored_parameters() {
                refactored.insert(entry.name().to_string(), params);
            }
            let key = entry.name().to_string();
            if loaded.insert(key.clone(), entry).is_some() {
                return Err(CriteriaError::DuplicateEntry(key));
            }
        }

        debug!(entries = loaded.len(), legacy = refactored.len(), "loaded specification library");
        self.entries = loaded;
        Ok(refactored)
    }

    fn check_root(unit: &Unit) -> Result<(), StoreError> {
        let mut reader = UnitReader::new(unit);
        reader.begin_unit(UNIT_NAME, VERSION)?;
        reader.end_unit()?;
        reader.finish()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CriteriaError> {
        LibraryFile::new(self.to_unit()?)
            .to_bytes()
            .map_err(CriteriaError::Store)
    }

    /// Load a library container. Returns refactored parameters as
    /// [`Self::load_unit`] does.
    pub fn from_bytes(
        data: &[u8],
    ) -> Result<(Self, BTreeMap<String, RefactoredParameters>), CriteriaError> {
        let file = LibraryFile::from_bytes(data).map_err(CriteriaError::invalid_format)?;
        let mut library = Self::new();
        let refactored = library.load_unit(&file.root)?;
        Ok((library, refactored))
    }
}
