//! Governing specification, edition, and unit system.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::{Edition, Units};
use crate::module::{exchange_enum, CriteriaModule};

/// Which edition of the design code governs, and in which units it is written.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecificationCriteria {
    pub description: String,
    /// Follow the newest edition this build knows about instead of `edition`.
    pub use_current_specification: bool,
    pub edition: Edition,
    pub units: Units,
}

impl Default for SpecificationCriteria {
    fn default() -> Self {
        Self {
            description: String::new(),
            use_current_specification: true,
            edition: Edition::LATEST,
            units: Units::US,
        }
    }
}

impl SpecificationCriteria {
    /// The edition in force.
    pub fn effective_edition(&self) -> Edition {
        if self.use_current_specification {
            Edition::LATEST
        } else {
            self.edition
        }
    }
}

/// Exchange an edition as its persisted key.
pub(crate) fn exchange_edition(
    ar: &mut dyn Archive,
    name: &str,
    edition: &mut Edition,
) -> Result<(), StoreError> {
    let mut key = edition.key();
    ar.string(name, &mut key)?;
    if ar.is_loading() {
        *edition = Edition::from_key(&key).ok_or_else(|| {
            StoreError::malformed(format!("`{key}` is not a known specification edition"))
        })?;
    }
    Ok(())
}

impl CriteriaModule for SpecificationCriteria {
    const UNIT_NAME: &'static str = "SpecificationCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Specification";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.string("Description", &mut self.description)?;
        ar.bool("bUseCurrentSpecification", &mut self.use_current_specification)?;
        exchange_edition(ar, "Edition", &mut self.edition)?;
        exchange_enum(ar, "Units", &mut self.units)
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);

        if self.description != other.description
            && d.push(DifferenceItem::string(
                "Description is different",
                &self.description,
                &other.description,
            ))
        {
            return false;
        }

        if self.use_current_specification != other.use_current_specification
            && d.push(DifferenceItem::bool(
                "Use current specification settings are different",
                self.use_current_specification,
                other.use_current_specification,
            ))
        {
            return false;
        }

        let (mine, theirs) = (self.effective_edition(), other.effective_edition());
        if mine != theirs
            && d.push(DifferenceItem::string(
                "Specification editions are different",
                mine.name(),
                theirs.name(),
            ))
        {
            return false;
        }

        if self.units != other.units {
            d.push(DifferenceItem::string(
                "Units are different",
                self.units.to_string(),
                other.units.to_string(),
            ));
        }

        d.finish()
    }
}
