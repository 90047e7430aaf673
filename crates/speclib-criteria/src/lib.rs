//! Specification criteria for precast girder bridge design.
//!
//! A [`SpecificationEntry`] bundles the design-rule parameters of one
//! project specification as a fixed set of criteria modules. Each module
//! implements [`CriteriaModule`]: it persists itself as a versioned unit,
//! reports its values, and compares itself against another instance under a
//! given design code [`Edition`], producing one [`DifferenceItem`] per rule
//! group that differs.
//!
//! Entries live in a [`LibraryManager`], keyed by name, and are stored in a
//! `speclib_store` library file. Entries written by older releases are
//! upgraded on load; values that no longer belong to the specification are
//! handed back once as [`RefactoredParameters`].
//!
//! ```text
//! LibraryManager
//! └── SpecificationEntry (name)
//!     ├── SpecificationCriteria      edition, units
//!     ├── SectionPropertiesCriteria
//!     ├── ...
//!     └── BearingCriteria
//! ```

mod concrete;
pub mod criteria;
mod difference;
mod edition;
mod entry;
mod error;
mod legacy;
mod library;
mod module;
mod report;
mod stress_limit;
pub mod tolerance;
pub mod units;

#[cfg(test)]
mod testing;

pub use concrete::{ConcreteArray, ConcreteType};
pub use criteria::*;
pub use difference::{DiffCollector, DifferenceItem, DifferencePayload};
pub use edition::{Edition, Units};
pub use entry::{SpecificationEntry, CURRENT_VERSION, MIN_VERSION, MODERN_FORMAT_VERSION};
pub use error::CriteriaError;
pub use legacy::{
    HaulTruckParameters, LegacyDecoder, LumpSumLosses, MainlineDecoder, OverlapDecoder,
    PostTensioningParameters, RefactoredParameters, MAX_OVERLAP_VERSION, MIN_OVERLAP_VERSION,
};
pub use library::{LibraryManager, DISPLAY_NAME, LIBRARY_ID, RESERVED_NAMES};
pub use module::{decode_enum, exchange_concrete, exchange_count, exchange_enum, CriteriaModule, StoredEnum};
pub use report::{ReportArchive, ReportSink, TextReport};
pub use stress_limit::TensionStressLimit;
