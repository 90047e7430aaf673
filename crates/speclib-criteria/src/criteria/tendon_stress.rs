//! Stress limits for post-tensioning tendons.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TendonStressStage {
    AtJacking,
    PriorToSeating,
    AnchoragesAfterSeating,
    ElsewhereAfterSeating,
    AfterAllLosses,
}

impl TendonStressStage {
    pub const ALL: [TendonStressStage; 5] = [
        TendonStressStage::AtJacking,
        TendonStressStage::PriorToSeating,
        TendonStressStage::AnchoragesAfterSeating,
        TendonStressStage::ElsewhereAfterSeating,
        TendonStressStage::AfterAllLosses,
    ];

    fn key(self) -> &'static str {
        match self {
            TendonStressStage::AtJacking => "AtJacking",
            TendonStressStage::PriorToSeating => "PriorToSeating",
            TendonStressStage::AnchoragesAfterSeating => "AnchoragesAfterSeating",
            TendonStressStage::ElsewhereAfterSeating => "ElsewhereAfterSeating",
            TendonStressStage::AfterAllLosses => "AfterAllLosses",
        }
    }
}

/// `fpu` coefficients `(stress relieved, low relaxation)`.
pub type TendonCoefficients = (f64, f64);

#[derive(Debug, Clone, PartialEq)]
pub struct TendonStressCriteria {
    pub check_at_jacking: bool,
    pub check_prior_to_seating: bool,
    /// Indexed by [`TendonStressStage`].
    pub coefficients: [TendonCoefficients; 5],
}

impl Default for TendonStressCriteria {
    fn default() -> Self {
        Self {
            check_at_jacking: false,
            check_prior_to_seating: true,
            coefficients: [
                (0.76, 0.80),
                (0.90, 0.90),
                (0.70, 0.70),
                (0.70, 0.74),
                (0.80, 0.80),
            ],
        }
    }
}

impl TendonStressCriteria {
    pub fn coefficients(&self, stage: TendonStressStage) -> TendonCoefficients {
        self.coefficients[stage as usize]
    }
}

impl CriteriaModule for TendonStressCriteria {
    const UNIT_NAME: &'static str = "TendonStressCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Stress Limits for Post-tensioning Tendons";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheckAtJacking", &mut self.check_at_jacking)?;
        ar.bool("bCheckPriorToSeating", &mut self.check_prior_to_seating)?;
        for stage in TendonStressStage::ALL {
            let (stress_relieved, low_relaxation) = &mut self.coefficients[stage as usize];
            ar.begin_unit(stage.key(), 1.0)?;
            ar.float("StressRelieved", stress_relieved)?;
            ar.float("LowRelaxation", low_relaxation)?;
            ar.end_unit()?;
        }
        Ok(())
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let differs = self.check_at_jacking != other.check_at_jacking
            || self.check_prior_to_seating != other.check_prior_to_seating
            || self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .any(|(a, b)| !is_equal(a.0, b.0) || !is_equal(a.1, b.1));
        d.group(differs, "Tendon Stress Limits are different");
        d.finish()
    }
}
