//! Stress limits for pretensioning strand.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

/// Stage at which strand stress is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrandStressStage {
    AtJacking,
    BeforeTransfer,
    AfterTransfer,
    AfterAllLosses,
}

impl StrandStressStage {
    pub const ALL: [StrandStressStage; 4] = [
        StrandStressStage::AtJacking,
        StrandStressStage::BeforeTransfer,
        StrandStressStage::AfterTransfer,
        StrandStressStage::AfterAllLosses,
    ];

    pub(crate) fn key(self) -> &'static str {
        match self {
            StrandStressStage::AtJacking => "AtJacking",
            StrandStressStage::BeforeTransfer => "BeforeTransfer",
            StrandStressStage::AfterTransfer => "AfterTransfer",
            StrandStressStage::AfterAllLosses => "AfterAllLosses",
        }
    }
}

/// Limit on `fpu` for one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrandStressLimit {
    pub check: bool,
    pub stress_relieved: f64,
    pub low_relaxation: f64,
}

impl StrandStressLimit {
    const fn new(check: bool, stress_relieved: f64, low_relaxation: f64) -> Self {
        Self {
            check,
            stress_relieved,
            low_relaxation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrandStressCriteria {
    /// Indexed by [`StrandStressStage`].
    pub limits: [StrandStressLimit; 4],
}

impl Default for StrandStressCriteria {
    fn default() -> Self {
        Self {
            limits: [
                StrandStressLimit::new(false, 0.72, 0.78),
                StrandStressLimit::new(true, 0.70, 0.75),
                StrandStressLimit::new(false, 0.70, 0.74),
                StrandStressLimit::new(true, 0.80, 0.80),
            ],
        }
    }
}

impl StrandStressCriteria {
    pub fn limit(&self, stage: StrandStressStage) -> &StrandStressLimit {
        &self.limits[stage as usize]
    }

    pub fn limit_mut(&mut self, stage: StrandStressStage) -> &mut StrandStressLimit {
        &mut self.limits[stage as usize]
    }
}

impl CriteriaModule for StrandStressCriteria {
    const UNIT_NAME: &'static str = "StrandStressCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Stress Limits for Prestressing Strand";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        for stage in StrandStressStage::ALL {
            let limit = self.limit_mut(stage);
            ar.begin_unit(stage.key(), 1.0)?;
            ar.bool("bCheck", &mut limit.check)?;
            ar.float("StressRelieved", &mut limit.stress_relieved)?;
            ar.float("LowRelaxation", &mut limit.low_relaxation)?;
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
        let differs = self.limits.iter().zip(&other.limits).any(|(a, b)| {
            a.check != b.check
                || (a.check
                    && (!is_equal(a.stress_relieved, b.stress_relieved)
                        || !is_equal(a.low_relaxation, b.low_relaxation)))
        });
        d.group(differs, "Strand Stress Limits are different");
        d.finish()
    }
}
