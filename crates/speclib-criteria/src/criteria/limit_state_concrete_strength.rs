//! Concrete strength used when evaluating limit states.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::is_equal;

stored_enum! {
    pub enum LimitStateConcreteStrength {
        #[default]
        SpecifiedStrength = 0 => "Specified strength",
        StrengthAtTimeOfLoading = 1 => "Strength at time of loading",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LimitStateConcreteStrengthCriteria {
    pub limit_state_concrete_strength: LimitStateConcreteStrength,
    pub use_90_day_concrete_strength: bool,
    pub slow_curing_concrete_strength_factor: f64,
}

impl Default for LimitStateConcreteStrengthCriteria {
    fn default() -> Self {
        Self {
            limit_state_concrete_strength: LimitStateConcreteStrength::SpecifiedStrength,
            use_90_day_concrete_strength: false,
            slow_curing_concrete_strength_factor: 1.15,
        }
    }
}

impl CriteriaModule for LimitStateConcreteStrengthCriteria {
    const UNIT_NAME: &'static str = "LimitStateConcreteStrengthCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Limit State Concrete Strength";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(
            ar,
            "LimitStateConcreteStrength",
            &mut self.limit_state_concrete_strength,
        )?;
        ar.bool(
            "bUse90DayConcreteStrength",
            &mut self.use_90_day_concrete_strength,
        )?;
        ar.float(
            "SlowCuringConcreteStrengthFactor",
            &mut self.slow_curing_concrete_strength_factor,
        )
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        if d.group(
            self.limit_state_concrete_strength != other.limit_state_concrete_strength,
            "Limit State Concrete Strength methods are different",
        ) {
            return false;
        }
        let ninety_day = self.use_90_day_concrete_strength != other.use_90_day_concrete_strength
            || (self.use_90_day_concrete_strength
                && !is_equal(
                    self.slow_curing_concrete_strength_factor,
                    other.slow_curing_concrete_strength_factor,
                ));
        d.group(ninety_day, "90-day Concrete Strength parameters are different");
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_same, labels, round_trip};

    #[test]
    fn slow_curing_factor_guarded() {
        let a = LimitStateConcreteStrengthCriteria::default();
        let b = LimitStateConcreteStrengthCriteria {
            slow_curing_concrete_strength_factor: 1.2,
            ..Default::default()
        };
        assert_same(&a, &b);

        let a = LimitStateConcreteStrengthCriteria {
            use_90_day_concrete_strength: true,
            ..a
        };
        let b = LimitStateConcreteStrengthCriteria {
            use_90_day_concrete_strength: true,
            limit_state_concrete_strength: LimitStateConcreteStrength::StrengthAtTimeOfLoading,
            ..b
        };
        assert_eq!(
            labels(&a, &b, Edition::LATEST),
            [
                "Limit State Concrete Strength methods are different",
                "90-day Concrete Strength parameters are different"
            ]
        );
        assert_eq!(round_trip(&b), b);
    }
}
