//! Material limits and general warnings.

use serde::{Deserialize, Serialize};
use speclib_store::{Archive, StoreError};

use crate::concrete::{ConcreteArray, ConcreteType};
use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::all_equal;
use crate::units::{INCH, KSI, PCF};

stored_enum! {
    /// Camber bound used when checking for girder sag.
    pub enum SagCamberType {
        #[default]
        LowerBound = 0 => "Lower bound camber",
        Average = 1 => "Average camber",
        UpperBound = 2 => "Upper bound camber",
    }
}

/// Upper limits on concrete properties for one concrete type. Strengths in
/// Pa, unit weight in kg/m³, aggregate size in m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteLimits {
    pub max_slab_fc: f64,
    pub max_segment_fci: f64,
    pub max_segment_fc: f64,
    pub max_closure_fci: f64,
    pub max_closure_fc: f64,
    pub max_concrete_unit_weight: f64,
    pub max_concrete_agg_size: f64,
}

impl ConcreteLimits {
    fn conventional(unit_weight_pcf: f64) -> Self {
        Self {
            max_slab_fc: 6.0 * KSI,
            max_segment_fci: 7.5 * KSI,
            max_segment_fc: 10.0 * KSI,
            max_closure_fci: 6.0 * KSI,
            max_closure_fc: 8.0 * KSI,
            max_concrete_unit_weight: unit_weight_pcf * PCF,
            max_concrete_agg_size: 1.5 * INCH,
        }
    }

    fn uhpc() -> Self {
        Self {
            max_slab_fc: 6.0 * KSI,
            max_segment_fci: 14.0 * KSI,
            max_segment_fc: 30.0 * KSI,
            max_closure_fci: 14.0 * KSI,
            max_closure_fc: 30.0 * KSI,
            max_concrete_unit_weight: 165.0 * PCF,
            max_concrete_agg_size: 0.25 * INCH,
        }
    }

    fn values(&self) -> [f64; 7] {
        [
            self.max_slab_fc,
            self.max_segment_fci,
            self.max_segment_fc,
            self.max_closure_fci,
            self.max_closure_fc,
            self.max_concrete_unit_weight,
            self.max_concrete_agg_size,
        ]
    }

    fn exchange(&mut self, ar: &mut dyn Archive, name: &str) -> Result<(), StoreError> {
        ar.begin_unit(name, 1.0)?;
        ar.float("MaxSlabFc", &mut self.max_slab_fc)?;
        ar.float("MaxSegmentFci", &mut self.max_segment_fci)?;
        ar.float("MaxSegmentFc", &mut self.max_segment_fc)?;
        ar.float("MaxClosureFci", &mut self.max_closure_fci)?;
        ar.float("MaxClosureFc", &mut self.max_closure_fc)?;
        ar.float("MaxConcreteUnitWeight", &mut self.max_concrete_unit_weight)?;
        ar.float("MaxConcreteAggSize", &mut self.max_concrete_agg_size)?;
        ar.end_unit()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LimitsCriteria {
    pub concrete: ConcreteArray<ConcreteLimits>,
    pub check_stirrup_spacing_compatibility: bool,
    pub check_sag: bool,
    pub sag_camber_type: SagCamberType,
}

impl Default for LimitsCriteria {
    fn default() -> Self {
        Self {
            concrete: ConcreteArray::new([
                ConcreteLimits::conventional(165.0),
                ConcreteLimits::conventional(125.0),
                ConcreteLimits::conventional(125.0),
                ConcreteLimits::uhpc(),
                ConcreteLimits::uhpc(),
            ]),
            check_stirrup_spacing_compatibility: true,
            check_sag: true,
            sag_camber_type: SagCamberType::LowerBound,
        }
    }
}

impl LimitsCriteria {
    /// Limits for `ct` as they apply in `edition`.
    pub fn concrete_limits(&self, ct: ConcreteType, edition: Edition) -> ConcreteLimits {
        self.concrete.get_for(ct, edition)
    }
}

impl CriteriaModule for LimitsCriteria {
    const UNIT_NAME: &'static str = "LimitsCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Limits and Warnings";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        for ct in ConcreteType::ALL {
            self.concrete[ct].exchange(ar, ct.key())?;
        }
        ar.bool(
            "bCheckStirrupSpacingCompatibility",
            &mut self.check_stirrup_spacing_compatibility,
        )?;
        ar.bool("bCheckSag", &mut self.check_sag)?;
        exchange_enum(ar, "SagCamberType", &mut self.sag_camber_type)
    }

    fn compare(
        &self,
        other: &Self,
        edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let concrete = ConcreteType::distinct_in(edition, &ConcreteType::ALL)
            .into_iter()
            .any(|ct| !all_equal(&self.concrete[ct].values(), &other.concrete[ct].values()));
        if d.group(concrete, "Concrete Limits are different") {
            return false;
        }
        let warnings = self.check_stirrup_spacing_compatibility
            != other.check_stirrup_spacing_compatibility
            || self.check_sag != other.check_sag
            || (self.check_sag && self.sag_camber_type != other.sag_camber_type);
        d.group(warnings, "Warnings are different");
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_same, labels, round_trip};
    use speclib_store::{UnitReader, UnitWriter};

    #[test]
    fn default_round_trips_without_defaulting() {
        let a = LimitsCriteria::default();
        let mut w = UnitWriter::new();
        a.save(&mut w).unwrap();
        let root = w.finish().unwrap();

        // every field is present in the stored unit
        let types = root.units().count();
        assert_eq!(types, ConcreteType::COUNT);

        let mut r = UnitReader::new(&root);
        let mut loaded = LimitsCriteria {
            check_sag: false,
            concrete: ConcreteArray::splat(ConcreteLimits::uhpc()),
            ..Default::default()
        };
        loaded.load(&mut r).unwrap();
        r.finish().unwrap();
        assert_eq!(loaded, a);
        assert_same(&a, &loaded);
    }

    #[test]
    fn all_lightweight_aliases_sand_lightweight() {
        let a = LimitsCriteria::default();
        let mut b = a.clone();
        b.concrete[ConcreteType::AllLightweight].max_slab_fc = 8.0 * KSI;
        assert_eq!(
            labels(&a, &b, Edition::SeventhEditionWith2015Interims),
            ["Concrete Limits are different"]
        );
        assert!(labels(&a, &b, Edition::SeventhEditionWith2016Interims).is_empty());
        assert_eq!(
            b.concrete_limits(ConcreteType::AllLightweight, Edition::LATEST),
            a.concrete[ConcreteType::SandLightweight]
        );
        assert_eq!(round_trip(&b), b);
    }

    #[test]
    fn sag_camber_guarded_by_check() {
        let a = LimitsCriteria {
            check_sag: false,
            ..Default::default()
        };
        let b = LimitsCriteria {
            sag_camber_type: SagCamberType::UpperBound,
            ..a.clone()
        };
        assert!(labels(&a, &b, Edition::LATEST).is_empty());
        let c = LimitsCriteria {
            check_stirrup_spacing_compatibility: false,
            ..a.clone()
        };
        assert_eq!(labels(&a, &c, Edition::LATEST), ["Warnings are different"]);
    }
}
