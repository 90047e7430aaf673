//! Concrete stress limits for prestressed members.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::report::{ReportArchive, ReportSink};
use crate::stress_limit::TensionStressLimit;
use crate::tolerance::is_equal;
use crate::units::INCH;

/// First edition with a cover limit on the higher temporary tension limit.
const COVER_LIMIT_EDITION: Edition = Edition::TenthEdition2024;

const COVER_LIMIT_PROPERTY: &str = "MaxCoverToUseHigherTensionStressLimit";

#[derive(Debug, Clone, PartialEq)]
pub struct PrestressedElementCriteria {
    pub compression_stress_coefficient_before_losses: f64,
    pub tension_stress_limit_with_reinforcement_before_losses: TensionStressLimit,
    pub tension_stress_limit_other_areas_without_reinforcement_before_losses: TensionStressLimit,
    /// m
    pub max_cover_to_use_higher_tension_stress_limit: f64,

    pub check_temporary_stresses: bool,
    pub compression_stress_coefficient_temporary_strand_removal: f64,
    pub tension_stress_limit_without_reinforcement_temporary_strand_removal: TensionStressLimit,
    pub tension_stress_limit_with_reinforcement_temporary_strand_removal: TensionStressLimit,
    pub compression_stress_coefficient_after_deck_placement: f64,
    pub tension_stress_limit_after_deck_placement: TensionStressLimit,

    pub compression_stress_coefficient_permanent_loads_only_after_losses: f64,
    pub compression_stress_coefficient_all_loads_after_losses: f64,
    pub tension_stress_limit_service_iii_in_ptz_moderate_corrosion: TensionStressLimit,
    pub tension_stress_limit_service_iii_in_ptz_severe_corrosion: TensionStressLimit,
    pub check_final_service_i_tension: bool,
    pub tension_stress_limit_service_i_permanent_loads_only: TensionStressLimit,

    pub compression_stress_coefficient_fatigue: f64,
}

impl Default for PrestressedElementCriteria {
    fn default() -> Self {
        Self {
            compression_stress_coefficient_before_losses: 0.60,
            tension_stress_limit_with_reinforcement_before_losses: TensionStressLimit::from_ksi(
                0.24, None,
            ),
            tension_stress_limit_other_areas_without_reinforcement_before_losses:
                TensionStressLimit::from_ksi(0.0948, Some(0.2)),
            max_cover_to_use_higher_tension_stress_limit: 2.0 * INCH,

            check_temporary_stresses: true,
            compression_stress_coefficient_temporary_strand_removal: 0.60,
            tension_stress_limit_without_reinforcement_temporary_strand_removal:
                TensionStressLimit::from_ksi(0.0948, Some(0.2)),
            tension_stress_limit_with_reinforcement_temporary_strand_removal:
                TensionStressLimit::from_ksi(0.24, None),
            compression_stress_coefficient_after_deck_placement: 0.60,
            tension_stress_limit_after_deck_placement: TensionStressLimit::from_ksi(
                0.19,
                Some(0.6),
            ),

            compression_stress_coefficient_permanent_loads_only_after_losses: 0.45,
            compression_stress_coefficient_all_loads_after_losses: 0.60,
            tension_stress_limit_service_iii_in_ptz_moderate_corrosion:
                TensionStressLimit::from_ksi(0.19, Some(0.6)),
            tension_stress_limit_service_iii_in_ptz_severe_corrosion: TensionStressLimit::from_ksi(
                0.0948,
                Some(0.3),
            ),
            check_final_service_i_tension: false,
            tension_stress_limit_service_i_permanent_loads_only: TensionStressLimit::from_ksi(
                0.19, None,
            ),

            compression_stress_coefficient_fatigue: 0.40,
        }
    }
}

impl PrestressedElementCriteria {
    fn temporary_stresses_equal(&self, other: &Self) -> bool {
        is_equal(
            self.compression_stress_coefficient_temporary_strand_removal,
            other.compression_stress_coefficient_temporary_strand_removal,
        ) && self
            .tension_stress_limit_without_reinforcement_temporary_strand_removal
            .is_equal(&other.tension_stress_limit_without_reinforcement_temporary_strand_removal)
            && self
                .tension_stress_limit_with_reinforcement_temporary_strand_removal
                .is_equal(&other.tension_stress_limit_with_reinforcement_temporary_strand_removal)
            && is_equal(
                self.compression_stress_coefficient_after_deck_placement,
                other.compression_stress_coefficient_after_deck_placement,
            )
            && self
                .tension_stress_limit_after_deck_placement
                .is_equal(&other.tension_stress_limit_after_deck_placement)
    }
}

impl CriteriaModule for PrestressedElementCriteria {
    const UNIT_NAME: &'static str = "PrestressedElementCriteria";
    const VERSION: f64 = 2.0;
    const TITLE: &'static str = "Stress Limits for Concrete - Prestressed Members";

    fn exchange(&mut self, ar: &mut dyn Archive, version: f64) -> Result<(), StoreError> {
        ar.begin_unit("BeforeLosses", 1.0)?;
        ar.float(
            "CompressionStressCoefficient",
            &mut self.compression_stress_coefficient_before_losses,
        )?;
        self.tension_stress_limit_with_reinforcement_before_losses
            .exchange(ar, "TensionStressLimit_WithReinforcement")?;
        self.tension_stress_limit_other_areas_without_reinforcement_before_losses
            .exchange(ar, "TensionStressLimit_WithoutReinforcement")?;
        if version >= 2.0 {
            ar.float(
                COVER_LIMIT_PROPERTY,
                &mut self.max_cover_to_use_higher_tension_stress_limit,
            )?;
        }
        ar.end_unit()?;

        ar.begin_unit("AfterLosses", 1.0)?;
        ar.float(
            "CompressionStressCoefficient_PermanentLoadsOnly",
            &mut self.compression_stress_coefficient_permanent_loads_only_after_losses,
        )?;
        ar.float(
            "CompressionStressCoefficient_AllLoads",
            &mut self.compression_stress_coefficient_all_loads_after_losses,
        )?;
        self.tension_stress_limit_service_iii_in_ptz_moderate_corrosion
            .exchange(ar, "TensionStressLimit_ServiceIII_InPTZ_ModerateCorrosionConditions")?;
        self.tension_stress_limit_service_iii_in_ptz_severe_corrosion
            .exchange(ar, "TensionStressLimit_ServiceIII_InPTZ_SevereCorrosionConditions")?;
        ar.begin_unit("OptionalFinalTensionStressLimit", 1.0)?;
        ar.bool(
            "bCheckFinalServiceITension",
            &mut self.check_final_service_i_tension,
        )?;
        self.tension_stress_limit_service_i_permanent_loads_only
            .exchange(ar, "TensionStressLimit_ServiceI_PermanentLoadsOnly")?;
        ar.end_unit()?;
        ar.end_unit()?;

        ar.begin_unit("Fatigue", 1.0)?;
        ar.float(
            "CompressionStressCoefficient",
            &mut self.compression_stress_coefficient_fatigue,
        )?;
        ar.end_unit()?;

        ar.begin_unit("OptionalTemporaryStressLimits", 1.0)?;
        ar.bool("bCheckTemporaryStresses", &mut self.check_temporary_stresses)?;
        ar.begin_unit("AfterTemporaryStrandRemoval", 1.0)?;
        ar.float(
            "CompressionStressCoefficient",
            &mut self.compression_stress_coefficient_temporary_strand_removal,
        )?;
        self.tension_stress_limit_without_reinforcement_temporary_strand_removal
            .exchange(ar, "TensionStressLimit_WithoutReinforcement")?;
        self.tension_stress_limit_with_reinforcement_temporary_strand_removal
            .exchange(ar, "TensionStressLimit_WithReinforcement")?;
        ar.end_unit()?;
        ar.begin_unit("AfterDeckPlacement", 1.0)?;
        ar.float(
            "CompressionStressCoefficient",
            &mut self.compression_stress_coefficient_after_deck_placement,
        )?;
        self.tension_stress_limit_after_deck_placement
            .exchange(ar, "TensionStressLimit")?;
        ar.end_unit()?;
        ar.end_unit()
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);

        let before_losses = !is_equal(
            self.compression_stress_coefficient_before_losses,
            other.compression_stress_coefficient_before_losses,
        ) || !self
            .tension_stress_limit_with_reinforcement_before_losses
            .is_equal(&other.tension_stress_limit_with_reinforcement_before_losses)
            || !self
                .tension_stress_limit_other_areas_without_reinforcement_before_losses
                .is_equal(&other.tension_stress_limit_other_areas_without_reinforcement_before_losses);
        if d.group(before_losses, "Stress Limits for Temporary Stresses are different") {
            return false;
        }

        let cover = !is_equal(
                self.max_cover_to_use_higher_tension_stress_limit,
                other.max_cover_to_use_higher_tension_stress_limit,
            );
        if d.group(cover, "Cover Limits for Temporary Stresses are different") {
            return false;
        }

        let service_i = self.check_final_service_i_tension != other.check_final_service_i_tension
            || (self.check_final_service_i_tension
                && !self
                    .tension_stress_limit_service_i_permanent_loads_only
                    .is_equal(&other.tension_stress_limit_service_i_permanent_loads_only));
        let service = service_i
            || !is_equal(
                self.compression_stress_coefficient_permanent_loads_only_after_losses,
                other.compression_stress_coefficient_permanent_loads_only_after_losses,
            )
            || !is_equal(
                self.compression_stress_coefficient_all_loads_after_losses,
                other.compression_stress_coefficient_all_loads_after_losses,
            )
            || !self
                .tension_stress_limit_service_iii_in_ptz_moderate_corrosion
                .is_equal(&other.tension_stress_limit_service_iii_in_ptz_moderate_corrosion)
            || !self
                .tension_stress_limit_service_iii_in_ptz_severe_corrosion
                .is_equal(&other.tension_stress_limit_service_iii_in_ptz_severe_corrosion);
        if d.group(service, "Stress Limits at Service Limit State are different") {
            return false;
        }

        if d.group(
            !is_equal(
                self.compression_stress_coefficient_fatigue,
                other.compression_stress_coefficient_fatigue,
            ),
            "Allowable Concrete Stress at Fatigue Limit State are different",
        ) {
            return false;
        }

        let temporary = self.check_temporary_stresses != other.check_temporary_stresses
            || (self.check_temporary_stresses && !self.temporary_stresses_equal(other));
        d.group(
            temporary,
            "Stress Limits for Temporary Loading Conditions are different",
        );
        d.finish()
    }

    fn report(&self, edition: Edition, sink: &mut dyn ReportSink) -> Result<(), StoreError> {
        sink.heading(Self::TITLE);
        let mut ar = ReportArchive::new(sink);
        if edition < COVER_LIMIT_EDITION {
            ar = ar.omitting(&[COVER_LIMIT_PROPERTY]);
        }
        self.save(&mut ar)
    }
}
