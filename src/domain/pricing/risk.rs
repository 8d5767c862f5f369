// SPDX-License-Identifier: MPL-2.0
//! Risk multiplier, payout estimate and risk classification.
//!
//! The multiplier is piecewise linear: from 0.5 at 15% to 1.0 at the
//! recommended 30%, then from 1.0 to 3.33 at 100%.

use super::newtypes::{risk_bounds, RiskPercent};

/// Average monthly performance at the recommended risk level (7.11%).
pub const BASE_MONTHLY_PERFORMANCE: f64 = 0.0711;

/// Multiplier reached at 100% risk.
const MAX_MULTIPLIER_GAIN: f64 = 2.33;

/// Upper bound (inclusive) of the recommended band.
pub const RECOMMENDED_MAX: u8 = risk_bounds::DEFAULT;

/// Upper bound (inclusive) of the high band.
pub const HIGH_MAX: u8 = 60;

/// Above this level the high-band warning mentions skipped positions.
pub const SKIPPED_POSITIONS_THRESHOLD: u8 = 50;

/// Payout multiplier for a risk level.
#[must_use]
pub fn multiplier(risk: RiskPercent) -> f64 {
    let r = f64::from(risk.value());
    let min = f64::from(risk_bounds::MIN);
    let pivot = f64::from(risk_bounds::DEFAULT);
    let max = f64::from(risk_bounds::MAX);

    if risk.value() <= risk_bounds::DEFAULT {
        0.5 + ((r - min) / (pivot - min)) * 0.5
    } else {
        1.0 + ((r - pivot) / (max - pivot)) * MAX_MULTIPLIER_GAIN
    }
}

/// Estimated monthly result in euros for a bracket's lower bound.
#[must_use]
pub fn estimated_monthly_payout(capital_min: u32, risk: RiskPercent) -> f64 {
    f64::from(capital_min) * BASE_MONTHLY_PERFORMANCE * multiplier(risk)
}

/// Risk band shown as a badge next to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Recommended,
    High,
    Extreme,
}

impl RiskBand {
    /// Returns the i18n key of the badge label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RiskBand::Recommended => "risk-recommended",
            RiskBand::High => "risk-high",
            RiskBand::Extreme => "risk-extreme",
        }
    }
}

/// Warning displayed under the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskWarning {
    /// Generic high exposure notice (31–50%).
    HighExposure,
    /// Bot may skip positions (51–60%).
    SkippedPositions,
    /// Danger notice (above 60%).
    Extreme,
}

impl RiskWarning {
    /// Returns the i18n key of the warning text.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RiskWarning::HighExposure => "warning-high",
            RiskWarning::SkippedPositions => "warning-skipped-positions",
            RiskWarning::Extreme => "warning-extreme",
        }
    }

    /// Whether the warning uses the danger styling.
    #[must_use]
    pub fn is_danger(self) -> bool {
        matches!(self, RiskWarning::Extreme)
    }
}

/// Badge and warning state for a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub band: RiskBand,
    pub warning: Option<RiskWarning>,
}

/// Classifies a risk level. Band bounds are inclusive on the lower band.
#[must_use]
pub fn classify(risk: RiskPercent) -> RiskAssessment {
    let r = risk.value();
    if r <= RECOMMENDED_MAX {
        RiskAssessment {
            band: RiskBand::Recommended,
            warning: None,
        }
    } else if r <= HIGH_MAX {
        let warning = if r > SKIPPED_POSITIONS_THRESHOLD {
            RiskWarning::SkippedPositions
        } else {
            RiskWarning::HighExposure
        };
        RiskAssessment {
            band: RiskBand::High,
            warning: Some(warning),
        }
    } else {
        RiskAssessment {
            band: RiskBand::Extreme,
            warning: Some(RiskWarning::Extreme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F64_EPSILON};

    #[test]
    fn multiplier_anchor_points() {
        assert_abs_diff_eq!(multiplier(RiskPercent::new(15)), 0.5, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(multiplier(RiskPercent::new(30)), 1.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(multiplier(RiskPercent::new(100)), 3.33, epsilon = F64_EPSILON);
    }

    #[test]
    fn multiplier_is_linear_on_each_side() {
        assert_abs_diff_eq!(multiplier(RiskPercent::new(20)), 0.5 + (5.0 / 15.0) * 0.5, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(multiplier(RiskPercent::new(50)), 1.0 + (20.0 / 70.0) * 2.33, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(multiplier(RiskPercent::new(50)), 1.6657, epsilon = 1e-4);
    }

    #[test]
    fn multiplier_is_monotonic() {
        let mut previous = 0.0;
        for r in risk_bounds::MIN..=risk_bounds::MAX {
            let m = multiplier(RiskPercent::new(r));
            assert!(m > previous, "multiplier must increase at {r}%");
            previous = m;
        }
    }

    #[test]
    fn payout_at_recommended_level() {
        let payout = estimated_monthly_payout(1_000, RiskPercent::default());
        assert_abs_diff_eq!(payout, 71.1, epsilon = 1e-9);
    }

    #[test]
    fn payout_at_fifty_percent() {
        let payout = estimated_monthly_payout(10_000, RiskPercent::new(50));
        assert_relative_eq!(payout, 711.0 * (1.0 + (20.0 / 70.0) * 2.33), max_relative = 1e-12);
        assert_abs_diff_eq!(payout, 1184.3228, epsilon = 1e-3);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(RiskPercent::new(30)).band, RiskBand::Recommended);
        assert_eq!(classify(RiskPercent::new(31)).band, RiskBand::High);
        assert_eq!(classify(RiskPercent::new(60)).band, RiskBand::High);
        assert_eq!(classify(RiskPercent::new(61)).band, RiskBand::Extreme);
    }

    #[test]
    fn classification_warnings() {
        assert_eq!(classify(RiskPercent::new(15)).warning, None);
        assert_eq!(
            classify(RiskPercent::new(50)).warning,
            Some(RiskWarning::HighExposure)
        );
        assert_eq!(
            classify(RiskPercent::new(51)).warning,
            Some(RiskWarning::SkippedPositions)
        );
        assert_eq!(classify(RiskPercent::new(100)).warning, Some(RiskWarning::Extreme));
        assert!(RiskWarning::Extreme.is_danger());
        assert!(!RiskWarning::HighExposure.is_danger());
    }

    #[test]
    fn classification_is_idempotent() {
        for r in risk_bounds::MIN..=risk_bounds::MAX {
            let risk = RiskPercent::new(r);
            assert_eq!(classify(risk), classify(risk));
        }
    }
}
