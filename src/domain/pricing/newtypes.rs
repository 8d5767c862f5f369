// SPDX-License-Identifier: MPL-2.0
//! Pricing newtypes.
//!
//! Type-safe wrappers for the pricing inputs, guaranteed to stay within the
//! ranges the pricing rules are defined for.

// =============================================================================
// Tier Bounds
// =============================================================================

/// Tier bounds (1 to 250, one tier per thousand euros).
pub mod tier_bounds {
    /// Lowest tier.
    pub const MIN: u16 = 1;
    /// Highest tier.
    pub const MAX: u16 = 250;
    /// Capital covered by one tier, in euros.
    pub const STEP_EUROS: u32 = 1000;
}

// =============================================================================
// Tier
// =============================================================================

/// Capital tier, guaranteed to be within valid range (1–250).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u16);

impl Tier {
    /// Creates a new tier, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(value.clamp(tier_bounds::MIN, tier_bounds::MAX))
    }

    /// Returns the raw tier number.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Lower bound of the capital bracket (`tier * 1000`).
    #[must_use]
    pub fn capital_min(self) -> u32 {
        u32::from(self.0) * tier_bounds::STEP_EUROS
    }

    /// Upper bound of the capital bracket (`capital_min + 999`).
    #[must_use]
    pub fn capital_max(self) -> u32 {
        self.capital_min() + tier_bounds::STEP_EUROS - 1
    }
}

// =============================================================================
// Risk Bounds
// =============================================================================

/// Risk percentage bounds (15% to 100%).
pub mod risk_bounds {
    /// Minimum risk percentage.
    pub const MIN: u8 = 15;
    /// Maximum risk percentage.
    pub const MAX: u8 = 100;
    /// Recommended risk percentage, used whenever risk is not acknowledged.
    pub const DEFAULT: u8 = 30;
}

// =============================================================================
// RiskPercent
// =============================================================================

/// Risk exposure percentage, guaranteed to be within valid range (15%–100%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RiskPercent(u8);

impl RiskPercent {
    /// Creates a new risk percentage, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.clamp(risk_bounds::MIN, risk_bounds::MAX))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for RiskPercent {
    fn default() -> Self {
        Self(risk_bounds::DEFAULT)
    }
}
