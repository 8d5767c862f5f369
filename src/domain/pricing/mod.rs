// SPDX-License-Identifier: MPL-2.0
//! Pricing rules.
//!
//! - [`tier`]: capital text → [`TierQuote`](tier::TierQuote) (bracket and monthly fee)
//! - [`risk`]: risk multiplier, payout estimate and band classification
//! - [`format`]: euro amount formatting
//! - [`newtypes`]: range-checked [`Tier`](newtypes::Tier) and [`RiskPercent`](newtypes::RiskPercent)

pub mod format;
pub mod newtypes;
pub mod risk;
pub mod tier;

pub use newtypes::{risk_bounds, tier_bounds, RiskPercent, Tier};
pub use risk::{classify, estimated_monthly_payout, multiplier, RiskAssessment, RiskBand, RiskWarning};
pub use tier::{resolve, TierQuote};
