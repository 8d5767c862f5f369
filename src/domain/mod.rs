// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`AmountError`](error::AmountError))
//! - [`pricing`]: Tier and fee resolution, risk multiplier and classification,
//!   euro formatting ([`TierQuote`](pricing::TierQuote), [`RiskPercent`](pricing::RiskPercent))

pub mod error;
pub mod pricing;
