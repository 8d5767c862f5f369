// SPDX-License-Identifier: MPL-2.0
//! Capital tier and monthly fee resolution.
//!
//! Turns the raw text typed in the capital field into a [`TierQuote`]:
//! the capital bracket the amount falls in and the fee charged for it.

use super::newtypes::Tier;
use crate::domain::error::AmountError;

/// Smallest accepted capital, in euros.
pub const MIN_CAPITAL: f64 = 1_000.0;

/// Largest accepted capital, in euros. Above this the user is asked to get in touch.
pub const MAX_CAPITAL: f64 = 250_000.0;

/// Fee of the first tier, in cents (19,90 €).
pub const BASE_FEE_CENTS: u32 = 1_990;

/// Fee added by each tier above the first, in cents (20 €).
pub const FEE_STEP_CENTS: u32 = 2_000;

/// Pricing derived from a valid capital amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierQuote {
    tier: Tier,
    monthly_fee_cents: u32,
}

impl TierQuote {
    /// Builds the quote for a tier.
    #[must_use]
    pub fn for_tier(tier: Tier) -> Self {
        let monthly_fee_cents = BASE_FEE_CENTS + u32::from(tier.value() - 1) * FEE_STEP_CENTS;
        Self {
            tier,
            monthly_fee_cents,
        }
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn capital_min(&self) -> u32 {
        self.tier.capital_min()
    }

    #[must_use]
    pub fn capital_max(&self) -> u32 {
        self.tier.capital_max()
    }

    /// Monthly fee in cents, exact.
    #[must_use]
    pub fn monthly_fee_cents(&self) -> u32 {
        self.monthly_fee_cents
    }

    /// Monthly fee in euros, as sent to the checkout backend.
    #[must_use]
    pub fn monthly_fee(&self) -> f64 {
        f64::from(self.monthly_fee_cents) / 100.0
    }
}

/// Strips every whitespace character and turns decimal commas into dots.
#[must_use]
pub fn normalize_capital_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parses the longest decimal number at the start of `text`.
///
/// Trailing characters are ignored, so `"10000€"` reads as `10000`.
/// A leading `Infinity` literal and exponents past the `f64` range yield an
/// infinite value. Returns `None` when no number leads the text.
#[must_use]
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Resolves raw capital text into a tier quote.
///
/// # Errors
///
/// Returns an [`AmountError`] when the text is empty, not a positive number,
/// or outside the accepted capital range.
pub fn resolve(raw: &str) -> Result<TierQuote, AmountError> {
    let normalized = normalize_capital_text(raw);
    if normalized.is_empty() {
        return Err(AmountError::Empty);
    }

    let capital = match parse_leading_number(&normalized) {
        Some(value) if value > 0.0 => value,
        _ => return Err(AmountError::InvalidAmount),
    };

    if capital < MIN_CAPITAL {
        return Err(AmountError::BelowMinimum);
    }
    if capital > MAX_CAPITAL {
        return Err(AmountError::AboveMaximum);
    }

    // Range checks above keep the quotient within 1..=250 before clamping.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let tier = Tier::new((capital / 1000.0).floor() as u16);
    Ok(TierQuote::for_tier(tier))
}
