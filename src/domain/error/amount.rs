// SPDX-License-Identifier: MPL-2.0
//! Capital amount validation errors.

use std::fmt;

/// Reasons a capital text cannot be turned into a tier quote.
///
/// All variants are recovered locally: derived pricing state is reset and a
/// localized message replaces the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Nothing left after whitespace removal. Results are hidden silently.
    Empty,
    /// Not a number, or not strictly positive.
    InvalidAmount,
    /// Below the 1 000 € minimum.
    BelowMinimum,
    /// Above the 250 000 € ceiling (contact sales instead).
    AboveMaximum,
}

impl AmountError {
    /// Returns the i18n message key shown to the user, if any.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            AmountError::Empty => None,
            AmountError::InvalidAmount => Some("error-invalid"),
            AmountError::BelowMinimum => Some("error-min"),
            AmountError::AboveMaximum => Some("error-max"),
        }
    }
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Empty => write!(f, "No amount entered"),
            AmountError::InvalidAmount => write!(f, "Invalid amount"),
            AmountError::BelowMinimum => write!(f, "Amount below minimum capital"),
            AmountError::AboveMaximum => write!(f, "Amount above maximum capital"),
        }
    }
}

impl std::error::Error for AmountError {}
