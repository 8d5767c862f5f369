// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Checkout**: Payment backend endpoint and request timeout
//! - **Pricing**: Initial capital shown when the panel opens

// ==========================================================================
// Checkout Defaults
// ==========================================================================

/// API base of the payment backend. `/create-checkout` is appended to it.
pub const DEFAULT_CHECKOUT_ENDPOINT: &str =
    "https://bdpzmvhvl4.execute-api.us-west-2.amazonaws.com/Prod";

/// Default checkout request timeout (in seconds).
pub const DEFAULT_CHECKOUT_TIMEOUT_SECS: u64 = 30;

/// Minimum checkout request timeout (in seconds).
pub const MIN_CHECKOUT_TIMEOUT_SECS: u64 = 1;

/// Maximum checkout request timeout (in seconds).
pub const MAX_CHECKOUT_TIMEOUT_SECS: u64 = 120;

/// Interval between loading-text steps on the checkout button (in seconds).
pub const LOADING_STEP_INTERVAL_SECS: u64 = 3;

// ==========================================================================
// Pricing Defaults
// ==========================================================================

/// Capital text seeded into the input when the panel opens.
pub const DEFAULT_INITIAL_CAPITAL: &str = "1000";

const _: () = {
    assert!(MIN_CHECKOUT_TIMEOUT_SECS <= DEFAULT_CHECKOUT_TIMEOUT_SECS);
    assert!(DEFAULT_CHECKOUT_TIMEOUT_SECS <= MAX_CHECKOUT_TIMEOUT_SECS);
};
