// SPDX-License-Identifier: MPL-2.0
//! Pricing panel message/event types.

use crate::checkout::CheckoutRequest;

/// Messages emitted by the panel widgets and the loading timer.
#[derive(Debug, Clone)]
pub enum Message {
    CapitalChanged(String),
    RiskChanged(u8),
    ToggleRiskPanel,
    RiskAcknowledged(bool),
    TermsToggled(bool),
    CtaPressed,
    LoadingTick,
}

/// Side effects the panel asks its parent to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The CTA was activated; the request must be sent to the backend.
    CheckoutRequested(CheckoutRequest),
}
