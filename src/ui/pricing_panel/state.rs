// SPDX-License-Identifier: MPL-2.0
//! Pricing panel state and its transitions.

use super::messages::{Event, Message};
use crate::checkout::CheckoutRequest;
use crate::domain::error::AmountError;
use crate::domain::pricing::{self, RiskPercent, TierQuote};
use url::Url;

/// Step of the rotating label shown while the checkout request is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingStep(u8);

impl LoadingStep {
    pub const FIRST: Self = Self(1);
    const LAST: u8 = 3;

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// 1 → 2 → 3 → 1.
    #[must_use]
    pub fn next(self) -> Self {
        if self.0 >= Self::LAST {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self.0 {
            2 => "loading-step2",
            3 => "loading-step3",
            _ => "loading-step1",
        }
    }
}

/// Lifecycle of the call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CtaState {
    Idle,
    Submitting { step: LoadingStep },
    /// Terminal: the browser was sent to the payment page.
    Redirected { url: Url },
}

/// Local UI state of the pricing panel.
///
/// `quote` is set exactly when the capital text is valid, so the tier and
/// bracket cannot disagree with the validity flag.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    capital_text: String,
    quote: Option<TierQuote>,
    amount_error: Option<AmountError>,
    risk: RiskPercent,
    risk_panel_open: bool,
    risk_acknowledged: bool,
    terms_accepted: bool,
    cta: CtaState,
}

impl Default for State {
    fn default() -> Self {
        Self::new("")
    }
}

impl State {
    /// Creates the panel seeded with `initial_capital`, already resolved.
    pub fn new(initial_capital: &str) -> Self {
        let mut state = Self {
            capital_text: String::new(),
            quote: None,
            amount_error: None,
            risk: RiskPercent::default(),
            risk_panel_open: false,
            risk_acknowledged: false,
            terms_accepted: false,
            cta: CtaState::Idle,
        };
        state.set_capital_text(initial_capital);
        state
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CapitalChanged(text) => self.set_capital_text(&text),
            Message::RiskChanged(percent) => {
                self.set_risk(percent);
            }
            Message::ToggleRiskPanel => self.risk_panel_open = !self.risk_panel_open,
            Message::RiskAcknowledged(accepted) => self.set_risk_acknowledged(accepted),
            Message::TermsToggled(accepted) => self.set_terms_accepted(accepted),
            Message::CtaPressed => {
                if let Some(request) = self.begin_checkout() {
                    return Event::CheckoutRequested(request);
                }
            }
            Message::LoadingTick => self.advance_loading_step(),
        }
        Event::None
    }

    /// Stores the raw text and re-derives the quote from it.
    pub fn set_capital_text(&mut self, text: &str) {
        self.capital_text = text.to_string();
        match pricing::resolve(text) {
            Ok(quote) => {
                self.quote = Some(quote);
                self.amount_error = None;
            }
            Err(err) => {
                self.quote = None;
                self.amount_error = Some(err);
            }
        }
    }

    /// Moves the risk slider. Ignored until the risk is acknowledged.
    ///
    /// Returns whether the risk changed.
    pub fn set_risk(&mut self, percent: u8) -> bool {
        if !self.risk_acknowledged {
            return false;
        }
        let risk = RiskPercent::new(percent);
        let changed = risk != self.risk;
        self.risk = risk;
        changed
    }

    /// Clearing the acknowledgement pins the risk back to the default.
    pub fn set_risk_acknowledged(&mut self, accepted: bool) {
        self.risk_acknowledged = accepted;
        if !accepted {
            self.risk = RiskPercent::default();
        }
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    #[must_use]
    pub fn cta_enabled(&self) -> bool {
        self.quote.is_some() && self.terms_accepted && self.cta == CtaState::Idle
    }

    /// Enters `Submitting` and builds the request, or does nothing when the
    /// CTA is disabled.
    pub fn begin_checkout(&mut self) -> Option<CheckoutRequest> {
        if !self.cta_enabled() {
            return None;
        }
        let quote = self.quote?;
        self.cta = CtaState::Submitting {
            step: LoadingStep::FIRST,
        };
        Some(CheckoutRequest::new(&quote, self.risk))
    }

    pub fn advance_loading_step(&mut self) {
        if let CtaState::Submitting { step } = &mut self.cta {
            *step = step.next();
        }
    }

    pub fn checkout_succeeded(&mut self, url: Url) {
        self.cta = CtaState::Redirected { url };
    }

    /// Returns the button to `Idle`; other fields are left untouched.
    pub fn checkout_failed(&mut self) {
        if matches!(self.cta, CtaState::Submitting { .. }) {
            self.cta = CtaState::Idle;
        }
    }

    #[must_use]
    pub fn capital_text(&self) -> &str {
        &self.capital_text
    }

    #[must_use]
    pub fn quote(&self) -> Option<&TierQuote> {
        self.quote.as_ref()
    }

    #[must_use]
    pub fn has_valid_capital(&self) -> bool {
        self.quote.is_some()
    }

    #[must_use]
    pub fn amount_error(&self) -> Option<AmountError> {
        self.amount_error
    }

    #[must_use]
    pub fn risk(&self) -> RiskPercent {
        self.risk
    }

    #[must_use]
    pub fn risk_panel_open(&self) -> bool {
        self.risk_panel_open
    }

    #[must_use]
    pub fn risk_acknowledged(&self) -> bool {
        self.risk_acknowledged
    }

    #[must_use]
    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    #[must_use]
    pub fn cta(&self) -> &CtaState {
        &self.cta
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.cta, CtaState::Submitting { .. })
    }
}
