// SPDX-License-Identifier: MPL-2.0
//! Display values derived from the panel state.
//!
//! The view only lays out what is computed here, so rendering the same
//! state twice yields the same visible content.

use super::state::{CtaState, State};
use crate::domain::pricing::format::{format_euro, format_euro_cents, format_signed_euro};
use crate::domain::pricing::{classify, estimated_monthly_payout, RiskBand};
use crate::i18n::I18n;

#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Localized amount error; `None` for valid or empty input.
    pub amount_message: Option<String>,
    /// Results, risk section, disclaimer and CTA section; hidden when `None`.
    pub details: Option<Details>,
    pub cta_label: String,
    pub cta_enabled: bool,
    pub redirect_notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub capital_range: String,
    pub monthly_fee: String,
    pub estimated_result: String,
    pub exposure: String,
    pub risk: RiskDisplay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskDisplay {
    pub percent: String,
    pub band: RiskBand,
    pub badge: String,
    pub warning: Option<WarningDisplay>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarningDisplay {
    pub text: String,
    pub danger: bool,
}

impl Presentation {
    pub fn from_state(state: &State, i18n: &I18n) -> Self {
        let per_month = i18n.tr("per-month");

        let amount_message = state
            .amount_error()
            .and_then(|err| err.i18n_key())
            .map(|key| i18n.tr(key));

        let details = state.quote().map(|quote| {
            let risk = state.risk();
            let assessment = classify(risk);
            let estimate = estimated_monthly_payout(quote.capital_min(), risk);

            Details {
                capital_range: format!(
                    "{} \u{2013} {}",
                    format_euro(quote.capital_min()),
                    format_euro(quote.capital_max())
                ),
                monthly_fee: format!(
                    "{} {per_month}",
                    format_euro_cents(i64::from(quote.monthly_fee_cents()))
                ),
                estimated_result: format!("{} {per_month}", format_signed_euro(estimate)),
                exposure: format!("{}% {}", risk.value(), i18n.tr("capital-exposure")),
                risk: RiskDisplay {
                    percent: format!("{}%", risk.value()),
                    band: assessment.band,
                    badge: i18n.tr(assessment.band.i18n_key()),
                    warning: assessment.warning.map(|warning| WarningDisplay {
                        text: i18n.tr(warning.i18n_key()),
                        danger: warning.is_danger(),
                    }),
                },
            }
        });

        let cta_label = match state.cta() {
            CtaState::Idle => i18n.tr("cta-button"),
            CtaState::Submitting { step } => i18n.tr(step.i18n_key()),
            CtaState::Redirected { .. } => i18n.tr("loading-step1"),
        };

        let redirect_notice = match state.cta() {
            CtaState::Redirected { url } => {
                Some(i18n.tr_with_args("redirect-fallback", &[("url", url.as_str())]))
            }
            CtaState::Idle | CtaState::Submitting { .. } => None,
        };

        Self {
            amount_message,
            details,
            cta_label,
            cta_enabled: state.cta_enabled(),
            redirect_notice,
        }
    }
}
