// SPDX-License-Identifier: MPL-2.0
//! Checkout session creation against the external payment backend.
//!
//! The backend exposes a single `POST <endpoint>/create-checkout` route that
//! takes the selected pricing as JSON and answers with either
//! `{"checkout_url": "..."}` or `{"error": "..."}`. Nothing else is
//! recognized. Requests are never retried: every failure is reported back
//! to the panel, which waits for a new user action.

use crate::domain::pricing::{RiskPercent, TierQuote};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error as ThisError;
use url::Url;

/// Route appended to the configured API base.
pub const CREATE_CHECKOUT_PATH: &str = "create-checkout";

/// User agent sent with every checkout request.
const USER_AGENT: &str = concat!("PricingPanel/", env!("CARGO_PKG_VERSION"));

/// Body of the checkout request. Field names are part of the backend contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub tier: u16,
    /// Lower bound of the capital bracket; the backend calls it `balance`.
    pub balance: u32,
    pub monthly_fee: f64,
    pub risk_level: u8,
}

impl CheckoutRequest {
    /// Builds a request from the current quote and risk level.
    #[must_use]
    pub fn new(quote: &TierQuote, risk: RiskPercent) -> Self {
        Self {
            tier: quote.tier().value(),
            balance: quote.capital_min(),
            monthly_fee: quote.monthly_fee(),
            risk_level: risk.value(),
        }
    }
}

/// Response body, in either of its two recognized shapes.
#[derive(Debug, Default, Deserialize)]
struct CheckoutResponse {
    #[serde(default)]
    checkout_url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Why a checkout session could not be created.
///
/// `Display` yields the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum CheckoutError {
    /// The request never got an HTTP answer (DNS, TLS, timeout...).
    #[error("{0}")]
    Network(String),
    /// Non-2xx answer. `message` is the backend's `error` field verbatim,
    /// or `Server error: <status>` when it has none.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// 2xx answer whose body is not the expected JSON.
    #[error("Invalid server response: {0}")]
    MalformedBody(String),
    #[error("No checkout URL received")]
    MissingCheckoutUrl,
    #[error("Invalid checkout URL: {0}")]
    InvalidCheckoutUrl(String),
}

/// Builds `<base>/create-checkout`, keeping any path already in `base`.
///
/// # Errors
///
/// Returns [`Error::Config`] if the resulting URL does not parse.
pub fn checkout_endpoint(base: &str) -> Result<Url> {
    let joined = format!("{}/{CREATE_CHECKOUT_PATH}", base.trim_end_matches('/'));
    Url::parse(&joined)
        .map_err(|err| Error::Config(format!("invalid checkout endpoint '{base}': {err}")))
}

/// Maps an HTTP status and body to the checkout URL or an error.
///
/// # Errors
///
/// See [`CheckoutError`] for the failure cases.
pub fn interpret_response(status: u16, body: &str) -> std::result::Result<Url, CheckoutError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<CheckoutResponse>(body)
            .ok()
            .and_then(|response| response.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("Server error: {status}"));
        return Err(CheckoutError::Server { status, message });
    }

    let response: CheckoutResponse = serde_json::from_str(body)
        .map_err(|err| CheckoutError::MalformedBody(err.to_string()))?;

    match response.checkout_url.filter(|url| !url.is_empty()) {
        Some(raw) => Url::parse(&raw).map_err(|_| CheckoutError::InvalidCheckoutUrl(raw)),
        None => Err(CheckoutError::MissingCheckoutUrl),
    }
}

/// HTTP client bound to one checkout endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl CheckoutClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unusable base URL or if the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = checkout_endpoint(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Config(format!("cannot build HTTP client: {err}")))?;

        Ok(Self { http, endpoint })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts the request and returns the checkout URL to navigate to.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status or unexpected body.
    pub async fn create_session(
        &self,
        request: &CheckoutRequest,
    ) -> std::result::Result<Url, CheckoutError> {
        tracing::debug!(endpoint = %self.endpoint, ?request, "creating checkout session");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| CheckoutError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| CheckoutError::Network(err.to_string()))?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(url) => tracing::info!(status, %url, "checkout session created"),
            Err(err) => tracing::warn!(status, error = %err, "checkout session failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::resolve;

    #[test]
    fn request_serializes_with_backend_field_names() {
        let quote = resolve("10 000").unwrap();
        let request = CheckoutRequest::new(&quote, RiskPercent::new(45));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "tier": 10,
                "balance": 10000,
                "monthlyFee": 199.9,
                "riskLevel": 45
            })
        );
    }

    #[test]
    fn endpoint_keeps_stage_path() {
        let url = checkout_endpoint("https://api.example.com/Prod").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/Prod/create-checkout");

        let url = checkout_endpoint("https://api.example.com/Prod/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/Prod/create-checkout");
    }

    #[test]
    fn endpoint_rejects_garbage() {
        assert!(matches!(checkout_endpoint("not a url"), Err(Error::Config(_))));
    }

    #[test]
    fn success_returns_checkout_url() {
        let url = interpret_response(200, r#"{"checkout_url":"https://pay.example/x"}"#).unwrap();
        assert_eq!(url.as_str(), "https://pay.example/x");
    }

    #[test]
    fn success_without_url_is_an_error() {
        assert_eq!(
            interpret_response(200, r#"{"status":"ok"}"#),
            Err(CheckoutError::MissingCheckoutUrl)
        );
        assert_eq!(
            interpret_response(201, r#"{"checkout_url":""}"#),
            Err(CheckoutError::MissingCheckoutUrl)
        );
    }

    #[test]
    fn success_with_unparseable_url() {
        assert_eq!(
            interpret_response(200, r#"{"checkout_url":"nowhere"}"#),
            Err(CheckoutError::InvalidCheckoutUrl("nowhere".to_string()))
        );
    }

    #[test]
    fn success_with_non_json_body() {
        assert!(matches!(
            interpret_response(200, "<html>oops</html>"),
            Err(CheckoutError::MalformedBody(_))
        ));
    }

    #[test]
    fn server_error_message_is_verbatim() {
        let err = interpret_response(400, r#"{"error":"Invalid tier"}"#).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::Server {
                status: 400,
                message: "Invalid tier".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid tier");
    }

    #[test]
    fn server_error_without_body_is_generic() {
        let err = interpret_response(502, "Bad Gateway").unwrap_err();
        assert_eq!(err.to_string(), "Server error: 502");

        let err = interpret_response(500, r#"{"error":""}"#).unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[test]
    fn error_field_on_success_status_is_not_a_url() {
        assert_eq!(
            interpret_response(200, r#"{"error":"late failure"}"#),
            Err(CheckoutError::MissingCheckoutUrl)
        );
    }

    #[test]
    fn client_targets_create_checkout_route() {
        let client =
            CheckoutClient::new("https://api.example.com/Prod", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.example.com/Prod/create-checkout"
        );
    }
}
