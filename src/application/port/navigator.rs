// SPDX-License-Identifier: MPL-2.0
//! Browser navigation port.
//!
//! The checkout flow ends by sending the user to the payment page returned
//! by the backend. Opening that page is a side effect the panel state must
//! not know about, so it goes through this trait.

use std::fmt;
use url::Url;

/// Failure to hand a URL over to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationError(pub String);

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot open browser: {}", self.0)
    }
}

impl std::error::Error for NavigationError {}

/// Opens URLs outside the application.
pub trait Navigator {
    /// Sends the user to `url`. Returns once the opener has been started;
    /// how the opener later exits is not reported back.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] if the opener could not be started.
    fn navigate(&self, url: &Url) -> Result<(), NavigationError>;
}
