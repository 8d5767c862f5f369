// SPDX-License-Identifier: MPL-2.0
//! Euro amount formatting.
//!
//! Amounts are always shown the French way, whatever the UI language:
//! space-grouped thousands, comma decimals and a trailing ` €`.

/// Rounds a euro amount to whole cents, half away from zero.
#[must_use]
pub fn to_cents(euros: f64) -> i64 {
    // Amounts handled here stay far below i64 range.
    #[allow(clippy::cast_possible_truncation)]
    let cents = (euros * 100.0).round() as i64;
    cents
}

/// Formats whole euros, e.g. `10000` → `"10 000 €"`.
#[must_use]
pub fn format_euro(euros: u32) -> String {
    format!("{} €", group_thousands(u64::from(euros)))
}

/// Formats an amount in cents with two decimals, e.g. `19990` → `"199,90 €"`.
#[must_use]
pub fn format_euro_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{},{:02} €", group_thousands(abs / 100), abs % 100)
}

/// Formats a euro amount rounded to cents with an explicit sign,
/// e.g. `1184.32` → `"+1 184,32 €"`.
#[must_use]
pub fn format_signed_euro(euros: f64) -> String {
    let cents = to_cents(euros);
    if cents < 0 {
        format_euro_cents(cents)
    } else {
        format!("+{}", format_euro_cents(cents))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
