//! Tip calculation with exact cent arithmetic.
//!
//! Amounts are held as integer cents ([`Money`]). Floating point inputs are
//! quantised through their shortest decimal representation, so `53.27` is
//! exactly 5327 cents rather than the nearest binary fraction.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};

/// Default tip percentage.
pub const DEFAULT_TIP_PERCENT: f64 = 20.0;

/// An amount in hundredths: cents for currency, hundredths of a percent for
/// rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(i64);

impl Money {
    /// Create an amount from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Quantise a decimal value to hundredths, rounding half up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the value is not finite or does not
    /// fit in 64 bits of cents.
    pub fn from_decimal(field: &'static str, value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::invalid_input(field, "must be a finite number"));
        }

        // `Display` for f64 gives the shortest round-trip digits, never an exponent.
        let repr = value.abs().to_string();
        let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
        let overflow = || Error::invalid_input(field, "value is too large");

        let whole: i64 = whole.parse().map_err(|_| overflow())?;
        let digits: Vec<i64> = fraction
            .bytes()
            .take(3)
            .map(|b| i64::from(b - b'0'))
            .collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|&d| d >= 5);

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(overflow)?;

        Ok(Self(if value.is_sign_negative() { -cents } else { cents }))
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of a tip calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TipBreakdown {
    /// Bill before tip.
    pub bill_amount: Money,
    /// Tip rate in percent, to two decimals.
    pub tip_percent: Money,
    /// Number of people splitting the bill.
    #[serde(serialize_with = "serialize_display")]
    pub num_people: u32,
    /// Tip added to the bill.
    pub tip_amount: Money,
    /// Bill plus tip.
    pub total_amount: Money,
    /// Each person's share.
    pub amount_per_person: Money,
}

fn serialize_display<S: Serializer>(
    value: &u32,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Calculate the tip and the per-person split.
///
/// With `round_up`, every person's share is rounded up to the next cent and
/// the total and tip are adjusted so that everyone pays the same amount.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the bill or tip is negative, or
/// `num_people` is zero.
pub fn calculate_tip(
    bill_amount: f64,
    tip_percent: f64,
    num_people: u32,
    round_up: bool,
) -> Result<TipBreakdown> {
    // Sign checks run before quantising so that -0.001 is not read as zero.
    if bill_amount < 0.0 {
        return Err(Error::invalid_input(
            "bill_amount",
            "bill_amount must be non-negative",
        ));
    }
    if tip_percent < 0.0 {
        return Err(Error::invalid_input(
            "tip_percent",
            "tip_percent must be non-negative",
        ));
    }
    let bill = Money::from_decimal("bill_amount", bill_amount)?;
    let tip_pct = Money::from_decimal("tip_percent", tip_percent)?;

    if num_people == 0 {
        return Err(Error::invalid_input(
            "num_people",
            "num_people must be greater than zero",
        ));
    }

    let people = i128::from(num_people);
    let tip = div_half_up(i128::from(bill.0) * i128::from(tip_pct.0), 10_000);
    let mut tip_amount = to_money("tip_amount", tip)?;
    let mut total_amount = to_money("total_amount", i128::from(bill.0) + tip)?;

    let amount_per_person = if round_up {
        let share = div_ceil(i128::from(total_amount.0), people);
        total_amount = to_money("total_amount", share * people)?;
        tip_amount = Money(total_amount.0 - bill.0);
        to_money("amount_per_person", share)?
    } else {
        to_money(
            "amount_per_person",
            div_half_up(i128::from(total_amount.0), people),
        )?
    };

    debug!(
        bill = %bill,
        tip = %tip_amount,
        total = %total_amount,
        people = num_people,
        round_up,
        "calculated tip"
    );

    Ok(TipBreakdown {
        bill_amount: bill,
        tip_percent: tip_pct,
        num_people,
        tip_amount,
        total_amount,
        amount_per_person,
    })
}

/// Format a breakdown as the six-line summary shown by the CLI.
#[must_use]
pub fn format_breakdown(breakdown: &TipBreakdown, currency_symbol: &str) -> String {
    [
        format!("Bill Amount: {currency_symbol}{}", breakdown.bill_amount),
        format!("Tip Percentage: {}%", breakdown.tip_percent),
        format!("Number of People: {}", breakdown.num_people),
        format!("Tip Amount: {currency_symbol}{}", breakdown.tip_amount),
        format!("Total Amount: {currency_symbol}{}", breakdown.total_amount),
        format!(
            "Amount Per Person: {currency_symbol}{}",
            breakdown.amount_per_person
        ),
    ]
    .join("\n")
}

// Operands are non-negative.
fn div_half_up(numerator: i128, denominator: i128) -> i128 {
    (2 * numerator + denominator) / (2 * denominator)
}

fn div_ceil(numerator: i128, denominator: i128) -> i128 {
    (numerator + denominator - 1) / denominator
}

fn to_money(field: &'static str, cents: i128) -> Result<Money> {
    i64::try_from(cents)
        .map(Money)
        .map_err(|_| Error::invalid_input(field, "value is too large"))
}
