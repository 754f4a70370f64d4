//! Receipt validation.
//!
//! A receipt is only ever scored after it has been turned into a
//! [`ValidatedReceipt`], which holds the parsed total, prices, date and time.
//! Scoring therefore never has to deal with unparsable input.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use tally_core::DomainError;

use crate::receipt::Receipt;

/// First invariant a receipt was found to violate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("purchaseDate must be a calendar date in YYYY-MM-DD form")]
    InvalidDate,

    #[error("purchaseTime must be a time of day in HH:MM form")]
    InvalidTime,

    #[error("total must be a non-negative decimal amount")]
    InvalidTotal,

    #[error("items must contain at least one line item")]
    NoItems,

    #[error("items[{index}].shortDescription is required")]
    EmptyDescription { index: usize },

    #[error("items[{index}].price must be a non-negative decimal amount")]
    InvalidPrice { index: usize },
}

impl From<Violation> for DomainError {
    fn from(value: Violation) -> Self {
        DomainError::validation(value.to_string())
    }
}

/// A receipt that passed every check, together with its parsed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReceipt<'a> {
    receipt: &'a Receipt,
    total: f64,
    prices: Vec<f64>,
    purchased_on: NaiveDate,
    purchased_at: NaiveTime,
}

impl<'a> ValidatedReceipt<'a> {
    pub fn receipt(&self) -> &'a Receipt {
        self.receipt
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Parsed item prices, in line-item order.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn purchased_on(&self) -> NaiveDate {
        self.purchased_on
    }

    pub fn purchased_at(&self) -> NaiveTime {
        self.purchased_at
    }
}

/// Returns `true` when the receipt may be scored.
///
/// Never panics; unparsable fields simply make the receipt invalid.
pub fn validate(receipt: &Receipt) -> bool {
    check(receipt).is_ok()
}

/// Validate a receipt, reporting the first violated invariant.
pub fn check(receipt: &Receipt) -> Result<ValidatedReceipt<'_>, Violation> {
    require("retailer", &receipt.retailer)?;
    require("purchaseDate", &receipt.purchase_date)?;
    require("purchaseTime", &receipt.purchase_time)?;
    require("total", &receipt.total)?;

    let purchased_on = parse_date(&receipt.purchase_date).ok_or(Violation::InvalidDate)?;
    let purchased_at = parse_time(&receipt.purchase_time).ok_or(Violation::InvalidTime)?;
    let total = parse_amount(&receipt.total).ok_or(Violation::InvalidTotal)?;

    let items = match receipt.items.as_deref() {
        Some(items) if !items.is_empty() => items,
        _ => return Err(Violation::NoItems),
    };

    let prices = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.short_description.is_empty() {
                return Err(Violation::EmptyDescription { index });
            }
            parse_amount(&item.price).ok_or(Violation::InvalidPrice { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedReceipt {
        receipt,
        total,
        prices,
        purchased_on,
        purchased_at,
    })
}

fn require(field: &'static str, value: &str) -> Result<(), Violation> {
    if value.is_empty() {
        Err(Violation::MissingField(field))
    } else {
        Ok(())
    }
}

/// Parse a non-negative decimal amount.
///
/// Accepts an optional sign, then digits with an optional `.`; either side of
/// the point may be empty but not both (`.50`, `5.`, `+5`). A minus sign is only
/// allowed on zero. Exponents, `inf`/`nan` and whitespace are rejected.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match unsigned.split_once('.') {
        Some((whole, fraction)) => {
            digits_only(whole) && digits_only(fraction) && !(whole.is_empty() && fraction.is_empty())
        }
        None => !unsigned.is_empty() && digits_only(unsigned),
    };
    if !well_formed {
        return None;
    }

    let value = unsigned.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if negative && value != 0.0 {
        return None;
    }
    Some(value)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // chrono alone would accept single-digit months/days and signed years.
    let b = raw.as_bytes();
    let shaped = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let b = raw.as_bytes();
    let shaped = b.len() == 5
        && b[2] == b':'
        && b.iter().enumerate().all(|(i, c)| i == 2 || c.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}
