//! Point-scoring rules.
//!
//! Six independent rules, each contributing a non-negative number of points.
//! The score of a receipt is their sum.

use serde::{Deserialize, Serialize};

use crate::validation::ValidatedReceipt;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
/// Exclusive bounds, as `HHMM`.
const AFTERNOON_WINDOW: (u64, u64) = (1400, 1600);

/// Points earned by each rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of every rule, saturating at `u64::MAX` for absurdly large prices.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Total points for a validated receipt.
pub fn score(receipt: &ValidatedReceipt<'_>) -> u64 {
    breakdown(receipt).total()
}

/// Points for a validated receipt, rule by rule.
pub fn breakdown(receipt: &ValidatedReceipt<'_>) -> PointsBreakdown {
    let raw = receipt.receipt();
    let items = raw.line_items();

    PointsBreakdown {
        retailer: retailer_points(&raw.retailer),
        round_total: round_total_points(receipt.total()),
        item_pairs: POINTS_PER_ITEM_PAIR * (items.len() as u64 / 2),
        descriptions: items
            .iter()
            .zip(receipt.prices())
            .map(|(item, &price)| description_points(&item.short_description, price))
            .fold(0, u64::saturating_add),
        odd_day: if digits_value(&raw.purchase_date) % 2 == 1 {
            ODD_DAY_POINTS
        } else {
            0
        },
        afternoon: {
            let hhmm = digits_value(&raw.purchase_time);
            if hhmm > AFTERNOON_WINDOW.0 && hhmm < AFTERNOON_WINDOW.1 {
                AFTERNOON_POINTS
            } else {
                0
            }
        },
    }
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// Exact comparisons against the truncated value; no epsilon.
fn round_total_points(total: f64) -> u64 {
    let mut points = 0;
    if total == total.trunc() {
        points += ROUND_DOLLAR_POINTS;
    }
    if total == (total * 4.0).trunc() / 4.0 {
        points += QUARTER_MULTIPLE_POINTS;
    }
    points
}

fn description_points(description: &str, price: f64) -> u64 {
    let trimmed = description.trim_matches(' ');
    if trimmed.is_empty() || trimmed.len() % 3 != 0 {
        return 0;
    }
    // `as` saturates for values beyond u64.
    (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as u64
}

/// All decimal digits of `text`, read as one integer.
///
/// Only called on fields the validator has already shaped (`YYYY-MM-DD`,
/// `HH:MM`), so the digit string is never empty and always fits.
fn digits_value(text: &str) -> u64 {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc, d| acc * 10 + u64::from(d - b'0'))
}
