//! Weekly balance arithmetic and week-to-week navigation.
//!
//! The budget runs on Monday-anchored weeks. All functions here are pure:
//! callers pass the current date or datetime in explicitly, and nothing ever
//! performs I/O or panics on user input.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use shared::Transaction;

/// Whether a transaction counts toward the week's spending.
///
/// Carryover entries, entries the user ignored, and entries carrying any
/// ignoring tag are all left out.
pub fn counts_toward_week(transaction: &Transaction) -> bool {
    !transaction.carryover
        && !transaction.ignored
        && transaction.tags.iter().all(|tag| !tag.ignore)
}

/// Amount left to spend this week.
///
/// `carried` is the previous week's balance when the service sent one; it is
/// added on top of the filtered sum as a display adjustment. A negative
/// result means the week is overspent, which is a valid state.
pub fn compute_remaining(
    weekly_amount: f64,
    transactions: &[Transaction],
    carried: Option<f64>,
) -> f64 {
    let spent: f64 = transactions
        .iter()
        .filter(|transaction| counts_toward_week(transaction))
        .map(|transaction| transaction.amount)
        .sum();

    weekly_amount - spent + carried.unwrap_or(0.0)
}

/// Last week's balance as derived from the week's carryover entries, or
/// `None` when the service sent none.
///
/// Carryover entries record rolled-over spending, so their negated sum is
/// the balance the previous week closed with.
pub fn carried_balance(transactions: &[Transaction]) -> Option<f64> {
    let mut sum = 0.0;
    let mut found = false;
    for transaction in transactions.iter().filter(|t| t.carryover) {
        sum += transaction.amount;
        found = true;
    }

    found.then_some(-sum)
}

/// Anchor of the week before the one identified by `anchor`.
pub fn previous_week_anchor(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(7)
}

/// Anchor of the week after the one identified by `anchor`.
///
/// The ledger only exists up to the present, so when the following week
/// starts after `today` the anchor is returned unchanged and the caller
/// stays on the current week.
pub fn next_week_anchor(anchor: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = anchor + Duration::days(7);
    if candidate > today {
        anchor
    } else {
        candidate
    }
}

/// Midnight at the start of the previous Monday-anchored week, relative to
/// `now`.
///
/// Found by walking back from the day before `now` to the nearest Monday and
/// stepping one further week back. The walk keeps the cutoff on the budget's
/// Monday boundary regardless of any library's week-start convention.
pub fn edit_cutoff(now: NaiveDateTime) -> NaiveDateTime {
    let mut monday = now.date() - Duration::days(1);
    while monday.weekday() != Weekday::Mon {
        monday = monday - Duration::days(1);
    }

    (monday - Duration::days(7)).and_time(NaiveTime::MIN)
}

/// Whether a transaction dated `date` may still be edited or split.
///
/// Transactions stay editable for a rolling two-week window ending at the
/// start of the previous Monday-anchored week. Callers check this before
/// offering edit actions and tell the user the entry is too old otherwise.
pub fn is_editable(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    date > edit_cutoff(now)
}

/// Outcome of splitting a transaction in two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// What remains of the original transaction.
    pub first: f64,
    /// The portion moved onto the new transaction.
    pub second: f64,
    /// False when the split would leave the first portion negative, or when
    /// the requested portion is not a finite number.
    pub valid: bool,
}

/// Divides `total` so that `second_portion` moves to a new transaction.
///
/// Parsing the user's input is the caller's job, but a non-finite value is
/// still handled here: the split is marked invalid and the full amount stays
/// on the first portion.
pub fn split_amount(total: f64, second_portion: f64) -> Split {
    if !second_portion.is_finite() {
        return Split {
            first: total,
            second: second_portion,
            valid: false,
        };
    }

    let first = total - second_portion;
    Split {
        first,
        second: second_portion,
        valid: first >= 0.0,
    }
}
