use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One week of the household budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Anchor date identifying the displayed week.
    pub date: NaiveDate,
    /// Spending target for the week.
    pub weekly_amount: f64,
    /// Remaining balance rolled over from the previous week, when the
    /// service has one for this week.
    #[serde(default)]
    pub balance: Option<f64>,
}

/// Response shape of `/week`: the budget fields flattened together with the
/// week's transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    #[serde(flatten)]
    pub budget: Budget,
    /// May be missing on the wire; decodes as an empty list.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A single ledger entry for a week.
///
/// Entries are created by the service; the client only ever changes
/// `ignored` and `tags` and posts the whole record back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    /// Signed amount in currency units. Purchases are positive, refunds
    /// negative.
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub owner: Owner,
    /// Excluded from the weekly remaining amount when set.
    #[serde(default)]
    pub ignored: bool,
    /// Marks the synthetic entry the service generates to roll the previous
    /// week's balance into this one. Carryover entries are not listed with
    /// the week's purchases and never count toward its spending.
    #[serde(rename = "balance", default)]
    pub carryover: bool,
    /// May be missing on the wire; decodes as an empty list.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// The adult the transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Alex,
    Jamie,
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Alex => write!(f, "Alex"),
            Owner::Jamie => write!(f, "Jamie"),
        }
    }
}

/// A label that can be attached to transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Transactions carrying this tag are left out of the weekly remaining
    /// amount, independent of their own `ignored` flag.
    #[serde(default)]
    pub ignore: bool,
    /// Owner names this tag is preselected for when tagging a new
    /// transaction.
    #[serde(default)]
    pub defaults: Vec<String>,
    pub updated: DateTime<Utc>,
}

/// Closing balance of a past week, computed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub date: NaiveDate,
    pub balance: f64,
}

/// The running one-time balance, tracked outside the weekly cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneTime {
    #[serde(rename = "_id")]
    pub id: String,
    pub balance: f64,
}
