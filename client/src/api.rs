//! Typed wrappers around the remote budgeting service.
//!
//! Each method maps to one endpoint and fails with [`ApiError`]; nothing
//! here decides how a failure is shown. The service speaks JSON with the
//! shapes in the `shared` crate.

use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{History, OneTime, Tag, Transaction, Week};
use tracing::{debug, warn};
use weekly_budget_core::resource::Resource;

use crate::config::Config;
use crate::error::ApiError;

/// Client for the budgeting service, cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    api_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct SplitRequest<'a> {
    transaction: &'a Transaction,
    #[serde(rename = "newAmount")]
    new_amount: f64,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url,
            api_key: config.api_key,
        }
    }

    /// Fetches the budget and transactions for the week containing `date`.
    ///
    /// Transactions come back newest first, the order the screens list them
    /// in.
    pub async fn get_week(&self, date: NaiveDate) -> Result<Week, ApiError> {
        let url = format!("{}/week?date={}", self.api_url, date.format("%Y-%m-%d"));
        let mut week: Week = self.get_json(&url, "retrieving the budget").await?;
        week.transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(week)
    }

    /// Fetches the closing balances of past weeks, one row per week.
    pub async fn history(&self) -> Result<Vec<History>, ApiError> {
        let url = format!("{}/history", self.api_url);
        self.get_json(&url, "retrieving the history").await
    }

    /// Fetches the recently used tags as a flat list.
    pub async fn recent_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let url = format!("{}/tags/recent", self.api_url);
        self.get_json(&url, "retrieving the recent tags").await
    }

    /// Fetches the running one-time balance.
    pub async fn one_time_balance(&self) -> Result<OneTime, ApiError> {
        let url = format!("{}/one-time/balance", self.api_url);
        self.get_json(&url, "retrieving the one-time balance").await
    }

    /// Fetches a child's allowance ledger.
    pub async fn allowance_transactions(&self, owner: &str) -> Result<Vec<Transaction>, ApiError> {
        let url = format!("{}/allowances?owner={owner}", self.api_url);
        self.get_json(&url, "retrieving the allowance transactions")
            .await
    }

    /// The allowance ledger fetch, started immediately and wrapped for
    /// synchronous polling from a render loop.
    pub fn allowance_resource(&self, owner: &str) -> Resource<Vec<Transaction>, ApiError> {
        let client = self.clone();
        let owner = owner.to_string();
        Resource::new(async move { client.allowance_transactions(&owner).await })
    }

    /// Pushes an edited transaction back to the service, whole record.
    pub async fn update_transaction(&self, transaction: &Transaction) -> Result<(), ApiError> {
        let url = format!("{}/transaction", self.api_url);
        self.post_json(&url, transaction, "updating the transaction")
            .await
    }

    /// Splits a transaction in two, moving `second_amount` onto the new one.
    ///
    /// Validate the split with the core crate first; the service accepts
    /// whatever it is sent.
    pub async fn split_transaction(
        &self,
        transaction: &Transaction,
        second_amount: f64,
    ) -> Result<(), ApiError> {
        let url = format!("{}/transaction/split", self.api_url);
        let body = SplitRequest {
            transaction,
            new_amount: second_amount,
        };
        self.post_json(&url, &body, "splitting the transaction").await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &'static str,
    ) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|source| ApiError::Transport { context, source })?;

        Self::expect_success(response, context)
            .await?
            .json()
            .await
            .map_err(|source| ApiError::Transport { context, source })
    }

    async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        context: &'static str,
    ) -> Result<(), ApiError> {
        debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { context, source })?;

        Self::expect_success(response, context).await.map(|_| ())
    }

    async fn expect_success(
        response: Response,
        context: &'static str,
    ) -> Result<Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            warn!(%status, context, "service answered with an error");
            return Err(ApiError::Status { context, status });
        }
        Ok(response)
    }
}
