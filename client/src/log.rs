//! Log mirroring to the service.
//!
//! The service keeps a trail of client-side events so problems on the phone
//! can be read back later. Delivery is fire-and-forget: a mirror that cannot
//! reach the service only produces a local warning.

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;

#[derive(Serialize)]
struct LogRequest {
    message: String,
}

/// Mirrors log lines to the service's `/log` endpoint.
#[derive(Clone)]
pub struct RemoteLog {
    http: Client,
    api_url: String,
    api_key: String,
}

impl RemoteLog {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Emits `message` locally and posts it to the service on a detached
    /// task.
    pub fn post(&self, message: &str) {
        info!("{message}");

        let http = self.http.clone();
        let url = format!("{}/log", self.api_url);
        let api_key = self.api_key.clone();
        let body = LogRequest {
            message: message.to_string(),
        };
        tokio::spawn(async move {
            match http.post(&url).bearer_auth(api_key).json(&body).send().await {
                Ok(response) if !response.status().is_success() => {
                    warn!(status = %response.status(), "log mirror rejected the message");
                }
                Err(error) => {
                    warn!(%error, "log mirror unreachable");
                }
                Ok(_) => {}
            }
        });
    }
}
