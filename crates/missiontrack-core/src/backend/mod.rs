//! Remote habit backend client.
//!
//! A plain JSON-over-HTTP client for the optional remote store. Callers
//! update in-memory state first and treat these calls as fire-and-forget
//! persistence: a failed save is surfaced to the user, never rolled back.

use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::error::BackendError;
use crate::habit::Habit;
use crate::storage::BackendConfig;

/// Outcome of a bulk save: per-habit failures are counted, not propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    pub saved: usize,
    pub failed: usize,
}

/// Remote backend over a habits HTTP API.
///
/// Endpoints: `GET /habits`, `PUT /habits/{id}`, `POST /habits`.
pub struct RemoteBackend {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
            client: Client::new(),
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build a backend from configuration.
    ///
    /// # Errors
    /// Returns `NotConfigured` when the backend is disabled or has no URL.
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        if !config.enabled || config.base_url.trim().is_empty() {
            return Err(BackendError::NotConfigured);
        }
        let mut backend = Self::new(config.base_url.clone());
        if let Some(token) = &config.api_token {
            backend = backend.with_token(token.clone());
        }
        Ok(backend)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the canonical habit list.
    pub async fn fetch_habits(&self) -> Result<Vec<Habit>, BackendError> {
        let resp = self.authed(self.client.get(self.url("/habits"))).send().await?;
        let habits: Vec<Habit> = Self::check(resp)?.json().await?;
        debug!(count = habits.len(), "fetched habits from backend");
        Ok(habits)
    }

    /// Save one habit (one call per habit on explicit save).
    pub async fn save_habit(&self, habit: &Habit) -> Result<(), BackendError> {
        let url = self.url(&format!("/habits/{}", habit.id));
        let resp = self.authed(self.client.put(url)).json(habit).send().await?;
        Self::check(resp)?;
        Ok(())
    }

    /// Append a habit; returns the rows the backend created.
    pub async fn add_habit(&self, habit: &Habit) -> Result<Vec<Habit>, BackendError> {
        let resp = self
            .authed(self.client.post(self.url("/habits")))
            .json(habit)
            .send()
            .await?;
        Ok(Self::check(resp)?.json().await?)
    }

    /// Save every habit, one call each. Failures are logged and counted;
    /// the in-memory list stays authoritative either way.
    pub async fn save_all(&self, habits: &[Habit]) -> SaveOutcome {
        let mut outcome = SaveOutcome { saved: 0, failed: 0 };
        for habit in habits {
            match self.save_habit(habit).await {
                Ok(()) => outcome.saved += 1,
                Err(err) => {
                    warn!(habit = %habit.name, %err, "failed to save habit");
                    outcome.failed += 1;
                }
            }
        }
        outcome
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn check(resp: Response) -> Result<Response, BackendError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(BackendError::Status {
                status: resp.status().as_u16(),
                url: resp.url().to_string(),
            })
        }
    }
}
