//! HTTP access to the OpenF1 API.
//!
//! OpenF1 serves raw session and position data; championship standings are
//! computed locally from it.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::cli::types::SessionKey;
use crate::error::Result;
use crate::openf1::types::{Driver, PositionRecord, Session};


/// Base path for the public OpenF1 v1 API.
pub const OPENF1_BASE_URL: &str = "https://api.openf1.org/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over the OpenF1 endpoints the standings engine consumes.
///
/// The base URL is injectable so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct OpenF1Client {
    client: Client,
    base_url: String,
}

impl OpenF1Client {
    pub fn new() -> Result<Self> {
        Self::with_base_url(OPENF1_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current roster via `session_key=latest`.
    ///
    /// The endpoint repeats drivers who appear in multiple meetings; the
    /// first occurrence per race number wins.
    pub async fn drivers(&self) -> Result<Vec<Driver>> {
        let raw: Vec<Driver> = self.get_json("drivers?session_key=latest").await?;

        let mut seen = HashSet::new();
        Ok(raw
            .into_iter()
            .filter(|d| seen.insert(d.driver_number))
            .collect())
    }

    /// Race and sprint sessions for a year, in the order OpenF1 returns them
    /// (chronological).
    ///
    /// `session_type=Race` covers both; practice and qualifying never show
    /// up, but sessions whose name classifies as neither kind are dropped
    /// here too.
    pub async fn race_and_sprint_sessions(&self, year: u16) -> Result<Vec<Session>> {
        let sessions: Vec<Session> = self
            .get_json(&format!("sessions?session_type=Race&year={year}"))
            .await?;

        Ok(sessions
            .into_iter()
            .filter(|s| s.kind().is_some())
            .collect())
    }

    /// Raw position feed for one session.
    pub async fn positions(&self, session_key: SessionKey) -> Result<Vec<PositionRecord>> {
        self.get_json(&format!("position?session_key={session_key}"))
            .await
    }

    /// Probe used by the status command.
    pub async fn is_online(&self) -> bool {
        self.drivers().await.is_ok()
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }
}
