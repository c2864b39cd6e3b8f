use crate::cli::types::{DriverNumber, SessionKey};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;


/// The session kinds that award championship points.
///
/// OpenF1 labels both under `session_type == "Race"`; the `session_name`
/// field distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SessionKind {
    Race,
    Sprint,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Race => "Race",
            SessionKind::Sprint => "Sprint",
        }
    }

    /// Classify an OpenF1 `session_name`. Anything other than a grand prix
    /// or a sprint (practice, qualifying, shootouts) yields `None`.
    pub fn from_session_name(name: &str) -> Option<Self> {
        match name {
            "Race" => Some(SessionKind::Race),
            "Sprint" => Some(SessionKind::Sprint),
            _ => None,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timed event at a circuit, as returned by `GET /sessions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Session {
    pub session_key: SessionKey,
    pub session_name: String,
    pub location: String,
    #[serde(default)]
    pub country_name: String,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    pub year: u16,
}

impl Session {
    pub fn kind(&self) -> Option<SessionKind> {
        SessionKind::from_session_name(&self.session_name)
    }

    /// A session counts toward standings once its start time has passed.
    pub fn is_completed(&self, now: DateTime<Utc>) -> bool {
        self.date_start <= now
    }

    /// The position feed can keep settling shortly after the flag; only
    /// sessions over for a full day are safe to cache.
    pub fn has_settled(&self, now: DateTime<Utc>) -> bool {
        self.date_end + Duration::days(1) <= now
    }
}

/// One entry of the position feed from `GET /position`.
///
/// The feed emits a record for every position change; only the latest record
/// per driver reflects the final classification.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PositionRecord {
    pub session_key: SessionKey,
    pub driver_number: DriverNumber,
    pub position: u8,
    pub date: DateTime<Utc>,
}

/// A competitor from `GET /drivers`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Driver {
    pub driver_number: DriverNumber,
    pub full_name: String,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl Driver {
    /// Team affiliation, with the feed's occasional nulls papered over.
    pub fn team(&self) -> &str {
        self.team_name.as_deref().unwrap_or("Unknown Team")
    }

    pub fn country(&self) -> &str {
        self.country_code.as_deref().unwrap_or("-")
    }
}
