//! Orchestrates OpenF1 fetches, the position cache, and the standings engine.
//!
//! Each standings request is a fresh computation over the current snapshot
//! of sessions and results; nothing computed here outlives the call.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::cli::types::{DriverNumber, SeasonYear};
use crate::core::cache::{positions_cache_path, try_read_to_string, write_string};
use crate::error::Result;
use crate::openf1::http::OpenF1Client;
use crate::openf1::types::{Driver, PositionRecord, Session, SessionKind};
use crate::standings::{
    accumulate, constructor_standings, final_positions, rank, score_result, Contender,
    PenaltyBook, PointsModel, ScoredResult, SessionClassification, StandingEntry, Tally,
};

/// Name of the data source, shown in table headers and the status command.
pub const SOURCE_NAME: &str = "OpenF1 API";

/// One driver's scored session, for the points-breakdown view.
#[derive(Debug, Clone)]
pub struct BreakdownRow {
    pub location: String,
    pub date: DateTime<Utc>,
    pub kind: SessionKind,
    pub result: ScoredResult,
}

/// Season-to-date scoring detail for one driver.
#[derive(Debug, Clone)]
pub struct PointsBreakdown {
    /// Sessions where the driver scored or was promoted.
    pub rows: Vec<BreakdownRow>,
    /// Completed sessions the computation covered.
    pub sessions_counted: usize,
    pub total_points: u32,
    pub wins: u32,
}

/// F1 data service backed by the OpenF1 API.
pub struct DataService {
    client: OpenF1Client,
    points: PointsModel,
    penalties: PenaltyBook,
    season: SeasonYear,
    refresh: bool,
}

impl DataService {
    pub fn new(season: SeasonYear, refresh: bool) -> Result<Self> {
        Ok(Self::with_client(OpenF1Client::new()?, season, refresh))
    }

    /// Build a service around an existing client (tests inject a client
    /// pointed at a mock server here).
    pub fn with_client(client: OpenF1Client, season: SeasonYear, refresh: bool) -> Self {
        Self {
            client,
            points: PointsModel::default(),
            penalties: PenaltyBook::season_2025(),
            season,
            refresh,
        }
    }

    /// Replace the penalty book (synthetic rulings in tests).
    pub fn with_penalties(mut self, penalties: PenaltyBook) -> Self {
        self.penalties = penalties;
        self
    }

    pub fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn season(&self) -> SeasonYear {
        self.season
    }

    pub async fn is_online(&self) -> bool {
        self.client.is_online().await
    }

    /// Current roster, de-duplicated by race number.
    pub async fn roster(&self) -> Result<Vec<Driver>> {
        self.client.drivers().await
    }

    /// Race and sprint sessions for the configured season.
    pub async fn sessions(&self) -> Result<Vec<Session>> {
        self.client
            .race_and_sprint_sessions(self.season.as_u16())
            .await
    }

    /// Resolve one session's feed to its final classification, sorted by
    /// finishing position.
    pub async fn classify(&self, session: &Session) -> Result<Vec<(DriverNumber, u8)>> {
        let records = self.session_positions(session, Utc::now()).await?;
        let mut positions: Vec<(DriverNumber, u8)> = final_positions(&records).into_iter().collect();
        positions.sort_by_key(|(_, position)| *position);
        Ok(positions)
    }

    /// Resolved classifications for every completed race and sprint session.
    ///
    /// Failure to list sessions is fatal; a session whose position feed is
    /// unavailable is skipped with a warning, since the API routinely lags
    /// the most recent session.
    pub async fn completed_classifications(
        &self,
    ) -> Result<Vec<(Session, SessionClassification)>> {
        let sessions = self.sessions().await?;
        let now = Utc::now();

        let mut classified = Vec::new();
        for session in sessions {
            if !session.is_completed(now) {
                continue;
            }
            let Some(kind) = session.kind() else {
                continue;
            };

            let records = match self.session_positions(&session, now).await {
                Ok(records) => records,
                Err(err) => {
                    warn!(
                        "skipping {} {} (session {}): {}",
                        session.location, session.session_name, session.session_key, err
                    );
                    continue;
                }
            };

            let classification = SessionClassification {
                session_key: session.session_key,
                kind,
                positions: final_positions(&records),
            };
            classified.push((session, classification));
        }

        Ok(classified)
    }

    /// Driver championship standings for the season to date.
    ///
    /// An empty table is a valid outcome before the first completed session.
    pub async fn driver_standings(&self) -> Result<Vec<StandingEntry>> {
        let drivers = self.roster().await?;
        let tallies = self.tallies_for(&drivers).await?;

        let contenders = drivers
            .into_iter()
            .map(|driver| {
                let tally = tallies
                    .get(&driver.driver_number)
                    .copied()
                    .unwrap_or_default();
                Contender {
                    team: driver.team().to_string(),
                    name: driver.full_name,
                    points: tally.points,
                    wins: tally.wins,
                }
            })
            .collect();

        Ok(rank(contenders))
    }

    /// Constructor championship standings, derived from the driver table.
    pub async fn constructor_standings(&self) -> Result<Vec<StandingEntry>> {
        let drivers = self.driver_standings().await?;
        Ok(constructor_standings(&drivers))
    }

    /// Roster enriched with season-to-date tallies, in roster order.
    pub async fn drivers_with_tallies(&self) -> Result<Vec<(Driver, Tally)>> {
        let drivers = self.roster().await?;
        let tallies = self.tallies_for(&drivers).await?;

        Ok(drivers
            .into_iter()
            .map(|driver| {
                let tally = tallies
                    .get(&driver.driver_number)
                    .copied()
                    .unwrap_or_default();
                (driver, tally)
            })
            .collect())
    }

    /// Session-by-session scoring detail for one driver.
    pub async fn points_breakdown(&self, driver: DriverNumber) -> Result<PointsBreakdown> {
        let classified = self.completed_classifications().await?;

        let mut rows = Vec::new();
        let mut total_points = 0;
        let mut wins = 0;
        let sessions_counted = classified.len();

        for (session, classification) in classified {
            let Some(&raw_position) = classification.positions.get(&driver) else {
                continue;
            };
            let Some(result) = score_result(
                classification.session_key,
                classification.kind,
                driver,
                raw_position,
                &self.points,
                &self.penalties,
            ) else {
                continue;
            };

            total_points += result.points;
            if result.win {
                wins += 1;
            }
            if result.points > 0 || result.promoted {
                rows.push(BreakdownRow {
                    location: session.location,
                    date: session.date_start,
                    kind: classification.kind,
                    result,
                });
            }
        }

        Ok(PointsBreakdown {
            rows,
            sessions_counted,
            total_points,
            wins,
        })
    }

    /// Score one already-classified raw result with this service's points
    /// model and penalty book.
    pub fn score(
        &self,
        session: &Session,
        kind: SessionKind,
        driver: DriverNumber,
        raw_position: u8,
    ) -> Option<ScoredResult> {
        score_result(
            session.session_key,
            kind,
            driver,
            raw_position,
            &self.points,
            &self.penalties,
        )
    }

    async fn tallies_for(&self, drivers: &[Driver]) -> Result<HashMap<DriverNumber, Tally>> {
        let classifications: Vec<SessionClassification> = self
            .completed_classifications()
            .await?
            .into_iter()
            .map(|(_, classification)| classification)
            .collect();

        let roster: Vec<DriverNumber> = drivers.iter().map(|d| d.driver_number).collect();
        Ok(accumulate(
            &classifications,
            &roster,
            &self.points,
            &self.penalties,
        ))
    }

    /// Load one session's position feed, from cache when allowed.
    ///
    /// Only feeds for sessions over for more than a day are written back;
    /// anything fresher is re-fetched every run.
    async fn session_positions(
        &self,
        session: &Session,
        now: DateTime<Utc>,
    ) -> Result<Vec<PositionRecord>> {
        let path = positions_cache_path(self.season.as_u16(), session.session_key.as_u32());

        if !self.refresh {
            if let Some(cached) = try_read_to_string(&path) {
                if let Ok(records) = serde_json::from_str::<Vec<PositionRecord>>(&cached) {
                    debug!("position cache hit for session {}", session.session_key);
                    return Ok(records);
                }
            }
        }

        let records = self.client.positions(session.session_key).await?;

        if session.has_settled(now) {
            if let Ok(json) = serde_json::to_string(&records) {
                let _ = write_string(&path, &json);
                debug!("cached positions for session {}", session.session_key);
            }
        }

        Ok(records)
    }
}
