//! F1 Championship CLI Library
//!
//! A Rust library for retrieving Formula 1 session, driver, and position
//! data from the OpenF1 API and deriving championship standings locally.
//!
//! ## Features
//!
//! - **Standings Derivation**: Driver and constructor tables computed from
//!   raw per-session position records
//! - **Season Points Model**: Separate race and sprint scales, injectable
//!   for other seasons
//! - **Stewards' Rulings**: Disqualifications and the position promotions
//!   they cause, applied per session
//! - **Position Caching**: Settled session feeds cached on disk to spare
//!   the API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use f1_cli::{service::DataService, SeasonYear};
//!
//! # async fn example() -> f1_cli::Result<()> {
//! let service = DataService::new(SeasonYear::default(), false)?;
//! let standings = service.driver_standings().await?;
//! for entry in &standings {
//!     println!("{} {} {}", entry.position, entry.name, entry.points);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod openf1;
pub mod output;
pub mod service;
pub mod standings;

// Re-export commonly used types
pub use cli::types::{DriverNumber, SeasonYear, SessionKey};
pub use error::{F1Error, Result};
pub use openf1::types::{Driver, PositionRecord, Session, SessionKind};
pub use standings::{PenaltyBook, PointsModel, StandingEntry, Tally};
