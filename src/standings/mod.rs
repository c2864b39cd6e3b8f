//! The standings derivation engine.
//!
//! Transforms raw per-session position records into ranked, points-accurate
//! championship tables: resolve each session's final classification, apply
//! stewards' rulings, award points, then rank.

pub mod accumulate;
pub mod constructors;
pub mod penalties;
pub mod points;
pub mod rank;
pub mod resolve;

pub use accumulate::{accumulate, score_result, ScoredResult, SessionClassification, Tally};
pub use constructors::constructor_standings;
pub use penalties::PenaltyBook;
pub use points::PointsModel;
pub use rank::{rank, Contender, StandingEntry, LEADER_GAP};
pub use resolve::final_positions;
