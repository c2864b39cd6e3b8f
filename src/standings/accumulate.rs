//! Points and win accumulation across a season's sessions.

use std::collections::HashMap;

use crate::cli::types::{DriverNumber, SessionKey};
use crate::openf1::types::SessionKind;

use super::penalties::PenaltyBook;
use super::points::PointsModel;


/// Resolved final classification of one scoring session.
#[derive(Debug, Clone)]
pub struct SessionClassification {
    pub session_key: SessionKey,
    pub kind: SessionKind,
    pub positions: HashMap<DriverNumber, u8>,
}

/// Running points and win totals for one driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub points: u32,
    pub wins: u32,
}

/// One driver's scored outcome in one session, after rulings are applied.
#[derive(Debug, Clone, Copy)]
pub struct ScoredResult {
    /// Effective finishing position (promoted where a ruling applies).
    pub position: u8,
    pub points: u32,
    /// True when the effective position differs from the raw one.
    pub promoted: bool,
    /// A win is a grand prix finished in effective P1; sprints never count.
    pub win: bool,
}

/// Apply the penalty book and points model to one raw result.
///
/// Returns `None` for disqualified drivers: they score nothing regardless of
/// any promotion entry, and never count as a win.
pub fn score_result(
    session_key: SessionKey,
    kind: SessionKind,
    driver: DriverNumber,
    raw_position: u8,
    points: &PointsModel,
    penalties: &PenaltyBook,
) -> Option<ScoredResult> {
    if penalties.is_disqualified(session_key, driver) {
        return None;
    }

    let position = penalties.adjusted_position(session_key, driver, raw_position);
    Some(ScoredResult {
        position,
        points: points.points_for(kind, position),
        promoted: position != raw_position,
        win: position == 1 && kind == SessionKind::Race,
    })
}

/// Fold every session's classification into per-driver tallies.
///
/// Every roster driver gets an entry, scoreless ones included. Records for
/// numbers outside the roster are ignored. Per-driver accumulation is
/// commutative, so classification order does not change the totals.
pub fn accumulate(
    classifications: &[SessionClassification],
    roster: &[DriverNumber],
    points: &PointsModel,
    penalties: &PenaltyBook,
) -> HashMap<DriverNumber, Tally> {
    let mut tallies: HashMap<DriverNumber, Tally> = roster
        .iter()
        .map(|number| (*number, Tally::default()))
        .collect();

    for classification in classifications {
        for (&driver, &raw_position) in &classification.positions {
            let Some(tally) = tallies.get_mut(&driver) else {
                continue;
            };
            let Some(scored) = score_result(
                classification.session_key,
                classification.kind,
                driver,
                raw_position,
                points,
                penalties,
            ) else {
                continue;
            };

            tally.points += scored.points;
            if scored.win {
                tally.wins += 1;
            }
        }
    }

    tallies
}
