//! Constructor standings derived from the ranked driver table.

use std::collections::HashMap;

use super::rank::{rank, Contender, StandingEntry};

/// Sum the ranked driver standings per team and re-rank at team granularity.
///
/// Individual driver identity is discarded; the same ordering and gap rules
/// apply to the team table. The country column falls back to the team name
/// itself: the roster feed carries no team nationality.
pub fn constructor_standings(driver_standings: &[StandingEntry]) -> Vec<StandingEntry> {
    let mut totals: HashMap<&str, (u32, u32)> = HashMap::new();
    // First-seen order keeps the grouping stable run to run.
    let mut order: Vec<&str> = Vec::new();

    for entry in driver_standings {
        if !totals.contains_key(entry.team.as_str()) {
            order.push(entry.team.as_str());
        }
        let team_totals = totals.entry(entry.team.as_str()).or_default();
        team_totals.0 += entry.points;
        team_totals.1 += entry.wins;
    }

    let contenders = order
        .into_iter()
        .map(|team| {
            let (points, wins) = totals[team];
            Contender {
                name: team.to_string(),
                team: team.to_string(),
                points,
                wins,
            }
        })
        .collect();

    rank(contenders)
}
