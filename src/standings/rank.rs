//! Ordering and gap calculation for championship tables.

use serde::Serialize;

/// Gap string shown for the first entry.
pub const LEADER_GAP: &str = "Leader";

/// One row of a ranked championship table.
///
/// Serializes cleanly for the `--json` output mode.
#[derive(Debug, Clone, Serialize)]
pub struct StandingEntry {
    pub position: u32,
    pub name: String,
    pub team: String,
    pub points: u32,
    pub wins: u32,
    pub gap: String,
}

/// Unranked per-competitor totals, the input to [`rank`].
#[derive(Debug, Clone)]
pub struct Contender {
    pub name: String,
    pub team: String,
    pub points: u32,
    pub wins: u32,
}

/// Sort contenders into a ranked table.
///
/// Ordering is points descending with wins breaking ties; beyond that the
/// sort is stable, so equal entries keep their input order. Gaps are the
/// point deficit to the leader, who carries the [`LEADER_GAP`] sentinel.
/// Not incremental: re-run from scratch whenever the inputs change.
pub fn rank(mut contenders: Vec<Contender>) -> Vec<StandingEntry> {
    contenders.sort_by(|a, b| b.points.cmp(&a.points).then(b.wins.cmp(&a.wins)));

    let leader_points = contenders.first().map(|c| c.points).unwrap_or(0);

    contenders
        .into_iter()
        .enumerate()
        .map(|(i, c)| StandingEntry {
            position: i as u32 + 1,
            gap: if i == 0 {
                LEADER_GAP.to_string()
            } else {
                format!("-{}", leader_points - c.points)
            },
            name: c.name,
            team: c.team,
            points: c.points,
            wins: c.wins,
        })
        .collect()
}
