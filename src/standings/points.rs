//! Championship points tables.

use crate::openf1::types::SessionKind;

/// Points awarded per finishing position, one scale per session kind.
///
/// Constructed once and passed into the accumulator; positions outside the
/// awarding range score zero rather than erroring.
#[derive(Debug, Clone)]
pub struct PointsModel {
    race: Vec<u32>,
    sprint: Vec<u32>,
}

impl Default for PointsModel {
    /// The scales in force since 2022: 25-18-15-12-10-8-6-4-2-1 for grands
    /// prix (P1-P10), 8-7-6-5-4-3-2-1 for sprints (P1-P8).
    fn default() -> Self {
        Self {
            race: vec![25, 18, 15, 12, 10, 8, 6, 4, 2, 1],
            sprint: vec![8, 7, 6, 5, 4, 3, 2, 1],
        }
    }
}

impl PointsModel {
    pub fn points_for(&self, kind: SessionKind, position: u8) -> u32 {
        let table = match kind {
            SessionKind::Race => &self.race,
            SessionKind::Sprint => &self.sprint,
        };
        match (position as usize).checked_sub(1) {
            Some(idx) => table.get(idx).copied().unwrap_or(0),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_points_scale() {
        let model = PointsModel::default();
        let expected = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
        for (i, pts) in expected.iter().enumerate() {
            assert_eq!(model.points_for(SessionKind::Race, i as u8 + 1), *pts);
        }
    }

    #[test]
    fn test_sprint_points_scale() {
        let model = PointsModel::default();
        let expected = [8, 7, 6, 5, 4, 3, 2, 1];
        for (i, pts) in expected.iter().enumerate() {
            assert_eq!(model.points_for(SessionKind::Sprint, i as u8 + 1), *pts);
        }
    }

    #[test]
    fn test_positions_outside_range_score_zero() {
        let model = PointsModel::default();
        assert_eq!(model.points_for(SessionKind::Race, 11), 0);
        assert_eq!(model.points_for(SessionKind::Sprint, 9), 0);
        assert_eq!(model.points_for(SessionKind::Race, 20), 0);
        assert_eq!(model.points_for(SessionKind::Race, 0), 0);
        assert_eq!(model.points_for(SessionKind::Sprint, 0), 0);
    }

    #[test]
    fn test_table_totals() {
        let model = PointsModel::default();
        let race_total: u32 = (1..=10).map(|p| model.points_for(SessionKind::Race, p)).sum();
        let sprint_total: u32 = (1..=8)
            .map(|p| model.points_for(SessionKind::Sprint, p))
            .sum();
        assert_eq!(race_total, 115);
        assert_eq!(sprint_total, 36);
    }
}
