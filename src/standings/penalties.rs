//! Stewards' rulings: disqualifications and the promotions they cause.

use std::collections::{HashMap, HashSet};

use crate::cli::types::{DriverNumber, SessionKey};

/// Post-session rulings for a season.
///
/// Authored data, not derived: the raw position feed cannot tell a
/// disqualification from a clean finish, so the rulings live in an explicit
/// table keyed by session. The book is passed into the accumulator, which
/// lets tests supply synthetic rulings without touching the scoring logic.
#[derive(Debug, Clone, Default)]
pub struct PenaltyBook {
    disqualified: HashMap<SessionKey, HashSet<DriverNumber>>,
    promotions: HashMap<SessionKey, HashMap<DriverNumber, u8>>,
}

impl PenaltyBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rulings issued during the 2025 season.
    pub fn season_2025() -> Self {
        let mut book = Self::new();

        // Shanghai race: Leclerc, Hamilton and Gasly excluded post-race.
        let shanghai = SessionKey::new(9998);
        for number in [16, 44, 10] {
            book.disqualify(shanghai, DriverNumber::new(number));
        }
        for (number, position) in [(31, 5), (12, 6), (23, 7), (87, 8), (18, 9), (55, 10)] {
            book.promote(shanghai, DriverNumber::new(number), position);
        }

        // Miami sprint: Albon, Lawson and Bearman excluded.
        let miami_sprint = SessionKey::new(10028);
        for number in [23, 30, 87] {
            book.disqualify(miami_sprint, DriverNumber::new(number));
        }
        for (number, position) in [(63, 4), (18, 5), (22, 6), (12, 7), (10, 8)] {
            book.promote(miami_sprint, DriverNumber::new(number), position);
        }

        // Melbourne race: post-race penalties reshuffled P4/P5.
        let melbourne = SessionKey::new(9693);
        book.promote(melbourne, DriverNumber::new(12), 4);
        book.promote(melbourne, DriverNumber::new(23), 5);

        book
    }

    /// Record a disqualification for one session.
    pub fn disqualify(&mut self, session: SessionKey, driver: DriverNumber) {
        self.disqualified.entry(session).or_default().insert(driver);
    }

    /// Record the position a driver is promoted to after exclusions ahead.
    pub fn promote(&mut self, session: SessionKey, driver: DriverNumber, position: u8) {
        self.promotions
            .entry(session)
            .or_default()
            .insert(driver, position);
    }

    pub fn is_disqualified(&self, session: SessionKey, driver: DriverNumber) -> bool {
        self.disqualified
            .get(&session)
            .is_some_and(|set| set.contains(&driver))
    }

    /// The position a driver scores from: the promoted position when a
    /// ruling moved them up, otherwise the raw finishing position.
    pub fn adjusted_position(&self, session: SessionKey, driver: DriverNumber, raw: u8) -> u8 {
        self.promotions
            .get(&session)
            .and_then(|map| map.get(&driver))
            .copied()
            .unwrap_or(raw)
    }
}
