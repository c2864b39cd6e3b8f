//! Reduce a session's position feed to one final position per driver.

use std::collections::HashMap;

use crate::cli::types::DriverNumber;
use crate::openf1::types::PositionRecord;

/// Pick the latest record per driver.
///
/// The feed emits a record for every position change during the session, so
/// the record with the maximum timestamp is the finishing position. When two
/// records for the same driver carry the exact same timestamp, the one that
/// appears later in the input wins.
///
/// An empty feed resolves to an empty map, never an error.
pub fn final_positions(records: &[PositionRecord]) -> HashMap<DriverNumber, u8> {
    let mut latest: HashMap<DriverNumber, &PositionRecord> = HashMap::new();

    for record in records {
        match latest.get(&record.driver_number) {
            Some(existing) if record.date < existing.date => {}
            _ => {
                latest.insert(record.driver_number, record);
            }
        }
    }

    latest
        .into_iter()
        .map(|(number, record)| (number, record.position))
        .collect()
}
