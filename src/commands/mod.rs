//! Command implementations for the F1 CLI

pub mod drivers;
pub mod points;
pub mod results;
pub mod standings;
pub mod status;

use crate::openf1::types::Driver;

/// Case-insensitive full-name lookup in the roster.
pub fn find_driver<'a>(roster: &'a [Driver], name: &str) -> Option<&'a Driver> {
    roster
        .iter()
        .find(|driver| driver.full_name.eq_ignore_ascii_case(name))
}

/// Print the roster names, used by the not-found error paths.
pub(crate) fn print_available_drivers(roster: &[Driver]) {
    println!("\nAvailable drivers:");
    for driver in roster {
        println!("  - {}", driver.full_name);
    }
}
