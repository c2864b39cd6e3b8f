//! Driver roster listing and per-driver detail cards.

use colored::Colorize;

use crate::error::{F1Error, Result};
use crate::openf1::types::Driver;
use crate::output::{heavy_rule, truncate};
use crate::service::DataService;
use crate::standings::Tally;

use super::print_available_drivers;

/// Handle the drivers command.
pub async fn handle_drivers(
    service: &DataService,
    detailed: bool,
    team: Option<String>,
    name: Vec<String>,
) -> Result<()> {
    let entries = service.drivers_with_tallies().await?;

    if !name.is_empty() {
        let target = name.join(" ");
        match entries
            .iter()
            .find(|(driver, _)| driver.full_name.eq_ignore_ascii_case(&target))
        {
            Some((driver, tally)) => {
                print_detail_card(driver, *tally);
                return Ok(());
            }
            None => {
                let roster: Vec<Driver> = entries.into_iter().map(|(driver, _)| driver).collect();
                print_available_drivers(&roster);
                return Err(F1Error::DriverNotFound { name: target });
            }
        }
    }

    println!(
        "F1 {} Drivers ({})",
        service.season(),
        service.source_name()
    );
    println!("{}", heavy_rule(46).bold());

    let mut shown = 0;
    for (driver, tally) in &entries {
        if let Some(filter) = &team {
            if !driver.team().eq_ignore_ascii_case(filter) {
                continue;
            }
        }
        shown += 1;

        if detailed {
            print_detail_card(driver, *tally);
        } else {
            println!(
                "{:>3}. {:<25} #{:<3} {:<20} {:>3} pts",
                shown,
                truncate(&driver.full_name, 25),
                driver.driver_number.as_u32(),
                truncate(driver.team(), 20),
                tally.points
            );
        }
    }

    if let Some(filter) = &team {
        println!("\nFiltered by team: {}", filter);
        if shown == 0 {
            println!("{}", "No drivers matched that team".yellow());
        }
    }

    Ok(())
}

fn print_detail_card(driver: &Driver, tally: Tally) {
    println!("\n{} (#{})", driver.full_name.bold(), driver.driver_number);
    println!("{}", heavy_rule(46));
    println!("Country: {}", driver.country());
    println!("Team: {}", driver.team());
    println!("Championship Points: {}", tally.points);
    println!("Race Wins: {}", tally.wins);
}
