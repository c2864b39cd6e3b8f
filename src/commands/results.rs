//! Final classification for a single session.

use std::collections::HashMap;

use colored::Colorize;

use crate::cli::types::DriverNumber;
use crate::error::{F1Error, Result};
use crate::openf1::types::{Driver, SessionKind};
use crate::output::{heavy_rule, light_rule, position_colored, team_colored, truncate, TABLE_WIDTH};
use crate::service::DataService;

/// Handle the results command.
pub async fn handle_results(service: &DataService, location: String, sprint: bool) -> Result<()> {
    let kind = if sprint {
        SessionKind::Sprint
    } else {
        SessionKind::Race
    };

    let sessions = service.sessions().await?;
    let needle = location.to_lowercase();
    let Some(session) = sessions
        .iter()
        .find(|s| s.kind() == Some(kind) && s.location.to_lowercase().contains(&needle))
    else {
        println!("No {kind} session found for location: {location}");
        println!("\nAvailable locations:");
        let mut seen = std::collections::HashSet::new();
        for session in &sessions {
            if seen.insert(session.location.as_str()) {
                println!("  - {}", session.location);
            }
        }
        return Err(F1Error::SessionNotFound {
            location,
            kind: kind.to_string(),
        });
    };

    let classified = service.classify(session).await?;
    let roster = service.roster().await?;
    let by_number: HashMap<DriverNumber, &Driver> = roster
        .iter()
        .map(|driver| (driver.driver_number, driver))
        .collect();

    println!(
        "{} {} Results - {}",
        format!("{} {}", session.location, kind).yellow().bold(),
        session.year,
        session.date_start.format("%Y-%m-%d").to_string().cyan()
    );
    println!("{}", heavy_rule(TABLE_WIDTH).bold());
    println!(
        "{}",
        format!("{:<3} {:<25} {:<20} {:<8}", "POS", "DRIVER", "TEAM", "NUMBER")
            .white()
            .bold()
    );
    println!("{}", light_rule(TABLE_WIDTH).bold());

    for (driver_number, raw_position) in &classified {
        let (name, team) = match by_number.get(driver_number) {
            Some(driver) => (driver.full_name.clone(), driver.team().to_string()),
            None => (format!("Driver #{driver_number}"), "Unknown Team".to_string()),
        };

        let scored = service.score(session, kind, *driver_number, *raw_position);

        // Shown position stays raw; points reflect any promotion.
        let position_cell = format!("{:<3}", raw_position);
        let position = match &scored {
            None => position_cell.red(),
            Some(_) => position_colored(*raw_position as u32, &position_cell),
        };

        let note = match &scored {
            None => " (DSQ)".red().bold().to_string(),
            Some(result) if result.points > 0 => {
                let text = format!(" ({} pts)", result.points);
                if result.points >= 15 {
                    text.yellow().bold().to_string()
                } else if result.points >= 8 {
                    text.green().bold().to_string()
                } else {
                    text.green().to_string()
                }
            }
            Some(_) => String::new(),
        };

        println!(
            "{} {:<25} {} {}{}",
            position,
            truncate(&name, 25),
            team_colored(&team, &format!("{:<20}", truncate(&team, 20))),
            format!("#{:<6}", driver_number.as_u32()).cyan(),
            note
        );
    }

    if classified.is_empty() {
        println!("{}", "No results available for this session yet".yellow());
    }

    Ok(())
}
