//! Session-by-session points breakdown for one driver.

use colored::Colorize;

use crate::error::{F1Error, Result};
use crate::openf1::types::SessionKind;
use crate::output::{dotted_rule, heavy_rule, light_rule, team_colored, truncate, TABLE_WIDTH};
use crate::service::DataService;

use super::{find_driver, print_available_drivers};

/// Handle the points command.
pub async fn handle_points(service: &DataService, name: Vec<String>) -> Result<()> {
    let target = name.join(" ");

    let roster = service.roster().await?;
    let Some(driver) = find_driver(&roster, &target) else {
        print_available_drivers(&roster);
        return Err(F1Error::DriverNotFound { name: target });
    };

    let breakdown = service.points_breakdown(driver.driver_number).await?;

    println!(
        "{} {}",
        format!("Points Breakdown - {}", driver.full_name)
            .yellow()
            .bold(),
        format!("(#{})", driver.driver_number).cyan()
    );
    println!(
        "Team: {}",
        team_colored(driver.team(), driver.team())
    );

    let totals = format!(
        "Total Points: {} | Wins: {}",
        breakdown.total_points, breakdown.wins
    );
    println!("{}", totals.bold());
    println!("{}", heavy_rule(TABLE_WIDTH).bold());

    if breakdown.rows.is_empty() {
        println!(
            "{}",
            format!("No points scored yet in the {} season.", service.season()).yellow()
        );
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:<15} {:<10} {:<8} {:<4} {:<6} {}",
            "RACE", "DATE", "TYPE", "POS", "POINTS", "NOTES"
        )
        .white()
        .bold()
    );
    println!("{}", light_rule(TABLE_WIDTH).bold());

    for (i, row) in breakdown.rows.iter().enumerate() {
        let kind = match row.kind {
            SessionKind::Race => format!("{:<8}", "Race").green(),
            SessionKind::Sprint => format!("{:<8}", "Sprint").yellow(),
        };

        let position_cell = format!("P{:<3}", row.result.position);
        let position = if row.result.position == 1 {
            position_cell.yellow().bold()
        } else if row.result.position <= 3 {
            position_cell.white().bold()
        } else if row.result.points > 0 {
            position_cell.green()
        } else {
            position_cell.normal()
        };

        let points_cell = format!("{:<6}", row.result.points);
        let points = if row.result.points >= 15 {
            points_cell.yellow().bold()
        } else if row.result.points >= 8 {
            points_cell.green().bold()
        } else if row.result.points > 0 {
            points_cell.green()
        } else {
            points_cell.normal()
        };

        let note = if row.result.promoted {
            "Promoted due to DSQ".cyan().to_string()
        } else {
            String::new()
        };

        println!(
            "{:<15} {} {} {} {} {}",
            truncate(&row.location, 15),
            row.date.format("%Y-%m-%d").to_string().cyan(),
            kind,
            position,
            points,
            note
        );

        // Break up long seasons for readability.
        if (i + 1) % 5 == 0 && i + 1 < breakdown.rows.len() {
            println!("{}", dotted_rule(TABLE_WIDTH).magenta());
        }
    }

    println!("{}", light_rule(TABLE_WIDTH).bold());
    println!(
        "{}",
        format!(
            "Points scored in {}/{} sessions",
            breakdown.rows.len(),
            breakdown.sessions_counted
        )
        .cyan()
        .bold()
    );

    println!("\nPoints Systems:");
    println!("   {} 25-18-15-12-10-8-6-4-2-1 (positions 1-10)", "Race:".green());
    println!("   {} 8-7-6-5-4-3-2-1 (positions 1-8)", "Sprint:".yellow());

    Ok(())
}
