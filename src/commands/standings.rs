//! Championship standings tables (drivers and constructors).

use colored::Colorize;

use crate::error::Result;
use crate::output::{
    dotted_rule, heavy_rule, light_rule, points_colored, position_colored, team_colored, truncate,
    TABLE_WIDTH,
};
use crate::service::DataService;
use crate::standings::StandingEntry;

/// Handle the standings command.
pub async fn handle_standings(
    service: &DataService,
    constructors: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let entries = if constructors {
        service.constructor_standings().await?
    } else {
        service.driver_standings().await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if constructors {
        render_constructor_table(service, &entries);
    } else {
        render_driver_table(service, &entries, verbose);
    }

    Ok(())
}

fn render_driver_table(service: &DataService, entries: &[StandingEntry], verbose: bool) {
    println!(
        "F1 {} Driver Championship ({})",
        service.season(),
        service.source_name()
    );
    println!("{}", heavy_rule(TABLE_WIDTH).bold());

    if entries.is_empty() {
        println!("{}", "No standings data available yet".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<3} {:<25} {:<20} {:>6} {:>4} {}",
            "POS", "DRIVER", "TEAM", "POINTS", "WINS", "GAP"
        )
        .white()
        .bold()
    );
    println!("{}", light_rule(TABLE_WIDTH).bold());

    for (i, entry) in entries.iter().enumerate() {
        let position = position_colored(entry.position, &format!("{:<3}", entry.position));
        let team = team_colored(&entry.team, &format!("{:<20}", truncate(&entry.team, 20)));
        let points = points_colored(entry.points, (200, 100, 50), &format!("{:>6}", entry.points));

        println!(
            "{} {:<25} {} {} {:>4} {}",
            position,
            truncate(&entry.name, 25),
            team,
            points,
            entry.wins,
            entry.gap
        );

        // Visual grouping after the podium and after the points positions.
        if i == 2 {
            println!("{}", dotted_rule(TABLE_WIDTH).cyan());
        } else if i == 9 {
            println!("{}", dotted_rule(TABLE_WIDTH).magenta());
        }
    }

    println!(
        "\n{}",
        format!("Total drivers: {}", entries.len()).cyan().bold()
    );

    if entries.len() > 1 {
        let leader = &entries[0];
        println!(
            "Championship Leader: {} {}",
            leader.name,
            format!("({} points, {} wins)", leader.points, leader.wins).green()
        );
    }

    if verbose {
        print_points_system_notes();
    }
}

fn render_constructor_table(service: &DataService, entries: &[StandingEntry]) {
    println!(
        "F1 {} Constructor Championship ({})",
        service.season(),
        service.source_name()
    );
    println!("{}", heavy_rule(TABLE_WIDTH).bold());

    if entries.is_empty() {
        println!("{}", "No standings data available yet".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<3} {:<25} {:<15} {:>6} {:>4} {}",
            "POS", "CONSTRUCTOR", "COUNTRY", "POINTS", "WINS", "GAP"
        )
        .white()
        .bold()
    );
    println!("{}", light_rule(TABLE_WIDTH).bold());

    for (i, entry) in entries.iter().enumerate() {
        let position = position_colored(entry.position, &format!("{:<3}", entry.position));
        let name = team_colored(&entry.name, &format!("{:<25}", truncate(&entry.name, 25)));
        let points = points_colored(entry.points, (400, 200, 100), &format!("{:>6}", entry.points));

        println!(
            "{} {} {:<15} {} {:>4} {}",
            position,
            name,
            truncate(&entry.team, 15),
            points,
            entry.wins,
            entry.gap
        );

        if i == 2 {
            println!("{}", dotted_rule(TABLE_WIDTH).cyan());
        }
    }

    println!(
        "\n{}",
        format!("Total constructors: {}", entries.len())
            .cyan()
            .bold()
    );

    if entries.len() > 1 {
        let leader = &entries[0];
        println!(
            "Constructor Champion: {} {}",
            leader.name,
            format!("({} points, {} wins)", leader.points, leader.wins).green()
        );
    }
}

fn print_points_system_notes() {
    println!("\nPoints System Information:");
    println!("   Race Points: 25-18-15-12-10-8-6-4-2-1 (positions 1-10)");
    println!("   Sprint Points: 8-7-6-5-4-3-2-1 (positions 1-8)");
    println!("   Wins count: Only main races (not sprints)");
}
