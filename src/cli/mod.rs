//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::SeasonYear;

#[derive(Debug, Parser)]
#[clap(name = "f1", about = "Formula 1 championship standings CLI", version)]
pub struct F1 {
    /// Season year to compute standings for (e.g. 2025).
    #[clap(long, short, global = true, default_value_t = SeasonYear::default())]
    pub season: SeasonYear,

    /// Bypass the on-disk position cache and re-fetch everything from OpenF1.
    #[clap(long, global = true)]
    pub refresh: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the current driver roster, or show one driver in detail.
    Drivers {
        /// Show the detail card for every driver instead of the short list.
        #[clap(long, short)]
        detailed: bool,

        /// Only show drivers from this team (case-insensitive).
        #[clap(long, short)]
        team: Option<String>,

        /// Driver full name, e.g. "Max Verstappen".
        name: Vec<String>,
    },

    /// Championship standings, computed from session results.
    ///
    /// Points are awarded per finishing position (25-18-15-12-10-8-6-4-2-1
    /// for races, 8-7-6-5-4-3-2-1 for sprints) after applying stewards'
    /// disqualifications and the promotions they cause.
    Standings {
        /// Constructor table instead of the driver table.
        #[clap(long, short)]
        constructors: bool,

        /// Output the standings as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Append points-system notes below the table.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Final classification for one session.
    Results {
        /// Location substring, e.g. "Shanghai" (case-insensitive).
        location: String,

        /// Show the sprint instead of the grand prix.
        #[clap(long)]
        sprint: bool,
    },

    /// Session-by-session points breakdown for one driver.
    Points {
        /// Driver full name, e.g. "Oscar Piastri".
        #[clap(required = true)]
        name: Vec<String>,
    },

    /// Check whether the OpenF1 data source is reachable.
    Status,
}
