//! Table rendering helpers shared by the commands.
//!
//! Pad-then-colour: ANSI escapes count toward `format!` widths, so callers
//! pad plain strings first and colour the padded result.

use colored::{ColoredString, Colorize};

pub const TABLE_WIDTH: usize = 80;

pub fn heavy_rule(width: usize) -> String {
    "═".repeat(width)
}

pub fn light_rule(width: usize) -> String {
    "─".repeat(width)
}

pub fn dotted_rule(width: usize) -> String {
    "┄".repeat(width)
}

/// Truncate to `max` characters, ellipsis included.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Team liveries, approximated in terminal colours.
pub fn team_colored(team: &str, text: &str) -> ColoredString {
    match team {
        "McLaren" => text.truecolor(255, 135, 0),
        "Red Bull Racing" => text.truecolor(0, 95, 255),
        "Ferrari" => text.red(),
        "Mercedes" => text.truecolor(0, 255, 255),
        "Aston Martin" => text.green(),
        "Alpine" => text.truecolor(175, 0, 255),
        "Williams" => text.blue(),
        "Haas F1 Team" | "Haas" => text.truecolor(138, 138, 138),
        "Kick Sauber" => text.truecolor(0, 255, 0),
        "Racing Bulls" => text.truecolor(95, 95, 255),
        _ => text.normal(),
    }
}

/// Gold for the lead, bold white for the podium, green inside the points.
pub fn position_colored(position: u32, text: &str) -> ColoredString {
    match position {
        1 => text.yellow().bold(),
        2..=3 => text.white().bold(),
        4..=10 => text.green(),
        _ => text.normal(),
    }
}

/// Emphasis scaled by how big a points haul is relative to the given
/// thresholds (descending: gold, bold green, green).
pub fn points_colored(points: u32, thresholds: (u32, u32, u32), text: &str) -> ColoredString {
    let (gold, strong, modest) = thresholds;
    if points > gold {
        text.yellow().bold()
    } else if points > strong {
        text.green().bold()
    } else if points > modest {
        text.green()
    } else {
        text.normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_strings_unchanged() {
        assert_eq!(truncate("Monza", 15), "Monza");
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn test_truncate_long_strings_get_ellipsis() {
        assert_eq!(truncate("Circuit of the Americas", 15), "Circuit of t...");
        assert_eq!(truncate("Circuit of the Americas", 15).chars().count(), 15);
    }

    #[test]
    fn test_rules_have_requested_width() {
        assert_eq!(heavy_rule(10).chars().count(), 10);
        assert_eq!(light_rule(4).chars().count(), 4);
        assert_eq!(dotted_rule(0), "");
    }
}
