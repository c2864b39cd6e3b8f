//! Data-source health check.

use colored::Colorize;

use crate::error::Result;
use crate::output::heavy_rule;
use crate::service::DataService;

/// Handle the status command.
pub async fn handle_status(service: &DataService) -> Result<()> {
    println!("{}", "F1 CLI Data Source Status".bold());
    println!("{}", heavy_rule(46));

    println!("Current Source: {}", service.source_name());

    print!("API Connectivity: ");
    if service.is_online().await {
        println!("{}", "Online".green());
    } else {
        println!("{}", "Offline or unreachable".red());
        println!("\nThe OpenF1 API might be:");
        println!("   - Temporarily down");
        println!("   - Blocked by firewall");
        println!("   - Rate limited");
        println!("\nPlease check your internet connection and try again");
    }

    println!("\nData Source Information:");
    println!("   - OpenF1 API ({})", service.base_url());
    println!("   - Session information and position data");
    println!("   - Driver and team information");
    println!("   - Standings computed locally from session results");

    Ok(())
}
