//! Display functions for command results

use super::formatters::distribution_bar;
use crate::account::Profile;
use crate::commands::SimulationReport;
use crate::stats::PlayerStatistics;
use colored::Colorize;

/// Print a player's statistics with the guess distribution
pub fn print_statistics(label: &str, stats: &PlayerStatistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {}",
        "STATISTICS".bright_cyan().bold(),
        format!("({label})").bright_black()
    );
    println!("{}", "═".repeat(50).cyan());

    println!(
        "\n   {:>6}  {:>6}  {:>8}  {:>8}",
        "Played", "Win %", "Streak", "Max"
    );
    println!(
        "   {:>6}  {:>6}  {:>8}  {:>8}",
        stats.games_played.to_string().bright_white().bold(),
        stats.win_percentage().to_string().bright_white().bold(),
        stats.current_streak.to_string().bright_white().bold(),
        stats.max_streak.to_string().bright_white().bold(),
    );

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.max_count();
    for (attempts, count) in stats.guess_distribution.iter() {
        let bar = distribution_bar(count, max, 30);
        println!("   {attempts}: {} {count}", bar.green());
    }
    println!();
}

/// Print the outcome of a bot simulation run
pub fn print_simulation_summary(report: &SimulationReport) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", report.stats.games_played);
    println!(
        "   Won:              {} ({}%)",
        report.stats.games_won.to_string().green(),
        report.stats.win_percentage()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", report.average_attempts())
            .bright_yellow()
            .bold()
    );
    println!("   Longest streak:   {}", report.stats.max_streak);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if !report.missed.is_empty() {
        let shown: Vec<String> = report
            .missed
            .iter()
            .take(10)
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("   Missed words:     {}", shown.join(", ").red());
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = report.stats.guess_distribution.max_count();
    for (attempts, count) in report.stats.guess_distribution.iter() {
        let bar = distribution_bar(count, max, 40);
        println!("   {attempts}: {} {count:5}", bar.green());
    }
}

/// Print the signed-in player's profile
pub fn print_profile(profile: &Profile) {
    println!(
        "{} {}",
        profile.display_name.bright_white().bold(),
        format!("@{}", profile.username).bright_black()
    );
    println!("   Email:   {}", profile.email);
    println!("   Joined:  {}", profile.created_at);
    println!(
        "   Record:  {} played, {} won",
        profile.stats.games_played, profile.stats.games_won
    );
}
