use anyhow::Result;

use jin_lib::vocabulary::SetKind;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, set: Option<SetKind>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = app.with_ledger(set, |ledger| ledger.stats())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            let title = match set {
                Some(kind) => kind.to_string(),
                None => "All study".to_string(),
            };
            println!("{}", terminal::paint(&title, Color::BOLD, use_color));

            if stats.total_cards > 0 {
                println!(
                    "  Progress      {} {} ({}/{})",
                    terminal::bar(stats.completion_ratio, 20),
                    terminal::percent(stats.completion_ratio),
                    stats.completed_cards,
                    stats.total_cards
                );
            } else {
                println!("  Completed     {} cards", stats.completed_cards);
            }

            let streak = format!("{} days", stats.current_streak);
            let streak_color = if stats.current_streak > 0 { Color::GREEN } else { Color::GRAY };
            println!(
                "  Streak        {} (best {})",
                terminal::paint(&streak, streak_color, use_color),
                stats.best_streak
            );
            println!("  Last studied  {}", terminal::timestamp(stats.last_studied_at));

            if stats.session_count == 0 {
                println!("\nNo sessions yet.");
                return Ok(());
            }

            println!();
            println!("  Sessions      {}", stats.session_count);
            println!("  Cards studied {}", stats.total_cards_studied);
            println!(
                "  Accuracy      {} per session, {} overall",
                terminal::accuracy(stats.average_accuracy, use_color),
                terminal::accuracy(stats.overall_accuracy, use_color)
            );
            println!(
                "  Study time    {} ({:.1}s per card)",
                terminal::duration(stats.total_study_time),
                stats.average_time_per_card
            );
        }
    }

    Ok(())
}
