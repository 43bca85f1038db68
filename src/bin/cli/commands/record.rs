use anyhow::Result;

use jin_lib::vocabulary::SetKind;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::{Outcome, OutputFormat};

pub fn run(
    app: &App,
    set: Option<SetKind>,
    outcome: &Outcome,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let (completed, current, best) = app.with_ledger(set, |ledger| {
        match outcome {
            Outcome::Correct => ledger.record_success(),
            Outcome::Incorrect => ledger.record_failure(),
        }
        (ledger.completed_cards(), ledger.current_streak(), ledger.best_streak())
    })?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": app.ledger_key(set),
                "correct": matches!(outcome, Outcome::Correct),
                "completedCards": completed,
                "currentStreak": current,
                "bestStreak": best,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let label = match outcome {
                Outcome::Correct => terminal::paint("correct", Color::GREEN, use_color),
                Outcome::Incorrect => terminal::paint("incorrect", Color::RED, use_color),
            };
            println!(
                "Recorded {} answer ({} completed, streak {})",
                label, completed, current
            );
        }
    }

    Ok(())
}
