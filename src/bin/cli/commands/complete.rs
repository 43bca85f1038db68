use anyhow::{bail, Result};

use jin_lib::vocabulary::SetKind;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &App,
    set: Option<SetKind>,
    cards: u32,
    correct: u32,
    duration: f64,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    if correct > cards {
        bail!("Correct answers ({}) cannot exceed cards studied ({})", correct, cards);
    }

    let (session, current, best) = app.with_ledger(set, |ledger| {
        let session = ledger.complete_session(cards, correct, duration);
        (session, ledger.current_streak(), ledger.best_streak())
    })?;

    let Some(session) = session else {
        bail!("A session needs at least one card");
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": app.ledger_key(set),
                "session": session,
                "currentStreak": current,
                "bestStreak": best,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Session saved: {}/{} correct ({}) in {}",
                session.correct_answers,
                session.cards_studied,
                terminal::accuracy(session.accuracy(), use_color),
                terminal::duration(session.total_duration)
            );
            println!("Streak: {} days (best {})", current, best);
        }
    }

    Ok(())
}
