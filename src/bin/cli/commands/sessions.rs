use anyhow::Result;

use jin_lib::vocabulary::SetKind;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &App,
    set: Option<SetKind>,
    limit: usize,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut sessions = app.with_ledger(set, |ledger| ledger.sessions().to_vec())?;

    // Newest first
    sessions.reverse();
    sessions.truncate(limit);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
        OutputFormat::Plain => {
            if sessions.is_empty() {
                println!("No sessions found.");
                return Ok(());
            }

            println!("{:<17} {:>6} {:>8} {:>9}", "Completed", "Cards", "Correct", "Time");
            println!("{}", "\u{2500}".repeat(43));

            for session in &sessions {
                println!(
                    "{:<17} {:>6} {:>8} {:>9}",
                    terminal::timestamp(Some(session.completed_at)),
                    session.cards_studied,
                    terminal::accuracy(session.accuracy(), use_color),
                    terminal::duration(session.total_duration)
                );
            }
        }
    }

    Ok(())
}
