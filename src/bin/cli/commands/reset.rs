use anyhow::{bail, Result};

use jin_lib::vocabulary::SetKind;

use crate::app::App;

pub fn run(app: &App, set: Option<SetKind>, yes: bool) -> Result<()> {
    let key = app.ledger_key(set);
    if !yes {
        bail!("Refusing to reset '{}' without --yes", key);
    }

    app.with_ledger(set, |ledger| ledger.reset())?;
    println!("Reset study progress for '{}'", key);
    Ok(())
}
