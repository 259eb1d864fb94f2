//! Interactive game round.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use league_core::{BlindAlerter, Game, PlayerStore};
use tracing::info;

use crate::alerter::TimerAlerter;
use crate::shutdown::ShutdownSignal;

pub fn run(database: &Path) -> Result<()> {
    let store = super::open_store(database)?;

    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, cancelling blind alerts...");
        shutdown_ctrlc.trigger();
        std::process::exit(130);
    })?;

    let alerter = TimerAlerter::stdout(Arc::clone(&shutdown));
    // Unlocked stdout: alert threads print while the round waits on stdin
    play_round(&store, &alerter, io::stdin().lock(), io::stdout())?;

    shutdown.trigger();
    alerter.join();
    Ok(())
}

/// Run one round against `input`, writing prompts and the result to `out`.
fn play_round<R: BufRead, W: Write>(
    store: &dyn PlayerStore,
    alerter: &dyn BlindAlerter,
    input: R,
    mut out: W,
) -> Result<String> {
    writeln!(out, "Let's play poker")?;
    writeln!(out, "Type \"{{Name}} wins\" to record a win")?;

    let winner = Game::new(store, alerter)
        .play(input, &mut out)
        .context("Failed to record the winner")?;

    writeln!(out, "Recorded a win for {}", winner)?;
    Ok(winner)
}
