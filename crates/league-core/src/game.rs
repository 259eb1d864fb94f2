//! Interactive game round: announce blinds, read the winner, record the win.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::blinds::{BlindAlerter, schedule_blind_alerts};
use crate::error::Result;
use crate::store::PlayerStore;

pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";

const WIN_SUFFIX: &str = " wins";

/// Take the winner's name from a line like `"Chris wins"`.
///
/// Lines without the suffix are returned unchanged.
pub fn extract_winner(line: &str) -> &str {
    line.strip_suffix(WIN_SUFFIX).unwrap_or(line)
}

/// Runs one round of poker against a store and a blind timer
pub struct Game<'a> {
    store: &'a dyn PlayerStore,
    alerter: &'a dyn BlindAlerter,
}

impl<'a> Game<'a> {
    pub fn new(store: &'a dyn PlayerStore, alerter: &'a dyn BlindAlerter) -> Self {
        Self { store, alerter }
    }

    /// Play a single round and return the name the win was recorded for.
    pub fn play<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> Result<String> {
        write!(out, "{}", PLAYER_PROMPT)?;
        out.flush()?;

        schedule_blind_alerts(self.alerter);

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            debug!("Input closed before a winner was entered");
        }

        let line = line.trim_end_matches(['\r', '\n']);
        let winner = extract_winner(line);

        self.store.record_win(winner)?;
        info!("Round finished, winner: {}", winner);

        Ok(winner.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::league::League;
    use std::io::Cursor;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct StubPlayerStore {
        win_calls: Mutex<Vec<String>>,
        other_calls: Mutex<usize>,
        fail_writes: bool,
    }

    impl PlayerStore for StubPlayerStore {
        fn league(&self) -> League {
            *self.other_calls.lock().unwrap() += 1;
            League::default()
        }

        fn player_score(&self, _name: &str) -> u32 {
            *self.other_calls.lock().unwrap() += 1;
            0
        }

        fn record_win(&self, name: &str) -> Result<()> {
            if self.fail_writes {
                return Err(Error::Io(std::io::Error::other("disk full")));
            }
            self.win_calls.lock().unwrap().push(name.to_string());
            Ok(())
        }
    }

    fn silent_alerter(_delay: Duration, _amount: u32) {}

    #[test]
    fn test_extract_winner() {
        assert_eq!(extract_winner("Chris wins"), "Chris");
        assert_eq!(extract_winner("Cleo"), "Cleo");
        assert_eq!(extract_winner("Mary Jane wins"), "Mary Jane");
        assert_eq!(extract_winner("wins"), "wins");
        assert_eq!(extract_winner(" wins"), "");
    }

    #[test]
    fn test_extract_winner_only_strips_trailing_suffix() {
        assert_eq!(extract_winner("Chris wins again"), "Chris wins again");
        assert_eq!(extract_winner("Chris wins wins"), "Chris wins");
    }

    #[test]
    fn test_records_winner_from_input() {
        let store = StubPlayerStore::default();
        let game = Game::new(&store, &silent_alerter);

        let winner = game.play(Cursor::new("Chris wins\n"), Vec::new()).unwrap();

        assert_eq!(winner, "Chris");
        assert_eq!(*store.win_calls.lock().unwrap(), vec!["Chris".to_string()]);
        assert_eq!(*store.other_calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_records_raw_line_without_suffix() {
        let store = StubPlayerStore::default();
        let game = Game::new(&store, &silent_alerter);

        game.play(Cursor::new("Cleo\r\n"), Vec::new()).unwrap();
        assert_eq!(*store.win_calls.lock().unwrap(), vec!["Cleo".to_string()]);
    }

    #[test]
    fn test_reads_only_one_line() {
        let store = StubPlayerStore::default();
        let game = Game::new(&store, &silent_alerter);

        game.play(Cursor::new("Chris wins\nCleo wins\n"), Vec::new())
            .unwrap();
        assert_eq!(store.win_calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_prompts_for_players() {
        let store = StubPlayerStore::default();
        let game = Game::new(&store, &silent_alerter);

        let mut out = Vec::new();
        game.play(Cursor::new("Chris wins\n"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), PLAYER_PROMPT);
    }

    #[test]
    fn test_schedules_blinds_before_reading() {
        let store = StubPlayerStore::default();
        let alerts = Mutex::new(Vec::new());
        let alerter = |delay: Duration, amount: u32| alerts.lock().unwrap().push((delay, amount));
        let game = Game::new(&store, &alerter);

        game.play(Cursor::new("Chris wins\n"), Vec::new()).unwrap();

        let alerts = alerts.lock().unwrap();
        assert_eq!(alerts.len(), 11);
        assert_eq!(alerts[0], (Duration::ZERO, 100));
        assert_eq!(alerts[10], (Duration::from_secs(6000), 8000));
    }

    #[test]
    fn test_store_failure_is_fatal() {
        let store = StubPlayerStore {
            fail_writes: true,
            ..Default::default()
        };
        let game = Game::new(&store, &silent_alerter);

        let err = game.play(Cursor::new("Chris wins\n"), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
