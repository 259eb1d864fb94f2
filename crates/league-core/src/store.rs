//! Persisted score store.
//!
//! The store owns a seekable, truncatable backing resource holding the
//! league record. Every read re-parses the record from offset 0; every win
//! rewrites the whole record.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::league::League;

/// Backing resource for a [`FileSystemPlayerStore`]
pub trait Database: Read + Write + Seek + Send {
    /// Discard all stored bytes.
    fn truncate(&mut self) -> io::Result<()>;
}

impl Database for File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)
    }
}

impl Database for Cursor<Vec<u8>> {
    fn truncate(&mut self) -> io::Result<()> {
        self.get_mut().clear();
        Ok(())
    }
}

/// Score queries and win recording, as consumed by the front ends
pub trait PlayerStore: Send + Sync {
    fn league(&self) -> League;

    /// Wins for `name`, or `0` when the player is unknown.
    fn player_score(&self, name: &str) -> u32;

    fn record_win(&self, name: &str) -> Result<()>;
}

/// Player store backed by a single flat record
pub struct FileSystemPlayerStore<D = File> {
    database: Mutex<D>,
}

impl FileSystemPlayerStore<File> {
    /// Open (or create) the record at `path`.
    ///
    /// An empty file is initialised with an empty league so the first read
    /// decodes cleanly.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        if file.metadata()?.len() == 0 {
            debug!("Initialising empty league record at {}", path.display());
            file.write_all(&League::default().to_bytes()?)?;
            file.flush()?;
        }

        Ok(Self::new(file))
    }
}

impl<D: Database> FileSystemPlayerStore<D> {
    pub fn new(database: D) -> Self {
        Self {
            database: Mutex::new(database),
        }
    }

    /// Release the backing resource.
    pub fn into_inner(self) -> D {
        self.database
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_for_read(&self) -> MutexGuard<'_, D> {
        // A panicked writer leaves at worst a partial record, which
        // league() already reads as empty.
        self.database
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Parse the record from the start of the resource.
    ///
    /// An empty resource is an empty league. Seek and read failures come
    /// back as [`Error::Io`], malformed records as [`Error::Decode`].
    fn load(database: &mut D) -> Result<League> {
        if database.seek(SeekFrom::End(0))? == 0 {
            debug!("League record is uninitialised, treating as empty");
            return Ok(League::default());
        }

        database.seek(SeekFrom::Start(0))?;
        let league = League::parse(BufReader::new(&mut *database))?;
        debug!("Loaded league with {} players", league.len());
        Ok(league)
    }
}

impl<D: Database> PlayerStore for FileSystemPlayerStore<D> {
    fn league(&self) -> League {
        let mut database = self.lock_for_read();
        match Self::load(&mut database) {
            Ok(league) => league,
            Err(e) => {
                warn!("Failed to read league record, treating as empty: {}", e);
                League::default()
            }
        }
    }

    fn player_score(&self, name: &str) -> u32 {
        self.league().find(name).map(|p| p.wins).unwrap_or(0)
    }

    fn record_win(&self, name: &str) -> Result<()> {
        let mut database = self.database.lock().map_err(|_| Error::LockPoisoned)?;

        let league = match Self::load(&mut database) {
            Ok(league) => league,
            Err(Error::Decode(e)) => {
                warn!("League record is corrupt, starting a new one: {}", e);
                League::default()
            }
            Err(e) => return Err(e),
        }
        .with_win(name);
        let bytes = league.to_bytes()?;

        database.truncate()?;
        database.seek(SeekFrom::Start(0))?;
        database.write_all(&bytes)?;
        database.flush()?;

        info!(
            "Recorded win for {} ({} players in league)",
            name,
            league.len()
        );
        Ok(())
    }
}
