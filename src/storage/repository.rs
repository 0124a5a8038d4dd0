use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Balances, Ledger, Transaction};

use super::{StorageError, DEFAULT_DATA_FILE};

/// The persisted document, as written.
#[derive(Debug, Serialize)]
pub struct SnapshotRef<'a> {
    pub budget: &'a Balances,
    pub transaction_history: &'a [Transaction],
}

impl<'a> SnapshotRef<'a> {
    pub fn of(ledger: &'a Ledger) -> Self {
        Self {
            budget: ledger.balances(),
            transaction_history: ledger.transactions(),
        }
    }
}

/// The persisted document, as read. Both keys are optional and any other
/// top-level field is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub budget: Option<Balances>,
    #[serde(default)]
    pub transaction_history: Option<Vec<Transaction>>,
}

/// What a load found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and the ledger replaced.
    Loaded,
    /// No file at the path; the ledger was left as it was.
    NotFound,
}

/// JSON file store for a single ledger.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Serialize the whole ledger and overwrite the file.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&SnapshotRef::of(ledger))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
            }
        }
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;

        info!(
            path = %self.path.display(),
            transactions = ledger.transactions().len(),
            "saved budget data"
        );
        Ok(())
    }

    /// Read the file and replace the ledger's state with it.
    ///
    /// A missing file is reported as `LoadOutcome::NotFound` and leaves the
    /// ledger untouched. On any error the ledger is also left untouched.
    pub fn load_into(&self, ledger: &mut Ledger) -> Result<LoadOutcome, StorageError> {
        let Some(snapshot) = self.read()? else {
            debug!(path = %self.path.display(), "no budget data to load");
            return Ok(LoadOutcome::NotFound);
        };

        ledger.restore(
            snapshot.budget,
            snapshot.transaction_history.unwrap_or_default(),
        );

        info!(
            path = %self.path.display(),
            transactions = ledger.transactions().len(),
            "loaded budget data"
        );
        Ok(LoadOutcome::Loaded)
    }

    /// Parse the file without touching any ledger. `None` if it does not exist.
    pub fn read(&self) -> Result<Option<Snapshot>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        let snapshot = serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(snapshot))
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Ledger {
    /// Write this ledger to `path`, replacing whatever is there.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        Repository::new(path.as_ref()).save(self)
    }

    /// Replace this ledger with the contents of `path`, if it exists.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, StorageError> {
        Repository::new(path.as_ref()).load_into(self)
    }
}
