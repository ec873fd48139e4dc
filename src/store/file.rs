use super::{AdmitDecision, GateStore, SetupDecision};
use crate::errors::{AppError, AppResult};
use crate::models::{EventConfig, GateState, LedgerEntry};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Single JSON document on disk holding the whole [`GateState`].
///
/// Every mutation holds an exclusive OS lock on a sibling `.lock` file for
/// its whole read-decide-write cycle, so store handles in other threads or
/// other processes queue behind it. Writes go to a sibling temp file that
/// is renamed over the target; readers never see a half-written document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

/// Held for the duration of one mutation; closing the file releases the lock.
struct WriteLock {
    _file: File,
}

fn unavailable(path: &Path, err: io::Error) -> AppError {
    AppError::PersistenceUnavailable(format!("{}: {}", path.display(), err))
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "checkgate.json".into());
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn ensure_dir(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| unavailable(dir, e))?;
        }
        Ok(())
    }

    /// Block until this handle owns the store for writing.
    fn lock(&self) -> AppResult<WriteLock> {
        self.ensure_dir()?;

        let path = self.sibling(".lock");
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|e| unavailable(&path, e))?;
        file.lock().map_err(|e| unavailable(&path, e))?;

        Ok(WriteLock { _file: file })
    }

    /// A missing or empty file is a fresh store.
    fn read_state(&self) -> AppResult<GateState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(GateState::default()),
            Err(e) => return Err(unavailable(&self.path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(GateState::default());
        }

        Ok(serde_json::from_str(&raw)?)
    }

    /// Caller must hold the [`WriteLock`].
    fn write_state(&self, state: &GateState) -> AppResult<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.sibling(".tmp");

        fs::write(&tmp, json).map_err(|e| unavailable(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| unavailable(&self.path, e))?;
        Ok(())
    }
}

impl GateStore for FileStore {
    fn kind(&self) -> &'static str {
        "file"
    }

    fn load(&self) -> AppResult<GateState> {
        self.read_state()
    }

    fn configure(&self, decide: SetupDecision<'_>) -> AppResult<EventConfig> {
        let _guard = self.lock()?;
        let mut state = self.read_state()?;

        let mut next = decide(&state.event)?;
        next.total = state.event.total;
        state.event = next.clone();

        self.write_state(&state)?;
        Ok(next)
    }

    fn admit(&self, decide: AdmitDecision<'_>) -> AppResult<LedgerEntry> {
        let _guard = self.lock()?;
        let mut state = self.read_state()?;

        let entry = decide(&state.event)?;
        state.commit(entry.clone());

        self.write_state(&state)?;
        Ok(entry)
    }

    fn reset(&self) -> AppResult<()> {
        let _guard = self.lock()?;
        self.write_state(&GateState::default())
    }
}
