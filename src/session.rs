use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::form::PatientRecord;

pub const SESSION_SLOT: &str = "patientData";

#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn slot_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", SESSION_SLOT))
    }

    pub fn load(&self) -> Result<Option<PatientRecord>> {
        let path = self.slot_path();
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        match serde_json::from_str::<PatientRecord>(&content) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "session slot unreadable, ignoring");
                Ok(None)
            }
        }
    }

    pub fn save(&self, record: &PatientRecord) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let path = self.slot_path();
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        let path = self.slot_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[derive(Debug)]
pub struct Session {
    store: SessionStore,
    current: Option<PatientRecord>,
}

impl Session {
    pub fn restore(store: SessionStore) -> Result<Self> {
        let current = store.load()?;
        if current.is_some() {
            info!(slot = %store.slot_path().display(), "session restored");
        }
        Ok(Self { store, current })
    }

    pub fn fresh(store: SessionStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&PatientRecord> {
        self.current.as_ref()
    }

    pub fn commit(&mut self, record: PatientRecord) -> Result<()> {
        self.store.save(&record)?;
        self.current = Some(record);
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.current = None;
        self.store.clear()
    }

    /// True when the durable slot still holds `record`. Used to drop results
    /// for a record that was reset or replaced while its request was running.
    pub fn still_holds(&self, record: &PatientRecord) -> Result<bool> {
        Ok(self.store.load()?.as_ref() == Some(record))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
