//! Persistence seam between the outline and whatever holds it at rest.
//!
//! The interface is deliberately small: load a snapshot, replace the
//! snapshot, and ask whether someone else replaced it since we last looked.
//! The event loop drives `poll` on its idle ticks, which is how edits made
//! outside the running process show up without a restart.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::StoreError;
use crate::outline::Outline;

/// Where outline snapshots live.
pub trait SectionStore {
    /// Load the current snapshot, or `None` when the store is empty.
    ///
    /// # Errors
    ///
    /// Fails when the backing store cannot be read or holds a document that
    /// does not parse as an outline.
    fn read(&mut self) -> Result<Option<Outline>, StoreError>;

    /// Replace the stored snapshot with `outline`.
    ///
    /// # Errors
    ///
    /// Fails when the snapshot cannot be serialized or the store cannot be
    /// written.
    fn write(&mut self, outline: &Outline) -> Result<(), StoreError>;

    /// Return a fresh snapshot when the store changed behind our back since
    /// the last `read`/`write`, `None` when nothing moved.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as `read` once a change is detected.
    fn poll(&mut self) -> Result<Option<Outline>, StoreError>;
}

#[derive(Debug)]
/// Store backed by a single JSON document on disk.
///
/// Change detection is a cheap (mtime, length) stamp refreshed on every
/// read and write; `poll` compares stamps instead of re-parsing the file.
pub struct JsonFileStore {
    path: PathBuf,
    seen: Option<(SystemTime, u64)>,
}

impl JsonFileStore {
    #[must_use]
    /// Store reading and writing `path`. The file may not exist yet; it is
    /// created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seen: None,
        }
    }

    #[must_use]
    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn stamp(&self) -> Option<(SystemTime, u64)> {
        let meta = fs::metadata(&self.path).ok()?;
        let modified = meta.modified().ok()?;
        Some((modified, meta.len()))
    }
}

impl SectionStore for JsonFileStore {
    fn read(&mut self) -> Result<Option<Outline>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        // Stamp first: a write landing mid-read surfaces on the next poll
        // rather than being missed.
        self.seen = self.stamp();
        let raw = fs::read_to_string(&self.path)?;
        let outline = serde_json::from_str(&raw)?;
        Ok(Some(outline))
    }

    fn write(&mut self, outline: &Outline) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(outline)?;
        fs::write(&self.path, raw)?;
        self.seen = self.stamp();
        Ok(())
    }

    fn poll(&mut self) -> Result<Option<Outline>, StoreError> {
        let current = self.stamp();
        // A vanished file is not treated as an external edit; the next
        // write will recreate it.
        if current.is_none() || current == self.seen {
            return Ok(None);
        }
        self.read()
    }
}

#[derive(Debug, Default)]
/// Store holding its snapshot in memory, for tests and scripted runs.
pub struct MemoryStore {
    snapshot: Option<Outline>,
    dirty: bool,
}

impl MemoryStore {
    #[must_use]
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Store pre-seeded with `outline`.
    pub fn with_snapshot(outline: Outline) -> Self {
        Self {
            snapshot: Some(outline),
            dirty: false,
        }
    }

    /// Swap in a snapshot as if another process wrote it; the next `poll`
    /// reports it.
    pub fn replace_externally(&mut self, outline: Outline) {
        self.snapshot = Some(outline);
        self.dirty = true;
    }

    #[must_use]
    /// Currently stored snapshot, if any.
    pub fn snapshot(&self) -> Option<&Outline> {
        self.snapshot.as_ref()
    }
}

impl SectionStore for MemoryStore {
    fn read(&mut self) -> Result<Option<Outline>, StoreError> {
        self.dirty = false;
        Ok(self.snapshot.clone())
    }

    fn write(&mut self, outline: &Outline) -> Result<(), StoreError> {
        self.snapshot = Some(outline.clone());
        self.dirty = false;
        Ok(())
    }

    fn poll(&mut self) -> Result<Option<Outline>, StoreError> {
        if self.dirty {
            self.read()
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "tests/store.rs"]
mod tests;
