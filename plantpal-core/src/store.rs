//! JSON-file persistence for the entity collections.
//!
//! Each collection is one file under the data directory, rewritten whole
//! on every mutation. Reads never fail: a missing or malformed file is
//! treated as an empty collection and logged. Write failures are
//! surfaced so callers can decide whether losing the mutation matters.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::models::{CareNote, GrowthLog, Plant};

/// The entity collections the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Plants,
    GrowthLogs,
    CareNotes,
}

impl Collection {
    pub fn filename(&self) -> &'static str {
        match self {
            Collection::Plants => "plants.json",
            Collection::GrowthLogs => "growth_logs.json",
            Collection::CareNotes => "care_notes.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Plants => write!(f, "plants"),
            Collection::GrowthLogs => write!(f, "growth logs"),
            Collection::CareNotes => write!(f, "care notes"),
        }
    }
}

/// Errors that can occur while writing a collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize the {collection} collection: {source}")]
    Serialize {
        collection: Collection,
        source: serde_json::Error,
    },
}

/// An entity that lives in one of the store's collections.
pub trait Record: Serialize + DeserializeOwned {
    const COLLECTION: Collection;

    fn id(&self) -> Uuid;
}

impl Record for Plant {
    const COLLECTION: Collection = Collection::Plants;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for GrowthLog {
    const COLLECTION: Collection = Collection::GrowthLogs;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for CareNote {
    const COLLECTION: Collection = Collection::CareNotes;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// File-backed store holding one JSON list per collection.
#[derive(Debug, Clone)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the full path of a collection's file.
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.filename())
    }

    /// Reads a whole collection. A missing file is an empty collection;
    /// unreadable or malformed content is logged and also read as empty.
    pub fn read_all<T: Record>(&self) -> Vec<T> {
        let path = self.path(T::COLLECTION);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(
                    "failed to read '{}', treating {} collection as empty: {}",
                    path.display(),
                    T::COLLECTION,
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(e) => {
                warn!(
                    "malformed {} collection in '{}', treating as empty: {}",
                    T::COLLECTION,
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrites a whole collection, creating the data directory on
    /// demand. The single-file write is the atomicity unit.
    pub fn write_all<T: Record>(&self, items: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })?;

        let json = serde_json::to_vec_pretty(items).map_err(|source| StoreError::Serialize {
            collection: T::COLLECTION,
            source,
        })?;

        let path = self.path(T::COLLECTION);
        fs::write(&path, json).map_err(|source| StoreError::Write { path, source })
    }

    /// Replaces the entry with a matching identifier or appends it.
    pub fn upsert<T: Record + Clone>(&self, item: &T) -> Result<(), StoreError> {
        let mut items: Vec<T> = self.read_all();
        match items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => items[index] = item.clone(),
            None => items.push(item.clone()),
        }
        self.write_all(&items)
    }

    /// Removes the entry with a matching identifier, reporting whether a
    /// removal occurred. Nothing is written when nothing matched.
    pub fn delete_by_id<T: Record>(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut items: Vec<T> = self.read_all();
        let len_before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == len_before {
            return Ok(false);
        }
        self.write_all(&items)?;
        Ok(true)
    }

    /// Removes every entry matching the predicate. Used for cascade
    /// cleanup of a deleted plant's dependents.
    pub fn delete_where<T, F>(&self, predicate: F) -> Result<(), StoreError>
    where
        T: Record,
        F: Fn(&T) -> bool,
    {
        let mut items: Vec<T> = self.read_all();
        let len_before = items.len();
        items.retain(|item| !predicate(item));
        if items.len() != len_before {
            self.write_all(&items)?;
        }
        Ok(())
    }
}
