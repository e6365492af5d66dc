//! Interpreter snapshots
//!
//! Persists a whole registry as a versioned JSON document and restores it
//! exactly: program names, filenames, variable bindings, and instruction
//! trees all round-trip structurally. The format is implementation-defined;
//! the version field guards against loading a snapshot written by an
//! incompatible release.

use crate::registry::Interpreter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Snapshot schema version
///
/// Increment when making breaking changes to the serialized shape of
/// Interpreter, Program, or the expression tree.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Persistence failure. The opaque cause is kept as the error source.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found} (expected {SNAPSHOT_VERSION})")]
    UnsupportedVersion { found: u32 },
}

/// Versioned wrapper around a serialized registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot schema version
    pub snapshot_version: u32,
    /// The registry itself
    #[serde(flatten)]
    pub interpreter: Interpreter,
}

impl Snapshot {
    /// Wrap a registry with the current schema version.
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            snapshot_version: SNAPSHOT_VERSION,
            interpreter,
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string (version not yet validated).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Interpreter> for Snapshot {
    fn from(interpreter: Interpreter) -> Self {
        Self::new(interpreter)
    }
}

/// Write a registry snapshot to `path`.
pub fn save(path: impl AsRef<Path>, interpreter: &Interpreter) -> Result<(), StoreError> {
    let snapshot = Snapshot {
        snapshot_version: SNAPSHOT_VERSION,
        interpreter: interpreter.clone(),
    };
    let json = snapshot.to_json()?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a registry snapshot back from `path`, validating the version.
pub fn load(path: impl AsRef<Path>) -> Result<Interpreter, StoreError> {
    let json = fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&json)?;
    if snapshot.snapshot_version != SNAPSHOT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: snapshot.snapshot_version,
        });
    }
    Ok(snapshot.interpreter)
}
