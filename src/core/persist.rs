//! Persisted state: key/value store behind a narrow trait.
//!
//! Group/file assignments survive process restarts through a
//! workspace-scoped key/value store. The core only sees the [`StateStore`]
//! trait; [`CacheStateStore`] is the production implementation keeping one
//! JSON object per repository in the XDG cache directory, and
//! [`MemoryStateStore`] is the in-memory fake for tests.
//!
//! # Persisted layout
//! - `version`: schema version (currently `1`)
//! - `groups`: JSON array of `{label, active}`
//! - `fileList`: JSON array of `{filepath, groupLabel}`
//! - `savedAt`: RFC3339 timestamp, informational only

use crate::core::{
    error::{CommitGroupsError, Result},
    group::{FileListEntry, GroupEntry},
    store::StoreSnapshot,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;

const KEY_VERSION: &str = "version";
const KEY_GROUPS: &str = "groups";
const KEY_FILE_LIST: &str = "fileList";
const KEY_SAVED_AT: &str = "savedAt";

/// Narrow key/value persistence interface injected into the command layer.
pub trait StateStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Write a store snapshot into the state store as the two persisted tables
/// plus schema version and timestamp.
pub fn save_snapshot(state: &dyn StateStore, snapshot: &StoreSnapshot) -> Result<()> {
    state.save(KEY_VERSION, &SCHEMA_VERSION.to_string())?;
    state.save(KEY_GROUPS, &serde_json::to_string(&snapshot.groups)?)?;
    state.save(KEY_FILE_LIST, &serde_json::to_string(&snapshot.file_list)?)?;
    state.save(KEY_SAVED_AT, &chrono::Utc::now().to_rfc3339())?;
    Ok(())
}

/// Read the persisted tables back. Missing keys yield an empty snapshot
/// (first run); an unknown schema version is logged and treated as empty
/// rather than failing the command.
pub fn load_snapshot(state: &dyn StateStore) -> Result<StoreSnapshot> {
    let empty = StoreSnapshot {
        groups: Vec::new(),
        file_list: Vec::new(),
    };

    if let Some(version) = state.load(KEY_VERSION)? {
        if version != SCHEMA_VERSION.to_string() {
            log::warn!("persisted state has unknown schema version {version}, starting fresh");
            return Ok(empty);
        }
    }

    let groups: Vec<GroupEntry> = match state.load(KEY_GROUPS)? {
        Some(json) if !json.is_empty() => serde_json::from_str(&json)?,
        _ => Vec::new(),
    };
    let file_list: Vec<FileListEntry> = match state.load(KEY_FILE_LIST)? {
        Some(json) if !json.is_empty() => serde_json::from_str(&json)?,
        _ => Vec::new(),
    };

    Ok(StoreSnapshot { groups, file_list })
}

/// File-backed state store: one JSON object of key/value strings per
/// repository, keyed by a hash of the repository path under the XDG cache
/// directory.
pub struct CacheStateStore {
    state_file: PathBuf,
    entries: RefCell<HashMap<String, String>>,
}

impl CacheStateStore {
    /// Open (or initialize) the state for one repository.
    pub fn open(repo_path: &Path) -> Result<Self> {
        // Respect XDG_CACHE_HOME first, fall back to dirs::cache_dir()
        let cache_home = std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::cache_dir().unwrap_or_else(|| std::path::PathBuf::from("/tmp"))
            });
        Self::open_in(&cache_home, repo_path)
    }

    /// Open the state rooted at an explicit cache directory.
    pub fn open_in(cache_home: &Path, repo_path: &Path) -> Result<Self> {
        let state_dir = Self::state_dir(cache_home, repo_path);
        let state_file = state_dir.join("state.json");

        let entries = if state_file.exists() {
            let content = fs::read_to_string(&state_file)
                .map_err(|e| CommitGroupsError::state_read_failed(&state_file, e))?;
            serde_json::from_str(&content)
                .map_err(|e| CommitGroupsError::state_parse_failed(&state_file, e))?
        } else {
            HashMap::new()
        };

        Ok(CacheStateStore {
            state_file,
            entries: RefCell::new(entries),
        })
    }

    /// Per-repository state directory: a hash of the repo path keeps
    /// repositories isolated from each other.
    fn state_dir(cache_home: &Path, repo_path: &Path) -> PathBuf {
        let repo_hash = format!("{:x}", md5::compute(repo_path.to_string_lossy().as_bytes()));

        log::debug!("state_dir: repo_path = {repo_path:?}, hash = {repo_hash}");

        cache_home.join("commit-groups").join(repo_hash)
    }

    fn flush(&self) -> Result<()> {
        let dir = self
            .state_file
            .parent()
            .ok_or(CommitGroupsError::StateDirectoryNotFound)?;
        fs::create_dir_all(dir)
            .map_err(|e| CommitGroupsError::state_directory_creation_failed(dir, e))?;

        let json = serde_json::to_string_pretty(&*self.entries.borrow())?;
        fs::write(&self.state_file, json)
            .map_err(|e| CommitGroupsError::state_write_failed(&self.state_file, e))?;
        Ok(())
    }
}

impl StateStore for CacheStateStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory state store for unit tests.
#[derive(Default)]
pub struct MemoryStateStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
