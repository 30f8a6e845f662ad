//! Core functionality for the commit-groups tool.
//!
//! This module provides the group/file store, the repository change
//! reconciler, persistence, and the supporting error and output types.

pub mod change_status;
pub mod config;
pub mod error;
pub mod group;
pub mod mover;
pub mod output;
pub mod persist;
pub mod reconciler;
pub mod repository;
pub mod store;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{CommitGroupsError, Result};

// === Change status types ===
// Type-safe git change status enumeration
pub use change_status::ChangeStatus;

// === Group/file data entities ===
pub use group::{FileRecord, Group, GroupKind, DEFAULT_GROUP, UNTRACKED_GROUP};

// === Group/file store ===
// Single source of truth for group definitions and file assignment
pub use store::{GroupStore, StoreSnapshot};

// === Reconciliation ===
// Diff-and-upsert synchronization against the live repository
pub use reconciler::{ReconcileGate, Reconciler};

// === Repository service ===
// Narrow collaborator interface over git2 + the git binary
pub use repository::{Change, ChangeSnapshot, GitRepository, RepositoryService};

// === Move coordination ===
pub use mover::{move_files, MoveReport};

// === Persistence ===
pub use persist::{load_snapshot, save_snapshot, CacheStateStore, MemoryStateStore, StateStore};

// === User configuration ===
pub use config::UserConfig;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_detail, print_error, print_info, print_success};
