//! Commit Groups - organize uncommitted git changes into named commit groups.
//!
//! This library provides the core functionality for commit-groups: a group/file
//! store with a single active group, a reconciler that keeps the store in sync
//! with the repository's live change lists, a move coordinator that stages or
//! reverts tracking as files cross the untracked boundary, and persistence of
//! group assignments across invocations.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Group/file store and data entities
//! - Repository change reconciliation
//! - Repository service abstraction over git
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    load_snapshot,
    move_files,
    print_detail,
    // Output formatting
    print_error,
    print_info,
    print_success,
    save_snapshot,

    CacheStateStore,
    Change,

    ChangeSnapshot,
    // Change status types
    ChangeStatus,
    // Error handling
    CommitGroupsError,
    FileRecord,
    // Repository service
    GitRepository,
    // Group/file data entities
    Group,
    GroupKind,
    // Group/file store
    GroupStore,
    MemoryStateStore,
    MoveReport,
    ReconcileGate,
    // Reconciliation
    Reconciler,
    RepositoryService,
    Result,
    StateStore,
    StoreSnapshot,
    UserConfig,

    DEFAULT_GROUP,
    UNTRACKED_GROUP,
};
