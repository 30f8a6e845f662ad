//! Command implementations for the commit-groups CLI.
//!
//! Each command is a thin wrapper over the core: initialize a
//! [`context::GroupContext`], call into the store/reconciler/coordinator,
//! persist, and print.

pub mod commit;
pub mod context;
pub mod diff;
pub mod export;
pub mod group;
pub mod move_to;
pub mod refresh;
pub mod status;

pub use commit::execute_commit;
pub use diff::execute_diff;
pub use export::execute_export;
pub use group::{
    execute_activate_group, execute_add_group, execute_delete_group, execute_rename_group,
};
pub use move_to::execute_move;
pub use refresh::execute_refresh;
pub use status::execute_status;
