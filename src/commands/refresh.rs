//! Re-sync the store with the live repository and report the result.

use crate::commands::context::GroupContext;
use crate::core::{
    error::Result,
    reconciler::{ReconcileGate, Reconciler},
    print_success,
};

pub fn execute_refresh() -> Result<()> {
    let mut context = GroupContext::initialize()?;

    // One-slot gate: reruns coalesce if a trigger lands mid-pass
    let mut gate = ReconcileGate::new();
    if gate.try_begin() {
        loop {
            Reconciler::reconcile(&mut context.store, &context.repo)?;
            if !gate.finish() {
                break;
            }
        }
    }

    context.finish()?;

    print_success(&format!(
        "Synchronized {} file(s) across {} group(s).",
        context.store.file_count(),
        context.store.group_count()
    ));
    Ok(())
}
