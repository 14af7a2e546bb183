//! Task polling utilities
//!
//! The UI thread never awaits. It spawns work on the tokio runtime and
//! harvests finished handles once per frame.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Remove every finished handle from `tasks` and return its output.
///
/// Handles that are still running stay in the vector in their original order.
/// Outputs come back in vector order, so handles that finish between the same
/// two polls are reported in the order they were pushed, not the order they
/// completed.
pub fn drain_finished<T, K>(
    tasks: &mut Vec<(K, JoinHandle<T>)>,
) -> Vec<(K, Result<T, JoinError>)> {
    let mut finished = Vec::new();
    let mut idx = 0;

    while idx < tasks.len() {
        if !tasks[idx].1.is_finished() {
            idx += 1;
            continue;
        }

        // The window runs inside a single `block_on`, so the coop budget is
        // never refilled on this thread. Poll outside of it.
        let polled = tokio::task::unconstrained(&mut tasks[idx].1).now_or_never();
        match polled {
            Some(result) => {
                let (key, _) = tasks.remove(idx);
                finished.push((key, result));
            }
            None => {
                // Keep the handle; the next poll picks it up.
                tracing::warn!("Task not ready despite is_finished()");
                idx += 1;
            }
        }
    }

    finished
}
