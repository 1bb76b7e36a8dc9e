use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::AbortHandle;

use crate::models::Roster;

/// Delay-and-coalesce gate between the search input and the filter.
///
/// Each keystroke lands here; the term is only committed into the roster
/// (which also jumps back to page 1) once the window elapses with no further
/// keystrokes. A new submission aborts the pending timer, so at most one
/// commit is ever in flight.
#[derive(Clone)]
pub struct SearchDebouncer {
    window: Duration,
    pending: Arc<Mutex<Option<AbortHandle>>>,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        SearchDebouncer {
            window,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Restart the quiescence window with the latest text. The previous
    /// pending commit, if any, is aborted before its timer fires.
    pub fn submit(&self, roster: Arc<Mutex<Roster>>, term: String) {
        let window = self.window;
        let mut pending = self.pending.lock().unwrap();
        if let Some(prev) = pending.take() {
            prev.abort();
        }
        let task = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            roster.lock().unwrap().commit_search(term);
        });
        *pending = Some(task.abort_handle());
    }

    /// Whether a commit is still waiting on its quiescence window.
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}
