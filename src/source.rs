//! One-shot loading of the user list.
//!
//! A [`UserSource`] owns a single background task that waits for the initial
//! delay, asks its [`UserFetcher`] for the users once, and publishes the
//! outcome into a `watch` channel. Readers always see a whole [`LoadState`]:
//! the value is replaced in one step, never patched in place.
//!
//! The state leaves `Loading` at most once. Dropping the source aborts the
//! task if it has not settled yet.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::client::UserFetcher;
use crate::error::FetchError;
use crate::model::User;

pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(800);

/// Published when the fetch task ends without an outcome (panic or abort).
pub const INTERRUPTED_MESSAGE: &str = "user fetch stopped before completing";

/// Lifecycle of the user fetch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready {
        users: Arc<[User]>,
    },
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    /// The fetched users, only once the state is `Ready`.
    pub fn users(&self) -> Option<&[User]> {
        match self {
            LoadState::Ready { users } => Some(users),
            LoadState::Loading | LoadState::Failed { .. } => None,
        }
    }

    /// Apply the fetch outcome. Returns `false` and leaves `self` untouched
    /// when the state is already terminal.
    pub fn settle(&mut self, outcome: Result<Vec<User>, FetchError>) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = match outcome {
            Ok(users) => LoadState::Ready {
                users: users.into(),
            },
            Err(err) => LoadState::Failed {
                message: err.to_string(),
            },
        };
        true
    }
}

/// Write side of the state channel. If it is dropped while the state is
/// still `Loading`, it settles the state as failed so readers never wait on
/// a fetch that is gone.
struct Publisher {
    tx: watch::Sender<LoadState>,
}

impl Publisher {
    fn publish(&self, outcome: Result<Vec<User>, FetchError>) {
        self.tx.send_if_modified(|state| state.settle(outcome));
    }
}

impl Drop for Publisher {
    fn drop(&mut self) {
        let settled = self
            .tx
            .send_if_modified(|state| state.settle(Err(FetchError::transport(INTERRUPTED_MESSAGE))));
        if settled {
            warn!("user fetch ended without an outcome");
        }
    }
}

pub struct UserSource {
    state: watch::Receiver<LoadState>,
    task: Option<JoinHandle<()>>,
}

impl UserSource {
    /// Start the fetch task on the current tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime context.
    pub fn spawn(fetcher: Arc<dyn UserFetcher>, initial_delay: Duration) -> Self {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let publisher = Publisher { tx };
        let task = tokio::spawn(async move {
            if !initial_delay.is_zero() {
                debug!(delay_ms = initial_delay.as_millis() as u64, "delaying user fetch");
                tokio::time::sleep(initial_delay).await;
            }
            let outcome = fetcher.fetch_users().await;
            match &outcome {
                Ok(users) => info!(count = users.len(), "users loaded"),
                Err(err) => warn!(error = %err, "user fetch failed"),
            }
            publisher.publish(outcome);
        });
        Self {
            state: rx,
            task: Some(task),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Wait until the fetch has settled and return the terminal state.
    ///
    /// A task that panics or is aborted settles as `Failed` with
    /// [`INTERRUPTED_MESSAGE`], so this never returns `Loading`.
    pub async fn settled(&self) -> LoadState {
        let mut rx = self.state.clone();
        let settled = match rx.wait_for(LoadState::is_terminal).await {
            Ok(state) => Some(state.clone()),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| {
            let mut state = self.state();
            state.settle(Err(FetchError::transport(INTERRUPTED_MESSAGE)));
            state
        })
    }
}

impl Drop for UserSource {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
