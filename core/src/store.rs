//! Holds the current snapshot and applies intents one at a time.
//!
//! # Design
//! The snapshot lives in a `tokio::sync::watch` channel as an
//! `Arc<RootState>`. `dispatch` reduces the current snapshot into a fresh one
//! inside `send_modify`, which serializes concurrent dispatches, so every
//! intent is applied atomically and in the order the store receives it.
//! Renderers either read `state()` or await changes on `subscribe()`. Processed
//! intents are also published, in application order, on a broadcast channel
//! for tooling and tests that care about the exact sequence.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::actions::StoreAction;
use crate::reducer::reduce;
use crate::state::RootState;

const ACTION_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    snapshot: watch::Sender<Arc<RootState>>,
    actions: broadcast::Sender<StoreAction>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(state));
        let (actions, _) = broadcast::channel(ACTION_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(StoreInner { snapshot, actions }),
        }
    }

    /// The latest committed snapshot.
    pub fn state(&self) -> Arc<RootState> {
        self.inner.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<RootState>> {
        self.inner.snapshot.subscribe()
    }

    pub fn subscribe_actions(&self) -> broadcast::Receiver<StoreAction> {
        self.inner.actions.subscribe()
    }

    pub fn dispatch(&self, action: impl Into<StoreAction>) {
        let action = action.into();
        tracing::trace!(action = action.name(), "dispatch");
        let actions = &self.inner.actions;
        self.inner.snapshot.send_modify(|state| {
            let next = reduce(&**state, &action);
            *state = Arc::new(next);
            // No subscribers is not an error.
            let _ = actions.send(action);
        });
    }
}
