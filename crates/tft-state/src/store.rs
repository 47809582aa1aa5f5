//! Single-writer owner of the current editor state.
//!
//! [`FilesStore`] serializes intents: each one is reduced against the
//! current snapshot and the merged result becomes the new current snapshot.
//! Snapshots handed out earlier (via [`FilesStore::snapshot`]) are never
//! modified.

use tft_tree::TreeEngine;
use tracing::debug;

use crate::error::StateResult;
use crate::intent::Intent;
use crate::reducer::{reduce, try_reduce};
use crate::state::EditorState;

#[derive(Debug)]
pub struct FilesStore {
    engine: TreeEngine,
    state: EditorState,
    revision: u64,
}

impl FilesStore {
    /// Start from an empty tree with nothing open.
    pub fn new(engine: TreeEngine) -> Self {
        Self::with_state(engine, EditorState::new())
    }

    pub fn with_state(engine: TreeEngine, state: EditorState) -> Self {
        Self {
            engine,
            state,
            revision: 0,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// An owned copy of the current snapshot.
    pub fn snapshot(&self) -> EditorState {
        self.state.clone()
    }

    /// Number of intents that changed the state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an intent; refused intents leave the state as it is.
    pub fn dispatch(&mut self, intent: Intent) -> &EditorState {
        let name = intent.name();
        let update = reduce(&self.engine, &self.state, intent);
        if !update.is_empty() {
            self.commit(name, self.state.apply(update));
        }
        &self.state
    }

    /// Apply an intent or report why it was refused. The state is only
    /// replaced on success.
    pub fn try_dispatch(&mut self, intent: Intent) -> StateResult<&EditorState> {
        let name = intent.name();
        let update = try_reduce(&self.engine, &self.state, intent)?;
        if !update.is_empty() {
            self.commit(name, self.state.apply(update));
        }
        Ok(&self.state)
    }

    /// Give up the store and keep the final state.
    pub fn into_state(self) -> EditorState {
        self.state
    }

    fn commit(&mut self, intent: &str, next: EditorState) {
        self.revision += 1;
        debug!(intent, revision = self.revision, "state updated");
        self.state = next;
    }
}
