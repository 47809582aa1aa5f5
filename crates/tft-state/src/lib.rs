//! Editor state for the template file tree.
//!
//! Wraps the tree engine in the shape a UI state container expects: a
//! snapshot `{files, open_file_id}`, a closed set of [`Intent`]s, and a
//! reducer that maps (snapshot, intent) to a partial [`StateUpdate`].
//!
//! # Key Types
//!
//! - [`EditorState`] -- Tree snapshot plus the open-file pointer
//! - [`Intent`] -- One user action
//! - [`StateUpdate`] -- Partial state returned by the reducer
//! - [`FilesStore`] -- Owns the current state and applies intents one at a time

pub mod error;
pub mod intent;
pub mod reducer;
pub mod state;
pub mod store;

pub use error::{StateError, StateResult};
pub use intent::Intent;
pub use reducer::{reduce, try_reduce};
pub use state::{EditorState, OpenFileChange, StateUpdate};
pub use store::FilesStore;
