//! Maps (snapshot, intent) to a partial state update.
//!
//! [`reduce`] never fails: requests the engine cannot apply produce an empty
//! update. [`try_reduce`] reports the reason instead.

use tft_tree::{RawNode, TreeEngine, TreeError};
use tft_types::NodeId;
use tracing::{debug, warn};

use crate::error::{StateError, StateResult};
use crate::intent::Intent;
use crate::state::{EditorState, OpenFileChange, StateUpdate};

/// Apply one intent, falling back to an empty update on refusal.
pub fn reduce(engine: &TreeEngine, state: &EditorState, intent: Intent) -> StateUpdate {
    let name = intent.name();
    match try_reduce(engine, state, intent) {
        Ok(update) => update,
        Err(StateError::NoOpenFile) => {
            warn!(intent = name, "content edit without an open file");
            StateUpdate::none()
        }
        Err(StateError::Tree(e @ TreeError::MoveIntoDescendant { .. })) => {
            warn!(intent = name, error = %e, "refusing move");
            StateUpdate::none()
        }
        Err(e) => {
            debug!(intent = name, error = %e, "intent not applied");
            StateUpdate::none()
        }
    }
}

/// Apply one intent, reporting why it could not be applied.
pub fn try_reduce(
    engine: &TreeEngine,
    state: &EditorState,
    intent: Intent,
) -> StateResult<StateUpdate> {
    let update = match intent {
        Intent::AddItem {
            data: RawNode::File(data),
            parent_folder_id,
        } => {
            let added = engine.try_add_file(&state.files, data, parent_folder_id)?;
            StateUpdate::files(added.tree).with_open_file(OpenFileChange::Open(added.new_file_id))
        }
        Intent::AddItem {
            data: RawNode::Folder(folder),
            parent_folder_id,
        } => StateUpdate::files(engine.try_add_folder(&state.files, folder, parent_folder_id)?),
        Intent::MoveItem {
            item,
            new_folder_id,
        } => StateUpdate::files(engine.try_move_item(&state.files, &item, new_folder_id)?),
        Intent::RenameFolder {
            folder_id,
            new_name,
        } => StateUpdate::files(engine.try_rename_node(&state.files, folder_id, &new_name)?),
        Intent::DeleteItem { item_id } => {
            let is_file_open = open_file_within(state, item_id);
            let deleted = engine.try_delete_item(&state.files, item_id, is_file_open)?;
            let update = StateUpdate::files(deleted.tree);
            if deleted.open_file_cleared {
                update.with_open_file(OpenFileChange::Close)
            } else {
                update
            }
        }
        Intent::OpenFile { file_id: None } => {
            StateUpdate::none().with_open_file(OpenFileChange::Close)
        }
        Intent::OpenFile {
            file_id: Some(file_id),
        } => match state.files.find(file_id) {
            Some(node) if node.is_file() => {
                StateUpdate::none().with_open_file(OpenFileChange::Open(file_id))
            }
            Some(_) => return Err(TreeError::NotAFile(file_id).into()),
            None => return Err(TreeError::NodeNotFound(file_id).into()),
        },
        Intent::ChangeOpenFileContent { value } => {
            let file_id = state.open_file_id.ok_or(StateError::NoOpenFile)?;
            StateUpdate::files(engine.try_change_file_content(&state.files, file_id, value)?)
        }
    };
    Ok(update)
}

/// Whether deleting `item_id` takes the open file with it.
fn open_file_within(state: &EditorState, item_id: NodeId) -> bool {
    match state.open_file_id {
        Some(open) => state
            .files
            .find(item_id)
            .is_some_and(|node| node.contains(open)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tft_tree::{FileData, FileTree, RawFolder};
    use tft_types::{IdProvider, SequentialIdProvider};

    use super::*;

    fn engine() -> TreeEngine {
        TreeEngine::with_ids(Arc::new(SequentialIdProvider::new()))
    }

    fn step(engine: &TreeEngine, state: &EditorState, intent: Intent) -> EditorState {
        state.apply(reduce(engine, state, intent))
    }

    fn add(data: impl Into<RawNode>, parent_folder_id: Option<NodeId>) -> Intent {
        Intent::AddItem {
            data: data.into(),
            parent_folder_id,
        }
    }

    fn id_at(state: &EditorState, path: &str) -> NodeId {
        state.files.resolve(path).unwrap().id()
    }

    #[test]
    fn adding_a_file_opens_it() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(FileData::new("a.js", "javascript", ""), None));
        assert_eq!(state.open_file_path().as_deref(), Some("a.js"));
    }

    #[test]
    fn adding_a_folder_keeps_open_file() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(FileData::new("a.js", "", ""), None));
        let open = state.open_file_id;
        let state = step(&engine, &state, add(RawFolder::new("src"), None));
        assert_eq!(state.open_file_id, open);
        assert_eq!(state.files.len(), 2);
    }

    #[test]
    fn reserved_file_is_refused() {
        let engine = engine();
        let state = EditorState::new();
        let result = try_reduce(&engine, &state, add(FileData::new(".DS_Store", "", ""), None));
        assert_eq!(
            result,
            Err(StateError::Tree(TreeError::ReservedName(".DS_Store".into())))
        );
        assert!(reduce(&engine, &state, add(FileData::new(".DS_Store", "", ""), None)).is_empty());
    }

    #[test]
    fn deleting_open_file_closes_it() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(FileData::new("a.js", "", ""), None));
        let a = id_at(&state, "a.js");
        let state = step(&engine, &state, Intent::DeleteItem { item_id: a });
        assert!(state.files.is_empty());
        assert!(state.open_file_id.is_none());
    }

    #[test]
    fn deleting_folder_with_open_file_closes_it() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(RawFolder::new("src"), None));
        let src = id_at(&state, "src");
        let state = step(&engine, &state, add(FileData::new("main.js", "", ""), Some(src)));
        assert!(state.open_file_id.is_some());

        let state = step(&engine, &state, Intent::DeleteItem { item_id: src });
        assert!(state.open_file_id.is_none());
    }

    #[test]
    fn deleting_other_file_keeps_open_file() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(FileData::new("a.js", "", ""), None));
        let a = id_at(&state, "a.js");
        let state = step(&engine, &state, add(FileData::new("b.js", "", ""), None));
        let b = id_at(&state, "b.js");
        let state = step(&engine, &state, Intent::OpenFile { file_id: Some(a) });

        let state = step(&engine, &state, Intent::DeleteItem { item_id: b });
        assert_eq!(state.open_file_id, Some(a));
    }

    #[test]
    fn open_file_requires_existing_file() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(RawFolder::new("src"), None));
        let src = id_at(&state, "src");
        let ghost = SequentialIdProvider::starting_at(999).next_id();

        assert_eq!(
            try_reduce(&engine, &state, Intent::OpenFile { file_id: Some(src) }),
            Err(StateError::Tree(TreeError::NotAFile(src)))
        );
        assert_eq!(
            try_reduce(&engine, &state, Intent::OpenFile { file_id: Some(ghost) }),
            Err(StateError::Tree(TreeError::NodeNotFound(ghost)))
        );
    }

    #[test]
    fn open_none_closes() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(FileData::new("a.js", "", ""), None));
        let state = step(&engine, &state, Intent::OpenFile { file_id: None });
        assert!(state.open_file_id.is_none());
    }

    #[test]
    fn edit_content_rewrites_open_file() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(FileData::new("a.js", "javascript", ""), None));
        let state = step(
            &engine,
            &state,
            Intent::ChangeOpenFileContent {
                value: "let x = 1;".into(),
            },
        );
        let data = state.open_file().unwrap().file_data().unwrap();
        assert_eq!(data.content, "let x = 1;");
        assert_eq!(data.language, "javascript");
    }

    #[test]
    fn edit_content_without_open_file_is_noop() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(RawFolder::new("src"), None));
        let intent = Intent::ChangeOpenFileContent { value: "x".into() };
        assert_eq!(
            try_reduce(&engine, &state, intent.clone()),
            Err(StateError::NoOpenFile)
        );
        assert_eq!(step(&engine, &state, intent), state);
    }

    #[test]
    fn move_and_rename_update_tree_only() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(RawFolder::new("dst"), None));
        let dst = id_at(&state, "dst");
        let state = step(&engine, &state, add(FileData::new("a.js", "", ""), None));
        let a = state.files.resolve("a.js").unwrap().clone();

        let state = step(
            &engine,
            &state,
            Intent::MoveItem {
                item: a.clone(),
                new_folder_id: Some(dst),
            },
        );
        assert_eq!(state.open_file_path().as_deref(), Some("dst/a.js"));

        let state = step(
            &engine,
            &state,
            Intent::RenameFolder {
                folder_id: dst,
                new_name: "out".into(),
            },
        );
        assert_eq!(state.open_file_path().as_deref(), Some("out/a.js"));
        assert_eq!(state.open_file_id, Some(a.id()));
    }

    #[test]
    fn move_into_own_subtree_is_refused() {
        let engine = engine();
        let state = step(&engine, &EditorState::new(), add(RawFolder::new("a"), None));
        let a = id_at(&state, "a");
        let state = step(&engine, &state, add(RawFolder::new("b"), Some(a)));
        let b = id_at(&state, "a/b");
        let intent = Intent::MoveItem {
            item: state.files.find(a).unwrap().clone(),
            new_folder_id: Some(b),
        };

        assert_eq!(
            try_reduce(&engine, &state, intent.clone()),
            Err(StateError::Tree(TreeError::MoveIntoDescendant { node: a, target: b }))
        );
        assert!(reduce(&engine, &state, intent).is_empty());
    }

    #[test]
    fn previous_snapshot_survives() {
        let engine = engine();
        let first = step(&engine, &EditorState::new(), add(FileData::new("a.js", "", ""), None));
        let snapshot = first.clone();
        let a = id_at(&first, "a.js");
        let _second = step(&engine, &first, Intent::DeleteItem { item_id: a });
        assert_eq!(first, snapshot);
        assert_eq!(first.files, FileTree::from_nodes(snapshot.files.nodes().to_vec()));
    }
}
