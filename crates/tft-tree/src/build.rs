//! Node construction: turns raw, identity-less input into identified nodes.

use tft_types::IdProvider;
use tracing::debug;

use crate::config::TreeConfig;
use crate::node::{FileData, FolderData, Node, RawFolder, RawNode};

/// Build a file node with a fresh id.
///
/// Returns `None` when the name is reserved; that is a silent rejection,
/// not an error.
pub fn create_file(ids: &dyn IdProvider, config: &TreeConfig, data: FileData) -> Option<Node> {
    if config.is_reserved(&data.name) {
        debug!(name = %data.name, "skipping reserved file name");
        return None;
    }
    Some(Node::File {
        id: ids.next_id(),
        data,
    })
}

/// Build a folder node and its whole subtree with fresh ids.
///
/// Children with reserved names are dropped. The child order of the input
/// is kept; sorting is up to the caller.
pub fn create_folder(ids: &dyn IdProvider, config: &TreeConfig, raw: RawFolder) -> Node {
    let id = ids.next_id();
    let files = raw
        .files
        .into_iter()
        .filter_map(|child| create_node(ids, config, child))
        .collect();
    Node::Folder {
        id,
        data: FolderData {
            name: raw.name,
            files,
        },
    }
}

/// Dispatch on the raw node kind.
pub fn create_node(ids: &dyn IdProvider, config: &TreeConfig, raw: RawNode) -> Option<Node> {
    match raw {
        RawNode::File(data) => create_file(ids, config, data),
        RawNode::Folder(folder) => Some(create_folder(ids, config, folder)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tft_types::SequentialIdProvider;

    use super::*;
    use crate::lookup::collect_ids;

    #[test]
    fn create_file_assigns_fresh_id() {
        let ids = SequentialIdProvider::new();
        let config = TreeConfig::default();
        let a = create_file(&ids, &config, FileData::new("a.js", "javascript", "")).unwrap();
        let b = create_file(&ids, &config, FileData::new("a.js", "javascript", "")).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.file_data().unwrap().language, "javascript");
    }

    #[test]
    fn reserved_file_produces_nothing() {
        let ids = SequentialIdProvider::new();
        let config = TreeConfig::default();
        let node = create_file(&ids, &config, FileData::new(".DS_Store", "", ""));
        assert!(node.is_none());
        // No id was consumed.
        assert_eq!(ids.peek(), 1);
    }

    #[test]
    fn create_folder_builds_subtree() {
        let ids = SequentialIdProvider::new();
        let config = TreeConfig::default();
        let raw = RawFolder::new("src")
            .with(FileData::new("main.js", "javascript", "x"))
            .with(RawFolder::new("lib").with(FileData::new("util.js", "javascript", "")));

        let node = create_folder(&ids, &config, raw);
        assert!(node.is_folder());
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[1].children()[0].name(), "util.js");

        let all = collect_ids(std::slice::from_ref(&node));
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), 4);
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn create_folder_drops_reserved_children() {
        let ids = SequentialIdProvider::new();
        let config = TreeConfig::default();
        let raw = RawFolder::new("assets")
            .with(FileData::new("Thumbs.db", "", ""))
            .with(FileData::new("logo.svg", "xml", "<svg/>"));

        let node = create_folder(&ids, &config, raw);
        let names: Vec<&str> = node.children().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["logo.svg"]);
    }

    #[test]
    fn reserved_names_do_not_apply_to_folders() {
        let ids = SequentialIdProvider::new();
        let config = TreeConfig::with_reserved_names(["build"]);
        let node = create_node(&ids, &config, RawFolder::new("build").into());
        assert!(node.is_some());
    }
}
