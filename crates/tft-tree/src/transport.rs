//! Transport form of a tree: the same nodes without ids.
//!
//! Ids are session-local. [`export_tree`] strips them before a tree is
//! persisted or sent, [`import_tree`] assigns fresh ones when it comes back.
//! The JSON shape is a list of `{"kind": ..., "data": {...}}` objects, with
//! folders nesting their children under `data.files`.

use tft_types::IdProvider;

use crate::error::{TreeError, TreeResult};
use crate::node::{FolderData, Node, RawFolder, RawNode};
use crate::tree::FileTree;

/// Strip the id of a node and of every node below it.
pub fn export_node(node: &Node) -> RawNode {
    match node {
        Node::File { data, .. } => RawNode::File(data.clone()),
        Node::Folder { data, .. } => RawNode::Folder(RawFolder {
            name: data.name.clone(),
            files: data.files.iter().map(export_node).collect(),
        }),
    }
}

pub fn export_tree(tree: &FileTree) -> Vec<RawNode> {
    tree.iter().map(export_node).collect()
}

/// Give a raw node and its subtree fresh ids, keeping the data verbatim.
///
/// Unlike construction this neither filters reserved names nor sorts: a
/// stored tree comes back exactly as it was stored.
pub fn import_node(ids: &dyn IdProvider, raw: &RawNode) -> Node {
    match raw {
        RawNode::File(data) => Node::File {
            id: ids.next_id(),
            data: data.clone(),
        },
        RawNode::Folder(folder) => {
            let id = ids.next_id();
            Node::Folder {
                id,
                data: FolderData {
                    name: folder.name.clone(),
                    files: folder.files.iter().map(|child| import_node(ids, child)).collect(),
                },
            }
        }
    }
}

pub fn import_tree(ids: &dyn IdProvider, raw: &[RawNode]) -> FileTree {
    FileTree::from_nodes(raw.iter().map(|node| import_node(ids, node)).collect())
}

/// Export and encode as pretty-printed JSON.
pub fn export_json(tree: &FileTree) -> TreeResult<String> {
    serde_json::to_string_pretty(&export_tree(tree))
        .map_err(|e| TreeError::Serialization(e.to_string()))
}

/// Decode a JSON transport document.
pub fn parse_json(json: &str) -> TreeResult<Vec<RawNode>> {
    serde_json::from_str(json).map_err(|e| TreeError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tft_types::SequentialIdProvider;

    use super::*;
    use crate::fixtures::{file, folder, Ids};
    use crate::lookup::collect_ids;
    use crate::node::FileData;

    fn sample(ids: &Ids) -> FileTree {
        FileTree::from_nodes(vec![
            folder(ids, "src", vec![file(ids, "index.js")]),
            file(ids, "package.json"),
        ])
    }

    #[test]
    fn export_strips_ids_from_json() {
        let ids = Ids::new();
        let json = export_json(&sample(&ids)).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"kind\": \"folder\""));
        assert!(json.contains("index.js"));
    }

    #[test]
    fn export_keeps_structure() {
        let ids = Ids::new();
        let raw = export_tree(&sample(&ids));
        assert_eq!(raw.len(), 2);
        match &raw[0] {
            RawNode::Folder(folder) => {
                assert_eq!(folder.name, "src");
                assert_eq!(folder.files[0].name(), "index.js");
            }
            other => panic!("expected folder, got {other:?}"),
        }
    }

    #[test]
    fn import_regenerates_every_id() {
        let ids = Ids::new();
        let tree = sample(&ids);
        let original: HashSet<_> = collect_ids(tree.nodes()).into_iter().collect();

        let provider = SequentialIdProvider::new();
        let first = import_tree(&provider, &export_tree(&tree));
        let second = import_tree(&provider, &export_tree(&tree));

        let first_ids: HashSet<_> = collect_ids(first.nodes()).into_iter().collect();
        let second_ids: HashSet<_> = collect_ids(second.nodes()).into_iter().collect();
        assert_eq!(first_ids.len(), 3);
        assert!(first_ids.is_disjoint(&original));
        assert!(first_ids.is_disjoint(&second_ids));
        assert_eq!(export_tree(&first), export_tree(&second));
    }

    #[test]
    fn import_keeps_reserved_names_and_order() {
        let raw = vec![
            RawNode::File(FileData::new("z.txt", "", "")),
            RawNode::File(FileData::new(".DS_Store", "", "")),
        ];
        let tree = import_tree(&SequentialIdProvider::new(), &raw);
        let names: Vec<&str> = tree.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["z.txt", ".DS_Store"]);
    }

    #[test]
    fn parse_json_accepts_transport_shape() {
        let json = r#"[
            {"kind": "folder", "data": {"name": "a", "files": [
                {"kind": "file", "data": {"name": "b.txt", "language": "plaintext", "content": "hi"}}
            ]}}
        ]"#;
        let raw = parse_json(json).unwrap();
        let tree = import_tree(&SequentialIdProvider::new(), &raw);
        let b = tree.resolve("a/b.txt").unwrap();
        assert_eq!(b.file_data().unwrap().content, "hi");
    }

    #[test]
    fn parse_json_rejects_unknown_kind() {
        let result = parse_json(r#"[{"kind": "symlink", "data": {}}]"#);
        assert!(matches!(result, Err(TreeError::Serialization(_))));
    }
}
