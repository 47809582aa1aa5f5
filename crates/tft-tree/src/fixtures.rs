//! Hand-built nodes for unit tests. Children are kept in the given order.

use tft_types::{IdProvider, NodeId, SequentialIdProvider};

use crate::node::{FileData, FolderData, Node};

pub(crate) struct Ids(SequentialIdProvider);

impl Ids {
    pub(crate) fn new() -> Self {
        Self(SequentialIdProvider::starting_at(1000))
    }

    pub(crate) fn fresh(&self) -> NodeId {
        self.0.next_id()
    }
}

pub(crate) fn file(ids: &Ids, name: &str) -> Node {
    Node::File {
        id: ids.fresh(),
        data: FileData::new(name, "plaintext", format!("content of {name}")),
    }
}

pub(crate) fn folder(ids: &Ids, name: &str, files: Vec<Node>) -> Node {
    Node::Folder {
        id: ids.fresh(),
        data: FolderData {
            name: name.to_string(),
            files,
        },
    }
}
