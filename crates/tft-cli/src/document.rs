//! Loading, storing and printing tree documents.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tft_tree::{export_json, FileTree, Node, TreeConfig, TreeEngine};

pub fn load_config(path: Option<&Path>) -> anyhow::Result<TreeConfig> {
    let Some(path) = path else {
        return Ok(TreeConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Ok(TreeConfig::from_toml_str(&text)?)
}

/// Read a transport document and give every node a fresh id.
pub fn load_tree(engine: &TreeEngine, path: &Path) -> anyhow::Result<FileTree> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading tree document {}", path.display()))?;
    engine
        .import_json(&text)
        .with_context(|| format!("parsing tree document {}", path.display()))
}

/// Write the id-free transport form of `tree`.
pub fn save_tree(path: &Path, tree: &FileTree) -> anyhow::Result<()> {
    let mut json = export_json(tree)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("writing tree document {}", path.display()))
}

/// Indented listing, folders suffixed with `/`.
pub fn render_tree(tree: &FileTree) -> String {
    let mut out = String::new();
    render_level(tree.nodes(), 0, &mut out);
    out
}

fn render_level(nodes: &[Node], depth: usize, out: &mut String) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        match node {
            Node::Folder { data, .. } => {
                let _ = writeln!(out, "{indent}{}", format!("{}/", data.name).blue().bold());
                render_level(&data.files, depth + 1, out);
            }
            Node::File { data, .. } => {
                let _ = writeln!(
                    out,
                    "{indent}{} {}",
                    data.name,
                    format!("({}, {} bytes)", data.language, data.content.len()).dimmed()
                );
            }
        }
    }
}
