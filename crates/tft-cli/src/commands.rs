use std::path::Path;
use std::sync::Arc;

use anyhow::bail;
use colored::Colorize;
use tft_state::{EditorState, FilesStore, Intent};
use tft_tree::{FileData, FileTree, Node, RawFolder, RawNode, TreeEngine, TreeError};
use tft_types::{NodeId, UuidIdProvider};

use crate::cli::*;
use crate::document::{load_config, load_tree, render_tree, save_tree};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let engine = TreeEngine::new(config, Arc::new(UuidIdProvider));
    match cli.command {
        Command::Init(args) => cmd_init(args),
        Command::Show(args) => cmd_show(&engine, args),
        Command::AddFile(args) => cmd_add_file(engine, args),
        Command::AddFolder(args) => cmd_add_folder(engine, args),
        Command::Mv(args) => cmd_move(engine, args),
        Command::Rename(args) => cmd_rename(engine, args),
        Command::Rm(args) => cmd_remove(engine, args),
        Command::Write(args) => cmd_write(engine, args),
    }
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    if args.document.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", args.document.display());
    }
    save_tree(&args.document, &FileTree::new())?;
    println!("{} Initialized empty tree in {}", "✓".green().bold(), args.document.display());
    Ok(())
}

fn cmd_show(engine: &TreeEngine, args: ShowArgs) -> anyhow::Result<()> {
    let tree = load_tree(engine, &args.document)?;
    if tree.is_empty() {
        println!("(empty)");
    } else {
        print!("{}", render_tree(&tree));
    }
    Ok(())
}

fn cmd_add_file(engine: TreeEngine, args: AddFileArgs) -> anyhow::Result<()> {
    let mut store = open(engine, &args.document)?;
    let parent_folder_id = resolve_optional(store.state(), args.parent.as_deref())?;
    store.try_dispatch(Intent::AddItem {
        data: RawNode::File(FileData::new(args.name, args.language, args.content)),
        parent_folder_id,
    })?;
    let path = store.state().open_file_path().unwrap_or_default();
    finish(store, &args.document, "Added", &path)
}

fn cmd_add_folder(engine: TreeEngine, args: AddFolderArgs) -> anyhow::Result<()> {
    let mut store = open(engine, &args.document)?;
    let parent_folder_id = resolve_optional(store.state(), args.parent.as_deref())?;
    let path = match &args.parent {
        Some(parent) => format!("{}/{}/", parent.trim_end_matches('/'), args.name),
        None => format!("{}/", args.name),
    };
    store.try_dispatch(Intent::AddItem {
        data: RawNode::Folder(RawFolder::new(args.name)),
        parent_folder_id,
    })?;
    finish(store, &args.document, "Added", &path)
}

fn cmd_move(engine: TreeEngine, args: MoveArgs) -> anyhow::Result<()> {
    let mut store = open(engine, &args.document)?;
    let item = resolve(store.state(), &args.path)?.clone();
    let new_folder_id = resolve_optional(store.state(), args.to.as_deref())?;
    store.try_dispatch(Intent::MoveItem {
        item: item.clone(),
        new_folder_id,
    })?;
    let path = store.state().files.path_of(item.id()).unwrap_or_default();
    finish(store, &args.document, "Moved to", &path)
}

fn cmd_rename(engine: TreeEngine, args: RenameArgs) -> anyhow::Result<()> {
    let mut store = open(engine, &args.document)?;
    let folder_id = resolve(store.state(), &args.path)?.id();
    store.try_dispatch(Intent::RenameFolder {
        folder_id,
        new_name: args.new_name,
    })?;
    let path = store.state().files.path_of(folder_id).unwrap_or_default();
    finish(store, &args.document, "Renamed to", &path)
}

fn cmd_remove(engine: TreeEngine, args: RemoveArgs) -> anyhow::Result<()> {
    let mut store = open(engine, &args.document)?;
    let item_id = resolve(store.state(), &args.path)?.id();
    store.try_dispatch(Intent::DeleteItem { item_id })?;
    finish(store, &args.document, "Deleted", &args.path)
}

fn cmd_write(engine: TreeEngine, args: WriteArgs) -> anyhow::Result<()> {
    let mut store = open(engine, &args.document)?;
    let file_id = resolve(store.state(), &args.path)?.id();
    store.try_dispatch(Intent::OpenFile {
        file_id: Some(file_id),
    })?;
    store.try_dispatch(Intent::ChangeOpenFileContent {
        value: args.content,
    })?;
    finish(store, &args.document, "Wrote", &args.path)
}

fn open(engine: TreeEngine, document: &Path) -> anyhow::Result<FilesStore> {
    let tree = load_tree(&engine, document)?;
    Ok(FilesStore::with_state(engine, EditorState::with_files(tree)))
}

fn finish(store: FilesStore, document: &Path, verb: &str, path: &str) -> anyhow::Result<()> {
    save_tree(document, &store.into_state().files)?;
    println!("{} {} {}", "✓".green().bold(), verb, path.bold());
    Ok(())
}

fn resolve<'a>(state: &'a EditorState, path: &str) -> Result<&'a Node, TreeError> {
    state
        .files
        .resolve(path)
        .ok_or_else(|| TreeError::PathNotFound(path.to_string()))
}

fn resolve_optional(state: &EditorState, path: Option<&str>) -> Result<Option<NodeId>, TreeError> {
    path.map(|path| resolve(state, path).map(Node::id)).transpose()
}
