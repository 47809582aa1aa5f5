use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tft",
    about = "Template file tree — edit a stored tree of template files and folders",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with engine settings (reserved file names)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty tree document
    Init(InitArgs),
    /// Print the tree
    Show(ShowArgs),
    /// Add an empty file
    AddFile(AddFileArgs),
    /// Add an empty folder
    AddFolder(AddFolderArgs),
    /// Move a file or folder
    Mv(MoveArgs),
    /// Rename a file or folder
    Rename(RenameArgs),
    /// Delete a file or folder
    Rm(RemoveArgs),
    /// Replace the content of a file
    Write(WriteArgs),
}

#[derive(Args)]
pub struct InitArgs {
    pub document: PathBuf,
    /// Overwrite an existing document
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    pub document: PathBuf,
}

#[derive(Args)]
pub struct AddFileArgs {
    pub document: PathBuf,
    pub name: String,
    /// Folder path to add into (root when omitted)
    #[arg(short, long)]
    pub parent: Option<String>,
    #[arg(short, long, default_value = "plaintext")]
    pub language: String,
    #[arg(short, long, default_value = "")]
    pub content: String,
}

#[derive(Args)]
pub struct AddFolderArgs {
    pub document: PathBuf,
    pub name: String,
    #[arg(short, long)]
    pub parent: Option<String>,
}

#[derive(Args)]
pub struct MoveArgs {
    pub document: PathBuf,
    pub path: String,
    /// Destination folder path (root when omitted)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args)]
pub struct RenameArgs {
    pub document: PathBuf,
    pub path: String,
    pub new_name: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    pub document: PathBuf,
    pub path: String,
}

#[derive(Args)]
pub struct WriteArgs {
    pub document: PathBuf,
    pub path: String,
    pub content: String,
}
