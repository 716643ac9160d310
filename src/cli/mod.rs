//! Command-line surface: each subcommand drives one lifecycle operation and
//! prints the resulting state as JSON on stdout.

mod run;

pub use run::run;

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Manage tag associations on remote workspaces
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Provider config file (default: ~/.workspace-tags/config.toml)
    #[arg(long, global = true, env = "WORKSPACE_TAGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// API hostname, overriding config and TFE_HOSTNAME
    #[arg(long, global = true)]
    pub hostname: Option<String>,

    /// API token, overriding the config file
    #[arg(long, global = true, env = "TFE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable JSON log format
    #[arg(long, global = true, env = "WORKSPACE_TAGS_LOG_JSON")]
    pub log_json: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Also write logs to a rolling file in this directory
    #[arg(long, global = true, env = "WORKSPACE_TAGS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, global = true, default_value = "daily")]
    pub log_rotation: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage a single tag on a workspace
    #[command(subcommand)]
    Tag(TagCommand),

    /// Manage a set of tags on a workspace
    #[command(subcommand)]
    Tags(TagsCommand),

    /// Look up a tag id on a workspace, ignoring case
    Lookup(TagTarget),
}

#[derive(Subcommand, Debug)]
pub enum TagCommand {
    /// Attach a tag and print its state
    Create(TagTarget),
    /// Print the state of an attached tag
    Read(TagTarget),
    /// Detach a tag
    Delete(TagTarget),
    /// Import a tag from <ORGANIZATION>/<WORKSPACE NAME>/<TAG NAME>
    Import { id: String },
}

#[derive(ClapArgs, Debug)]
pub struct TagTarget {
    /// Workspace id (ws-...)
    #[arg(long)]
    pub workspace_id: String,

    /// Tag name
    #[arg(long = "tag")]
    pub tag_name: String,
}

#[derive(Subcommand, Debug)]
pub enum TagsCommand {
    /// Attach a set of tags and print the resulting state
    Create(TagSetTarget),
    /// Print which of the given tags are attached
    Read(TagSetTarget),
    /// Converge from a prior state file to the given tag set
    Update {
        /// Prior state, as printed by create/read/import
        #[arg(long)]
        state: PathBuf,

        /// Desired tag names (repeatable)
        #[arg(long = "tag")]
        tag_names: Vec<String>,
    },
    /// Detach every tag in a prior state file
    Delete {
        #[arg(long)]
        state: PathBuf,
    },
    /// Import tags from <ORGANIZATION>/<WORKSPACE NAME>/<TAG NAME>|...
    Import { id: String },
}

#[derive(ClapArgs, Debug)]
pub struct TagSetTarget {
    /// Workspace id (ws-...)
    #[arg(long)]
    pub workspace_id: String,

    /// Tag names (repeatable)
    #[arg(long = "tag")]
    pub tag_names: Vec<String>,
}
