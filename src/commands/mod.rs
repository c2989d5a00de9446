//! Command modules for the packsmith CLI
//!
//! This module contains all subcommand implementations organized by functionality.
//!
//! ## Architecture
//!
//! Each command module implements one or more related top-level commands:
//! - `init` - Scaffold new packs
//! - `check` - Structure, JSON, lang and model audits
//! - `lint` - mcfunction format checks
//! - `graph` - Call graph build and reachability
//! - `search` - Literal search and replace across function files
//! - `rename` - Namespace rename
//! - `migrate` - Version migration renames
//! - `meta` - pack.mcmeta read/update plus the format table
//! - `diff` - Directory compare and sync
//! - `stats` - Workspace inventory and the Markdown report
//! - `release` - Release docs, distribution zips, world backups
//! - `generate` - Recipe, loot, tag, snippet, template, schedule, sound builders
//! - `chat` - Command-string builders: cmd, give, gradient, particle
//! - `server` - server.properties, log scan, structure NBT
//! - `convert` - Coordinate and time conversions
//! - `notes` - Plans, challenges, profiles, checklists, docs
//! - `config` - Configuration management
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext` for output format and verbosity.

pub mod chat;
pub mod check;
pub mod config;
pub mod convert;
pub mod diff;
pub mod generate;
pub mod graph;
pub mod init;
pub mod lint;
pub mod meta;
pub mod migrate;
pub mod notes;
pub mod release;
pub mod rename;
pub mod search;
pub mod server;
pub mod stats;

// Re-export command handlers for easy access
pub use chat::{run_cmd, run_give, run_gradient, run_particle};
pub use check::run_check;
pub use config::run_config;
pub use convert::run_convert;
pub use diff::run_diff;
pub use generate::{
    run_loot, run_recipe, run_schedule, run_snippet, run_sound, run_tag, run_template,
};
pub use graph::run_graph;
pub use init::run_init;
pub use lint::run_lint;
pub use meta::run_meta;
pub use migrate::run_migrate;
pub use notes::{run_challenge, run_checklist, run_doc, run_plan, run_profile};
pub use release::{run_backup, run_dist, run_release};
pub use rename::run_rename;
pub use search::{run_replace, run_search};
pub use server::{run_log, run_nbt, run_props};
pub use stats::{run_report, run_stats};

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::PacksmithConfig;
use crate::error::Result;
use crate::workspace::Workspace;

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    /// Workspace root override from --workspace / PACKSMITH_WORKSPACE
    pub workspace: Option<PathBuf>,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            workspace: None,
        }
    }
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(format: OutputFormat, verbose: bool, workspace: Option<PathBuf>) -> Self {
        Self {
            format,
            verbose,
            workspace,
        }
    }

    /// Resolve the workspace: flag/env override, then config, then cwd
    pub fn workspace(&self) -> Result<Workspace> {
        Workspace::resolve(self.workspace.as_deref())
    }
}

/// Render handler output in the requested format
///
/// Handlers build both a JSON value and the text rendering; this picks
/// one based on the context so the match is not repeated in every command.
pub(crate) fn render(
    ctx: &CommandContext,
    json_value: serde_json::Value,
    text: String,
) -> Result<String> {
    match ctx.format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&json_value)?)),
        OutputFormat::Text => Ok(text),
    }
}

/// Namespace for generator --save paths: explicit flag, else the configured default
pub(crate) fn resolve_namespace(flag: Option<&str>) -> Result<String> {
    match flag {
        Some(ns) if !ns.trim().is_empty() => Ok(ns.trim().to_string()),
        _ => Ok(PacksmithConfig::load()?.defaults.namespace),
    }
}
