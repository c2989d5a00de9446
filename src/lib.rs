//! packsmith: workbench for Minecraft data pack and resource pack authoring
//!
//! This library backs the `packsmith` binary and is usable on its own for
//! tests and embedding. The core is a function call-graph builder with a
//! depth-bounded reachability walk over `.mcfunction` files; around it sit
//! the authoring tools a pack workspace needs: scaffolding, structure and
//! JSON audits, lint, search/replace, namespace rename, version migration,
//! pack.mcmeta management, diff/sync, release packaging and a set of
//! content generators (recipes, loot tables, tags, schedules, sounds,
//! gradients, particles).
//!
//! # Example
//!
//! ```ignore
//! use packsmith::callgraph::{build_call_graph, reachable_from};
//! use std::path::Path;
//!
//! let build = build_call_graph(Path::new("my_workspace"));
//! let starts = vec!["example:load".to_string()];
//! let reached = reachable_from(&build.graph, &starts, 5);
//! for id in &reached {
//!     println!("{}", id);
//! }
//! ```

pub mod archive;
pub mod batch;
pub mod callgraph;
pub mod cli;
pub mod cmd;
pub mod commands;
pub mod config;
pub mod convert;
pub mod diff;
pub mod error;
pub mod item;
pub mod langcheck;
pub mod lint;
pub mod loot;
pub mod mclog;
pub mod migration;
pub mod modelcheck;
pub mod namespace;
pub mod nbt;
pub mod packmeta;
pub mod particles;
pub mod plan;
pub mod presets;
pub mod recipe;
pub mod release;
pub mod report;
pub mod scaffold;
pub mod scan;
pub mod schedule;
pub mod schema;
pub mod serverprops;
pub mod sounds;
pub mod stats;
pub mod tags;
pub mod text;
pub mod workspace;

// Re-export commonly used types
pub use callgraph::{
    build_call_graph, default_starts, list_functions, reachable_from, scan_references, CallGraph,
    CallGraphBuild, FunctionIndex, SkippedFile,
};
pub use cli::{Cli, Commands, OutputFormat};
pub use config::PacksmithConfig;
pub use error::{PackError, Result};
pub use workspace::{PackKind, Workspace};
