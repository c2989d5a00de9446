//! Common test utilities for packsmith integration tests
//!
//! Provides the `TestWorkspace` builder: a throwaway pack workspace on
//! disk plus command contexts pointed at it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use packsmith::cli::OutputFormat;
use packsmith::commands::CommandContext;

/// Builder for a temporary workspace with datapacks/ and resourcepacks/
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Workspace root on disk
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Root as an owned PathBuf
    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Command context with text output pointed at this workspace
    pub fn ctx(&self) -> CommandContext {
        CommandContext::from_cli(OutputFormat::Text, false, Some(self.root()))
    }

    /// Command context with JSON output pointed at this workspace
    pub fn json_ctx(&self) -> CommandContext {
        CommandContext::from_cli(OutputFormat::Json, false, Some(self.root()))
    }

    /// Write an arbitrary file under the workspace root
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("failed to write file");
        self
    }

    /// Write `datapacks/<pack>/data/<ns>/functions/<rel>.mcfunction`
    pub fn add_function(&self, pack: &str, ns: &str, rel: &str, content: &str) -> &Self {
        self.add_file(
            &format!("datapacks/{}/data/{}/functions/{}.mcfunction", pack, ns, rel),
            content,
        )
    }

    /// Write a minimal pack.mcmeta for a pack
    pub fn add_pack_meta(
        &self,
        kind_dir: &str,
        pack: &str,
        pack_format: u64,
        description: &str,
    ) -> &Self {
        let meta = format!(
            "{{\"pack\": {{\"pack_format\": {}, \"description\": \"{}\"}}}}",
            pack_format, description
        );
        self.add_file(&format!("{}/{}/pack.mcmeta", kind_dir, pack), &meta)
    }

    /// One datapack with load/tick seeds and a helper behind tick
    pub fn with_basic_datapack(&self, pack: &str, ns: &str) -> &Self {
        self.add_pack_meta("datapacks", pack, 48, "test pack")
            .add_function(pack, ns, "load", "say loaded")
            .add_function(pack, ns, "tick", &format!("function {}:loop/main", ns))
            .add_function(pack, ns, "loop/main", "say running")
    }

    /// Read a file under the workspace root
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("failed to read file")
    }

    /// True when the relative path exists
    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.dir.path().join(relative_path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse handler JSON output, panicking with the payload on failure
pub fn parse_json(output: &str) -> serde_json::Value {
    serde_json::from_str(output)
        .unwrap_or_else(|e| panic!("invalid JSON output: {}\n{}", e, output))
}
