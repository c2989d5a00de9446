//! CLI argument definitions using clap with subcommand architecture
//!
//! This module defines the command-line interface for packsmith using
//! a subcommand-based structure for better organization and discoverability.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::presets::TemplateKind;
use crate::workspace::PackKind;

/// Workbench CLI for Minecraft pack authoring
#[derive(Parser, Debug)]
#[command(name = "packsmith")]
#[command(about = "Workbench CLI for Minecraft data pack and resource pack authoring")]
#[command(version)]
#[command(author)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root holding datapacks/ and resourcepacks/
    #[arg(
        short,
        long,
        global = true,
        env = "PACKSMITH_WORKSPACE",
        value_name = "PATH"
    )]
    pub workspace: Option<PathBuf>,
}

// ============================================
// Main Commands Enum
// ============================================

/// Available subcommands for packsmith
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new data pack or resource pack
    #[command(visible_alias = "i")]
    Init(InitArgs),

    /// Audit packs (structure, JSON shapes, lang keys, model textures)
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Check mcfunction files for formatting slips
    #[command(visible_alias = "l")]
    Lint,

    /// Build the function call graph and list reachable functions
    #[command(visible_alias = "g")]
    Graph(GraphArgs),

    /// Find a literal string across all function files
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Replace a literal string across all function files
    Replace(ReplaceArgs),

    /// Rename a datapack namespace (folder moves plus reference rewrite)
    Rename(RenameArgs),

    /// Apply version migration renames across a pack kind
    Migrate(MigrateArgs),

    /// Read or update pack.mcmeta files
    Meta(MetaArgs),

    /// Compare two directory trees, optionally syncing source into dest
    Diff(DiffArgs),

    /// Workspace inventory: pack counts, file counts, disk footprint
    Stats,

    /// Markdown workspace report
    Report(ReportArgs),

    /// Generate release docs (README, changelog)
    Release(ReleaseArgs),

    /// Zip a pack for distribution
    Dist(DistArgs),

    /// Zip a world directory into a timestamped backup
    Backup(BackupArgs),

    /// Build crafting recipe JSON
    Recipe(RecipeArgs),

    /// Build a single-pool loot table
    Loot(LootArgs),

    /// Build a tag file
    Tag(TagArgs),

    /// Write a built-in function snippet
    Snippet(SnippetArgs),

    /// Write an advancement or predicate template
    Template(TemplateArgs),

    /// Build one-off command strings
    Cmd(CmdArgs),

    /// Build a give command with display name, lore and enchantments
    Give(GiveArgs),

    /// Build gradient text as a tellraw or title command
    Gradient(GradientArgs),

    /// Generate particle path commands
    Particle(ParticleArgs),

    /// Build a schedule function from ticks:path entries
    Schedule(ScheduleArgs),

    /// Merge a sound event into a resource pack's sounds.json
    Sound(SoundArgs),

    /// Inspect or update server.properties
    Props(PropsArgs),

    /// Scan a server or client log for errors and warnings
    Log(LogArgs),

    /// Inspect a structure NBT file
    Nbt(NbtArgs),

    /// Convert coordinates and time units
    Convert(ConvertArgs),

    /// Save and browse content plan notes
    Plan(PlanArgs),

    /// Roll random build challenges
    Challenge(ChallengeArgs),

    /// Show a named command profile
    Profile(ProfileArgs),

    /// Show a prep checklist
    Checklist(ChecklistArgs),

    /// Show a short reference doc
    Doc(DocArgs),

    /// Manage packsmith configuration
    Config(ConfigArgs),
}

// ============================================
// Init Subcommand
// ============================================

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Pack kind to scaffold
    #[command(subcommand)]
    pub kind: InitKind,
}

/// Pack kinds that can be scaffolded
#[derive(Subcommand, Debug)]
pub enum InitKind {
    /// Create a datapack skeleton with seed load/tick functions
    Datapack {
        /// Namespace; doubles as the pack folder name
        namespace: String,

        /// pack_format to write (default from config)
        #[arg(long, value_name = "N")]
        pack_format: Option<u64>,

        /// Description for pack.mcmeta
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,

        /// Skip the minecraft load/tick registration tags
        #[arg(long)]
        no_tags: bool,
    },

    /// Create a resource pack skeleton with lang and textures dirs
    Resourcepack {
        /// Namespace; doubles as the pack folder name
        namespace: String,

        /// pack_format to write (default from config)
        #[arg(long, value_name = "N")]
        pack_format: Option<u64>,

        /// Description for pack.mcmeta
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,
    },
}

// ============================================
// Check Subcommand
// ============================================

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Audit to run
    #[command(subcommand)]
    pub operation: CheckOperation,
}

/// Available audits
#[derive(Subcommand, Debug)]
pub enum CheckOperation {
    /// Audit pack layout: pack.mcmeta, namespaces, load/tick tags
    Structure,

    /// Parse and shape-check recognizable JSON files
    Json,

    /// Compare lang key sets between a reference and a target language
    Lang {
        /// Resource pack to check
        pack: String,

        /// Target language code (e.g. de_de)
        target: String,

        /// Reference language code
        #[arg(long, default_value = "en_us")]
        reference: String,
    },

    /// Verify model texture references resolve to existing files
    Models {
        /// Resource pack to check
        pack: String,
    },
}

// ============================================
// Graph Subcommand
// ============================================

/// Arguments for the graph command
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Comma-separated start function ids (default: every *load/*tick id)
    #[arg(long, value_name = "IDS")]
    pub starts: Option<String>,

    /// Maximum traversal depth from the starts
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    pub depth: i64,
}

// ============================================
// Search / Replace Subcommands
// ============================================

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Literal text to look for
    #[arg(value_name = "TEXT")]
    pub needle: String,
}

/// Arguments for the replace command
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Literal text to replace
    #[arg(value_name = "TEXT")]
    pub needle: String,

    /// Replacement text
    #[arg(value_name = "TEXT")]
    pub replacement: String,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

// ============================================
// Rename / Migrate Subcommands
// ============================================

/// Arguments for the rename command
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Current namespace
    pub old: String,

    /// New namespace
    pub new: String,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Pack kind to migrate
    #[arg(long, value_enum, default_value = "data")]
    pub kind: PackKind,

    /// Write the replacements (default is a dry-run report)
    #[arg(long)]
    pub apply: bool,

    /// Copy the pack kind directory to a timestamped sibling first
    #[arg(long)]
    pub backup: bool,

    /// Print the manual migration guide instead of scanning
    #[arg(long)]
    pub guide: bool,
}

// ============================================
// Meta Subcommand
// ============================================

/// Arguments for the meta command
#[derive(Args, Debug)]
pub struct MetaArgs {
    /// Meta operation to perform
    #[command(subcommand)]
    pub operation: MetaOperation,
}

/// pack.mcmeta operations
#[derive(Subcommand, Debug)]
pub enum MetaOperation {
    /// List every pack's pack_format and description
    Show,

    /// Update pack_format/description for one pack or all packs of a kind
    Set {
        /// Pack to update (required unless --all)
        #[arg(value_name = "PACK")]
        pack: Option<String>,

        /// Pack kind
        #[arg(long, value_enum, default_value = "data")]
        kind: PackKind,

        /// Update every pack of the kind
        #[arg(long)]
        all: bool,

        /// New pack_format
        #[arg(long, value_name = "N")]
        pack_format: Option<u64>,

        /// New description
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,
    },

    /// Show the game version to pack_format reference table
    Formats,
}

// ============================================
// Diff Subcommand
// ============================================

/// Arguments for the diff command
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Source tree
    pub source: PathBuf,

    /// Destination tree
    pub dest: PathBuf,

    /// Copy added and modified files from source into dest
    #[arg(long)]
    pub sync: bool,
}

// ============================================
// Report Subcommand
// ============================================

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

// ============================================
// Release / Dist / Backup Subcommands
// ============================================

/// Arguments for the release command
#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Document to generate
    #[command(subcommand)]
    pub operation: ReleaseOperation,
}

/// Release documents
#[derive(Subcommand, Debug)]
pub enum ReleaseOperation {
    /// README skeleton filled from the pack's metadata
    Readme {
        /// Pack name
        pack: String,

        /// Pack kind
        #[arg(long, value_enum, default_value = "data")]
        kind: PackKind,

        /// Version string for the document
        #[arg(long, default_value = "1.0.0")]
        version: String,

        /// Write README.md into the pack directory
        #[arg(long)]
        save: bool,
    },

    /// Dated changelog entry skeleton
    Changelog {
        /// Pack name
        pack: String,

        /// Pack kind
        #[arg(long, value_enum, default_value = "data")]
        kind: PackKind,

        /// Version string for the entry
        #[arg(long, default_value = "1.0.0")]
        version: String,

        /// Write CHANGELOG.md into the pack directory
        #[arg(long)]
        save: bool,
    },
}

/// Arguments for the dist command
#[derive(Args, Debug)]
pub struct DistArgs {
    /// Pack to package
    pub pack: String,

    /// Pack kind
    #[arg(long, value_enum, default_value = "data")]
    pub kind: PackKind,
}

/// Arguments for the backup command
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// World directory to archive
    pub world: PathBuf,
}

// ============================================
// Generator Subcommands
// ============================================

/// Arguments for the recipe command
#[derive(Args, Debug)]
pub struct RecipeArgs {
    /// Recipe shape
    #[command(subcommand)]
    pub operation: RecipeOperation,
}

/// Recipe shapes
#[derive(Subcommand, Debug)]
pub enum RecipeOperation {
    /// Shaped recipe from a 3x3 grid
    Shaped {
        /// Grid row as comma-separated cells, top to bottom (repeat up to 3 times)
        #[arg(long = "row", value_name = "A,B,C")]
        rows: Vec<String>,

        /// Result item id
        #[arg(long, value_name = "ITEM")]
        result: String,

        /// Result count
        #[arg(long, default_value = "1")]
        count: u32,

        /// Save as data/<ns>/recipes/<NAME>.json
        #[arg(long, value_name = "NAME")]
        save: Option<String>,

        /// Namespace for --save (default from config)
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,
    },

    /// Shapeless recipe from an ingredient list
    Shapeless {
        /// Comma-separated ingredient ids
        #[arg(long, value_name = "ITEMS")]
        ingredients: String,

        /// Result item id
        #[arg(long, value_name = "ITEM")]
        result: String,

        /// Result count
        #[arg(long, default_value = "1")]
        count: u32,

        /// Save as data/<ns>/recipes/<NAME>.json
        #[arg(long, value_name = "NAME")]
        save: Option<String>,

        /// Namespace for --save (default from config)
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,
    },
}

/// Arguments for the loot command
#[derive(Args, Debug)]
pub struct LootArgs {
    /// Item id to drop
    #[arg(long, value_name = "ITEM")]
    pub item: String,

    /// Entry weight (emitted only above 1)
    #[arg(long, default_value = "1")]
    pub weight: u32,

    /// Minimum drop count
    #[arg(long, default_value = "1")]
    pub count_min: u32,

    /// Maximum drop count
    #[arg(long, default_value = "1")]
    pub count_max: u32,

    /// Save as data/<ns>/loot_tables/<NAME>.json
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Namespace for --save (default from config)
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,
}

/// Arguments for the tag command
#[derive(Args, Debug)]
pub struct TagArgs {
    /// Tag category (blocks, items, entity_types, functions, ...)
    pub category: String,

    /// Tag file name without extension
    pub name: String,

    /// Comma-separated tag values
    #[arg(long, value_name = "IDS")]
    pub values: String,

    /// Emit "replace": true
    #[arg(long)]
    pub replace: bool,

    /// Save under data/<ns>/tags/<category>/
    #[arg(long)]
    pub save: bool,

    /// Namespace for --save (default from config)
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,
}

/// Arguments for the snippet command
#[derive(Args, Debug)]
pub struct SnippetArgs {
    /// Snippet name; omit to list the catalog
    pub name: Option<String>,

    /// Write into the namespace functions dir as <FILE>.mcfunction
    #[arg(long, value_name = "FILE")]
    pub save: Option<String>,

    /// Namespace for --save (default from config)
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,
}

/// Arguments for the template command
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template family
    #[arg(value_enum)]
    pub kind: TemplateKind,

    /// Write under data/<ns>/ as <FILE>.json
    #[arg(long, value_name = "FILE")]
    pub save: Option<String>,

    /// Namespace for --save (default from config)
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,
}

// ============================================
// Command Builder Subcommands
// ============================================

/// Arguments for the cmd command
#[derive(Args, Debug)]
pub struct CmdArgs {
    /// Command to build
    #[command(subcommand)]
    pub builder: CmdBuilder,
}

/// One-off command builders
#[derive(Subcommand, Debug)]
pub enum CmdBuilder {
    /// summon with optional NBT
    Summon {
        /// Entity id
        entity: String,

        #[arg(default_value = "~")]
        x: String,

        #[arg(default_value = "~")]
        y: String,

        #[arg(default_value = "~")]
        z: String,

        /// Raw NBT appended to the command
        #[arg(long, value_name = "SNBT")]
        nbt: Option<String>,
    },

    /// give with raw NBT passthrough
    Give {
        /// Target selector
        target: String,

        /// Item id
        item: String,

        #[arg(long, default_value = "1")]
        count: i64,

        /// Raw NBT appended to the item
        #[arg(long, value_name = "SNBT")]
        nbt: Option<String>,
    },

    /// tellraw with a single text component
    Tellraw {
        target: String,
        text: String,

        #[arg(long)]
        color: Option<String>,
    },

    /// title shown in the middle of the screen
    Title {
        target: String,
        text: String,

        #[arg(long)]
        color: Option<String>,
    },

    /// title shown above the hotbar
    Actionbar { target: String, text: String },

    /// effect give with duration and amplifier
    Effect {
        target: String,

        /// Effect id
        effect: String,

        #[arg(long, default_value = "30")]
        seconds: i64,

        #[arg(long, default_value = "0")]
        amplifier: i64,

        /// Hide the particle swirl
        #[arg(long)]
        hide_particles: bool,
    },

    /// scoreboard objectives add
    ScoreboardAdd {
        objective: String,

        #[arg(default_value = "dummy")]
        criteria: String,
    },

    /// scoreboard objectives setdisplay
    ScoreboardDisplay {
        objective: String,

        #[arg(default_value = "sidebar")]
        slot: String,
    },

    /// scoreboard players set plus the matching add line
    ScoreboardSet {
        player: String,
        objective: String,
        value: i64,
    },

    /// tag add (or remove with --remove)
    Tag {
        target: String,
        name: String,

        #[arg(long)]
        remove: bool,
    },

    /// gamerule
    Gamerule { rule: String, value: String },
}

/// Arguments for the give command (item builder)
#[derive(Args, Debug)]
pub struct GiveArgs {
    /// Target selector
    pub target: String,

    /// Item id
    pub item: String,

    #[arg(long, default_value = "1")]
    pub count: i64,

    /// Display name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Display name color
    #[arg(long, default_value = "white")]
    pub color: String,

    /// Italic display name
    #[arg(long)]
    pub italic: bool,

    /// Lore line (repeatable)
    #[arg(long = "lore", value_name = "LINE")]
    pub lore: Vec<String>,

    /// Enchantments as name:level pairs, comma separated
    #[arg(long, value_name = "LIST")]
    pub enchants: Option<String>,
}

/// Arguments for the gradient command
#[derive(Args, Debug)]
pub struct GradientArgs {
    /// Target selector
    pub target: String,

    /// Text to colorize per character
    pub text: String,

    /// Start color (#RGB or #RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub from: String,

    /// End color (#RGB or #RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub to: String,

    /// Bold characters
    #[arg(long)]
    pub bold: bool,

    /// Italic characters
    #[arg(long)]
    pub italic: bool,

    /// Emit a title command instead of tellraw
    #[arg(long)]
    pub title: bool,
}

/// Arguments for the particle command
#[derive(Args, Debug)]
pub struct ParticleArgs {
    /// Path shape
    #[command(subcommand)]
    pub shape: ParticleShape,
}

/// Particle path shapes
#[derive(Subcommand, Debug)]
pub enum ParticleShape {
    /// Evenly spaced points on a straight line
    Line {
        /// Particle id
        particle: String,

        /// Start coordinate
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        from: Vec<String>,

        /// End coordinate
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        to: Vec<String>,

        /// Number of points, endpoints included
        #[arg(long, default_value = "20")]
        steps: u32,

        /// Particle count per point
        #[arg(long, default_value = "5")]
        count: u32,

        /// Particle speed
        #[arg(long, default_value = "0")]
        speed: f64,

        /// Save as a function file named <NAME>.mcfunction
        #[arg(long, value_name = "NAME")]
        save: Option<String>,

        /// Namespace for --save (default from config)
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,
    },

    /// Points on a horizontal circle
    Circle {
        /// Particle id
        particle: String,

        /// Circle center
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        center: Vec<String>,

        /// Circle radius in blocks
        #[arg(long)]
        radius: f64,

        /// Number of points on the circle
        #[arg(long, default_value = "24")]
        points: u32,

        /// Particle count per point
        #[arg(long, default_value = "5")]
        count: u32,

        /// Particle speed
        #[arg(long, default_value = "0")]
        speed: f64,

        /// Save as a function file named <NAME>.mcfunction
        #[arg(long, value_name = "NAME")]
        save: Option<String>,

        /// Namespace for --save (default from config)
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,
    },
}

/// Arguments for the schedule command
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Entries as ticks:path pairs, comma separated (e.g. "20:fast, 200:cleanup")
    pub entries: String,

    /// Namespace the scheduled functions live in (default from config)
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,

    /// Save as a function file named <NAME>.mcfunction
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,
}

/// Arguments for the sound command
#[derive(Args, Debug)]
pub struct SoundArgs {
    /// Sound event key (e.g. custom.boss_intro)
    pub event: String,

    /// Comma-separated sound paths
    #[arg(long, value_name = "PATHS")]
    pub sounds: String,

    /// Subtitle translation key
    #[arg(long, value_name = "KEY")]
    pub subtitle: Option<String>,

    /// Emit "replace": true on the event
    #[arg(long)]
    pub replace: bool,

    /// Resource pack namespace (default from config)
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,
}

// ============================================
// Server-side Subcommands
// ============================================

/// Arguments for the props command
#[derive(Args, Debug)]
pub struct PropsArgs {
    /// Path to server.properties
    pub file: PathBuf,

    /// key=value override (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

/// Arguments for the log command
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Path to latest.log (or any server/client log)
    pub file: PathBuf,

    /// Only scan the last N lines
    #[arg(long, default_value = "400")]
    pub tail: usize,
}

/// Arguments for the nbt command
#[derive(Args, Debug)]
pub struct NbtArgs {
    /// Path to a structure .nbt file
    pub file: PathBuf,

    /// Print the decoded tag tree as JSON
    #[arg(long)]
    pub dump: bool,
}

// ============================================
// Convert Subcommand
// ============================================

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Conversion to perform
    #[command(subcommand)]
    pub operation: ConvertOperation,
}

/// Unit conversions
#[derive(Subcommand, Debug)]
pub enum ConvertOperation {
    /// Overworld x/z to Nether coordinates
    Nether {
        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// Nether x/z to Overworld coordinates
    Overworld {
        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// Straight-line distance between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        z1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
        #[arg(allow_negative_numbers = true)]
        z2: f64,
    },

    /// Seconds to game ticks (20 t/s)
    Ticks { seconds: f64 },

    /// Game ticks to seconds
    Seconds { ticks: f64 },
}

// ============================================
// Plan / Preset Subcommands
// ============================================

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Plan operation to perform
    #[command(subcommand)]
    pub operation: PlanOperation,
}

/// Content plan operations
#[derive(Subcommand, Debug)]
pub enum PlanOperation {
    /// Save a new plan note
    Save {
        /// Plan title
        title: String,

        /// Plan body
        content: String,
    },

    /// List saved plans
    List,

    /// Show one saved plan
    Show {
        /// Plan file name (with or without .json)
        name: String,
    },
}

/// Arguments for the challenge command
#[derive(Args, Debug)]
pub struct ChallengeArgs {
    /// How many challenges to roll
    #[arg(default_value = "3")]
    pub count: usize,
}

/// Arguments for the profile command
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Profile name; omit to list the catalog
    pub name: Option<String>,
}

/// Arguments for the checklist command
#[derive(Args, Debug)]
pub struct ChecklistArgs {
    /// Checklist to show; omit to list both
    #[arg(value_enum)]
    pub name: Option<ChecklistKind>,
}

/// Available checklists
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ChecklistKind {
    Recording,
    Release,
}

/// Arguments for the doc command
#[derive(Args, Debug)]
pub struct DocArgs {
    /// Doc topic; omit to list the catalog
    pub topic: Option<String>,
}

// ============================================
// Config Subcommand
// ============================================

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config operation: show, set, reset
    #[command(subcommand)]
    pub operation: ConfigOperation,
}

/// Config subcommand operations
#[derive(Subcommand, Debug)]
pub enum ConfigOperation {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. workspace.root, defaults.namespace)
        key: String,
        /// Value to set
        value: String,
    },

    /// Reset configuration to defaults
    Reset,
}

// ============================================
// Shared Types
// ============================================

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default for terminal)
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON - standard JSON output for machine parsing
    Json,
}

// ============================================
// Helper Implementations
// ============================================

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
