//! Built-in catalogs: challenge pool, function snippets, JSON templates,
//! command profiles, checklists, docs and the pack_format table.

use crate::error::{PackError, Result};
use crate::workspace::{PackKind, Workspace};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

pub const CHALLENGE_POOL: &[&str] = &[
    "Survive 10 minutes in the Nether only",
    "Kill an enderman with snowballs only",
    "Limit your inventory to 9 slots",
    "No mining, chest loot only",
    "Fight a boss without farming gear first",
    "Jump between every block you walk",
    "No-sneak challenge",
    "Count viewer missions on a scoreboard",
    "Build only inside caves",
    "Keep an animal companion at all times",
    "Play at night only",
    "Apply a random effect every 30 seconds",
    "No fall damage allowed, stay on the heights",
    "Never drop an item",
    "No food, no saturation regen",
    "Skip iron gear, go straight for diamond",
    "Ender dragon without potions",
];

/// Ready-made mcfunction bodies by name.
pub const FUNCTION_SNIPPETS: &[(&str, &str)] = &[
    (
        "tick_timer",
        "# add 1 every tick\nscoreboard players add #tick timer 1\n",
    ),
    (
        "welcome",
        "tellraw @a {\"text\":\"Welcome to the server!\",\"color\":\"gold\"}\n",
    ),
    (
        "boss_bar",
        "bossbar add my:progress \"Progress\"\nbossbar set my:progress max 100\nbossbar set my:progress players @a\n",
    ),
    ("advancement_grant", "advancement grant @a everything\n"),
    (
        "loop_sound",
        "playsound minecraft:block.note_block.pling master @a ~ ~ ~ 1 1\n",
    ),
];

pub static ADVANCEMENT_SAMPLE: Lazy<Value> = Lazy::new(|| {
    json!({
        "display": {
            "title": {"text": "First Diamond", "color": "aqua"},
            "description": {"text": "Obtain a diamond"},
            "icon": {"item": "minecraft:diamond"},
            "frame": "task",
            "show_toast": true,
            "announce_to_chat": true,
            "hidden": false
        },
        "criteria": {
            "obtain_diamond": {
                "trigger": "minecraft:inventory_changed",
                "conditions": {"items": [{"items": ["minecraft:diamond"]}]}
            }
        },
        "rewards": {"experience": 50}
    })
});

pub static PREDICATE_SAMPLE: Lazy<Value> = Lazy::new(|| {
    json!({
        "condition": "minecraft:entity_properties",
        "entity": "this",
        "predicate": {"equipment": {"mainhand": {"items": ["minecraft:diamond_sword"]}}}
    })
});

/// Recommended pack_format per game version.
pub const PACK_FORMATS: &[(&str, u64)] = &[
    ("1.21.x data pack", 48),
    ("1.21.x resource pack", 34),
    ("1.20.6 data pack", 41),
    ("1.20.6 resource pack", 34),
];

/// Session command sets by profile name.
pub const PROFILES: &[(&str, &[&str])] = &[
    (
        "recording",
        &[
            "gamerule sendCommandFeedback false",
            "gamerule showDeathMessages true",
            "gamerule spectatorsGenerateChunks false",
            "gamerule doImmediateRespawn false",
            "time set day",
            "weather clear 999999",
            "title @a times 10 60 20",
        ],
    ),
    (
        "stream",
        &[
            "gamerule keepInventory true",
            "gamerule doDaylightCycle false",
            "gamerule doWeatherCycle false",
            "gamerule reducedDebugInfo true",
            "gamerule playersSleepingPercentage 0",
            "effect give @a night_vision 999999 0 true",
            "effect give @a saturation 5 0 true",
        ],
    ),
    (
        "hardcore",
        &[
            "difficulty hard",
            "gamerule keepInventory false",
            "gamerule naturalRegeneration false",
            "gamerule doInsomnia true",
            "gamerule doImmediateRespawn false",
            "effect clear @a",
            "title @a title {\"text\":\"Hardcore begins!\",\"color\":\"red\"}",
        ],
    ),
    (
        "debug",
        &[
            "gamerule logAdminCommands true",
            "gamerule commandBlockOutput true",
            "gamerule spectatorsGenerateChunks true",
            "gamerule sendCommandFeedback true",
            "gamerule reducedDebugInfo false",
        ],
    ),
];

/// Short best-practice notes by topic.
pub const DOCS: &[(&str, &str)] = &[
    (
        "scoreboard-design",
        "Split objectives by feature and use a namespaced prefix,\ne.g. game.timer, game.kill, ui.bossbar. Avoid churning setdisplay;\nswap the sidebar only when needed to reduce flicker.",
    ),
    (
        "command-performance",
        "Keep repeated work out of the tick function. Narrow targets with\nexecute if and structure commands to run only when a score changes;\nthat protects TPS.",
    ),
    (
        "resourcepack-layout",
        "Keep assets/<namespace>/textures, models and lang separate, and set\npack.mcmeta's pack_format to match the game version. Suffix test\ntextures with _debug so they are easy to find and remove.",
    ),
    (
        "datapack-shipping",
        "Ship the datapacks/<name> folder as a zip. Check pack.mcmeta and the\nload/tick entries under data/minecraft/tags/functions, and include a\nreadme with setup steps to cut down on user questions.",
    ),
    (
        "test-steps",
        "1) /reload and check the log for errors\n2) /datapack list enabled to confirm the pack loaded\n3) Test functions one at a time with /function <ns>:<fn>\n4) On a server, check permissions too.",
    ),
    (
        "nbt-data",
        "When writing NBT by hand, watch braces and commas, and mind quote\nescaping in tellraw JSON. For complex structures, split into more\nmcfunction files or use storage.",
    ),
];

pub const RECORDING_CHECKLIST: &[&str] = &[
    "Workspace backed up",
    "keepInventory and difficulty set for the session",
    "Seed written down somewhere safe",
    "Resource pack and shaders loaded",
    "Audio input checked, game volume balanced",
    "HUD and chat scale readable on the recording",
    "Enough disk space free for the capture",
];

pub const RELEASE_CHECKLIST: &[&str] = &[
    "pack_format matches the target game version",
    "pack.mcmeta description is final",
    "/reload runs clean with no errors in the log",
    "load and tick tags point at existing functions",
    "Changelog entry written",
    "Zip opens with pack.mcmeta at the root",
    "Version number bumped in the README",
];

/// Draw `count` distinct challenges from the pool.
pub fn roll_challenges(count: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    CHALLENGE_POOL
        .choose_multiple(&mut rng, count.min(CHALLENGE_POOL.len()))
        .copied()
        .collect()
}

pub fn find_snippet(name: &str) -> Option<&'static str> {
    FUNCTION_SNIPPETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, body)| *body)
}

pub fn find_profile(name: &str) -> Option<&'static [&'static str]> {
    PROFILES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

pub fn find_doc(topic: &str) -> Option<&'static str> {
    DOCS.iter().find(|(t, _)| *t == topic).map(|(_, body)| *body)
}

/// Write a named snippet into the namespace's functions directory as
/// `<file_name>.mcfunction`.
pub fn save_snippet(
    ws: &Workspace,
    namespace: &str,
    snippet: &str,
    file_name: &str,
) -> Result<PathBuf> {
    let Some(body) = find_snippet(snippet) else {
        return Err(PackError::invalid(format!("unknown snippet: {}", snippet)));
    };
    let dir = ws.function_dir(namespace);
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.mcfunction", file_name));
    fs::write(&path, body)?;
    Ok(path)
}

/// The two JSON template families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    Advancement,
    Predicate,
}

impl TemplateKind {
    fn dir_name(&self) -> &'static str {
        match self {
            TemplateKind::Advancement => "advancements",
            TemplateKind::Predicate => "predicates",
        }
    }

    fn sample(&self) -> &'static Value {
        match self {
            TemplateKind::Advancement => &ADVANCEMENT_SAMPLE,
            TemplateKind::Predicate => &PREDICATE_SAMPLE,
        }
    }
}

/// Write an advancement or predicate template under
/// `data/<ns>/<kind>/<file_name>.json`.
pub fn save_template(
    ws: &Workspace,
    namespace: &str,
    kind: TemplateKind,
    file_name: &str,
) -> Result<PathBuf> {
    let dir = ws
        .pack_dir(PackKind::Data, namespace)
        .join("data")
        .join(namespace)
        .join(kind.dir_name());
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.json", file_name));
    fs::write(&path, serde_json::to_string_pretty(kind.sample())?)?;
    Ok(path)
}
