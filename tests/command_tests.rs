//! Handler-level tests for the audit and inventory commands

mod common;

use std::path::PathBuf;

use packsmith::cli::{
    CheckArgs, CheckOperation, DiffArgs, GraphArgs, InitArgs, InitKind, MetaArgs, MetaOperation,
    ReplaceArgs, ReportArgs, SearchArgs,
};
use packsmith::commands::{
    run_check, run_diff, run_graph, run_init, run_lint, run_meta, run_replace, run_report,
    run_search, run_stats,
};
use packsmith::workspace::PackKind;
use packsmith::PackError;

use common::{parse_json, TestWorkspace};

// ============================================
// graph
// ============================================

#[test]
fn graph_defaults_to_load_and_tick_starts() {
    let ws = TestWorkspace::new();
    ws.with_basic_datapack("mypack", "example");

    let args = GraphArgs {
        starts: None,
        depth: 5,
    };
    let output = run_graph(&args, &ws.ctx()).expect("graph should succeed");

    assert!(output.starts_with("start: example:load, example:tick\n"));
    assert!(output.contains("3 function(s) reachable within depth 5"));
    assert!(output.contains("- example:load\n"));
    assert!(output.contains("- example:loop/main\n"));
    assert!(output.contains("- example:tick\n"));
    assert!(!output.contains("skipped"));
}

#[test]
fn graph_json_carries_starts_depth_reached_skipped() {
    let ws = TestWorkspace::new();
    ws.with_basic_datapack("mypack", "example");

    let args = GraphArgs {
        starts: Some("example:tick".to_string()),
        depth: 1,
    };
    let output = run_graph(&args, &ws.json_ctx()).expect("graph should succeed");
    let value = parse_json(&output);

    assert_eq!(value["starts"], serde_json::json!(["example:tick"]));
    assert_eq!(value["depth"], 1);
    assert_eq!(
        value["reached"],
        serde_json::json!(["example:loop/main", "example:tick"])
    );
    assert!(value["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn graph_splits_and_trims_the_starts_list() {
    let ws = TestWorkspace::new();
    ws.add_function("p", "c", "a", "say a")
        .add_function("p", "c", "b", "say b");

    let args = GraphArgs {
        starts: Some(" c:a , c:b ,, ".to_string()),
        depth: 2,
    };
    let output = run_graph(&args, &ws.ctx()).expect("graph should succeed");
    assert!(output.starts_with("start: c:a, c:b\n"));
    assert!(output.contains("2 function(s) reachable"));
}

#[test]
fn graph_without_starts_fails_when_no_load_or_tick_exists() {
    let ws = TestWorkspace::new();
    ws.add_function("p", "c", "standalone", "say alone");

    let args = GraphArgs {
        starts: None,
        depth: 5,
    };
    let err = run_graph(&args, &ws.ctx()).unwrap_err();
    assert!(matches!(err, PackError::InvalidInput { .. }));
}

#[test]
fn graph_clamps_negative_depth_to_zero() {
    let ws = TestWorkspace::new();
    ws.with_basic_datapack("mypack", "example");

    let args = GraphArgs {
        starts: Some("example:tick".to_string()),
        depth: -3,
    };
    let output = run_graph(&args, &ws.ctx()).expect("negative depth clamps");
    assert!(output.contains("1 function(s) reachable within depth 0"));
    assert!(!output.contains("loop/main"));
}

// ============================================
// lint
// ============================================

#[test]
fn lint_reports_all_clear_for_clean_functions() {
    let ws = TestWorkspace::new();
    ws.with_basic_datapack("mypack", "example");

    let output = run_lint(&ws.ctx()).expect("lint should succeed");
    assert_eq!(output, "all mcfunction files pass basic format checks\n");
}

#[test]
fn lint_flags_trailing_whitespace_with_file_prefix() {
    let ws = TestWorkspace::new();
    ws.add_function("mypack", "example", "bad", "say hi \nsay ok");

    let output = run_lint(&ws.ctx()).expect("lint should succeed");
    assert!(output.contains(
        "datapacks/mypack/data/example/functions/bad.mcfunction: line 1: trailing whitespace"
    ));
}

#[test]
fn lint_on_empty_workspace_says_so() {
    let ws = TestWorkspace::new();
    let output = run_lint(&ws.ctx()).expect("lint should succeed");
    assert_eq!(output, "no mcfunction files to check\n");
}

// ============================================
// search and replace
// ============================================

#[test]
fn search_lists_files_and_line_numbers() {
    let ws = TestWorkspace::new();
    ws.add_function("p", "c", "a", "say target\nsay other\nsay target")
        .add_function("p", "c", "b", "say nothing here");

    let args = SearchArgs {
        needle: "target".to_string(),
    };
    let output = run_search(&args, &ws.ctx()).expect("search should succeed");
    assert!(output.starts_with("2 match(es) in 1 file(s)\n"));
    assert!(output.contains("datapacks/p/data/c/functions/a.mcfunction (line 1, 3)"));
}

#[test]
fn search_reports_no_matches() {
    let ws = TestWorkspace::new();
    ws.add_function("p", "c", "a", "say hello");

    let args = SearchArgs {
        needle: "absent".to_string(),
    };
    let output = run_search(&args, &ws.ctx()).expect("search should succeed");
    assert_eq!(output, "no matches for 'absent'\n");
}

#[test]
fn replace_dry_run_counts_without_writing() {
    let ws = TestWorkspace::new();
    ws.add_function("p", "c", "a", "say old text");

    let args = ReplaceArgs {
        needle: "old".to_string(),
        replacement: "new".to_string(),
        dry_run: true,
    };
    let output = run_replace(&args, &ws.ctx()).expect("replace should succeed");
    assert_eq!(output, "would change 1 file(s)\n");
    assert_eq!(
        ws.read_file("datapacks/p/data/c/functions/a.mcfunction"),
        "say old text"
    );
}

#[test]
fn replace_rewrites_files_in_place() {
    let ws = TestWorkspace::new();
    ws.add_function("p", "c", "a", "say old text")
        .add_function("p", "c", "b", "say untouched");

    let args = ReplaceArgs {
        needle: "old".to_string(),
        replacement: "new".to_string(),
        dry_run: false,
    };
    let output = run_replace(&args, &ws.ctx()).expect("replace should succeed");
    assert_eq!(output, "changed 1 file(s)\n");
    assert_eq!(
        ws.read_file("datapacks/p/data/c/functions/a.mcfunction"),
        "say new text"
    );
    assert_eq!(
        ws.read_file("datapacks/p/data/c/functions/b.mcfunction"),
        "say untouched"
    );
}

// ============================================
// check
// ============================================

#[test]
fn check_structure_flags_missing_tags() {
    let ws = TestWorkspace::new();
    ws.with_basic_datapack("mypack", "example");

    let args = CheckArgs {
        operation: CheckOperation::Structure,
    };
    let output = run_check(&args, &ws.ctx()).expect("check should succeed");
    assert!(output.contains("[datapacks] mypack: load tag missing"));
    assert!(output.contains("[datapacks] mypack: tick tag missing"));
}

#[test]
fn check_structure_gives_ok_line_for_clean_pack() {
    let ws = TestWorkspace::new();
    ws.with_basic_datapack("mypack", "example")
        .add_file(
            "datapacks/mypack/data/minecraft/tags/functions/load.json",
            r#"{"values":["example:load"]}"#,
        )
        .add_file(
            "datapacks/mypack/data/minecraft/tags/functions/tick.json",
            r#"{"values":["example:tick"]}"#,
        )
        .add_file("resourcepacks/.keep", "");

    let args = CheckArgs {
        operation: CheckOperation::Structure,
    };
    let output = run_check(&args, &ws.ctx()).expect("check should succeed");
    assert_eq!(output, "[datapacks] mypack: OK\n");
}

#[test]
fn check_json_flags_a_broken_recipe() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "datapacks/p/data/c/recipes/bad.json",
        r#"{"type": "minecraft:smelting"}"#,
    );

    let args = CheckArgs {
        operation: CheckOperation::Json,
    };
    let output = run_check(&args, &ws.ctx()).expect("check should succeed");
    assert!(output.contains("type is not crafting_shaped/shapeless"));
    assert!(output.contains("result missing"));
}

#[test]
fn check_lang_reports_missing_and_extra_keys() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "resourcepacks/rp/assets/rp/lang/en_us.json",
        r#"{"item.rp.sword": "Sword", "item.rp.bow": "Bow"}"#,
    )
    .add_file(
        "resourcepacks/rp/assets/rp/lang/de_de.json",
        r#"{"item.rp.sword": "Schwert", "item.rp.stale": "Alt"}"#,
    );

    let args = CheckArgs {
        operation: CheckOperation::Lang {
            pack: "rp".to_string(),
            target: "de_de".to_string(),
            reference: "en_us".to_string(),
        },
    };
    let output = run_check(&args, &ws.ctx()).expect("check should succeed");
    assert!(output.starts_with("lang check for 'rp': en_us vs de_de\n"));
    assert!(output.contains("missing in de_de: 1"));
    assert!(output.contains("- item.rp.bow"));
    assert!(output.contains("extra in de_de: 1"));
    assert!(output.contains("- item.rp.stale"));
}

#[test]
fn check_models_reports_unresolved_textures() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "resourcepacks/rp/assets/rp/models/item/sword.json",
        r##"{"textures": {"layer0": "item/sword", "layer1": "#layer0"}}"##,
    )
    .add_file(
        "resourcepacks/rp/assets/rp/models/item/bow.json",
        r#"{"textures": {"layer0": "item/bow"}}"#,
    )
    .add_file("resourcepacks/rp/assets/rp/textures/item/bow.png", "png");

    let args = CheckArgs {
        operation: CheckOperation::Models {
            pack: "rp".to_string(),
        },
    };
    let output = run_check(&args, &ws.ctx()).expect("check should succeed");

    assert!(output.contains(
        "assets/rp/models/item/sword.json: texture missing -> assets/rp/textures/item/sword.png"
    ));
    assert!(!output.contains("bow.json"));
}

#[test]
fn check_models_passes_when_textures_resolve() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "resourcepacks/rp/assets/rp/models/block/lamp.json",
        r#"{"textures": {"all": "rp:block/lamp"}}"#,
    )
    .add_file("resourcepacks/rp/assets/rp/textures/block/lamp.png", "png");

    let args = CheckArgs {
        operation: CheckOperation::Models {
            pack: "rp".to_string(),
        },
    };
    let output = run_check(&args, &ws.ctx()).expect("check should succeed");
    assert_eq!(output, "no missing model textures\n");
}

// ============================================
// meta
// ============================================

#[test]
fn meta_show_lists_format_and_description() {
    let ws = TestWorkspace::new();
    ws.add_pack_meta("datapacks", "alpha", 48, "alpha pack")
        .add_file("datapacks/broken/pack.mcmeta", "{not json");

    let args = MetaArgs {
        operation: MetaOperation::Show,
    };
    let output = run_meta(&args, &ws.ctx()).expect("meta show should succeed");
    assert!(output.contains("[datapacks] alpha: pack_format=48, \"alpha pack\""));
    assert!(output.contains("[datapacks] broken: invalid pack.mcmeta"));
}

#[test]
fn meta_show_on_empty_workspace() {
    let ws = TestWorkspace::new();
    let args = MetaArgs {
        operation: MetaOperation::Show,
    };
    let output = run_meta(&args, &ws.ctx()).expect("meta show should succeed");
    assert_eq!(output, "no packs found\n");
}

#[test]
fn meta_set_updates_one_pack() {
    let ws = TestWorkspace::new();
    ws.add_pack_meta("datapacks", "alpha", 15, "old");

    let args = MetaArgs {
        operation: MetaOperation::Set {
            pack: Some("alpha".to_string()),
            kind: PackKind::Data,
            all: false,
            pack_format: Some(48),
            description: Some("fresh".to_string()),
        },
    };
    let output = run_meta(&args, &ws.ctx()).expect("meta set should succeed");
    assert!(output.starts_with("updated "));

    let meta: serde_json::Value =
        serde_json::from_str(&ws.read_file("datapacks/alpha/pack.mcmeta")).unwrap();
    assert_eq!(meta["pack"]["pack_format"], 48);
    assert_eq!(meta["pack"]["description"], "fresh");
}

#[test]
fn meta_set_requires_a_field_to_change() {
    let ws = TestWorkspace::new();
    ws.add_pack_meta("datapacks", "alpha", 48, "pack");

    let args = MetaArgs {
        operation: MetaOperation::Set {
            pack: Some("alpha".to_string()),
            kind: PackKind::Data,
            all: false,
            pack_format: None,
            description: None,
        },
    };
    let err = run_meta(&args, &ws.ctx()).unwrap_err();
    assert!(matches!(err, PackError::InvalidInput { .. }));
}

#[test]
fn meta_set_all_requires_pack_format() {
    let ws = TestWorkspace::new();
    let args = MetaArgs {
        operation: MetaOperation::Set {
            pack: None,
            kind: PackKind::Data,
            all: true,
            pack_format: None,
            description: None,
        },
    };
    let err = run_meta(&args, &ws.ctx()).unwrap_err();
    assert!(matches!(err, PackError::InvalidInput { .. }));
}

#[test]
fn meta_set_all_updates_every_pack_of_the_kind() {
    let ws = TestWorkspace::new();
    ws.add_pack_meta("datapacks", "alpha", 15, "a")
        .add_pack_meta("datapacks", "beta", 15, "b");

    let args = MetaArgs {
        operation: MetaOperation::Set {
            pack: None,
            kind: PackKind::Data,
            all: true,
            pack_format: Some(48),
            description: None,
        },
    };
    let output = run_meta(&args, &ws.ctx()).expect("meta set should succeed");
    assert_eq!(output, "updated 2 pack(s)\n");

    for pack in ["alpha", "beta"] {
        let meta: serde_json::Value =
            serde_json::from_str(&ws.read_file(&format!("datapacks/{}/pack.mcmeta", pack)))
                .unwrap();
        assert_eq!(meta["pack"]["pack_format"], 48);
    }
}

#[test]
fn meta_formats_prints_the_reference_table() {
    let ws = TestWorkspace::new();
    let args = MetaArgs {
        operation: MetaOperation::Formats,
    };
    let output = run_meta(&args, &ws.ctx()).expect("meta formats should succeed");
    assert!(output.contains("1.21.x data pack: 48"));
    assert!(output.contains("1.20.6 data pack: 41"));
}

// ============================================
// stats and report
// ============================================

#[test]
fn stats_counts_packs_and_functions() {
    let ws = TestWorkspace::new();
    ws.with_basic_datapack("mypack", "example");

    let output = run_stats(&ws.ctx()).expect("stats should succeed");
    assert!(output.contains("[datapacks] 1 packs"));
    assert!(output.contains(" - mcfunction files: 3"));
}

#[test]
fn stats_json_carries_both_kinds() {
    let ws = TestWorkspace::new();
    ws.with_basic_datapack("mypack", "example");

    let output = run_stats(&ws.json_ctx()).expect("stats should succeed");
    let value = parse_json(&output);
    assert_eq!(value["kinds"]["datapacks"]["packs"], 1);
    assert_eq!(value["kinds"]["datapacks"]["mcfunctions"], 3);
    assert_eq!(value["kinds"]["resourcepacks"]["packs"], 0);
}

#[test]
fn report_renders_markdown() {
    let ws = TestWorkspace::new();
    ws.add_pack_meta("datapacks", "demo", 48, "demo pack");

    let args = ReportArgs { output: None };
    let output = run_report(&args, &ws.ctx()).expect("report should succeed");
    assert!(output.starts_with("# Workspace report"));
    assert!(output.contains("- demo: pack_format=48, desc=demo pack"));
}

#[test]
fn report_writes_to_a_file_when_asked() {
    let ws = TestWorkspace::new();
    ws.add_pack_meta("datapacks", "demo", 48, "demo pack");

    let args = ReportArgs {
        output: Some(ws.path().join("report.md")),
    };
    let output = run_report(&args, &ws.ctx()).expect("report should succeed");
    assert!(output.starts_with("report written to "));
    assert!(ws.read_file("report.md").starts_with("# Workspace report"));
}

// ============================================
// init
// ============================================

#[test]
fn init_datapack_writes_the_full_skeleton() {
    let ws = TestWorkspace::new();
    let args = InitArgs {
        kind: InitKind::Datapack {
            namespace: "boss".to_string(),
            pack_format: Some(48),
            description: Some("boss fight pack".to_string()),
            no_tags: false,
        },
    };
    let output = run_init(&args, &ws.ctx()).expect("init should succeed");
    assert!(output.starts_with("created data pack 'boss' at "));

    assert!(ws.file_exists("datapacks/boss/pack.mcmeta"));
    assert!(ws.file_exists("datapacks/boss/data/boss/functions/load.mcfunction"));
    assert!(ws.file_exists("datapacks/boss/data/boss/functions/tick.mcfunction"));
    assert!(ws.file_exists("datapacks/boss/data/minecraft/tags/functions/load.json"));
    assert!(ws.file_exists("datapacks/boss/data/minecraft/tags/functions/tick.json"));

    let meta: serde_json::Value =
        serde_json::from_str(&ws.read_file("datapacks/boss/pack.mcmeta")).unwrap();
    assert_eq!(meta["pack"]["pack_format"], 48);
    assert_eq!(meta["pack"]["description"], "boss fight pack");
}

#[test]
fn init_datapack_no_tags_skips_tag_files() {
    let ws = TestWorkspace::new();
    let args = InitArgs {
        kind: InitKind::Datapack {
            namespace: "plain".to_string(),
            pack_format: Some(48),
            description: None,
            no_tags: true,
        },
    };
    run_init(&args, &ws.ctx()).expect("init should succeed");
    assert!(ws.file_exists("datapacks/plain/data/plain/functions/load.mcfunction"));
    assert!(!ws.file_exists("datapacks/plain/data/minecraft/tags/functions/load.json"));
}

#[test]
fn init_refuses_to_overwrite_an_existing_pack() {
    let ws = TestWorkspace::new();
    ws.add_pack_meta("datapacks", "boss", 48, "already here");

    let args = InitArgs {
        kind: InitKind::Datapack {
            namespace: "boss".to_string(),
            pack_format: Some(48),
            description: None,
            no_tags: false,
        },
    };
    let err = run_init(&args, &ws.ctx()).unwrap_err();
    assert!(matches!(err, PackError::InvalidInput { .. }));
}

#[test]
fn init_resourcepack_seeds_lang_and_textures() {
    let ws = TestWorkspace::new();
    let args = InitArgs {
        kind: InitKind::Resourcepack {
            namespace: "shiny".to_string(),
            pack_format: Some(34),
            description: None,
        },
    };
    let output = run_init(&args, &ws.ctx()).expect("init should succeed");
    assert!(output.starts_with("created resource pack 'shiny' at "));

    assert!(ws.file_exists("resourcepacks/shiny/pack.mcmeta"));
    assert!(ws.file_exists("resourcepacks/shiny/assets/shiny/lang/en_us.json"));
    assert!(ws.file_exists("resourcepacks/shiny/assets/shiny/textures"));
}

// ============================================
// diff
// ============================================

#[test]
fn diff_buckets_added_removed_modified() {
    let ws = TestWorkspace::new();
    ws.add_file("src/common.txt", "same")
        .add_file("src/new.txt", "fresh")
        .add_file("src/changed.txt", "after")
        .add_file("dst/common.txt", "same")
        .add_file("dst/gone.txt", "left behind")
        .add_file("dst/changed.txt", "before");

    let args = DiffArgs {
        source: ws.path().join("src"),
        dest: ws.path().join("dst"),
        sync: false,
    };
    let output = run_diff(&args, &ws.ctx()).expect("diff should succeed");
    assert!(output.starts_with("1 added, 1 removed, 1 modified\n"));
    assert!(output.contains(" + new.txt"));
    assert!(output.contains(" - gone.txt"));
    assert!(output.contains(" * changed.txt"));
}

#[test]
fn diff_sync_copies_into_dest_without_deleting() {
    let ws = TestWorkspace::new();
    ws.add_file("src/new.txt", "fresh")
        .add_file("src/changed.txt", "after")
        .add_file("dst/changed.txt", "before")
        .add_file("dst/gone.txt", "still here");

    let args = DiffArgs {
        source: ws.path().join("src"),
        dest: ws.path().join("dst"),
        sync: true,
    };
    let output = run_diff(&args, &ws.ctx()).expect("diff should succeed");
    assert!(output.contains("synced 2 file(s)"));
    assert_eq!(ws.read_file("dst/new.txt"), "fresh");
    assert_eq!(ws.read_file("dst/changed.txt"), "after");
    assert!(ws.file_exists("dst/gone.txt"));
}

// ============================================
// workspace resolution
// ============================================

#[test]
fn explicit_workspace_must_exist() {
    let ctx = packsmith::commands::CommandContext::from_cli(
        packsmith::cli::OutputFormat::Text,
        false,
        Some(PathBuf::from("/definitely/not/a/real/dir")),
    );
    let err = run_lint(&ctx).unwrap_err();
    assert!(matches!(err, PackError::NotFound { .. }));
}
