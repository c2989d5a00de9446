//! packsmith CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use packsmith::cli::{Cli, Commands};
use packsmith::commands::{self, CommandContext};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> packsmith::Result<String> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let ctx = CommandContext::from_cli(cli.format, cli.verbose, cli.workspace.clone());

    match &cli.command {
        Commands::Init(args) => commands::run_init(args, &ctx),
        Commands::Check(args) => commands::run_check(args, &ctx),
        Commands::Lint => commands::run_lint(&ctx),
        Commands::Graph(args) => commands::run_graph(args, &ctx),
        Commands::Search(args) => commands::run_search(args, &ctx),
        Commands::Replace(args) => commands::run_replace(args, &ctx),
        Commands::Rename(args) => commands::run_rename(args, &ctx),
        Commands::Migrate(args) => commands::run_migrate(args, &ctx),
        Commands::Meta(args) => commands::run_meta(args, &ctx),
        Commands::Diff(args) => commands::run_diff(args, &ctx),
        Commands::Stats => commands::run_stats(&ctx),
        Commands::Report(args) => commands::run_report(args, &ctx),
        Commands::Release(args) => commands::run_release(args, &ctx),
        Commands::Dist(args) => commands::run_dist(args, &ctx),
        Commands::Backup(args) => commands::run_backup(args, &ctx),
        Commands::Recipe(args) => commands::run_recipe(args, &ctx),
        Commands::Loot(args) => commands::run_loot(args, &ctx),
        Commands::Tag(args) => commands::run_tag(args, &ctx),
        Commands::Snippet(args) => commands::run_snippet(args, &ctx),
        Commands::Template(args) => commands::run_template(args, &ctx),
        Commands::Cmd(args) => commands::run_cmd(args, &ctx),
        Commands::Give(args) => commands::run_give(args, &ctx),
        Commands::Gradient(args) => commands::run_gradient(args, &ctx),
        Commands::Particle(args) => commands::run_particle(args, &ctx),
        Commands::Schedule(args) => commands::run_schedule(args, &ctx),
        Commands::Sound(args) => commands::run_sound(args, &ctx),
        Commands::Props(args) => commands::run_props(args, &ctx),
        Commands::Log(args) => commands::run_log(args, &ctx),
        Commands::Nbt(args) => commands::run_nbt(args, &ctx),
        Commands::Convert(args) => commands::run_convert(args, &ctx),
        Commands::Plan(args) => commands::run_plan(args, &ctx),
        Commands::Challenge(args) => commands::run_challenge(args, &ctx),
        Commands::Profile(args) => commands::run_profile(args, &ctx),
        Commands::Checklist(args) => commands::run_checklist(args, &ctx),
        Commands::Doc(args) => commands::run_doc(args, &ctx),
        Commands::Config(args) => commands::run_config(args, &ctx),
    }
}

/// Logging goes to stderr so stdout stays parseable
fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "packsmith=debug"
    } else {
        "packsmith=warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
