use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use semver_bump::cli::{run_bump_workflow, BumpOutcome};
use semver_bump::config::{self, Config};
use semver_bump::git::Git2Repository;
use semver_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "semver-bump",
    about = "Compute the next semantic version from conventional commits",
    version
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Path of the git repository [env: GIT_PATH]")]
    path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "BUMP",
        help = "Bump applied when no commit carries a release signal: major, minor, patch or none [env: NO_RELEASE_BUMP]"
    )]
    no_release_bump: Option<String>,

    #[arg(long, help = "Print how the version was computed to stderr")]
    explain: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(err) = run(args) {
        ui::display_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_env();

    if let Some(path) = args.path {
        config.git_path = path;
    }
    if let Some(bump) = args.no_release_bump {
        config.no_release_bump = bump;
    }
    debug!("{:?}", config);

    let outcome = compute(&config)?;

    if args.explain {
        ui::display_explanation(&outcome);
    }
    println!("{}", outcome.next_version);

    Ok(())
}

fn compute(config: &Config) -> Result<BumpOutcome> {
    let repo = Git2Repository::open(&config.git_path)?;
    let outcome =
        run_bump_workflow(&repo, &config.bumper()).context("Bump semantic version failed")?;
    Ok(outcome)
}
