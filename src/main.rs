use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, warn};

use git_semver::boundary::BoundaryWarning;
use git_semver::cli::{run_release_workflow, ReleaseArgs, WorkflowResult};
use git_semver::config::{self, Config};
use git_semver::domain::BumpStrategy;
use git_semver::git::Git2Repository;
use git_semver::logging::{self, Verbosity};
use git_semver::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    version,
    about = "Create the next semantic version tag for a git repository"
)]
struct Args {
    #[arg(long, help = "Git repository directory (current directory by default)")]
    repo_dir: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Tag prefix, joined to the version with '-'")]
    prefix: Option<String>,

    #[arg(long, help = "Tag suffix, joined to the version with '-'")]
    suffix: Option<String>,

    #[arg(
        short,
        long,
        value_name = "STRATEGY",
        help = "Version component to bump: patch, minor or major"
    )]
    bump_strategy: Option<String>,

    #[arg(long, help = "Remote used for fetching and pushing tags")]
    remote: Option<String>,

    #[arg(long, help = "Fetch tags from the remote before computing the next one")]
    fetch: bool,

    #[arg(long, help = "Push the new tag to the remote")]
    push: bool,

    #[arg(long, help = "Preview the next tag without creating it")]
    dry_run: bool,

    #[arg(short, long, help = "Message to print once the tag is created")]
    message: Option<String>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log output (-v, -vv)")]
    verbose: u8,

    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        help = "Only print the new tag and errors"
    )]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.quiet, args.verbose));

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;
    let release_args = merge_args(&args, &config);
    debug!("Release arguments: {:?}", release_args);

    let repo_dir = match &args.repo_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Unable to determine the current directory")?,
    };
    let repo = Git2Repository::open(&repo_dir)?;

    let result = run_release_workflow(&repo, &release_args)
        .with_context(|| format!("Failed to tag repository at '{}'", repo_dir.display()))?;

    if args.quiet {
        println!("{}", result.tag);
        return Ok(());
    }

    report(&result, &release_args);

    if let Some(message) = &args.message {
        if result.created {
            ui::display_success(message);
        }
    }

    Ok(())
}

/// Command line flags win over the configuration file
fn merge_args(args: &Args, config: &Config) -> ReleaseArgs {
    let mut release = ReleaseArgs::from_config(config);

    if let Some(prefix) = &args.prefix {
        release.prefix = prefix.clone();
    }
    if let Some(suffix) = &args.suffix {
        release.suffix = suffix.clone();
    }
    if let Some(name) = &args.bump_strategy {
        let (strategy, recognized) = BumpStrategy::from_name_or_default(name);
        if !recognized {
            warn!("Unknown bump strategy '{}', using '{}'", name, strategy);
        }
        release.bump_strategy = strategy;
    }
    if let Some(remote) = &args.remote {
        release.remote = remote.clone();
    }

    release.fetch |= args.fetch;
    release.push |= args.push;
    release.dry_run = args.dry_run;
    release
}

fn report(result: &WorkflowResult, release_args: &ReleaseArgs) {
    for warning in &result.warnings {
        // skipped tags are routine and already logged at debug level
        if !matches!(warning, BoundaryWarning::UnparsableTag { .. }) {
            ui::display_boundary_warning(warning);
        }
    }

    ui::display_proposed_tag(result.previous.as_deref(), &result.tag);

    if !result.created {
        ui::display_status("Dry run: no tag was created");
        return;
    }

    ui::display_success(&format!("Created tag: {}", result.tag));

    if result.pushed {
        ui::display_success(&format!(
            "Pushed tag: {} to {}",
            result.tag, release_args.remote
        ));
    } else {
        ui::display_manual_push_instruction(&result.tag, &release_args.remote);
    }
}
