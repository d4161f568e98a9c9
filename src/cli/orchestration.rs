//! Main workflow orchestration logic
//!
//! Separates the tagging run from CLI argument parsing so it can be driven
//! programmatically and against any [`Repository`] implementation.

use log::{info, warn};

use crate::analyzer::TagSelector;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::BumpStrategy;
use crate::error::Result;
use crate::git::Repository;

/// Arguments for the release workflow
///
/// Mirrors the CLI flags after they have been merged with the configuration
/// file, without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseArgs {
    pub prefix: String,
    pub suffix: String,
    pub bump_strategy: BumpStrategy,

    /// Remote used for fetching and pushing tags
    pub remote: String,

    /// Fetch tags from the remote before computing the next one
    pub fetch: bool,

    /// Push the new tag after creating it
    pub push: bool,

    /// Compute the tag but change nothing
    pub dry_run: bool,
}

impl ReleaseArgs {
    /// Workflow arguments taken straight from a configuration
    pub fn from_config(config: &Config) -> Self {
        ReleaseArgs {
            prefix: config.tagging.prefix.clone(),
            suffix: config.tagging.suffix.clone(),
            bump_strategy: config.tagging.bump_strategy,
            remote: config.remote.name.clone(),
            fetch: config.remote.fetch,
            push: config.remote.push,
            dry_run: false,
        }
    }
}

impl Default for ReleaseArgs {
    fn default() -> Self {
        ReleaseArgs::from_config(&Config::default())
    }
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Highest existing tag the new one was derived from
    pub previous: Option<String>,

    /// The new tag
    pub tag: String,

    /// Whether the tag was written to the repository
    pub created: bool,

    /// Whether the tag was pushed to remote
    pub pushed: bool,

    pub warnings: Vec<BoundaryWarning>,
}

/// Main release workflow
///
/// 1. Optionally fetch tags from the remote (failure is only a warning)
/// 2. Read existing tags and compute the next one
/// 3. Create the tag at HEAD unless this is a dry run
/// 4. Optionally push it
///
/// A tag that already exists aborts the run with
/// [`GitSemverError::TagExists`](crate::error::GitSemverError::TagExists).
pub fn run_release_workflow<R: Repository>(repo: &R, args: &ReleaseArgs) -> Result<WorkflowResult> {
    let mut warnings = Vec::new();

    if args.fetch {
        if let Err(e) = repo.fetch_tags(&args.remote) {
            warn!("Fetching tags from '{}' failed: {}", args.remote, e);
            warnings.push(BoundaryWarning::FetchFailed {
                remote: args.remote.clone(),
                reason: e.to_string(),
            });
        }
    }

    let selector = TagSelector::new(args.prefix.as_str(), args.suffix.as_str());
    let next = selector.next_tag_for_repository(repo, args.bump_strategy)?;
    warnings.extend(next.warnings);

    let tag = next.next.to_string();
    let previous = next.previous.map(|t| t.to_string());

    if args.dry_run {
        info!("Dry run: not creating tag '{}'", tag);
        return Ok(WorkflowResult {
            previous,
            tag,
            created: false,
            pushed: false,
            warnings,
        });
    }

    repo.create_tag(&tag)?;
    info!("Created tag '{}'", tag);

    let pushed = if args.push {
        repo.push_tags(&args.remote, &[tag.as_str()])?;
        info!("Pushed tag '{}' to '{}'", tag, args.remote);
        true
    } else {
        false
    };

    Ok(WorkflowResult {
        previous,
        tag,
        created: true,
        pushed,
        warnings,
    })
}
