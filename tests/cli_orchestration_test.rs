mod common;

use common::{commit_file, setup_test_repo, tag_names};
use git2::Repository;
use git_semver::cli::{run_release_workflow, ReleaseArgs};
use git_semver::domain::BumpStrategy;
use git_semver::git::{Git2Repository, Repository as _};
use git_semver::GitSemverError;
use tempfile::TempDir;

#[test]
fn test_workflow_tags_head_of_real_repository() {
    let (dir, repo) = setup_test_repo(&["release-1.4.2-stable", "release-1.9.0-stable", "garbage"]);
    let head = commit_file(&repo, dir.path(), "second\n", "feat: second commit");

    let git_repo = Git2Repository::open(dir.path()).unwrap();
    let args = ReleaseArgs {
        prefix: "release".to_string(),
        suffix: "stable".to_string(),
        bump_strategy: BumpStrategy::Minor,
        ..ReleaseArgs::default()
    };

    let result = run_release_workflow(&git_repo, &args).unwrap();

    assert_eq!(result.previous.as_deref(), Some("release-1.9.0-stable"));
    assert_eq!(result.tag, "release-1.10.0-stable");
    assert!(result.created);

    let tagged = repo
        .find_reference("refs/tags/release-1.10.0-stable")
        .unwrap()
        .peel_to_commit()
        .unwrap();
    assert_eq!(tagged.id(), head);
}

#[test]
fn test_workflow_first_tag_starts_from_zero() {
    let (dir, repo) = setup_test_repo(&[]);
    let git_repo = Git2Repository::open(dir.path()).unwrap();

    let result = run_release_workflow(&git_repo, &ReleaseArgs::default()).unwrap();

    assert_eq!(result.previous, None);
    assert_eq!(result.tag, "0.0.1");
    assert_eq!(tag_names(&repo), vec!["0.0.1".to_string()]);
}

#[test]
fn test_workflow_second_run_on_same_commit_keeps_bumping() {
    let (dir, repo) = setup_test_repo(&["v-0.9.0"]);
    let git_repo = Git2Repository::open(dir.path()).unwrap();
    let args = ReleaseArgs {
        prefix: "v".to_string(),
        bump_strategy: BumpStrategy::Major,
        ..ReleaseArgs::default()
    };

    assert_eq!(run_release_workflow(&git_repo, &args).unwrap().tag, "v-1.0.0");
    assert_eq!(run_release_workflow(&git_repo, &args).unwrap().tag, "v-2.0.0");
    assert_eq!(
        tag_names(&repo),
        vec!["v-0.9.0".to_string(), "v-1.0.0".to_string(), "v-2.0.0".to_string()]
    );
}

#[test]
fn test_workflow_dry_run_leaves_repository_untouched() {
    let (dir, repo) = setup_test_repo(&["2.3.4"]);
    let git_repo = Git2Repository::open(dir.path()).unwrap();
    let args = ReleaseArgs {
        dry_run: true,
        ..ReleaseArgs::default()
    };

    let result = run_release_workflow(&git_repo, &args).unwrap();

    assert_eq!(result.tag, "2.3.5");
    assert!(!result.created);
    assert_eq!(tag_names(&repo), vec!["2.3.4".to_string()]);
}

#[test]
fn test_workflow_pushes_and_fetches_through_bare_remote() {
    let remote_dir = TempDir::new().unwrap();
    let bare = Repository::init_bare(remote_dir.path()).unwrap();

    let (dir, repo) = setup_test_repo(&["1.0.0"]);
    repo.remote("origin", remote_dir.path().to_str().unwrap())
        .unwrap();
    let git_repo = Git2Repository::open(dir.path()).unwrap();

    let args = ReleaseArgs {
        push: true,
        ..ReleaseArgs::default()
    };
    let result = run_release_workflow(&git_repo, &args).unwrap();
    assert!(result.pushed);
    assert_eq!(tag_names(&bare), vec!["1.0.1".to_string()]);

    // a second clone sees the pushed tag after fetching and continues from it
    let (other_dir, other_repo) = setup_test_repo(&[]);
    other_repo
        .remote("origin", remote_dir.path().to_str().unwrap())
        .unwrap();
    let other = Git2Repository::open(other_dir.path()).unwrap();
    let args = ReleaseArgs {
        fetch: true,
        dry_run: true,
        ..ReleaseArgs::default()
    };

    let result = run_release_workflow(&other, &args).unwrap();
    assert!(result.warnings.is_empty());
    assert_eq!(result.tag, "1.0.2");
}

#[test]
fn test_workflow_missing_remote_fetch_only_warns() {
    let (dir, _repo) = setup_test_repo(&["1.0.0"]);
    let git_repo = Git2Repository::open(dir.path()).unwrap();
    let args = ReleaseArgs {
        fetch: true,
        remote: "nowhere".to_string(),
        dry_run: true,
        ..ReleaseArgs::default()
    };

    let result = run_release_workflow(&git_repo, &args).unwrap();

    assert_eq!(result.tag, "1.0.1");
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_workflow_missing_remote_push_fails_after_tagging() {
    let (dir, repo) = setup_test_repo(&[]);
    let git_repo = Git2Repository::open(dir.path()).unwrap();
    let args = ReleaseArgs {
        push: true,
        ..ReleaseArgs::default()
    };

    let err = run_release_workflow(&git_repo, &args).unwrap_err();

    assert!(matches!(err, GitSemverError::Remote(_)));
    assert!(git_repo.tag_exists("0.0.1").unwrap());
    assert_eq!(tag_names(&repo), vec!["0.0.1".to_string()]);
}
