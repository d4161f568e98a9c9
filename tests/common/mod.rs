use git2::{Oid, Repository};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary repository with one commit and the given lightweight tags
#[allow(dead_code)]
pub fn setup_test_repo(tags: &[&str]) -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    let commit_id = commit_file(&repo, temp_dir.path(), "Initial content\n", "Initial commit");
    for tag in tags {
        let object = repo.find_object(commit_id, None).expect("Could not find commit");
        repo.tag_lightweight(tag, &object, false)
            .expect("Could not create tag");
    }

    (temp_dir, repo)
}

/// Write README.md and commit it on HEAD
#[allow(dead_code)]
pub fn commit_file(repo: &Repository, workdir: &Path, content: &str, message: &str) -> Oid {
    fs::write(workdir.join("README.md"), content).expect("Could not write file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new("README.md"))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let sig = repo.signature().expect("Could not get sig");

    let parents = match repo.head().ok().and_then(|h| h.peel_to_commit().ok()) {
        Some(parent) => vec![parent],
        None => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Could not create commit")
}

/// Names of all tags in the repository, sorted
#[allow(dead_code)]
pub fn tag_names(repo: &Repository) -> Vec<String> {
    let mut names: Vec<String> = repo
        .tag_names(None)
        .expect("Could not list tags")
        .iter()
        .flatten()
        .map(|s| s.to_string())
        .collect();
    names.sort();
    names
}
