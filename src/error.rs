use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a git-semver run
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Unable to open git repository at '{}': {source}", .path.display())]
    Repository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid version: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Tag '{0}' already exists")]
    TagExists(String),

    #[error("Cannot select a maximum from an empty tag list")]
    EmptyTags,

    #[error("Remote operation failed: {0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    pub fn version(msg: impl Into<String>) -> Self {
        GitSemverError::Version(msg.into())
    }

    pub fn tag(msg: impl Into<String>) -> Self {
        GitSemverError::Tag(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        GitSemverError::Remote(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_display() {
        let err = GitSemverError::config("unknown key 'bump'");
        assert_eq!(err.to_string(), "Invalid configuration: unknown key 'bump'");
    }

    #[test]
    fn test_tag_exists_names_the_tag() {
        let err = GitSemverError::TagExists("v1.2.3".to_string());
        assert_eq!(err.to_string(), "Tag 'v1.2.3' already exists");
    }

    #[test]
    fn test_empty_tags_message() {
        assert!(GitSemverError::EmptyTags.to_string().contains("empty"));
    }

    #[test]
    fn test_repository_error_keeps_path_and_cause() {
        let err = GitSemverError::Repository {
            path: PathBuf::from("/tmp/not-a-repo"),
            source: git2::Error::from_str("could not find repository"),
        };

        let msg = err.to_string();
        assert!(msg.contains("/tmp/not-a-repo"));
        assert!(msg.contains("could not find repository"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_helper_constructors_pick_their_variant() {
        assert!(matches!(GitSemverError::version("x"), GitSemverError::Version(_)));
        assert!(matches!(GitSemverError::tag("x"), GitSemverError::Tag(_)));
        assert!(matches!(GitSemverError::remote("x"), GitSemverError::Remote(_)));
        assert!(GitSemverError::remote("push rejected")
            .to_string()
            .starts_with("Remote operation failed"));
    }
}
