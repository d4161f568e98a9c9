use crate::error::{GitSemverError, Result};
use crate::git::Repository;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
#[derive(Default)]
pub struct MockRepository {
    tags: RefCell<Vec<String>>,
    pushed: RefCell<Vec<(String, String)>>,
    fetch_error: Option<String>,
    remote_tags: Vec<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository holding the given tags
    pub fn with_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        let repo = Self::new();
        for tag in tags {
            repo.add_tag(tag.as_ref());
        }
        repo
    }

    pub fn add_tag(&self, name: impl Into<String>) {
        self.tags.borrow_mut().push(name.into());
    }

    /// Tags that become visible after a successful fetch
    pub fn set_remote_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        self.remote_tags = tags.iter().map(|t| t.as_ref().to_string()).collect();
    }

    /// Make every fetch fail with the given reason
    pub fn fail_fetch(&mut self, reason: impl Into<String>) {
        self.fetch_error = Some(reason.into());
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }

    /// (remote, tag) pairs pushed so far
    pub fn pushed(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(self.tags.borrow().iter().any(|t| t == name))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        if self.tag_exists(name)? {
            return Err(GitSemverError::TagExists(name.to_string()));
        }
        self.add_tag(name);
        Ok(())
    }

    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()> {
        for tag in tag_names {
            if !self.tag_exists(tag)? {
                return Err(GitSemverError::remote(format!(
                    "Cannot push unknown tag '{}'",
                    tag
                )));
            }
            self.pushed
                .borrow_mut()
                .push((remote.to_string(), tag.to_string()));
        }
        Ok(())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        if let Some(reason) = &self.fetch_error {
            return Err(GitSemverError::remote(format!(
                "Fetch from '{}' failed: {}",
                remote, reason
            )));
        }

        for tag in &self.remote_tags {
            if !self.tag_exists(tag)? {
                self.add_tag(tag.as_str());
            }
        }
        Ok(())
    }
}
