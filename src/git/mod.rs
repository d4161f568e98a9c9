//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of Git
//! operations git-semver needs, allowing for a real repository backed by
//! `git2` and an in-memory implementation for tests.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations.
//!
//! ```rust
//! # use git_semver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! if !repo.tag_exists("v-1.0.1")? {
//!     repo.create_tag("v-1.0.1")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Reference namespace holding tags; stripped before names reach the domain
pub const TAG_NAMESPACE: &str = "refs/tags/";

/// Common git operation trait for abstraction
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to the matching
/// [crate::error::GitSemverError] variants.
pub trait Repository {
    /// List every tag name with the `refs/tags/` namespace removed.
    ///
    /// The list reflects one snapshot of the repository; order is unspecified.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Check whether a tag with exactly this name exists
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Create a lightweight tag at the current HEAD commit.
    ///
    /// # Returns
    /// * `Ok(())` - Tag created
    /// * `Err(GitSemverError::TagExists)` - A tag with this name already exists;
    ///   it is never overwritten
    /// * `Err` - HEAD cannot be resolved or another Git error occurs
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push the given tags to a remote
    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()>;

    /// Fetch all tags from a remote into the local tag namespace
    fn fetch_tags(&self, remote: &str) -> Result<()>;
}
