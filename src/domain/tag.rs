use crate::domain::version::{BumpStrategy, Version};
use crate::error::{GitSemverError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Joins a non-empty prefix or suffix to the numeric core
pub const SEPARATOR: &str = "-";

/// A version tag decorated with an optional prefix and suffix.
///
/// The textual form is always `[prefix-]major.minor.patch[-suffix]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    prefix: String,
    suffix: String,
    version: Version,
}

impl Tag {
    /// Parse a raw tag name against the expected prefix and suffix.
    ///
    /// The prefix (and suffix) are removed at most once, from the start (and
    /// end) of the raw name, together with the `-` separator when present. What
    /// remains must be a plain `X.Y.Z` version.
    ///
    /// # Example
    /// ```
    /// use git_semver::domain::Tag;
    ///
    /// let tag = Tag::new("release-1.4.2-stable", "release", "stable").unwrap();
    /// assert_eq!(tag.version().to_string(), "1.4.2");
    /// ```
    pub fn new(raw_tag: &str, prefix: &str, suffix: &str) -> Result<Self> {
        let core = strip_prefix(raw_tag, prefix)?;
        let core = strip_suffix(raw_tag, core, suffix)?;

        let version = Version::parse(core).map_err(|e| {
            GitSemverError::tag(format!("Cannot parse raw tag '{}': {}", raw_tag, e))
        })?;

        Ok(Tag {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            version,
        })
    }

    /// A `0.0.0` tag with the given decoration
    pub fn empty(prefix: &str, suffix: &str) -> Self {
        Tag::with_version(prefix, suffix, Version::zero())
    }

    pub fn with_version(prefix: &str, suffix: &str, version: Version) -> Self {
        Tag {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            version,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Three-way comparison: prefix first, then suffix, then version
    pub fn compare(&self, other: &Tag) -> Ordering {
        self.prefix
            .cmp(&other.prefix)
            .then_with(|| self.suffix.cmp(&other.suffix))
            .then_with(|| self.version.cmp(&other.version))
    }

    pub fn equal(&self, other: &Tag) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn less_than(&self, other: &Tag) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Increment the version in place. Prefix and suffix are untouched.
    pub fn bump(&mut self, strategy: BumpStrategy) {
        self.version = self.version.bump(strategy);
    }

    /// Return a bumped copy, leaving `self` as it was
    pub fn bumped(&self, strategy: BumpStrategy) -> Tag {
        let mut next = self.clone();
        next.bump(strategy);
        next
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.prefix.is_empty() {
            write!(f, "{}{}", self.prefix, SEPARATOR)?;
        }

        write!(f, "{}", self.version)?;

        if !self.suffix.is_empty() {
            write!(f, "{}{}", SEPARATOR, self.suffix)?;
        }

        Ok(())
    }
}

fn strip_prefix<'a>(raw_tag: &'a str, prefix: &str) -> Result<&'a str> {
    if prefix.is_empty() {
        return Ok(raw_tag);
    }

    let rest = raw_tag.strip_prefix(prefix).ok_or_else(|| {
        GitSemverError::tag(format!(
            "Raw tag '{}' must start with prefix '{}'",
            raw_tag, prefix
        ))
    })?;

    Ok(rest.strip_prefix(SEPARATOR).unwrap_or(rest))
}

fn strip_suffix<'a>(raw_tag: &str, core: &'a str, suffix: &str) -> Result<&'a str> {
    if suffix.is_empty() {
        return Ok(core);
    }

    let rest = core.strip_suffix(suffix).ok_or_else(|| {
        GitSemverError::tag(format!(
            "Raw tag '{}' must end with suffix '{}'",
            raw_tag, suffix
        ))
    })?;

    Ok(rest.strip_suffix(SEPARATOR).unwrap_or(rest))
}
