use crate::error::{GitSemverError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric `major.minor.patch` core of a tag.
///
/// Ordering is numeric and lexicographic over (major, minor, patch), so
/// `10.0.0` sorts after `2.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// The zero version used as a baseline when a repository has no usable tags
    pub fn zero() -> Self {
        Version::new(0, 0, 0)
    }

    /// Parse a strict `major.minor.patch` string.
    ///
    /// Pre-release and build metadata are rejected: a tag is either a plain
    /// release version or it is not a candidate at all. So is any component
    /// at `u64::MAX`, since no strategy could bump past it.
    pub fn parse(core: &str) -> Result<Self> {
        let parsed = semver::Version::parse(core).map_err(|e| {
            GitSemverError::version(format!("'{}' is not a valid X.Y.Z version: {}", core, e))
        })?;

        if !parsed.pre.is_empty() {
            return Err(GitSemverError::version(format!(
                "'{}' carries pre-release metadata '{}', which is not supported",
                core, parsed.pre
            )));
        }

        if !parsed.build.is_empty() {
            return Err(GitSemverError::version(format!(
                "'{}' carries build metadata '{}', which is not supported",
                core, parsed.build
            )));
        }

        let version = Version::new(parsed.major, parsed.minor, parsed.patch);
        if !version.is_bumpable() {
            return Err(GitSemverError::version(format!(
                "'{}' has a component too large to bump",
                core
            )));
        }

        Ok(version)
    }

    fn is_bumpable(&self) -> bool {
        [self.major, self.minor, self.patch]
            .iter()
            .all(|component| *component < u64::MAX)
    }

    /// Return the next version for the given strategy, leaving `self` untouched.
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// Parsed versions never sit at `u64::MAX`. A hand-built one saturates
    /// there instead of wrapping back to zero.
    pub fn bump(&self, strategy: BumpStrategy) -> Self {
        match strategy {
            BumpStrategy::Major => Version::new(self.major.saturating_add(1), 0, 0),
            BumpStrategy::Minor => Version::new(self.major, self.minor.saturating_add(1), 0),
            BumpStrategy::Patch => {
                Version::new(self.major, self.minor, self.patch.saturating_add(1))
            }
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::zero()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which version component to increment for the next release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpStrategy {
    #[default]
    Patch,
    Minor,
    Major,
}

impl BumpStrategy {
    /// Resolve a strategy name, falling back to `Patch` for anything unknown.
    ///
    /// Returns the strategy together with a flag telling whether the name was
    /// recognized, so callers can warn about the fallback.
    pub fn from_name_or_default(name: &str) -> (Self, bool) {
        match name.parse() {
            Ok(strategy) => (strategy, true),
            Err(_) => (BumpStrategy::Patch, false),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpStrategy::Patch => "patch",
            BumpStrategy::Minor => "minor",
            BumpStrategy::Major => "major",
        }
    }
}

impl FromStr for BumpStrategy {
    type Err = GitSemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patch" => Ok(BumpStrategy::Patch),
            "minor" => Ok(BumpStrategy::Minor),
            "major" => Ok(BumpStrategy::Major),
            _ => Err(GitSemverError::config(format!(
                "Unknown bump strategy '{}' (expected patch, minor or major)",
                s
            ))),
        }
    }
}

impl fmt::Display for BumpStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
