use std::fmt;

/// Non-fatal issues met while computing the next tag.
/// These are reported to the user but never abort a run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Raw tag does not follow the prefix/suffix convention or is not X.Y.Z
    UnparsableTag { tag: String, reason: String },
    /// No existing tag matched, so the run starts from 0.0.0
    NoMatchingTags { prefix: String, suffix: String },
    /// Fetching tags from the remote failed; local tags are used instead
    FetchFailed { remote: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NoMatchingTags { prefix, suffix } => {
                let describe = |s: &str| {
                    if s.is_empty() {
                        "<none>".to_string()
                    } else {
                        format!("'{}'", s)
                    }
                };
                write!(
                    f,
                    "No existing tag matches prefix {} and suffix {}; starting from 0.0.0",
                    describe(prefix),
                    describe(suffix)
                )
            }
            BoundaryWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tags.",
                    remote, reason
                )
            }
        }
    }
}
