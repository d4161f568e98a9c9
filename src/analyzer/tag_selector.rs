use crate::boundary::BoundaryWarning;
use crate::domain::{BumpStrategy, Tag};
use crate::error::{GitSemverError, Result};
use crate::git::Repository;
use log::{debug, info};

/// Tags that survived parsing, plus what was skipped along the way
#[derive(Debug, Clone, PartialEq)]
pub struct TagCollection {
    /// Never empty: seeded with a zero tag when nothing parsed
    pub tags: Vec<Tag>,
    /// True when `tags` holds only the synthetic zero tag
    pub seeded: bool,
    pub warnings: Vec<BoundaryWarning>,
}

/// Outcome of selecting and bumping the maximum tag
#[derive(Debug, Clone, PartialEq)]
pub struct NextTag {
    /// Highest existing tag, `None` when the run started from 0.0.0
    pub previous: Option<Tag>,
    pub next: Tag,
    pub warnings: Vec<BoundaryWarning>,
}

/// Picks the next tag for one prefix/suffix family
pub struct TagSelector {
    prefix: String,
    suffix: String,
}

impl TagSelector {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        TagSelector {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Parse raw tag names, skipping the ones that do not fit.
    ///
    /// A malformed tag is logged and recorded as a warning; it never stops the
    /// rest of the list from being processed. When nothing parses, the result
    /// holds a single `0.0.0` tag with this selector's decoration.
    pub fn collect_tags<S: AsRef<str>>(&self, raw_tags: &[S]) -> TagCollection {
        let mut tags = Vec::with_capacity(raw_tags.len());
        let mut warnings = Vec::new();

        for raw in raw_tags {
            let raw = raw.as_ref();
            match Tag::new(raw, &self.prefix, &self.suffix) {
                Ok(tag) => {
                    debug!("Parsed tag '{}' as version {}", raw, tag.version());
                    tags.push(tag);
                }
                Err(e) => {
                    debug!("Skipping tag '{}': {}", raw, e);
                    warnings.push(BoundaryWarning::UnparsableTag {
                        tag: raw.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let seeded = tags.is_empty();
        if seeded {
            info!(
                "No tag matches prefix '{}' and suffix '{}', starting from 0.0.0",
                self.prefix, self.suffix
            );
            tags.push(Tag::empty(&self.prefix, &self.suffix));
            warnings.push(BoundaryWarning::NoMatchingTags {
                prefix: self.prefix.clone(),
                suffix: self.suffix.clone(),
            });
        }

        TagCollection {
            tags,
            seeded,
            warnings,
        }
    }

    /// Select the maximum tag among `raw_tags` and bump it
    pub fn next_tag<S: AsRef<str>>(
        &self,
        raw_tags: &[S],
        strategy: BumpStrategy,
    ) -> Result<NextTag> {
        let collection = self.collect_tags(raw_tags);
        let max = find_max_tag(&collection.tags)?;
        info!("Highest tag: '{}'", max);

        let next = max.bumped(strategy);
        info!("Bumped tag ({}): '{}'", strategy, next);

        let previous = if collection.seeded {
            None
        } else {
            Some(max.clone())
        };

        Ok(NextTag {
            previous,
            next,
            warnings: collection.warnings,
        })
    }

    /// Read tags from a repository and compute the next one
    pub fn next_tag_for_repository<R: Repository>(
        &self,
        repo: &R,
        strategy: BumpStrategy,
    ) -> Result<NextTag> {
        let raw_tags = repo.list_tags()?;
        debug!("Repository has {} tags", raw_tags.len());
        self.next_tag(&raw_tags, strategy)
    }
}

/// Return the greatest tag by [`Tag::compare`].
///
/// The first of several equal maxima wins. An empty slice is an error rather
/// than a panic.
pub fn find_max_tag(tags: &[Tag]) -> Result<&Tag> {
    let (first, rest) = tags.split_first().ok_or(GitSemverError::EmptyTags)?;

    let mut max = first;
    for tag in rest {
        if max.less_than(tag) {
            max = tag;
        }
    }

    Ok(max)
}
