use crate::error::{GitSemverError, Result};
use crate::git::TAG_NAMESPACE;
use git2::{
    Cred, CredentialType, FetchOptions, PushOptions, RemoteCallbacks, Repository as Git2Repo,
};
use log::{debug, info};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|source| GitSemverError::Repository {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened repository at {}", repo.path().display());

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let references = self.repo.references_glob(&format!("{}*", TAG_NAMESPACE))?;
        let mut tags = Vec::new();

        for reference in references {
            let reference = reference?;
            let name = reference
                .name()
                .ok_or_else(|| GitSemverError::tag("Tag reference name is not valid UTF-8"))?;

            let tag = name.strip_prefix(TAG_NAMESPACE).ok_or_else(|| {
                GitSemverError::tag(format!(
                    "Tag reference '{}' is outside the '{}' namespace",
                    name, TAG_NAMESPACE
                ))
            })?;

            tags.push(tag.to_string());
        }

        Ok(tags)
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let reference_name = format!("{}{}", TAG_NAMESPACE, name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(GitSemverError::Tag(format!(
                "Cannot look up tag '{}': {}",
                name, e
            ))),
        }
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        if self.tag_exists(name)? {
            return Err(GitSemverError::TagExists(name.to_string()));
        }

        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map_err(|e| GitSemverError::Tag(format!("Cannot resolve HEAD commit: {}", e)))?;

        info!("Creating tag '{}' at {}", name, head.id());

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| match e.code() {
                git2::ErrorCode::Exists => GitSemverError::TagExists(name.to_string()),
                _ => GitSemverError::Tag(format!("Cannot create tag '{}': {}", name, e)),
            })?;

        Ok(())
    }

    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()> {
        let mut remote_handle = self.repo.find_remote(remote).map_err(|e| {
            GitSemverError::remote(format!("Cannot find remote '{}': {}", remote, e))
        })?;

        let refspecs: Vec<String> = tag_names
            .iter()
            .map(|tag| format!("{ns}{tag}:{ns}{tag}", ns = TAG_NAMESPACE, tag = tag))
            .collect();

        let mut callbacks = credential_callbacks();
        callbacks.push_update_reference(|refname, status| match status {
            Some(reason) => Err(git2::Error::from_str(&format!(
                "remote rejected {}: {}",
                refname, reason
            ))),
            None => Ok(()),
        });

        let mut options = PushOptions::new();
        options.remote_callbacks(callbacks);

        info!("Pushing {} to '{}'", refspecs.join(", "), remote);
        remote_handle
            .push(&refspecs, Some(&mut options))
            .map_err(|e| GitSemverError::remote(format!("Push to '{}' failed: {}", remote, e)))?;

        Ok(())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut remote_handle = self.repo.find_remote(remote).map_err(|e| {
            GitSemverError::remote(format!("Cannot find remote '{}': {}", remote, e))
        })?;

        let mut options = FetchOptions::new();
        options.remote_callbacks(credential_callbacks());

        let refspec = format!("+{ns}*:{ns}*", ns = TAG_NAMESPACE);
        info!("Fetching tags from '{}'", remote);
        remote_handle
            .fetch(&[refspec.as_str()], Some(&mut options), None)
            .map_err(|e| GitSemverError::remote(format!("Fetch from '{}' failed: {}", remote, e)))?;

        Ok(())
    }
}

/// Credentials for remote operations: SSH keys from ~/.ssh, then the SSH
/// agent, then whatever libgit2 considers the default.
fn credential_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(ssh_dir) = dirs::home_dir().map(|home| home.join(".ssh")) {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = ssh_dir.join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        Cred::default()
    });
    callbacks
}
