use anyhow::{Context, Result};
use git2::{Oid, Repository, Signature, Time};
use std::fs;
use std::path::{Path, PathBuf};

/// Git operations for recording a migration as a single commit
pub struct GitOps {
    repo: Option<Repository>,
}

impl GitOps {
    /// Create a new GitOps instance by detecting if the path is in a git repository
    pub fn new(path: &Path) -> Self {
        let dir = if path.is_file() {
            path.parent().unwrap_or(path).to_path_buf()
        } else {
            path.to_path_buf()
        };

        Self {
            repo: Repository::discover(dir).ok(),
        }
    }

    /// Check if the path is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Stage the given files and commit them on `HEAD`
    ///
    /// Returns the new commit id, or `None` when there is no repository or
    /// nothing to commit.
    pub fn commit<P: AsRef<Path>>(&self, files: &[P], message: &str) -> Result<Option<Oid>> {
        let repo = match &self.repo {
            Some(r) => r,
            None => return Ok(None), // Not a git repo, skip
        };
        if files.is_empty() {
            return Ok(None);
        }

        let repo_workdir = repo
            .workdir()
            .context("Repository has no working directory")?;
        let repo_workdir = fs::canonicalize(repo_workdir)
            .context("Failed to resolve repository working directory")?;

        // Add the files to the index
        let mut index = repo.index()?;
        for file in files {
            let relative = Self::relative_path(&repo_workdir, file.as_ref())?;
            index
                .add_path(&relative)
                .with_context(|| format!("Failed to stage {}", relative.display()))?;
        }
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let parent_commit = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None, // Initial commit
        };

        let signature = Self::get_signature(repo)?;
        let parents: Vec<_> = parent_commit.iter().collect();

        let oid = repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(Some(oid))
    }

    /// Path of `file` relative to the repository working directory
    fn relative_path(repo_workdir: &Path, file: &Path) -> Result<PathBuf> {
        let file = fs::canonicalize(file)
            .with_context(|| format!("Failed to resolve {}", file.display()))?;
        let relative = file
            .strip_prefix(repo_workdir)
            .with_context(|| format!("{} is not in repository", file.display()))?;
        Ok(relative.to_path_buf())
    }

    /// Get or create a git signature for commits
    fn get_signature(repo: &Repository) -> Result<Signature<'_>> {
        let config = repo.config()?;

        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "nav-migrate".to_string());

        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "nav-migrate@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                // Fixed time when the clock is unavailable (seen on some CI systems)
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time)
                    .context("Failed to create signature with fixed time")
            }
        }
    }
}
