use crate::git_with_env;
use anyhow::Context;
use heatpaint_core::{CommitEmitter, ScheduleEntry};
use std::path::{Path, PathBuf};

/// Creates empty commits in a local repository, backdated to each entry's timestamp.
pub struct GitEmitter {
    repo: PathBuf,
    message: String,
    created: u64,
}

impl GitEmitter {
    pub fn new(repo: &Path, message: &str) -> Self {
        Self {
            repo: repo.to_path_buf(),
            message: message.to_string(),
            created: 0,
        }
    }

    /// Commits created so far.
    pub fn created(&self) -> u64 {
        self.created
    }
}

impl CommitEmitter for GitEmitter {
    fn emit(&mut self, entry: &ScheduleEntry) -> anyhow::Result<()> {
        let ts = entry
            .timestamp()
            .with_context(|| format!("formatting commit date {}", entry.date()))?;
        let envs = [
            ("GIT_AUTHOR_DATE", ts.as_str()),
            ("GIT_COMMITTER_DATE", ts.as_str()),
        ];
        for _ in 0..entry.commits() {
            git_with_env(
                &self.repo,
                &["commit", "--allow-empty", "-q", "-m", &self.message],
                &envs,
            )
            .with_context(|| format!("creating commit dated {ts}"))?;
            self.created += 1;
        }
        Ok(())
    }
}
