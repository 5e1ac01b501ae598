use crate::git;
use anyhow::Context;
use std::path::Path;

/// Push `branch` to `remote`. `force` uses a lease, for after history was rewritten.
pub fn push(repo: &Path, remote: &str, branch: &str, force: bool) -> anyhow::Result<()> {
    let mut args = vec!["push", "-q"];
    if force {
        args.push("--force-with-lease");
    }
    args.extend([remote, branch]);
    git(repo, &args).with_context(|| format!("pushing {branch} to {remote}"))?;
    tracing::info!(remote, branch, force, "pushed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::GitEmitter;
    use crate::history::purge_art_commits;
    use crate::testutil::{commit_file, init_repo};
    use crate::DEFAULT_MESSAGE;
    use heatpaint_core::{CommitEmitter, ScheduleEntry};
    use time::macros::date;

    fn remote_count(bare: &Path) -> usize {
        git(bare, &["rev-list", "--count", "main"])
            .unwrap()
            .trim()
            .parse()
            .unwrap()
    }

    #[test]
    fn push_then_force_after_purge() {
        let bare = tempfile::tempdir().unwrap();
        git(bare.path(), &["init", "-q", "--bare"]).unwrap();

        let dir = init_repo();
        let url = bare.path().to_string_lossy().to_string();
        git(dir.path(), &["remote", "add", "origin", &url]).unwrap();
        commit_file(dir.path(), "README", "init");
        GitEmitter::new(dir.path(), DEFAULT_MESSAGE)
            .emit(&ScheduleEntry::new(date!(2023 - 05 - 01), 2).unwrap())
            .unwrap();

        push(dir.path(), "origin", "main", false).unwrap();
        assert_eq!(remote_count(bare.path()), 3);

        purge_art_commits(dir.path(), DEFAULT_MESSAGE).unwrap();
        // Rewritten history is not a fast-forward.
        assert!(push(dir.path(), "origin", "main", false).is_err());
        push(dir.path(), "origin", "main", true).unwrap();
        assert_eq!(remote_count(bare.path()), 1);
    }

    #[test]
    fn unknown_remote_fails_with_context() {
        let dir = init_repo();
        commit_file(dir.path(), "README", "init");
        let err = push(dir.path(), "nowhere", "main", false).unwrap_err();
        assert!(format!("{err:#}").contains("pushing main to nowhere"));
    }
}
