use crate::git;
use std::path::Path;

/// Fail unless the working tree has no tracked changes. Untracked files are allowed.
pub fn ensure_clean(repo: &Path) -> anyhow::Result<()> {
    let stdout = git(repo, &["status", "--porcelain"])?;
    let dirty_lines: Vec<&str> = stdout
        .lines()
        // Skip untracked files (lines starting with "??")
        .filter(|line| !line.starts_with("??"))
        .filter(|line| !line.trim().is_empty())
        .collect();

    if dirty_lines.is_empty() {
        return Ok(());
    }
    let preview = dirty_lines
        .iter()
        .take(5)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    let extra = if dirty_lines.len() > 5 {
        format!("\n... and {} more", dirty_lines.len() - 5)
    } else {
        String::new()
    };
    anyhow::bail!(
        "working tree not clean ({} files):\n{preview}{extra}",
        dirty_lines.len()
    )
}

pub fn is_repository(dir: &Path) -> bool {
    git(dir, &["rev-parse", "--is-inside-work-tree"])
        .map(|out| out.trim() == "true")
        .unwrap_or(false)
}

/// Name of the checked-out branch (works on an unborn branch too).
pub fn current_branch(repo: &Path) -> anyhow::Result<String> {
    Ok(git(repo, &["symbolic-ref", "--short", "HEAD"])?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{commit_file, init_repo};

    #[test]
    fn clean_repo() {
        let dir = init_repo();
        commit_file(dir.path(), "README", "init");
        ensure_clean(dir.path()).unwrap();
    }

    #[test]
    fn dirty_repo() {
        let dir = init_repo();
        commit_file(dir.path(), "README", "init");
        std::fs::write(dir.path().join("README"), "changed").unwrap();
        let err = ensure_clean(dir.path()).unwrap_err();
        assert!(err.to_string().contains("README"));
    }

    #[test]
    fn untracked_files_are_allowed() {
        let dir = init_repo();
        commit_file(dir.path(), "README", "init");
        std::fs::write(dir.path().join("untracked.txt"), "x").unwrap();
        ensure_clean(dir.path()).unwrap();
    }

    #[test]
    fn branch_and_repository_detection() {
        let dir = init_repo();
        assert!(is_repository(dir.path()));
        assert_eq!(current_branch(dir.path()).unwrap(), "main");

        let plain = tempfile::tempdir().unwrap();
        assert!(!is_repository(plain.path()));
    }
}
