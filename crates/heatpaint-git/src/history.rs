use crate::status::ensure_clean;
use crate::{git, git_with_env};
use std::path::Path;

/// Art commits are matched on their subject, which git (`%s`) takes as the
/// first paragraph with its lines joined by spaces.
fn subject(message: &str) -> String {
    message
        .lines()
        .map(str::trim_end)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn has_head(repo: &Path) -> bool {
    git(repo, &["rev-parse", "--verify", "-q", "HEAD"]).is_ok()
}

/// Commits on the current branch whose subject is `message`. An unborn branch has none.
pub fn count_art_commits(repo: &Path, message: &str) -> anyhow::Result<usize> {
    if !has_head(repo) {
        return Ok(0);
    }
    let subject = subject(message);
    let log = git(repo, &["log", "--format=%s", "HEAD"])?;
    Ok(log.lines().filter(|line| *line == subject).count())
}

/// Rewrite the current branch without the commits whose subject is `message`.
/// Returns how many were dropped.
pub fn purge_art_commits(repo: &Path, message: &str) -> anyhow::Result<usize> {
    let count = count_art_commits(repo, message)?;
    if count == 0 {
        tracing::info!("no art commits to purge");
        return Ok(0);
    }
    ensure_clean(repo)?;

    let total: usize = git(repo, &["rev-list", "--count", "HEAD"])?.trim().parse()?;
    if count == total {
        // Nothing would survive the rewrite; return the branch to unborn.
        git(repo, &["update-ref", "-d", "HEAD"])?;
        tracing::info!(dropped = count, "branch held only art commits, reset to unborn");
        return Ok(count);
    }

    let filter = format!(
        "if [ \"$(git log -1 --format=%s \"$GIT_COMMIT\")\" = {} ]; \
         then skip_commit \"$@\"; else git commit-tree \"$@\"; fi",
        shell_quote(&subject(message))
    );
    git_with_env(
        repo,
        &["filter-branch", "--force", "--commit-filter", &filter, "HEAD"],
        &[("FILTER_BRANCH_SQUELCH_WARNING", "1")],
    )?;
    tracing::info!(dropped = count, "art commits purged");
    Ok(count)
}
