pub mod emitter;
pub mod history;
pub mod remote;
pub mod status;

pub use emitter::GitEmitter;
pub use history::{count_art_commits, purge_art_commits};
pub use remote::push;
pub use status::{current_branch, ensure_clean, is_repository};

use std::path::Path;
use std::process::Command;

/// Commit message marking commits created by heatpaint.
pub const DEFAULT_MESSAGE: &str = "Contribution art";

/// Run `git <args>` inside `repo` and return its stdout.
pub(crate) fn git(repo: &Path, args: &[&str]) -> anyhow::Result<String> {
    git_with_env(repo, args, &[])
}

pub(crate) fn git_with_env(
    repo: &Path,
    args: &[&str],
    envs: &[(&str, &str)],
) -> anyhow::Result<String> {
    tracing::debug!(repo = %repo.display(), ?args, "git");
    let output = Command::new("git")
        .args(args)
        .envs(envs.iter().copied())
        .current_dir(repo)
        .output()
        .map_err(|e| anyhow::anyhow!("git not available: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let sub = args.first().copied().unwrap_or_default();
        anyhow::bail!("git {sub} failed: {}", stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_command_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let err = git(dir.path(), &["rev-parse", "HEAD"]).unwrap_err();
        assert!(err.to_string().starts_with("git rev-parse failed"));
    }
}
