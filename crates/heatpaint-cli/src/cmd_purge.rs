use crate::config;
use heatpaint_git::{count_art_commits, is_repository, purge_art_commits};
use std::path::Path;

pub fn execute(
    repo_root: &Path,
    config_path: &Path,
    message: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    if !is_repository(repo_root) {
        anyhow::bail!("{} is not a git repository", repo_root.display());
    }
    let settings = config::load(config_path)?;
    let message = message.unwrap_or(&settings.message);

    if dry_run {
        let n = count_art_commits(repo_root, message)?;
        println!("Would purge {n} commits with subject \"{message}\"");
        return Ok(());
    }

    let n = purge_art_commits(repo_root, message)?;
    if n == 0 {
        println!("No commits with subject \"{message}\"");
    } else {
        println!("Purged {n} commits with subject \"{message}\"");
    }
    Ok(())
}
