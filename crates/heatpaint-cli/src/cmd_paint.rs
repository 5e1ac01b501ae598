use crate::cmd_preview::print_plan;
use crate::config;
use crate::pipeline::PatternArgs;
use heatpaint_core::emit_schedule;
use heatpaint_git::{current_branch, is_repository, purge_art_commits, push, GitEmitter};
use std::path::Path;

pub struct PaintParams<'a> {
    pub repo_root: &'a Path,
    pub config_path: &'a Path,
    pub pattern: &'a PatternArgs,
    pub message: Option<&'a str>,
    pub remote: Option<&'a str>,
    pub branch: Option<&'a str>,
    pub no_purge: bool,
    pub no_push: bool,
    pub dry_run: bool,
}

pub fn execute(p: PaintParams<'_>) -> anyhow::Result<()> {
    let settings = config::load(p.config_path)?;

    // The whole schedule is computed before git is touched.
    let input = p.pattern.input()?;
    let pipeline = p.pattern.pipeline(&settings)?;
    let plan = pipeline.plan(&input, p.pattern.today()?)?;

    let message = p.message.unwrap_or(&settings.message);
    let remote = p.remote.unwrap_or(&settings.remote);
    let do_purge = settings.purge && !p.no_purge;
    let do_push = settings.push && !p.no_push;

    if p.dry_run {
        println!("--- Paint Preview (dry-run) ---");
        println!(
            "Input: {} ({}x{})",
            input.kind(),
            plan.grid.width(),
            plan.grid.height()
        );
        println!("Message: {message}");
        println!("Purge first: {do_purge}");
        println!("Push to: {}", if do_push { remote } else { "(no push)" });
        print_plan(&plan, pipeline.mapper());
        return Ok(());
    }

    if !is_repository(p.repo_root) {
        anyhow::bail!("{} is not a git repository", p.repo_root.display());
    }

    let purged = if do_purge {
        purge_art_commits(p.repo_root, message)?
    } else {
        0
    };
    if purged > 0 {
        println!("Purged {purged} previous art commits");
    }

    if plan.schedule.is_empty() {
        println!("Pattern is blank: nothing to commit");
    }
    let mut emitter = GitEmitter::new(p.repo_root, message);
    let created = emit_schedule(&plan.schedule, &mut emitter)?;
    println!(
        "Created {created} commits across {} days starting {}",
        plan.schedule.len(),
        plan.start
    );

    if do_push && (created > 0 || purged > 0) {
        let branch = match p.branch.or(settings.branch.as_deref()) {
            Some(b) => b.to_string(),
            None => current_branch(p.repo_root)?,
        };
        push(p.repo_root, remote, &branch, purged > 0)?;
        println!("Pushed {branch} to {remote}");
    }
    Ok(())
}
