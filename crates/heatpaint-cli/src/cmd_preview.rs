use crate::config;
use crate::pipeline::{PatternArgs, Plan};
use heatpaint_core::{IntensityGrid, IntensityMapper};
use std::path::Path;
use time::Duration;

/// Empty cell, then four activity levels.
const SHADES: [char; 5] = ['.', '░', '▒', '▓', '█'];

fn shade(commits: u32, max_commits: u32) -> char {
    let max = max_commits.max(1);
    let level = (commits.min(max) * 4).div_ceil(max);
    SHADES[level as usize]
}

/// One string per weekday row, one character per week column.
pub fn heatmap_rows(grid: &IntensityGrid, mapper: &IntensityMapper) -> Vec<String> {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| shade(mapper.commits(grid.get(x, y)), mapper.max_commits()))
                .collect()
        })
        .collect()
}

/// Human-readable plan: heatmap labelled by weekday, then totals.
pub fn print_plan(plan: &Plan, mapper: &IntensityMapper) {
    let rows = heatmap_rows(&plan.grid, mapper);
    for (y, row) in rows.iter().enumerate() {
        let weekday = (plan.start + Duration::days(y as i64)).weekday();
        let label: String = weekday.to_string().chars().take(3).collect();
        println!("{label} {row}");
    }
    let s = &plan.schedule;
    match (s.first_date(), s.last_date()) {
        (Some(first), Some(last)) => println!(
            "{} days, {} commits, {first} .. {last}",
            s.len(),
            s.total_commits()
        ),
        _ => println!("Pattern is blank: nothing to commit"),
    }
}

pub fn execute(pattern: &PatternArgs, json: bool, config_path: &Path) -> anyhow::Result<()> {
    let settings = config::load(config_path)?;
    let input = pattern.input()?;
    let pipeline = pattern.pipeline(&settings)?;
    let plan = pipeline.plan(&input, pattern.today()?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan.schedule)?);
    } else {
        println!(
            "Pattern: {} ({}x{}), window starts {}",
            input.kind(),
            plan.grid.width(),
            plan.grid.height(),
            plan.start
        );
        print_plan(&plan, pipeline.mapper());
    }
    Ok(())
}
