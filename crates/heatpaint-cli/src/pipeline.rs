use crate::config::Settings;
use anyhow::Context;
use clap::Args;
use heatpaint_core::{ArtError, IntensityGrid, IntensityMapper, Schedule, Scheduler};
use heatpaint_render::{FontResolver, PatternInput, Rasterizer};
use std::path::PathBuf;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Rasterizer → mapper → scheduler, composed as a value.
#[derive(Debug, Clone)]
pub struct Pipeline {
    rasterizer: Rasterizer,
    mapper: IntensityMapper,
}

/// Everything computed for a run before any commit is made.
#[derive(Debug, Clone)]
pub struct Plan {
    pub grid: IntensityGrid,
    pub start: Date,
    pub schedule: Schedule,
}

impl Pipeline {
    pub fn new(rasterizer: Rasterizer, mapper: IntensityMapper) -> Self {
        Self { rasterizer, mapper }
    }

    pub fn mapper(&self) -> &IntensityMapper {
        &self.mapper
    }

    pub fn plan(&self, input: &PatternInput, today: Date) -> Result<Plan, ArtError> {
        let grid = self.rasterizer.rasterize(input)?;
        let scheduler = Scheduler::trailing(today)?;
        let schedule = scheduler.schedule(&grid, &self.mapper)?;
        Ok(Plan {
            grid,
            start: scheduler.start(),
            schedule,
        })
    }
}

/// Pattern selection and transform options shared by `paint` and `preview`.
#[derive(Args, Debug, Clone)]
pub struct PatternArgs {
    /// Input type: text or image
    pub mode: String,
    /// Text to render, or path to an image file
    pub content: String,
    /// Commits for a fully dark cell (defaults to config, then 5)
    #[arg(long)]
    pub max_commits: Option<u32>,
    /// Scalable font file to render text with
    #[arg(long)]
    pub font: Option<PathBuf>,
    /// Skip scalable fonts and use the built-in 5x7 glyphs
    #[arg(long)]
    pub fixed_font: bool,
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long)]
    pub today: Option<String>,
}

impl PatternArgs {
    pub fn input(&self) -> Result<PatternInput, ArtError> {
        PatternInput::from_args(&self.mode, &self.content)
    }

    pub fn pipeline(&self, settings: &Settings) -> Result<Pipeline, ArtError> {
        let fonts = if self.fixed_font {
            FontResolver::fixed_only()
        } else {
            let preferred = self.font.as_deref().or(settings.font_path.as_deref());
            FontResolver::with_system_fonts(preferred)
        };
        let mapper = IntensityMapper::new(self.max_commits.unwrap_or(settings.max_commits))?;
        Ok(Pipeline::new(Rasterizer::new(fonts), mapper))
    }

    pub fn today(&self) -> anyhow::Result<Date> {
        match &self.today {
            Some(s) => parse_date(s),
            None => Ok(local_today()),
        }
    }
}

pub fn parse_date(s: &str) -> anyhow::Result<Date> {
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

/// Today's local date; UTC when the local offset cannot be determined.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
