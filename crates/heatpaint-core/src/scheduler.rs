use crate::error::ArtError;
use crate::grid::{IntensityGrid, GRID_HEIGHT};
use crate::mapper::IntensityMapper;
use crate::schedule::{Schedule, ScheduleEntry};
use time::{Date, Duration};

/// Length of the trailing window painted by a run.
pub const LOOKBACK_DAYS: i64 = 365;

/// Assigns every grid cell a calendar day, starting at a fixed anchor.
///
/// Cell `(x, y)` lands `x * 7 + y` days after the anchor: columns are weeks,
/// rows are weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    start: Date,
}

impl Scheduler {
    pub fn starting_at(start: Date) -> Self {
        Self { start }
    }

    /// Anchor the window [`LOOKBACK_DAYS`] before `today`.
    pub fn trailing(today: Date) -> Result<Self, ArtError> {
        let start = today
            .checked_sub(Duration::days(LOOKBACK_DAYS))
            .ok_or(ArtError::DateOutOfRange {
                start: today,
                offset_days: -LOOKBACK_DAYS,
            })?;
        Ok(Self { start })
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn date_for(&self, x: usize, y: usize) -> Result<Date, ArtError> {
        let offset_days = (x * GRID_HEIGHT + y) as i64;
        self.start
            .checked_add(Duration::days(offset_days))
            .ok_or(ArtError::DateOutOfRange {
                start: self.start,
                offset_days,
            })
    }

    /// One entry per non-empty cell, in column-major order.
    pub fn schedule(
        &self,
        grid: &IntensityGrid,
        mapper: &IntensityMapper,
    ) -> Result<Schedule, ArtError> {
        let mut entries = Vec::new();
        for (x, y, brightness) in grid.cells() {
            let commits = mapper.commits(brightness);
            let Some(entry) = ScheduleEntry::new(self.date_for(x, y)?, commits) else {
                continue;
            };
            entries.push(entry);
        }
        tracing::info!(
            start = %self.start,
            width = grid.width(),
            entries = entries.len(),
            "schedule built"
        );
        Ok(Schedule::new(entries))
    }
}
