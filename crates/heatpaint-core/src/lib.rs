pub mod error;
pub mod grid;
pub mod mapper;
pub mod schedule;
pub mod scheduler;

pub use error::ArtError;
pub use grid::{IntensityGrid, GRID_HEIGHT, GRID_WIDTH};
pub use mapper::{IntensityMapper, DEFAULT_MAX_COMMITS};
pub use schedule::{emit_schedule, CommitEmitter, Schedule, ScheduleEntry};
pub use scheduler::{Scheduler, LOOKBACK_DAYS};
