use serde::ser::{Error as _, SerializeStruct};
use serde::{Serialize, Serializer};
use time::macros::{format_description, time};
use time::{Date, PrimitiveDateTime, Time};

/// Every scheduled commit lands at noon so no timezone shift can move it to another day.
pub const COMMIT_TIME: Time = time!(12:00);

/// Activity for one calendar day: `commits` empty commits dated at noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    date: Date,
    commits: u32,
}

impl ScheduleEntry {
    /// Returns `None` for zero commits; empty cells are never materialized.
    pub fn new(date: Date, commits: u32) -> Option<Self> {
        (commits > 0).then_some(Self { date, commits })
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn commits(&self) -> u32 {
        self.commits
    }

    pub fn at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, COMMIT_TIME)
    }

    /// `YYYY-MM-DDTHH:MM:SS`, the form git accepts in `GIT_AUTHOR_DATE`.
    pub fn timestamp(&self) -> Result<String, time::error::Format> {
        self.at()
            .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
    }
}

impl Serialize for ScheduleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ScheduleEntry", 2)?;
        let timestamp = self.timestamp().map_err(S::Error::custom)?;
        s.serialize_field("timestamp", &timestamp)?;
        s.serialize_field("commits", &self.commits)?;
        s.end()
    }
}

/// Entries in grid traversal order (column-major).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_commits(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.commits)).sum()
    }

    pub fn first_date(&self) -> Option<Date> {
        self.entries.iter().map(|e| e.date).min()
    }

    pub fn last_date(&self) -> Option<Date> {
        self.entries.iter().map(|e| e.date).max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Materializes schedule entries as backdated commits.
pub trait CommitEmitter {
    /// Create `entry.commits()` commits dated `entry.timestamp()`.
    fn emit(&mut self, entry: &ScheduleEntry) -> anyhow::Result<()>;
}

/// Feed every entry to `emitter` in order. Returns the number of commits requested.
pub fn emit_schedule(schedule: &Schedule, emitter: &mut dyn CommitEmitter) -> anyhow::Result<u64> {
    let mut emitted = 0u64;
    for entry in schedule {
        emitter.emit(entry)?;
        emitted += u64::from(entry.commits());
        tracing::debug!(date = %entry.date(), commits = entry.commits(), "emitted");
    }
    tracing::info!(entries = schedule.len(), commits = emitted, "schedule emitted");
    Ok(emitted)
}
