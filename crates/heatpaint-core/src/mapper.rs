use crate::error::ArtError;

/// Commits recorded for a pure black cell unless configured otherwise.
pub const DEFAULT_MAX_COMMITS: u32 = 5;

/// Maps a grayscale sample to a commit count: darker means busier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityMapper {
    max_commits: u32,
}

impl Default for IntensityMapper {
    fn default() -> Self {
        Self {
            max_commits: DEFAULT_MAX_COMMITS,
        }
    }
}

impl IntensityMapper {
    pub fn new(max_commits: u32) -> Result<Self, ArtError> {
        if max_commits == 0 {
            return Err(ArtError::invalid_argument("max commits must be at least 1"));
        }
        Ok(Self { max_commits })
    }

    pub fn max_commits(&self) -> u32 {
        self.max_commits
    }

    /// `floor((255 - brightness) / 255 * max_commits)`, in exact integer arithmetic.
    pub fn commits(&self, brightness: u8) -> u32 {
        let darkness = u64::from(u8::MAX - brightness);
        (darkness * u64::from(self.max_commits) / u64::from(u8::MAX)) as u32
    }

    /// Same as [`commits`](Self::commits) for a raw sample that may be out of range.
    pub fn commits_checked(&self, brightness: i64) -> Result<u32, ArtError> {
        let sample = u8::try_from(brightness).map_err(|_| {
            ArtError::invalid_argument(format!("brightness {brightness} outside 0..=255"))
        })?;
        Ok(self.commits(sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let m = IntensityMapper::default();
        assert_eq!(m.commits(255), 0);
        assert_eq!(m.commits(0), 5);
    }

    #[test]
    fn bounded_and_monotonic() {
        let m = IntensityMapper::default();
        let mut prev = u32::MAX;
        for b in 0..=255u8 {
            let c = m.commits(b);
            assert!(c <= m.max_commits());
            assert!(c <= prev, "commits rose at brightness {b}");
            prev = c;
        }
    }

    #[test]
    fn floors_between_levels() {
        let m = IntensityMapper::default();
        // 51 darkness is exactly one step.
        assert_eq!(m.commits(204), 1);
        assert_eq!(m.commits(205), 0);
        assert_eq!(m.commits(128), 2);
        assert_eq!(m.commits(1), 4);
    }

    #[test]
    fn custom_max() {
        let m = IntensityMapper::new(12).unwrap();
        assert_eq!(m.commits(0), 12);
        assert_eq!(m.commits(255), 0);
        assert!(IntensityMapper::new(0).is_err());
    }

    #[test]
    fn checked_rejects_out_of_range() {
        let m = IntensityMapper::default();
        assert_eq!(m.commits_checked(0).unwrap(), 5);
        assert!(matches!(
            m.commits_checked(256),
            Err(ArtError::InvalidArgument(_))
        ));
        assert!(matches!(
            m.commits_checked(-1),
            Err(ArtError::InvalidArgument(_))
        ));
    }
}
