use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// How the gap between two entries is measured in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreakPolicy {
    /// Whole 24 hour periods elapsed since the previous entry.
    #[default]
    ElapsedDays,
    /// Difference between the UTC calendar dates of the two entries.
    CalendarDays,
}

impl StreakPolicy {
    pub fn day_gap(self, previous: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        match self {
            Self::ElapsedDays => (now - previous)
                .num_milliseconds()
                .div_euclid(MILLIS_PER_DAY),
            Self::CalendarDays => (now.date_naive() - previous.date_naive()).num_days(),
        }
    }
}

/// The parts of the previous entry the calculator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakMark {
    pub streak: u32,
    pub recorded_at: DateTime<Utc>,
}

/// Streak for an entry recorded at `now`.
///
/// Same day keeps the previous streak, the next day extends it, and any other gap
/// (including a clock that went backwards) starts over at one.
pub fn next_streak(previous: Option<StreakMark>, now: DateTime<Utc>, policy: StreakPolicy) -> u32 {
    let Some(previous) = previous else {
        return 1;
    };

    match policy.day_gap(previous.recorded_at, now) {
        0 => previous.streak,
        1 => previous.streak.saturating_add(1),
        _ => 1,
    }
}
