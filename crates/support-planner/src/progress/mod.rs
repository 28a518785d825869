//! Daily mood and activity log with a day-over-day streak.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod streak;

#[cfg(test)]
mod tests;

pub use domain::{mood_score, ProgressEntry, ProgressEntryView, ProgressId, ProgressSubmission};
pub use repository::ProgressRepository;
pub use router::progress_router;
pub use service::{ProgressService, ProgressServiceError};
pub use streak::{next_streak, StreakMark, StreakPolicy};
