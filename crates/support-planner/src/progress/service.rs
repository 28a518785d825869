use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{ProgressEntry, ProgressId, ProgressSubmission};
use super::repository::ProgressRepository;
use super::streak::{next_streak, StreakPolicy};
use crate::auth::UserId;
use crate::storage::RepositoryError;

pub const HISTORY_LIMIT: usize = 100;

/// Records daily entries. Reading the latest entry, computing the streak and appending
/// happen under a per-user lock so same-user submissions cannot interleave.
pub struct ProgressService<R> {
    repository: Arc<R>,
    policy: StreakPolicy,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl<R> ProgressService<R>
where
    R: ProgressRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: StreakPolicy) -> Self {
        Self {
            repository,
            policy,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> StreakPolicy {
        self.policy
    }

    fn user_lock(&self, user: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self
            .user_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks.entry(user.clone()).or_default().clone()
    }

    /// Record an entry stamped with the current time, read once the user's lock is held.
    pub fn record(
        &self,
        user: &UserId,
        submission: ProgressSubmission,
    ) -> Result<ProgressEntry, ProgressServiceError> {
        self.record_with(user, submission, Utc::now)
    }

    /// Record an entry at a caller-supplied instant.
    pub fn record_at(
        &self,
        user: &UserId,
        submission: ProgressSubmission,
        now: DateTime<Utc>,
    ) -> Result<ProgressEntry, ProgressServiceError> {
        self.record_with(user, submission, move || now)
    }

    fn record_with(
        &self,
        user: &UserId,
        submission: ProgressSubmission,
        clock: impl FnOnce() -> DateTime<Utc>,
    ) -> Result<ProgressEntry, ProgressServiceError> {
        let ProgressSubmission {
            mood,
            activities,
            notes,
        } = submission;

        let mood = mood
            .as_deref()
            .map(str::trim)
            .filter(|mood| !mood.is_empty())
            .ok_or(ProgressServiceError::MissingMood)?
            .to_string();
        let activities = activities
            .iter()
            .map(|activity| activity.trim())
            .filter(|activity| !activity.is_empty())
            .map(str::to_string)
            .collect();
        let notes = notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        let lock = self.user_lock(user);
        let result = {
            let _serialized = lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.append_next(user, mood, activities, notes, clock())
        };
        self.release_user_lock(user, lock);
        let stored = result?;

        info!(user = %user, streak = stored.streak, "progress recorded");
        Ok(stored)
    }

    fn append_next(
        &self,
        user: &UserId,
        mood: String,
        activities: Vec<String>,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<ProgressEntry, ProgressServiceError> {
        let previous = self.repository.latest_for_user(user)?;
        let streak = next_streak(previous.as_ref().map(ProgressEntry::mark), now, self.policy);

        let entry = ProgressEntry {
            id: ProgressId::generate(),
            user_id: user.clone(),
            recorded_at: now,
            mood,
            activities,
            notes,
            streak,
        };
        Ok(self.repository.append(entry)?)
    }

    /// Drops the user's lock from the table once no other submission holds it.
    fn release_user_lock(&self, user: &UserId, lock: Arc<Mutex<()>>) {
        let mut locks = self
            .user_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        if locks
            .get(user)
            .is_some_and(|held| Arc::strong_count(held) == 1)
        {
            locks.remove(user);
        }
    }

    #[cfg(test)]
    pub(crate) fn tracked_users(&self) -> usize {
        self.user_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// The user's entries, newest first.
    pub fn history(&self, user: &UserId) -> Result<Vec<ProgressEntry>, ProgressServiceError> {
        Ok(self.repository.list_for_user(user, HISTORY_LIMIT)?)
    }

    pub fn latest(&self, user: &UserId) -> Result<Option<ProgressEntry>, ProgressServiceError> {
        Ok(self.repository.latest_for_user(user)?)
    }

    /// Streak still alive at `now`: the latest entry's streak while an entry today or
    /// tomorrow would continue it, otherwise zero.
    pub fn current_streak(
        &self,
        user: &UserId,
        now: DateTime<Utc>,
    ) -> Result<u32, ProgressServiceError> {
        let streak = self
            .repository
            .latest_for_user(user)?
            .filter(|latest| (0..=1).contains(&self.policy.day_gap(latest.recorded_at, now)))
            .map(|latest| latest.streak)
            .unwrap_or(0);
        Ok(streak)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProgressServiceError {
    #[error("mood is required")]
    MissingMood,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
