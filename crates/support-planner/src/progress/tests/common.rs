use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::auth::{SessionVerifier, UserId};
use crate::progress::domain::{ProgressEntry, ProgressSubmission};
use crate::progress::repository::ProgressRepository;
use crate::progress::service::ProgressService;
use crate::progress::streak::StreakPolicy;
use crate::storage::RepositoryError;

pub(super) const SESSION: &str = "session-sam";

pub(super) fn sam() -> UserId {
    UserId("sam".to_string())
}

pub(super) fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
}

pub(super) fn submission(mood: &str) -> ProgressSubmission {
    ProgressSubmission {
        mood: Some(mood.to_string()),
        activities: vec!["Walk".to_string(), "  ".to_string(), " Drawing ".to_string()],
        notes: Some("  ".to_string()),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) entries: Arc<Mutex<Vec<ProgressEntry>>>,
}

impl ProgressRepository for MemoryRepository {
    fn append(&self, entry: ProgressEntry) -> Result<ProgressEntry, RepositoryError> {
        self.entries
            .lock()
            .expect("repository mutex poisoned")
            .push(entry.clone());
        Ok(entry)
    }

    fn latest_for_user(&self, user: &UserId) -> Result<Option<ProgressEntry>, RepositoryError> {
        let guard = self.entries.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().find(|entry| &entry.user_id == user).cloned())
    }

    fn list_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<ProgressEntry>, RepositoryError> {
        let guard = self.entries.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|entry| &entry.user_id == user)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl ProgressRepository for UnavailableRepository {
    fn append(&self, _entry: ProgressEntry) -> Result<ProgressEntry, RepositoryError> {
        Err(RepositoryError::Unavailable("disk full".to_string()))
    }

    fn latest_for_user(&self, _user: &UserId) -> Result<Option<ProgressEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("disk full".to_string()))
    }

    fn list_for_user(
        &self,
        _user: &UserId,
        _limit: usize,
    ) -> Result<Vec<ProgressEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("disk full".to_string()))
    }
}

pub(super) struct SingleSession;

impl SessionVerifier for SingleSession {
    fn verify(&self, token: &str) -> Option<UserId> {
        (token == SESSION).then(sam)
    }
}

pub(super) fn build_service(
    policy: StreakPolicy,
) -> (ProgressService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    (ProgressService::new(repository.clone(), policy), repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
