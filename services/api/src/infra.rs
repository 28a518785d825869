use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use support_planner::assessment::{AccessToken, AssessmentRecord, AssessmentRepository};
use support_planner::auth::{SessionVerifier, UserId};
use support_planner::config::AuthConfig;
use support_planner::progress::{ProgressEntry, ProgressRepository};
use support_planner::storage::RepositoryError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) storage: &'static str,
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("store lock poisoned".to_string()))
}

/// Process-local store. Records live in insertion order; listings walk it backwards.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentStore {
    records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentStore {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard
            .iter()
            .any(|existing| existing.access_token == record.access_token)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn find_by_token(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard
            .iter()
            .find(|record| &record.access_token == token)
            .cloned())
    }

    fn list_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(newest_owned_by(guard.iter(), user, limit))
    }
}

pub(crate) fn newest_owned_by<'a>(
    records: impl DoubleEndedIterator<Item = &'a AssessmentRecord>,
    user: &UserId,
    limit: usize,
) -> Vec<AssessmentRecord> {
    records
        .rev()
        .filter(|record| record.owner.as_ref() == Some(user))
        .take(limit)
        .cloned()
        .collect()
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProgressStore {
    entries: Arc<Mutex<Vec<ProgressEntry>>>,
}

impl ProgressRepository for InMemoryProgressStore {
    fn append(&self, entry: ProgressEntry) -> Result<ProgressEntry, RepositoryError> {
        lock(&self.entries)?.push(entry.clone());
        Ok(entry)
    }

    fn latest_for_user(&self, user: &UserId) -> Result<Option<ProgressEntry>, RepositoryError> {
        let guard = lock(&self.entries)?;
        Ok(guard.iter().rev().find(|entry| &entry.user_id == user).cloned())
    }

    fn list_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<ProgressEntry>, RepositoryError> {
        let guard = lock(&self.entries)?;
        Ok(newest_entries_for(guard.iter(), user, limit))
    }
}

pub(crate) fn newest_entries_for<'a>(
    entries: impl DoubleEndedIterator<Item = &'a ProgressEntry>,
    user: &UserId,
    limit: usize,
) -> Vec<ProgressEntry> {
    entries
        .rev()
        .filter(|entry| &entry.user_id == user)
        .take(limit)
        .cloned()
        .collect()
}

/// Session table loaded from configuration.
#[derive(Debug, Default, Clone)]
pub(crate) struct StaticSessionVerifier {
    sessions: BTreeMap<String, UserId>,
}

impl StaticSessionVerifier {
    pub(crate) fn from_config(config: &AuthConfig) -> Self {
        Self {
            sessions: config.sessions.clone(),
        }
    }
}

impl SessionVerifier for StaticSessionVerifier {
    fn verify(&self, token: &str) -> Option<UserId> {
        self.sessions.get(token).cloned()
    }
}
