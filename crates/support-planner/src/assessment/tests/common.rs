use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::{AnswerSet, Question};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::record::{AccessToken, AssessmentRecord};
use crate::assessment::repository::AssessmentRepository;
use crate::assessment::service::AssessmentService;
use crate::assessment::{assessment_router, StrengthMode};
use crate::auth::{SessionVerifier, UserId};
use crate::storage::RepositoryError;

pub(super) const ADA_SESSION: &str = "session-ada";
pub(super) const GRACE_SESSION: &str = "session-grace";

/// Noise is the only elevated answer; every other scored question sits on an
/// unremarkable label.
pub(super) fn quiet_answers() -> AnswerSet {
    [
        (Question::Age, "8-12 years"),
        (Question::Role, "Parent"),
        (Question::Noise, "Very distressed"),
        (Question::Lights, "Not bothered"),
        (Question::Textures, "Flexible"),
        (Question::Clothing, "Not bothered"),
        (Question::EyeContact, "Very comfortable"),
        (Question::Sharing, "Often"),
        (Question::Nonverbal, "Very good"),
        (Question::RoutineChange, "Adapts easily"),
        (Question::Repetitive, "Never"),
        (Question::Interests, "Varied interests"),
        (Question::Verbal, "Full sentences"),
        (Question::Emotions, "Good"),
        (Question::Literal, "Fully understands"),
    ]
    .into_iter()
    .collect()
}

/// Two elevated answers in every category.
pub(super) fn paired_answers() -> AnswerSet {
    [
        (Question::Age, "2-4 years"),
        (Question::Noise, "Very distressed"),
        (Question::Lights, "Sensitive"),
        (Question::EyeContact, "Uncomfortable"),
        (Question::Nonverbal, "Difficult"),
        (Question::RoutineChange, "Distressed"),
        (Question::Repetitive, "Frequent"),
        (Question::Verbal, "Limited words"),
        (Question::Emotions, "Difficult"),
        (Question::Interest, "Music"),
    ]
    .into_iter()
    .collect()
}

/// Every scored question on its strongest label.
pub(super) fn high_need_answers() -> AnswerSet {
    [
        (Question::Noise, "Very distressed"),
        (Question::Lights, "Very sensitive"),
        (Question::Textures, "Very selective"),
        (Question::Clothing, "Cannot tolerate"),
        (Question::EyeContact, "Very uncomfortable"),
        (Question::SocialGreeting, "Rarely responds"),
        (Question::Sharing, "Never"),
        (Question::Nonverbal, "Very difficult"),
        (Question::RoutineChange, "Very distressed"),
        (Question::Repetitive, "Very frequent"),
        (Question::Interests, "All-consuming"),
        (Question::Verbal, "Non-verbal"),
        (Question::Emotions, "Very difficult"),
        (Question::Literal, "Takes everything literally"),
    ]
    .into_iter()
    .collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
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
        let guard = self.records.lock().expect("repository mutex poisoned");
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
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| record.owner.as_ref() == Some(user))
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_token(
        &self,
        _token: &AccessToken,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_user(
        &self,
        _user: &UserId,
        _limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct StaticSessions;

impl SessionVerifier for StaticSessions {
    fn verify(&self, token: &str) -> Option<UserId> {
        match token {
            ADA_SESSION => Some(UserId("ada".to_string())),
            GRACE_SESSION => Some(UserId("grace".to_string())),
            _ => None,
        }
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(
        repository.clone(),
        AssessmentEngine::new(StrengthMode::AnswerRules),
    );
    (service, repository)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service), Arc::new(StaticSessions))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
