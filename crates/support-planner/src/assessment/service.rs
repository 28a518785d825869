use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::answers::AnswerSet;
use super::engine::AssessmentEngine;
use super::record::{AccessToken, AssessmentRecord, Respondent};
use super::repository::AssessmentRepository;
use crate::auth::UserId;
use crate::storage::RepositoryError;

pub const HISTORY_LIMIT: usize = 50;

/// Service composing the engine with a repository.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: AssessmentEngine,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: AssessmentEngine) -> Self {
        Self { repository, engine }
    }

    /// Analyze an answer set and persist the resulting record.
    pub fn analyze(
        &self,
        answers: AnswerSet,
        respondent: Respondent,
        now: DateTime<Utc>,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        if answers.is_empty() {
            return Err(AssessmentServiceError::EmptyAnswers);
        }

        let bundle = self.engine.analyze(&answers);
        let record = AssessmentRecord::new(respondent, answers, bundle, now);
        let stored = self.repository.insert(record)?;

        info!(
            assessment_id = %stored.id.0,
            needs_level = stored.analysis.needs_level.label(),
            blocks = stored.recommendations.len(),
            owned = stored.owner.is_some(),
            "assessment recorded"
        );
        Ok(stored)
    }

    /// Look up a record by its access token; an unknown token is `Ok(None)`.
    pub fn fetch_by_token(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AssessmentRecord>, AssessmentServiceError> {
        let record = self.repository.find_by_token(token)?;
        if record.is_none() {
            debug!("no assessment for presented token");
        }
        Ok(record)
    }

    /// A user's assessments, newest first.
    pub fn history(&self, user: &UserId) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.list_for_user(user, HISTORY_LIMIT)?)
    }

    pub fn latest(&self, user: &UserId) -> Result<Option<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.list_for_user(user, 1)?.into_iter().next())
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("no responses provided")]
    EmptyAnswers,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
