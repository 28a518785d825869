use super::record::{AccessToken, AssessmentRecord};
use crate::auth::UserId;
use crate::storage::RepositoryError;

/// Storage abstraction so the service can run against any backing store.
///
/// Implementations must return `list_for_user` newest first and treat an unknown
/// token as `Ok(None)`.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn find_by_token(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn list_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}
