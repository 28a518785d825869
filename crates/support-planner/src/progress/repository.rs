use super::domain::ProgressEntry;
use crate::auth::UserId;
use crate::storage::RepositoryError;

/// Append-only store of progress entries. Listings are newest first.
pub trait ProgressRepository: Send + Sync {
    fn append(&self, entry: ProgressEntry) -> Result<ProgressEntry, RepositoryError>;
    fn latest_for_user(&self, user: &UserId) -> Result<Option<ProgressEntry>, RepositoryError>;
    fn list_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<ProgressEntry>, RepositoryError>;
}
