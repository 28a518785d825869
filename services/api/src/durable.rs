//! JSON-lines file stores. Each file is read fully on open and appended on write, so
//! the in-process copy always mirrors the file. A failed append is truncated away.

use crate::infra::{lock, newest_entries_for, newest_owned_by};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use support_planner::assessment::{AccessToken, AssessmentRecord, AssessmentRepository};
use support_planner::auth::UserId;
use support_planner::progress::{ProgressEntry, ProgressRepository};
use support_planner::storage::RepositoryError;
use tracing::{error, warn};

pub(crate) const ASSESSMENTS_FILE: &str = "assessments.jsonl";
pub(crate) const PROGRESS_FILE: &str = "progress.jsonl";

#[derive(Debug, thiserror::Error)]
pub(crate) enum DurableStoreError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} line {line} is not a valid record: {source}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

struct JsonlLog<T> {
    path: PathBuf,
    items: Mutex<Vec<T>>,
}

impl<T> JsonlLog<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Loads every record. An unparseable final line is a torn append: it is logged,
    /// cut from the file, and the store opens with the records before it.
    fn open(dir: &Path, file_name: &str) -> Result<Self, DurableStoreError> {
        let path = dir.join(file_name);
        let io_error = |source| DurableStoreError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(io_error)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&path)
            .map_err(io_error)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(io_error)?;

        let lines: Vec<&str> = contents.split_inclusive('\n').collect();
        let last_record = lines.iter().rposition(|line| !line.trim().is_empty());

        let mut items = Vec::new();
        let mut intact_len = 0;
        for (index, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            if !line.is_empty() {
                match serde_json::from_str(line) {
                    Ok(item) => items.push(item),
                    Err(source) if Some(index) == last_record => {
                        warn!(
                            path = %path.display(),
                            line = index + 1,
                            %source,
                            "dropping torn record at end of file"
                        );
                        file.set_len(intact_len as u64).map_err(io_error)?;
                        break;
                    }
                    Err(source) => {
                        return Err(DurableStoreError::Corrupt {
                            path: path.clone(),
                            line: index + 1,
                            source,
                        })
                    }
                }
            }
            intact_len += raw.len();
        }

        if intact_len == contents.len() && !contents.is_empty() && !contents.ends_with('\n') {
            file.write_all(b"\n").map_err(io_error)?;
        }

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    fn append(&self, item: &T) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.items)?;
        let mut line =
            serde_json::to_string(item).map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| unavailable(&self.path, err))?;
        let committed = file
            .metadata()
            .map_err(|err| unavailable(&self.path, err))?
            .len();

        if let Err(err) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            if let Err(rollback) = file.set_len(committed) {
                error!(path = %self.path.display(), %rollback, "failed to roll back partial append");
            }
            return Err(unavailable(&self.path, err));
        }

        guard.push(item.clone());
        Ok(())
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> RepositoryError {
    RepositoryError::Unavailable(format!("{}: {err}", path.display()))
}

pub(crate) struct JsonlAssessmentStore {
    log: JsonlLog<AssessmentRecord>,
}

impl JsonlAssessmentStore {
    pub(crate) fn open(dir: &Path) -> Result<Self, DurableStoreError> {
        Ok(Self {
            log: JsonlLog::open(dir, ASSESSMENTS_FILE)?,
        })
    }
}

impl AssessmentRepository for JsonlAssessmentStore {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        if self.find_by_token(&record.access_token)?.is_some() {
            return Err(RepositoryError::Conflict);
        }
        self.log.append(&record)?;
        Ok(record)
    }

    fn find_by_token(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = lock(&self.log.items)?;
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
        let guard = lock(&self.log.items)?;
        Ok(newest_owned_by(guard.iter(), user, limit))
    }
}

pub(crate) struct JsonlProgressStore {
    log: JsonlLog<ProgressEntry>,
}

impl JsonlProgressStore {
    pub(crate) fn open(dir: &Path) -> Result<Self, DurableStoreError> {
        Ok(Self {
            log: JsonlLog::open(dir, PROGRESS_FILE)?,
        })
    }
}

impl ProgressRepository for JsonlProgressStore {
    fn append(&self, entry: ProgressEntry) -> Result<ProgressEntry, RepositoryError> {
        self.log.append(&entry)?;
        Ok(entry)
    }

    fn latest_for_user(&self, user: &UserId) -> Result<Option<ProgressEntry>, RepositoryError> {
        let guard = lock(&self.log.items)?;
        Ok(guard.iter().rev().find(|entry| &entry.user_id == user).cloned())
    }

    fn list_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<ProgressEntry>, RepositoryError> {
        let guard = lock(&self.log.items)?;
        Ok(newest_entries_for(guard.iter(), user, limit))
    }
}
