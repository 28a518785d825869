use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::streak::StreakMark;
use crate::auth::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressId(pub Uuid);

impl ProgressId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Client payload for one daily entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressSubmission {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Append-only daily entry. The streak is fixed when the entry is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: ProgressId,
    pub user_id: UserId,
    pub recorded_at: DateTime<Utc>,
    pub mood: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub streak: u32,
}

impl ProgressEntry {
    pub fn mark(&self) -> StreakMark {
        StreakMark {
            streak: self.streak,
            recorded_at: self.recorded_at,
        }
    }

    pub fn view(&self) -> ProgressEntryView<'_> {
        ProgressEntryView {
            entry: self,
            mood_score: mood_score(&self.mood),
        }
    }
}

/// Entry as returned over HTTP, with the chart value attached.
#[derive(Debug, Serialize)]
pub struct ProgressEntryView<'a> {
    #[serde(flatten)]
    pub entry: &'a ProgressEntry,
    pub mood_score: u8,
}

/// Chart value for a free-text mood label. First keyword wins; unrecognized moods sit
/// in the middle of the scale.
pub fn mood_score(mood: &str) -> u8 {
    let mood = mood.to_lowercase();
    if mood.contains("happy") {
        5
    } else if mood.contains("calm") {
        4
    } else if mood.contains("okay") {
        3
    } else if mood.contains("sad") {
        2
    } else if mood.contains("angry") || mood.contains("anxious") {
        1
    } else {
        3
    }
}
