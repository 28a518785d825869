use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Question identifiers understood by the engine. Answer sets may carry other keys; they are
/// stored with the record but never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    Age,
    Role,
    EyeContact,
    SocialGreeting,
    Sharing,
    Nonverbal,
    Noise,
    Lights,
    Textures,
    Clothing,
    RoutineChange,
    Repetitive,
    Interests,
    Verbal,
    Emotions,
    Literal,
    Interest,
}

impl Question {
    pub const fn ordered() -> [Self; 17] {
        [
            Self::Age,
            Self::Role,
            Self::EyeContact,
            Self::SocialGreeting,
            Self::Sharing,
            Self::Nonverbal,
            Self::Noise,
            Self::Lights,
            Self::Textures,
            Self::Clothing,
            Self::RoutineChange,
            Self::Repetitive,
            Self::Interests,
            Self::Verbal,
            Self::Emotions,
            Self::Literal,
            Self::Interest,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Role => "role",
            Self::EyeContact => "eye_contact",
            Self::SocialGreeting => "social_greeting",
            Self::Sharing => "sharing",
            Self::Nonverbal => "nonverbal",
            Self::Noise => "noise",
            Self::Lights => "lights",
            Self::Textures => "textures",
            Self::Clothing => "clothing",
            Self::RoutineChange => "routine_change",
            Self::Repetitive => "repetitive",
            Self::Interests => "interests",
            Self::Verbal => "verbal",
            Self::Emotions => "emotions",
            Self::Literal => "literal",
            Self::Interest => "interest",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|question| question.id() == id)
    }
}

/// One respondent's answers, keyed by question id. `null` values are dropped on
/// deserialization and read as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(id, answer)| answer.map(|answer| (id, answer)))
            .collect())
    }
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by tests and the CLI.
    pub fn with(mut self, question: Question, answer: &str) -> Self {
        self.insert(question, answer);
        self
    }

    pub fn insert(&mut self, question: Question, answer: &str) {
        self.0.insert(question.id().to_string(), answer.to_string());
    }

    /// The answer exactly as given, or `None` when the question is missing or blank.
    /// Labels are matched verbatim.
    pub fn get(&self, question: Question) -> Option<&str> {
        self.0
            .get(question.id())
            .map(String::as_str)
            .filter(|answer| !answer.trim().is_empty())
    }

    pub fn is_any(&self, question: Question, labels: &[&str]) -> bool {
        self.get(question)
            .map(|answer| labels.contains(&answer))
            .unwrap_or(false)
    }

    /// True when no question carries a non-blank answer.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|answer| answer.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, answer)| (id.as_str(), answer.as_str()))
    }
}

impl FromIterator<(String, String)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(Question, &'a str)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (Question, &'a str)>>(iter: T) -> Self {
        let mut answers = AnswerSet::new();
        for (question, answer) in iter {
            answers.insert(question, answer);
        }
        answers
    }
}
