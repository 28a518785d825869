use super::answers::{AnswerSet, Question};

/// How strengths are detected. The modes are alternatives and are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrengthMode {
    /// Pattern rules over the scored questionnaire answers.
    #[default]
    AnswerRules,
    /// One statement keyed by the preferred-activity selector.
    PreferredActivity,
}

struct StrengthRule {
    statement: &'static str,
    matches: fn(&AnswerSet) -> bool,
}

const ANSWER_RULES: &[StrengthRule] = &[
    StrengthRule {
        statement: "Deep focus and expertise in areas of interest",
        matches: |answers| answers.is_any(Question::Interests, &["All-consuming", "Very intense"]),
    },
    StrengthRule {
        statement: "Flexibility and adaptability",
        matches: |answers| {
            answers.is_any(Question::RoutineChange, &["Adapts easily"])
                || answers.is_any(Question::Repetitive, &["Never"])
        },
    },
    StrengthRule {
        statement: "Strong verbal communication abilities",
        matches: |answers| {
            answers.is_any(Question::Verbal, &["Advanced vocabulary", "Full sentences"])
        },
    },
    StrengthRule {
        statement: "Good understanding of social cues",
        matches: |answers| answers.is_any(Question::Nonverbal, &["Very good", "Good"]),
    },
    StrengthRule {
        statement: "Emotional awareness and expression",
        matches: |answers| answers.is_any(Question::Emotions, &["Very good", "Good"]),
    },
];

pub(crate) fn interest_strength(interest: &str) -> Option<&'static str> {
    let statement = match interest {
        "Music" => "Strong auditory sensitivity and rhythm awareness",
        "Drawing / Art" => "Creative visual thinking and attention to detail",
        "Sports" => "Physical coordination and energy for active play",
        "Technology" => "Logical thinking and systematic problem solving",
        "Storytelling / Reading" => "Rich imagination and language appreciation",
        "Building / Puzzles" => "Spatial reasoning and persistence with hands-on tasks",
        _ => return None,
    };
    Some(statement)
}

/// Returns strength statements in rule order. Each rule fires at most once.
pub fn identify(answers: &AnswerSet, mode: StrengthMode) -> Vec<&'static str> {
    match mode {
        StrengthMode::AnswerRules => ANSWER_RULES
            .iter()
            .filter(|rule| (rule.matches)(answers))
            .map(|rule| rule.statement)
            .collect(),
        StrengthMode::PreferredActivity => answers
            .get(Question::Interest)
            .and_then(interest_strength)
            .into_iter()
            .collect(),
    }
}
