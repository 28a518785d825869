use super::answers::Question;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Select,
    Scale,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionTemplate {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireSection {
    pub title: &'static str,
    pub questions: Vec<QuestionTemplate>,
}

const AGE_OPTIONS: &[&str] = &["2-4 years", "5-7 years", "8-12 years", "13-17 years", "18+ years"];

const ROLE_OPTIONS: &[&str] = &["Parent", "Caregiver", "Educator", "Self-assessment"];

const EYE_CONTACT_OPTIONS: &[&str] = &[
    "Very uncomfortable",
    "Uncomfortable",
    "Neutral",
    "Comfortable",
    "Very comfortable",
];

const SOCIAL_GREETING_OPTIONS: &[&str] = &[
    "Rarely responds",
    "Sometimes responds",
    "Usually responds",
    "Always responds",
    "Initiates greetings",
];

const SHARING_OPTIONS: &[&str] = &["Never", "Rarely", "Sometimes", "Often", "Always"];

const NONVERBAL_OPTIONS: &[&str] = &[
    "Very difficult",
    "Difficult",
    "Moderate",
    "Good",
    "Very good",
];

const NOISE_OPTIONS: &[&str] = &[
    "Very distressed",
    "Distressed",
    "Mildly bothered",
    "Unbothered",
    "Doesn't notice",
];

const LIGHTS_OPTIONS: &[&str] = &[
    "Very sensitive",
    "Sensitive",
    "Sometimes bothered",
    "Rarely bothered",
    "Not bothered",
];

const TEXTURES_OPTIONS: &[&str] = &[
    "Very selective",
    "Selective",
    "Somewhat selective",
    "Flexible",
    "Very flexible",
];

const CLOTHING_OPTIONS: &[&str] = &[
    "Cannot tolerate",
    "Very bothered",
    "Sometimes bothered",
    "Rarely bothered",
    "Not bothered",
];

const ROUTINE_CHANGE_OPTIONS: &[&str] = &[
    "Very distressed",
    "Distressed",
    "Mildly upset",
    "Adapts with support",
    "Adapts easily",
];

const REPETITIVE_OPTIONS: &[&str] = &["Very frequent", "Frequent", "Occasional", "Rare", "Never"];

const INTERESTS_OPTIONS: &[&str] = &[
    "All-consuming",
    "Very intense",
    "Moderate",
    "Mild",
    "Varied interests",
];

const VERBAL_OPTIONS: &[&str] = &[
    "Non-verbal",
    "Limited words",
    "Simple sentences",
    "Full sentences",
    "Advanced vocabulary",
];

const EMOTIONS_OPTIONS: &[&str] = &["Very difficult", "Difficult", "Moderate", "Good", "Very good"];

const LITERAL_OPTIONS: &[&str] = &[
    "Takes everything literally",
    "Usually literal",
    "Sometimes understands",
    "Often understands",
    "Fully understands",
];

const INTEREST_OPTIONS: &[&str] = &[
    "Music",
    "Drawing / Art",
    "Sports",
    "Technology",
    "Storytelling / Reading",
    "Building / Puzzles",
];

fn template(question: Question) -> QuestionTemplate {
    let (text, kind, options) = match question {
        Question::Age => ("Age Group", QuestionKind::Select, AGE_OPTIONS),
        Question::Role => ("Your Role", QuestionKind::Select, ROLE_OPTIONS),
        Question::EyeContact => (
            "How comfortable with making eye contact during conversation?",
            QuestionKind::Scale,
            EYE_CONTACT_OPTIONS,
        ),
        Question::SocialGreeting => (
            "Response to social greetings (hello, goodbye)?",
            QuestionKind::Scale,
            SOCIAL_GREETING_OPTIONS,
        ),
        Question::Sharing => (
            "Shows interest in sharing experiences with others?",
            QuestionKind::Scale,
            SHARING_OPTIONS,
        ),
        Question::Nonverbal => (
            "Understanding non-verbal cues (facial expressions, body language)?",
            QuestionKind::Scale,
            NONVERBAL_OPTIONS,
        ),
        Question::Noise => (
            "Reaction to loud or unexpected noises?",
            QuestionKind::Scale,
            NOISE_OPTIONS,
        ),
        Question::Lights => (
            "Response to bright lights or visual patterns?",
            QuestionKind::Scale,
            LIGHTS_OPTIONS,
        ),
        Question::Textures => (
            "Reaction to different food textures?",
            QuestionKind::Scale,
            TEXTURES_OPTIONS,
        ),
        Question::Clothing => (
            "Reaction to clothing tags, seams, or fabrics?",
            QuestionKind::Scale,
            CLOTHING_OPTIONS,
        ),
        Question::RoutineChange => (
            "Response to changes in routine or schedule?",
            QuestionKind::Scale,
            ROUTINE_CHANGE_OPTIONS,
        ),
        Question::Repetitive => (
            "Engagement in repetitive behaviors or movements?",
            QuestionKind::Scale,
            REPETITIVE_OPTIONS,
        ),
        Question::Interests => (
            "Intensity of focus on specific interests or topics?",
            QuestionKind::Scale,
            INTERESTS_OPTIONS,
        ),
        Question::Verbal => (
            "Verbal communication comfort level?",
            QuestionKind::Scale,
            VERBAL_OPTIONS,
        ),
        Question::Emotions => (
            "Ability to express emotions and feelings?",
            QuestionKind::Scale,
            EMOTIONS_OPTIONS,
        ),
        Question::Literal => (
            "Understanding of figurative language (jokes, sarcasm)?",
            QuestionKind::Scale,
            LITERAL_OPTIONS,
        ),
        Question::Interest => (
            "Which activity does the individual enjoy most?",
            QuestionKind::Select,
            INTEREST_OPTIONS,
        ),
    };

    QuestionTemplate {
        id: question.id(),
        text,
        kind,
        options,
    }
}

fn section(title: &'static str, questions: &[Question]) -> QuestionnaireSection {
    QuestionnaireSection {
        title,
        questions: questions.iter().copied().map(template).collect(),
    }
}

/// The questionnaire in presentation order.
pub fn questionnaire() -> Vec<QuestionnaireSection> {
    vec![
        section("Basic Information", &[Question::Age, Question::Role]),
        section(
            "Social Communication",
            &[
                Question::EyeContact,
                Question::SocialGreeting,
                Question::Sharing,
                Question::Nonverbal,
            ],
        ),
        section(
            "Sensory Processing",
            &[
                Question::Noise,
                Question::Lights,
                Question::Textures,
                Question::Clothing,
            ],
        ),
        section(
            "Behavioral Patterns & Routines",
            &[
                Question::RoutineChange,
                Question::Repetitive,
                Question::Interests,
            ],
        ),
        section(
            "Communication & Expression",
            &[Question::Verbal, Question::Emotions, Question::Literal],
        ),
        section("Interests & Skills", &[Question::Interest]),
    ]
}

pub fn options(question: Question) -> &'static [&'static str] {
    template(question).options
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_question_appears_exactly_once() {
        let ids: Vec<&str> = questionnaire()
            .iter()
            .flat_map(|section| section.questions.iter().map(|question| question.id))
            .collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), Question::ordered().len());
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn has_six_sections() {
        let sections = questionnaire();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[0].title, "Basic Information");
        assert_eq!(sections[5].questions[0].id, "interest");
    }
}
