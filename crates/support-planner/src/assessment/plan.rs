use super::answers::{AnswerSet, Question};
use super::tier::NeedsTier;
use serde::{Deserialize, Serialize};

/// Interest-led plan shown next to the recommendation blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportPlan {
    pub focus_interest: String,
    pub exercises: Vec<String>,
    pub diet: Vec<String>,
    pub motivation: Vec<String>,
    pub video_topics: Vec<String>,
}

struct InterestPlan {
    interest: &'static str,
    exercises: &'static [&'static str],
    motivation: &'static [&'static str],
    video_topics: &'static [&'static str],
}

const INTEREST_PLANS: &[InterestPlan] = &[
    InterestPlan {
        interest: "Music",
        exercises: &[
            "Clap or drum simple rhythms together and take turns copying them",
            "Use a favorite song as a transition signal between activities",
            "Move to music with freeze-dance pauses to practice self-regulation",
        ],
        motivation: &["Let a short listening session be the reward after a hard task"],
        video_topics: &["music therapy activities at home", "rhythm games for kids"],
    },
    InterestPlan {
        interest: "Drawing / Art",
        exercises: &[
            "Draw the day's schedule as a picture sequence",
            "Use color to label feelings in a simple feelings journal",
            "Try tactile art such as clay or finger paint for sensory input",
        ],
        motivation: &["Display finished artwork where the whole family can see it"],
        video_topics: &["art therapy exercises", "visual schedule drawing ideas"],
    },
    InterestPlan {
        interest: "Sports",
        exercises: &[
            "Practice one skill drill with clear, repeatable steps",
            "Take a daily walk or jog at a consistent time",
            "Use ball games to practice turn-taking",
        ],
        motivation: &["Track personal bests on a chart and celebrate improvements"],
        video_topics: &["adaptive sports for kids", "simple coordination drills"],
    },
    InterestPlan {
        interest: "Technology",
        exercises: &[
            "Build a small coding project in a block-based language",
            "Use a timer app to structure work and break periods",
            "Explore how a household gadget works, then explain it back",
        ],
        motivation: &["Earn screen time for a chosen app by finishing planned tasks"],
        video_topics: &["beginner coding for kids", "how things work explainers"],
    },
    InterestPlan {
        interest: "Storytelling / Reading",
        exercises: &[
            "Read a short story together and talk about how characters feel",
            "Write or dictate a social story for an upcoming event",
            "Act out a favorite scene to practice conversation",
        ],
        motivation: &["Choose the next book together after a week of reading goals"],
        video_topics: &["social stories examples", "read-aloud storytelling"],
    },
    InterestPlan {
        interest: "Building / Puzzles",
        exercises: &[
            "Follow a step-by-step building plan to practice sequencing",
            "Solve a puzzle together, taking turns placing pieces",
            "Build a model of a place you will visit to prepare for it",
        ],
        motivation: &["Add a new puzzle or building set to a progress reward chart"],
        video_topics: &["STEM building challenges", "logic puzzles for kids"],
    },
];

const SHARED_DIET: &[&str] = &[
    "Keep regular meal and snack times",
    "Offer one new food next to a familiar favorite",
    "Keep water available throughout the day",
];

const fn pacing(tier: NeedsTier) -> &'static str {
    match tier {
        NeedsTier::High => "Keep sessions short and predictable, and stop before frustration builds",
        NeedsTier::Moderate => "Aim for one focused session a day with a clear end point",
        NeedsTier::Low | NeedsTier::Mild => {
            "Let the individual choose when and how long to practice"
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Plan keyed by the preferred-activity selector. `None` when it was not answered
/// with a catalog option.
pub fn support_plan(answers: &AnswerSet, tier: NeedsTier) -> Option<SupportPlan> {
    let interest = answers.get(Question::Interest)?;
    let plan = INTEREST_PLANS.iter().find(|plan| plan.interest == interest)?;

    let mut motivation = vec![pacing(tier).to_string()];
    motivation.extend(owned(plan.motivation));

    Some(SupportPlan {
        focus_interest: plan.interest.to_string(),
        exercises: owned(plan.exercises),
        diet: owned(SHARED_DIET),
        motivation,
        video_topics: owned(plan.video_topics),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog;

    #[test]
    fn every_catalog_interest_has_a_plan() {
        for option in catalog::options(Question::Interest) {
            let answers = AnswerSet::new().with(Question::Interest, option);
            let plan = support_plan(&answers, NeedsTier::Low).expect("plan for catalog option");
            assert_eq!(plan.focus_interest, *option);
            assert!(!plan.exercises.is_empty());
            assert!(!plan.video_topics.is_empty());
        }
    }

    #[test]
    fn no_plan_without_interest() {
        assert!(support_plan(&AnswerSet::new(), NeedsTier::High).is_none());
        let answers = AnswerSet::new().with(Question::Interest, "Gardening");
        assert!(support_plan(&answers, NeedsTier::High).is_none());
    }

    #[test]
    fn pacing_line_leads_motivation() {
        let answers = AnswerSet::new().with(Question::Interest, "Music");
        let high = support_plan(&answers, NeedsTier::High).expect("plan");
        let low = support_plan(&answers, NeedsTier::Low).expect("plan");
        assert!(high.motivation[0].contains("short and predictable"));
        assert_ne!(high.motivation[0], low.motivation[0]);
        assert_eq!(high.motivation[1..], low.motivation[1..]);
    }
}
