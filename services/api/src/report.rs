use std::fmt::Write;
use support_planner::assessment::catalog::QuestionnaireSection;
use support_planner::assessment::{AnalysisBundle, Category};

pub(crate) fn render_bundle(bundle: &AnalysisBundle) -> String {
    let analysis = &bundle.analysis;
    let mut out = String::new();

    let _ = writeln!(out, "Support needs: {}", analysis.needs_level.label());
    let _ = writeln!(out, "Category scores (total {}):", analysis.scores.total());
    for category in Category::ordered() {
        let _ = writeln!(
            out,
            "- {}: {}",
            category.label(),
            analysis.scores.get(category)
        );
    }

    if analysis.strengths.is_empty() {
        let _ = writeln!(out, "\nStrengths: none identified");
    } else {
        let _ = writeln!(out, "\nStrengths:");
        for strength in &analysis.strengths {
            let _ = writeln!(out, "- {strength}");
        }
    }

    let _ = writeln!(out, "\nRecommendations:");
    for block in &bundle.recommendations {
        let _ = writeln!(out, "{} [{}]", block.category, block.priority.label());
        for item in &block.items {
            let _ = writeln!(out, "  * {}", item.title);
            for suggestion in &item.suggestions {
                let _ = writeln!(out, "      - {suggestion}");
            }
        }
    }

    if let Some(plan) = &bundle.support_plan {
        let _ = writeln!(out, "\nSupport plan around {}:", plan.focus_interest);
        for (heading, lines) in [
            ("Exercises", &plan.exercises),
            ("Diet", &plan.diet),
            ("Motivation", &plan.motivation),
            ("Videos to look up", &plan.video_topics),
        ] {
            let _ = writeln!(out, "  {heading}:");
            for line in lines {
                let _ = writeln!(out, "    - {line}");
            }
        }
    }

    let _ = writeln!(out, "\nTip for today: {}", bundle.daily_tip);
    out
}

pub(crate) fn render_questionnaire(sections: &[QuestionnaireSection]) -> String {
    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "{}", section.title);
        for question in &section.questions {
            let _ = writeln!(out, "  {} ({})", question.text, question.id);
            let _ = writeln!(out, "    options: {}", question.options.join(" | "));
        }
    }
    out
}
