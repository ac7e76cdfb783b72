//! Built-in question bank: the bootstrap templates for all three phases.

use once_cell::sync::Lazy;

use super::question::{AnswerOption, Question, QuestionType};
use super::template::AssessmentTemplate;
use crate::domain::foundation::Phase;

/// The built-in BE / DO / HAVE templates, constructed once.
static BUILTIN_TEMPLATES: Lazy<[AssessmentTemplate; 3]> = Lazy::new(|| {
    [
        be_template(),
        do_template(),
        have_template(),
    ]
});

/// Returns the built-in template for a phase.
pub fn builtin_template(phase: Phase) -> &'static AssessmentTemplate {
    match phase {
        Phase::Be => &BUILTIN_TEMPLATES[0],
        Phase::Do => &BUILTIN_TEMPLATES[1],
        Phase::Have => &BUILTIN_TEMPLATES[2],
    }
}

/// Returns all built-in templates in canonical phase order.
pub fn builtin_templates() -> &'static [AssessmentTemplate; 3] {
    &BUILTIN_TEMPLATES
}

fn frequency_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("never", 0),
        AnswerOption::new("rarely", 1),
        AnswerOption::new("monthly", 3),
        AnswerOption::new("weekly", 5),
    ]
}

fn rating_options() -> Vec<AnswerOption> {
    (1u32..=5)
        .map(|n| AnswerOption::new(n.to_string(), n))
        .collect()
}

fn be_template() -> AssessmentTemplate {
    AssessmentTemplate::new(
        "BE: Money Mindset",
        "Identity and mindset around money",
        Phase::Be,
        vec![
            Question::new(
                "be_outlook",
                "How would you describe your outlook on your financial future?",
                QuestionType::SingleChoice,
                vec![
                    AnswerOption::new("anxious", 0),
                    AnswerOption::new("uncertain", 2),
                    AnswerOption::new("hopeful", 4),
                    AnswerOption::new("confident", 5),
                ],
            ),
            Question::new(
                "be_identity",
                "Rate how strongly you identify as someone who manages money well.",
                QuestionType::RatingScale,
                rating_options(),
            ),
            Question::new(
                "be_learning",
                "How often do you spend time learning about personal finance?",
                QuestionType::SingleChoice,
                frequency_options(),
            ),
            Question::new(
                "be_beliefs",
                "Which beliefs about money do you hold?",
                QuestionType::MultiChoice,
                vec![
                    AnswerOption::new("wealth_is_buildable", 3),
                    AnswerOption::new("small_habits_compound", 3),
                    AnswerOption::new("setbacks_are_recoverable", 2),
                    AnswerOption::new("money_talk_is_healthy", 2),
                ],
            ),
            Question::new(
                "be_stress",
                "Rate how well you keep money stress from driving your decisions.",
                QuestionType::RatingScale,
                rating_options(),
            ),
        ],
    )
    .expect("builtin BE template is well-formed")
}

fn do_template() -> AssessmentTemplate {
    AssessmentTemplate::new(
        "DO: Money Habits",
        "Skills and actions applied day to day",
        Phase::Do,
        vec![
            Question::new(
                "do_budget",
                "How often do you review your budget?",
                QuestionType::SingleChoice,
                frequency_options(),
            ),
            Question::new(
                "do_automation",
                "Which money tasks have you automated?",
                QuestionType::MultiChoice,
                vec![
                    AnswerOption::new("savings_transfer", 3),
                    AnswerOption::new("bill_pay", 2),
                    AnswerOption::new("retirement_contribution", 4),
                    AnswerOption::new("debt_payment", 3),
                ],
            ),
            Question::new(
                "do_tracking",
                "How do you track your spending?",
                QuestionType::SingleChoice,
                vec![
                    AnswerOption::new("not_tracking", 0),
                    AnswerOption::new("mental_notes", 1),
                    AnswerOption::new("statements_review", 3),
                    AnswerOption::new("category_budget", 5),
                ],
            ),
            Question::new(
                "do_negotiation",
                "Rate how actively you negotiate recurring costs (rent, rates, subscriptions).",
                QuestionType::RatingScale,
                rating_options(),
            ),
            Question::new(
                "do_planning",
                "Rate how consistently you plan large purchases in advance.",
                QuestionType::RatingScale,
                rating_options(),
            ),
        ],
    )
    .expect("builtin DO template is well-formed")
}

fn have_template() -> AssessmentTemplate {
    AssessmentTemplate::new(
        "HAVE: Financial Results",
        "Results and wealth accumulated so far",
        Phase::Have,
        vec![
            Question::new(
                "have_emergency",
                "How many months of expenses does your emergency fund cover?",
                QuestionType::SingleChoice,
                vec![
                    AnswerOption::new("none", 0),
                    AnswerOption::new("under_one", 1),
                    AnswerOption::new("one_to_three", 3),
                    AnswerOption::new("three_plus", 5),
                ],
            ),
            Question::new(
                "have_debt",
                "How would you describe your non-mortgage debt?",
                QuestionType::SingleChoice,
                vec![
                    AnswerOption::new("growing", 0),
                    AnswerOption::new("flat", 2),
                    AnswerOption::new("shrinking", 4),
                    AnswerOption::new("debt_free", 5),
                ],
            ),
            Question::new(
                "have_accounts",
                "Which of these do you currently hold?",
                QuestionType::MultiChoice,
                vec![
                    AnswerOption::new("retirement_account", 4),
                    AnswerOption::new("brokerage_account", 3),
                    AnswerOption::new("high_yield_savings", 2),
                    AnswerOption::new("insurance_coverage", 2),
                ],
            ),
            Question::new(
                "have_income",
                "Rate the stability of your income over the past year.",
                QuestionType::RatingScale,
                rating_options(),
            ),
            Question::new(
                "have_networth",
                "Rate your confidence that your net worth is moving the right way.",
                QuestionType::RatingScale,
                rating_options(),
            ),
        ],
    )
    .expect("builtin HAVE template is well-formed")
}
