//! Mock data generator
//!
//! Deterministic-shape, randomized-content generation of surveys, users,
//! and responses from fixed template tables. When an LLM backend is
//! configured it is used as a best-effort substitute; any failure falls
//! back to the canned templates with no side effects.

pub mod llm;
pub mod templates;

use chrono::{Duration, Utc};
use llm::LlmBackend;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::models::{
    AnswerValue, Question, QuestionKind, ScaleLabels, Survey, SurveyResponse, ThankYouNote, User,
    UserRole,
};
use std::collections::BTreeMap;
use templates::*;

pub struct DataGenerator {
    llm: Option<LlmBackend>,
}

impl DataGenerator {
    /// Build a generator, enabling the LLM path when an API key is present
    pub fn from_env() -> Self {
        let llm = LlmBackend::from_env();
        if llm.is_none() {
            tracing::info!("no LLM API key found, using template data generation");
        }
        Self { llm }
    }

    pub fn templates_only() -> Self {
        Self { llm: None }
    }

    /// Generate surveys from the named archetypes, capped at the archetype
    /// count. Local ids are sequential (`survey_1`, ...).
    pub async fn generate_surveys(&self, count: usize) -> Vec<Survey> {
        let count = count.min(SURVEY_ARCHETYPES.len());
        let mut surveys = Vec::with_capacity(count);

        for (i, (name, context)) in SURVEY_ARCHETYPES.iter().take(count).enumerate() {
            let questions = match &self.llm {
                Some(backend) => match backend.generate_questions(name, context).await {
                    Some(questions) => questions,
                    None => mock_questions(),
                },
                None => mock_questions(),
            };

            let mut rng = rand::thread_rng();
            let (headline, subheader) = THANK_YOU_VARIANTS
                .choose(&mut rng)
                .copied()
                .unwrap_or(THANK_YOU_VARIANTS[0]);
            let created_at = Utc::now() - Duration::days(rng.gen_range(1..=30));

            surveys.push(Survey {
                id: format!("survey_{}", i + 1),
                name: (*name).to_string(),
                survey_type: "link".to_string(),
                questions,
                status: "inProgress".to_string(),
                thank_you_card: ThankYouNote {
                    headline: headline.to_string(),
                    subheader: subheader.to_string(),
                },
                created_at,
                updated_at: Utc::now(),
            });
        }

        surveys
    }

    /// Generate users; the first two are owners, the rest managers
    pub fn generate_users(&self, count: usize) -> Vec<User> {
        let mut rng = rand::thread_rng();
        let mut users = Vec::with_capacity(count);

        for i in 0..count {
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Smith");
            let company = COMPANIES.choose(&mut rng).copied().unwrap_or("TechCorp");
            let domain = DOMAINS.choose(&mut rng).copied().unwrap_or("com");

            users.push(User {
                id: format!("user_{}", i + 1),
                name: format!("{first} {last}"),
                email: format!(
                    "{}.{}@{}.{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    company.to_lowercase(),
                    domain
                ),
                role: if i < 2 { UserRole::Owner } else { UserRole::Manager },
                company: company.to_string(),
                created_at: Utc::now() - Duration::days(rng.gen_range(30..=365)),
                last_login: Utc::now() - Duration::hours(rng.gen_range(1..=72)),
            });
        }

        users
    }

    /// Generate one to three responses per survey, respondents drawn
    /// without replacement from the user set
    pub async fn generate_responses(
        &self,
        surveys: &[Survey],
        users: &[User],
    ) -> Vec<SurveyResponse> {
        let mut responses = Vec::new();
        let mut response_id = 1usize;

        for survey in surveys {
            if users.is_empty() {
                break;
            }
            let (respondents, num_responses) = {
                let mut rng = rand::thread_rng();
                let mut shuffled: Vec<&User> = users.iter().collect();
                shuffled.shuffle(&mut rng);
                let n = rng.gen_range(1..=3usize.min(users.len()));
                (shuffled, n)
            };

            for user in respondents.into_iter().take(num_responses) {
                let data = match &self.llm {
                    Some(backend) => match backend.generate_answers(survey, user).await {
                        Some(data) => data,
                        None => mock_answers(survey),
                    },
                    None => mock_answers(survey),
                };

                let mut rng = rand::thread_rng();
                responses.push(SurveyResponse {
                    id: format!("response_{response_id}"),
                    survey_id: survey.id.clone(),
                    user_id: Some(user.id.clone()),
                    created_at: Utc::now() - Duration::hours(rng.gen_range(1..=168)),
                    data,
                    ttc: rng.gen_range(30..=300),
                });
                response_id += 1;
            }
        }

        responses
    }
}

/// Pick 3-5 template questions with a weighted kind mix, ids `q1..qn`
fn mock_questions() -> Vec<Question> {
    let mut rng = rand::thread_rng();
    let num_questions = rng.gen_range(3..=5usize);
    let mut questions = Vec::with_capacity(num_questions);

    for i in 0..num_questions {
        let id = format!("q{}", i + 1);
        // Weighted kind selection: rating 0.4, multiple choice 0.3, open text 0.3
        let roll: f64 = rng.r#gen();
        let question = if roll < 0.4 {
            let t = &RATING_TEMPLATES[rng.gen_range(0..RATING_TEMPLATES.len())];
            Question {
                id,
                headline: t.headline.to_string(),
                required: t.required,
                kind: QuestionKind::Rating {
                    range: t.range,
                    labels: ScaleLabels {
                        left: t.left.to_string(),
                        right: t.right.to_string(),
                    },
                },
            }
        } else if roll < 0.7 {
            let t = &CHOICE_TEMPLATES[rng.gen_range(0..CHOICE_TEMPLATES.len())];
            Question {
                id,
                headline: t.headline.to_string(),
                required: t.required,
                kind: QuestionKind::MultipleChoice {
                    choices: t.choices.iter().map(|c| (*c).to_string()).collect(),
                },
            }
        } else {
            let (headline, placeholder) = OPEN_TEXT_TEMPLATES
                [rng.gen_range(0..OPEN_TEXT_TEMPLATES.len())];
            Question {
                id,
                headline: headline.to_string(),
                required: false,
                kind: QuestionKind::OpenText {
                    placeholder: placeholder.to_string(),
                },
            }
        };
        questions.push(question);
    }

    questions
}

/// Synthesize an answer per question from the canned tables
fn mock_answers(survey: &Survey) -> BTreeMap<String, AnswerValue> {
    let mut rng = rand::thread_rng();
    let mut data = BTreeMap::new();

    for question in &survey.questions {
        let answer = match &question.kind {
            QuestionKind::Rating { range, .. } => {
                AnswerValue::Number(i64::from(skewed_rating(&mut rng, *range)))
            }
            QuestionKind::MultipleChoice { choices } => {
                let pick = choices
                    .choose(&mut rng)
                    .cloned()
                    .unwrap_or_else(|| "Other".to_string());
                AnswerValue::Text(pick)
            }
            QuestionKind::OpenText { .. } => {
                let pick = OPEN_TEXT_ANSWERS
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(OPEN_TEXT_ANSWERS[0]);
                AnswerValue::Text(pick.to_string())
            }
        };
        data.insert(question.id.clone(), answer);
    }

    data
}

/// Slightly optimistic rating pick: weights 0.05/0.1/0.2/0.3/0.35 on a
/// 5-point scale, uniform otherwise
fn skewed_rating(rng: &mut impl Rng, range: u32) -> u32 {
    if range == 5 {
        let roll: f64 = rng.r#gen();
        if roll < 0.05 {
            1
        } else if roll < 0.15 {
            2
        } else if roll < 0.35 {
            3
        } else if roll < 0.65 {
            4
        } else {
            5
        }
    } else {
        rng.gen_range(1..=range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn five_archetypes_requested_five_returned() {
        let generator = DataGenerator::templates_only();
        let surveys = generator.generate_surveys(5).await;
        assert_eq!(surveys.len(), 5);

        for (i, survey) in surveys.iter().enumerate() {
            assert_eq!(survey.id, format!("survey_{}", i + 1));
            assert_eq!(survey.name, SURVEY_ARCHETYPES[i].0);
            assert_eq!(survey.status, "inProgress");
            assert!(
                (3..=5).contains(&survey.questions.len()),
                "expected 3-5 questions, got {}",
                survey.questions.len()
            );
            for (j, question) in survey.questions.iter().enumerate() {
                assert_eq!(question.id, format!("q{}", j + 1));
            }
        }
    }

    #[tokio::test]
    async fn survey_count_is_capped_at_archetype_count() {
        let generator = DataGenerator::templates_only();
        let surveys = generator.generate_surveys(50).await;
        assert_eq!(surveys.len(), SURVEY_ARCHETYPES.len());
    }

    #[test]
    fn ten_users_split_two_owners_eight_managers() {
        let generator = DataGenerator::templates_only();
        let users = generator.generate_users(10);
        assert_eq!(users.len(), 10);

        let owners = users.iter().filter(|u| u.role == UserRole::Owner).count();
        let managers = users.iter().filter(|u| u.role == UserRole::Manager).count();
        assert_eq!(owners, 2);
        assert_eq!(managers, 8);
        assert_eq!(users[0].role, UserRole::Owner);
        assert_eq!(users[1].role, UserRole::Owner);
        assert!(users[0].email.contains('@'));
    }

    #[tokio::test]
    async fn every_survey_gets_one_to_three_responses() {
        let generator = DataGenerator::templates_only();
        let surveys = generator.generate_surveys(5).await;
        let users = generator.generate_users(10);
        let responses = generator.generate_responses(&surveys, &users).await;

        for survey in &surveys {
            let count = responses.iter().filter(|r| r.survey_id == survey.id).count();
            assert!(
                (1..=3).contains(&count),
                "survey {} has {count} responses",
                survey.id
            );
        }
        // Sequential response ids, generation order preserved
        for (i, response) in responses.iter().enumerate() {
            assert_eq!(response.id, format!("response_{}", i + 1));
            assert!((30..=300).contains(&response.ttc));
        }
    }

    #[tokio::test]
    async fn answers_match_their_question_types() {
        let generator = DataGenerator::templates_only();
        let surveys = generator.generate_surveys(5).await;
        let users = generator.generate_users(4);
        let responses = generator.generate_responses(&surveys, &users).await;

        for response in &responses {
            let survey = surveys
                .iter()
                .find(|s| s.id == response.survey_id)
                .expect("response references a generated survey");
            assert_eq!(response.data.len(), survey.questions.len());

            for question in &survey.questions {
                let answer = response.data.get(&question.id).expect("answer per question");
                match (&question.kind, answer) {
                    (QuestionKind::Rating { range, .. }, AnswerValue::Number(n)) => {
                        assert!((1..=i64::from(*range)).contains(n));
                    }
                    (QuestionKind::MultipleChoice { choices }, AnswerValue::Text(t)) => {
                        assert!(choices.contains(t));
                    }
                    (QuestionKind::OpenText { .. }, AnswerValue::Text(t)) => {
                        assert!(OPEN_TEXT_ANSWERS.contains(&t.as_str()));
                    }
                    (kind, answer) => {
                        panic!("answer {answer:?} does not fit question kind {kind:?}")
                    }
                }
            }
        }
    }

    #[test]
    fn skewed_rating_stays_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            assert!((1..=5).contains(&skewed_rating(&mut rng, 5)));
            assert!((1..=10).contains(&skewed_rating(&mut rng, 10)));
        }
    }
}
