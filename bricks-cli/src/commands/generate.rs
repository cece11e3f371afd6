//! `generate` command: produce and persist mock data

use crate::generator::DataGenerator;
use crate::store::DataStore;
use shared::models::{Survey, SurveyResponse, User};
use std::collections::HashMap;

const SURVEY_COUNT: usize = 5;
const USER_COUNT: usize = 10;

pub async fn run(store: &DataStore) -> anyhow::Result<()> {
    tracing::info!("generating realistic data...");
    let generator = DataGenerator::from_env();

    tracing::info!("generating {SURVEY_COUNT} surveys...");
    let surveys = generator.generate_surveys(SURVEY_COUNT).await;
    tracing::info!("generating {USER_COUNT} users...");
    let users = generator.generate_users(USER_COUNT);
    tracing::info!("generating responses...");
    let responses = generator.generate_responses(&surveys, &users).await;

    store.save_surveys(&surveys)?;
    store.save_users(&users)?;
    store.save_responses(&responses)?;

    println!("✓ Generated data saved to generated_data/");
    println!("  - {} surveys (required: {SURVEY_COUNT})", surveys.len());
    println!("  - {} users (required: {USER_COUNT})", users.len());
    println!("  - {} responses (minimum 1 per survey)", responses.len());

    if verify(&surveys, &users, &responses) {
        println!("✓ All requirements met");
    }
    summarize(&surveys, &users, &responses);

    Ok(())
}

/// Check the generation requirements; shortfalls are reported, not fatal
fn verify(surveys: &[Survey], users: &[User], responses: &[SurveyResponse]) -> bool {
    let mut ok = true;
    if surveys.len() < SURVEY_COUNT {
        println!("✗ Requirement not met: need {SURVEY_COUNT} surveys");
        ok = false;
    }
    if users.len() < USER_COUNT {
        println!("✗ Requirement not met: need {USER_COUNT} users");
        ok = false;
    }

    let mut per_survey: HashMap<&str, usize> = HashMap::new();
    for response in responses {
        *per_survey.entry(response.survey_id.as_str()).or_default() += 1;
    }
    for survey in surveys {
        if per_survey.get(survey.id.as_str()).copied().unwrap_or(0) < 1 {
            println!("✗ Survey {} has no responses", survey.id);
            ok = false;
        }
    }
    ok
}

fn summarize(surveys: &[Survey], users: &[User], responses: &[SurveyResponse]) {
    println!();
    println!("Surveys:");
    for survey in surveys {
        println!(
            "  {} | {} | {} questions | {}",
            survey.id,
            survey.name,
            survey.questions.len(),
            survey.status
        );
    }
    println!("Users:");
    for user in users {
        println!(
            "  {} | {} | {} | {:?}",
            user.id, user.name, user.email, user.role
        );
    }
    println!("Responses:");
    for response in responses {
        println!(
            "  {} | {} | {}",
            response.id,
            response.survey_id,
            response.user_id.as_deref().unwrap_or("anonymous")
        );
    }
}
