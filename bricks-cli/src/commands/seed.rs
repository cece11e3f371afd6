//! `seed` command: push generated data through the platform APIs
//!
//! Always completes a full run and always writes the results artifact, even
//! under total API unavailability. Only the initial configuration check
//! (missing API key) aborts.

use crate::store::DataStore;
use anyhow::Context;
use bricks_client::{
    discover_environment, prepare_users, publish_surveys, submit_responses, ApiClient,
    ClientConfig,
};
use chrono::Utc;
use shared::models::{MappingEntry, SeedReport, SubmissionOutcome};

pub async fn run(store: &DataStore) -> anyhow::Result<()> {
    tracing::info!("seeding data via APIs...");

    // Fatal configuration check happens before anything else
    let config = ClientConfig::from_env().context("configuration check failed")?;

    if !store.has_generated_data() {
        anyhow::bail!("no generated data found, run 'bricks generate' first");
    }
    let surveys = store.load_surveys()?;
    let users = store.load_users()?;
    let responses = store.load_responses()?;

    let api = ApiClient::new(&config)?;
    let report = if api.test_connection().await {
        tracing::info!("using available API endpoints...");
        let environment = discover_environment(&api, &config).await;
        if environment.is_none() {
            tracing::warn!("environment id unresolved, publishing degraded payloads");
        }

        let entries = publish_surveys(&api, environment.as_deref(), &surveys).await;
        let prepared = prepare_users(&users);
        tracing::info!("prepared {} users for response attribution", prepared.len());
        let outcomes = submit_responses(&api, &responses, &entries).await;

        build_report(&entries, &outcomes, users.len())
    } else {
        tracing::warn!("API connection limited or unavailable, simulating seed run");
        print_simulation(surveys.len(), users.len(), responses.len());
        SeedReport::simulated(surveys.len(), users.len(), responses.len())
    };

    store.save_report(&report)?;
    println!();
    println!("Seed summary:");
    println!("  API available:            {}", report.api_available);
    println!(
        "  Surveys created via API:  {}/{}",
        report.surveys_created_via_api, report.surveys_generated
    );
    println!(
        "  Responses submitted:      {}/{}",
        report.responses_submitted_via_api, report.responses_generated
    );
    println!("Results saved to seed_results/api_results.json");

    Ok(())
}

/// Aggregate publish and submission outcomes into the results artifact
fn build_report(
    entries: &[MappingEntry],
    outcomes: &[SubmissionOutcome],
    users: usize,
) -> SeedReport {
    SeedReport {
        api_available: true,
        surveys_generated: entries.len(),
        users_generated: users,
        responses_generated: outcomes.len(),
        surveys_created_via_api: entries.iter().filter(|e| e.success).count(),
        responses_submitted_via_api: outcomes.iter().filter(|o| o.submitted).count(),
        timestamp: Utc::now(),
        note: None,
    }
}

fn print_simulation(surveys: usize, users: usize, responses: usize) {
    println!("Simulated API results:");
    println!("  - Would create {surveys} surveys via API");
    println!("  - Would submit {responses} responses via API");
    println!("  - Would prepare {users} users");
    println!();
    println!("Manual setup required:");
    println!("1. Visit http://localhost:3000");
    println!("2. Create surveys manually using data from generated_data/");
    println!("3. Submit responses via the platform UI");
    println!("4. Reference users from generated_data/users.json");
}
