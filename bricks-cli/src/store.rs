//! Flat-file persistence for generated data and seed results
//!
//! Generated data lives in `generated_data/` as pretty-printed JSON arrays,
//! ordering preserved from generation order; seed results land in
//! `seed_results/api_results.json` as a single object.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::models::{SeedReport, Survey, SurveyResponse, User};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "generated_data";
const RESULTS_DIR: &str = "seed_results";

pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    fn data_path(&self, name: &str) -> PathBuf {
        self.data_dir().join(name)
    }

    pub fn has_generated_data(&self) -> bool {
        self.data_dir().exists()
    }

    fn save_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save_surveys(&self, surveys: &[Survey]) -> anyhow::Result<()> {
        Self::save_json(&self.data_path("surveys.json"), &surveys)
    }

    pub fn save_users(&self, users: &[User]) -> anyhow::Result<()> {
        Self::save_json(&self.data_path("users.json"), &users)
    }

    pub fn save_responses(&self, responses: &[SurveyResponse]) -> anyhow::Result<()> {
        Self::save_json(&self.data_path("responses.json"), &responses)
    }

    pub fn load_surveys(&self) -> anyhow::Result<Vec<Survey>> {
        Self::load_json(&self.data_path("surveys.json"))
    }

    pub fn load_users(&self) -> anyhow::Result<Vec<User>> {
        Self::load_json(&self.data_path("users.json"))
    }

    pub fn load_responses(&self) -> anyhow::Result<Vec<SurveyResponse>> {
        Self::load_json(&self.data_path("responses.json"))
    }

    pub fn save_report(&self, report: &SeedReport) -> anyhow::Result<()> {
        Self::save_json(&self.root.join(RESULTS_DIR).join("api_results.json"), report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{
        AnswerValue, Question, QuestionKind, ScaleLabels, ThankYouNote, UserRole,
    };
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn generated_data_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path());

        let surveys: Vec<Survey> = (1..=3)
            .map(|n| Survey {
                id: format!("survey_{n}"),
                name: format!("Survey {n}"),
                survey_type: "link".into(),
                questions: vec![Question {
                    id: "q1".into(),
                    headline: "Rate us".into(),
                    required: true,
                    kind: QuestionKind::Rating {
                        range: 5,
                        labels: ScaleLabels {
                            left: "Poor".into(),
                            right: "Excellent".into(),
                        },
                    },
                }],
                status: "inProgress".into(),
                thank_you_card: ThankYouNote {
                    headline: "Thanks".into(),
                    subheader: "".into(),
                },
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .collect();

        store.save_surveys(&surveys).unwrap();
        assert!(store.has_generated_data());

        let loaded = store.load_surveys().unwrap();
        assert_eq!(loaded.len(), 3);
        let ids: Vec<_> = loaded.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["survey_1", "survey_2", "survey_3"]);
    }

    #[test]
    fn users_and_responses_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path());

        let users = vec![User {
            id: "user_1".into(),
            name: "Casey Brown".into(),
            email: "casey.brown@cloudsystems.dev".into(),
            role: UserRole::Owner,
            company: "CloudSystems".into(),
            created_at: Utc::now(),
            last_login: Utc::now(),
        }];
        let mut data = BTreeMap::new();
        data.insert("q1".to_string(), AnswerValue::Number(5));
        let responses = vec![SurveyResponse {
            id: "response_1".into(),
            survey_id: "survey_1".into(),
            user_id: Some("user_1".into()),
            created_at: Utc::now(),
            data,
            ttc: 45,
        }];

        store.save_users(&users).unwrap();
        store.save_responses(&responses).unwrap();

        assert_eq!(store.load_users().unwrap()[0].role, UserRole::Owner);
        let loaded = store.load_responses().unwrap();
        assert_eq!(loaded[0].data["q1"], AnswerValue::Number(5));
        assert_eq!(loaded[0].ttc, 45);
    }

    #[test]
    fn missing_files_error_instead_of_panicking() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path());
        assert!(!store.has_generated_data());
        assert!(store.load_surveys().is_err());
    }

    #[test]
    fn report_is_written_as_single_object() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path());
        let report = SeedReport::simulated(5, 10, 8);
        store.save_report(&report).unwrap();

        let text =
            std::fs::read_to_string(dir.path().join("seed_results/api_results.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["api_available"], false);
        assert_eq!(value["surveys_generated"], 5);
        assert_eq!(value["responses_submitted_via_api"], 0);
    }
}
