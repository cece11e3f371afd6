// bricks-client/tests/seeding_api.rs
// Seeding flow against a mock platform API

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use bricks_client::{
    discover_environment, publish_surveys, submit_responses, ApiClient, ClientConfig,
};
use chrono::Utc;
use serde_json::{json, Value};
use shared::models::{
    MappingEntry, Question, QuestionKind, ScaleLabels, Survey, SurveyResponse, ThankYouNote,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(&ClientConfig::new(base_url, "test-key")).unwrap()
}

fn sample_survey(n: usize) -> Survey {
    Survey {
        id: format!("survey_{n}"),
        name: format!("Survey {n}"),
        survey_type: "link".into(),
        questions: vec![
            Question {
                id: "q1".into(),
                headline: "How satisfied are you?".into(),
                required: true,
                kind: QuestionKind::Rating {
                    range: 5,
                    labels: ScaleLabels {
                        left: "Poor".into(),
                        right: "Excellent".into(),
                    },
                },
            },
            Question {
                id: "q2".into(),
                headline: "What can we improve?".into(),
                required: false,
                kind: QuestionKind::OpenText {
                    placeholder: "Your suggestions...".into(),
                },
            },
        ],
        status: "inProgress".into(),
        thank_you_card: ThankYouNote {
            headline: "Thank You!".into(),
            subheader: "We appreciate you taking the time.".into(),
        },
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_response(n: usize, survey_id: &str) -> SurveyResponse {
    let mut data = BTreeMap::new();
    data.insert(
        "q1".to_string(),
        shared::models::AnswerValue::Number(4),
    );
    data.insert(
        "q2".to_string(),
        shared::models::AnswerValue::Text("Great service, very satisfied.".into()),
    );
    SurveyResponse {
        id: format!("response_{n}"),
        survey_id: survey_id.into(),
        user_id: Some(format!("user_{n}")),
        created_at: Utc::now(),
        data,
        ttc: 120,
    }
}

async fn create_survey_ok(
    State(counter): State<Arc<AtomicUsize>>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
    (
        StatusCode::CREATED,
        Json(json!({ "data": { "id": format!("srv_{n}") } })),
    )
}

#[tokio::test]
async fn discovery_reads_environment_from_existing_surveys() {
    let router = Router::new().route(
        "/api/v1/management/surveys",
        get(|| async {
            Json(json!({ "data": [ { "id": "srv_1", "environmentId": "env_live" } ] }))
        }),
    );
    let base = spawn(router).await;
    let config = ClientConfig::new(&base, "test-key");
    let api = client(&base);

    let environment = discover_environment(&api, &config).await;
    assert_eq!(environment.as_deref(), Some("env_live"));
}

#[tokio::test]
async fn discovery_uses_sentinel_when_list_is_empty() {
    let router = Router::new().route(
        "/api/v1/management/surveys",
        get(|| async { Json(json!({ "data": [] })) }),
    );
    let base = spawn(router).await;
    let config = ClientConfig::new(&base, "test-key");
    let api = client(&base);

    assert_eq!(
        discover_environment(&api, &config).await.as_deref(),
        Some("default")
    );
}

#[tokio::test]
async fn publish_creates_every_survey_in_order() {
    let counter = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/api/v1/management/surveys", post(create_survey_ok))
        .with_state(counter);
    let base = spawn(router).await;
    let api = client(&base);
    let surveys: Vec<_> = (1..=3).map(sample_survey).collect();

    let entries = publish_surveys(&api, Some("env_1"), &surveys).await;
    assert_eq!(entries.len(), 3);
    for (i, entry) in entries.iter().enumerate() {
        assert!(entry.success);
        assert_eq!(entry.position, i + 1);
        assert_eq!(entry.generated_id, format!("survey_{}", i + 1));
        assert_eq!(entry.remote_id.as_deref(), Some(format!("srv_{}", i + 1).as_str()));
    }
}

#[tokio::test]
async fn publish_falls_back_to_payload_without_environment() {
    // The server rejects any payload that carries an environment id, which
    // forces the publisher onto its second candidate.
    async fn picky_create(
        State(counter): State<Arc<AtomicUsize>>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        if body.get("environmentId").is_some() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "unknown environment" })),
            );
        }
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        (
            StatusCode::CREATED,
            Json(json!({ "data": { "id": format!("srv_{n}") } })),
        )
    }

    let counter = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/api/v1/management/surveys", post(picky_create))
        .with_state(counter);
    let base = spawn(router).await;
    let api = client(&base);
    let surveys = vec![sample_survey(1)];

    let entries = publish_surveys(&api, Some("env_rejected"), &surveys).await;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].success);
    assert_eq!(entries[0].remote_id.as_deref(), Some("srv_1"));
}

#[tokio::test]
async fn submit_accepts_alternate_shape_and_records_endpoint() {
    // Primary shape (carries "responses") is rejected; alternate shape
    // (carries "data") is accepted on the same endpoint.
    async fn shape_picky(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if body.get("responses").is_some() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "unexpected field: responses" })),
            );
        }
        assert!(body.get("data").is_some());
        (StatusCode::CREATED, Json(json!({ "data": { "id": "rsp_1" } })))
    }

    let router = Router::new().route("/api/v1/client/responses", post(shape_picky));
    let base = spawn(router).await;
    let api = client(&base);

    let entries = vec![MappingEntry::created(
        "survey_1".into(),
        1,
        "srv_1".into(),
        "Survey 1".into(),
    )];
    let responses = vec![sample_response(1, "survey_1")];

    let outcomes = submit_responses(&api, &responses, &entries).await;
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].submitted);
    assert_eq!(
        outcomes[0].endpoint_used.as_deref(),
        Some("api/v1/client/responses (alt format)")
    );
    assert_eq!(outcomes[0].api_survey_id.as_deref(), Some("srv_1"));
    assert_eq!(outcomes[0].mapped_from.as_deref(), Some("survey_1"));
}

#[tokio::test]
async fn submit_moves_to_second_endpoint_when_first_is_missing() {
    // Only the legacy endpoint exists; the client endpoint 404s and the
    // submitter walks on.
    async fn accept_primary(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        assert!(body.get("responses").is_some());
        assert_eq!(body.get("finished"), Some(&json!(true)));
        (StatusCode::OK, Json(json!({ "data": { "id": "rsp_1" } })))
    }

    let router = Router::new().route("/api/v1/responses", post(accept_primary));
    let base = spawn(router).await;
    let api = client(&base);

    let entries = vec![MappingEntry::created(
        "survey_1".into(),
        1,
        "srv_1".into(),
        "Survey 1".into(),
    )];
    let responses = vec![sample_response(1, "survey_1")];

    let outcomes = submit_responses(&api, &responses, &entries).await;
    assert!(outcomes[0].submitted);
    assert_eq!(outcomes[0].endpoint_used.as_deref(), Some("api/v1/responses"));
}

#[tokio::test]
async fn full_seed_flow_maps_and_submits() {
    let counter = Arc::new(AtomicUsize::new(0));

    async fn accept_response(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        // Remote survey id, not the local token
        let survey_id = body["surveyId"].as_str().unwrap();
        assert!(survey_id.starts_with("srv_"));
        (StatusCode::CREATED, Json(json!({ "data": { "id": "rsp" } })))
    }

    let router = Router::new()
        .route("/api/v1/management/surveys", post(create_survey_ok))
        .route("/api/v1/client/responses", post(accept_response))
        .with_state(counter);
    let base = spawn(router).await;
    let api = client(&base);

    let surveys: Vec<_> = (1..=2).map(sample_survey).collect();
    let responses = vec![
        sample_response(1, "survey_1"),
        sample_response(2, "survey_2"),
        sample_response(3, "survey_7"), // nothing published at position 7
    ];

    let entries = publish_surveys(&api, Some("env_1"), &surveys).await;
    let outcomes = submit_responses(&api, &responses, &entries).await;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].submitted);
    assert!(outcomes[1].submitted);
    assert!(!outcomes[2].submitted);
    assert_eq!(outcomes[0].api_survey_id.as_deref(), Some("srv_1"));
    assert_eq!(outcomes[1].api_survey_id.as_deref(), Some("srv_2"));
}
