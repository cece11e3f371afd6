//! Optional LLM-backed generation
//!
//! Best-effort substitute for the canned templates. Every failure mode
//! (missing key, HTTP error, malformed output) returns `None` so the caller
//! falls back to the template path; nothing here has side effects.

use serde::{Deserialize, Serialize};
use shared::models::{AnswerValue, Question, Survey, User};
use std::collections::BTreeMap;
use std::time::Duration;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-3.5-turbo";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

pub struct LlmBackend {
    client: reqwest::Client,
    api_key: String,
}

impl LlmBackend {
    /// Build the backend when `OPENAI_API_KEY` is set and a client can be
    /// constructed; otherwise `None`
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .ok()?;
        tracing::info!("LLM generation enabled");
        Some(Self { client, api_key })
    }

    async fn chat(&self, system: &str, user: String, temperature: f32) -> Option<String> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens: 1000,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .ok()?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "LLM request rejected, using templates");
            return None;
        }
        let body: ChatResponse = response.json().await.ok()?;
        body.choices.into_iter().next().map(|c| c.message.content)
    }

    /// Generate survey questions for an archetype, or `None` on any failure
    pub async fn generate_questions(&self, name: &str, context: &str) -> Option<Vec<Question>> {
        let prompt = format!(
            "Generate a realistic survey about {context} with the name \"{name}\".\n\
             Return ONLY a valid JSON array of 3-5 questions in this exact format:\n\
             [{{\"type\": \"rating\", \"id\": \"q1\", \"headline\": \"...\", \"required\": true, \
             \"range\": 5, \"labels\": {{\"left\": \"Very Poor\", \"right\": \"Excellent\"}}}}]\n\
             Mix the types rating, multipleChoice (with a \"choices\" string array), and \
             openText (with a \"placeholder\" string). Give every question a unique id \
             like \"q1\", \"q2\"."
        );
        let content = self
            .chat(
                "You are a survey design expert. Always respond with valid JSON only.",
                prompt,
                0.7,
            )
            .await?;

        let json = extract_json_span(&content, '[', ']')?;
        let mut questions: Vec<Question> = match serde_json::from_str(json) {
            Ok(questions) => questions,
            Err(e) => {
                tracing::warn!("LLM survey output unparseable: {e}, using templates");
                return None;
            }
        };
        if questions.is_empty() {
            return None;
        }
        for (i, question) in questions.iter_mut().enumerate() {
            if question.id.is_empty() {
                question.id = format!("q{}", i + 1);
            }
        }
        Some(questions)
    }

    /// Generate per-question answers for a respondent, or `None` on any
    /// failure
    pub async fn generate_answers(
        &self,
        survey: &Survey,
        user: &User,
    ) -> Option<BTreeMap<String, AnswerValue>> {
        let questions_list = survey
            .questions
            .iter()
            .map(|q| {
                format!(
                    "- ID: {} | Type: {} | Question: {}",
                    q.id,
                    q.kind.tag(),
                    q.headline
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = format!(
            "Generate realistic survey answers from a user named {} ({}) who works at {}:\n\
             {questions_list}\n\
             Return ONLY a JSON object keyed by question id. Rating answers are numbers \
             within the scale, multipleChoice answers are one of the provided choices, \
             openText answers are a short realistic sentence.",
            user.name, user.email, user.company
        );
        let content = self
            .chat(
                "You are a survey respondent. Generate realistic, varied responses that \
                 match the user profile.",
                prompt,
                0.8,
            )
            .await?;

        let json = extract_json_span(&content, '{', '}')?;
        match serde_json::from_str(json) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("LLM answer output unparseable: {e}, using templates");
                None
            }
        }
    }
}

/// Widest span between the first opening and last closing delimiter, to peel
/// JSON out of chatty completions
fn extract_json_span(content: &str, open: char, close: char) -> Option<&str> {
    let start = content.find(open)?;
    let end = content.rfind(close)?;
    (end >= start).then(|| &content[start..=end])
}
