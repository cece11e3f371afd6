//! Shared types for the bricks seeding tools
//!
//! Common types used across the client library and the CLI: domain models
//! for generated data, the remote wire schema, and the seed report format.

pub mod models;
pub mod wire;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AnswerValue, MappingEntry, PreparedUser, Question, QuestionKind, ScaleLabels, SeedReport,
    SubmissionOutcome, Survey, SurveyKey, SurveyResponse, ThankYouNote, User, UserRole,
};
