//! Domain models for generated survey data
//!
//! These types are produced once per run by the data generator, persisted to
//! flat JSON files, and re-read by the seeding step. They are never mutated
//! in place; submission outcomes wrap copies instead.

mod mapping;
mod report;
mod response;
mod survey;
mod user;

pub use mapping::{MappingEntry, SurveyKey};
pub use report::SeedReport;
pub use response::{AnswerValue, SubmissionOutcome, SurveyResponse};
pub use survey::{Question, QuestionKind, ScaleLabels, Survey, ThankYouNote};
pub use user::{PreparedUser, User, UserRole};
