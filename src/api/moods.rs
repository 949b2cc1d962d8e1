//! Mood Endpoints
//!
//! Mood list with nested questions/options, mood add/delete, and the two
//! additive calls the save reconciler emits. Everything the list returns is
//! server-persisted, so ids map to `EntityId::Existing`.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::models::{AnswerOption, EntityId, Mood, Question};
use crate::reconcile::SaveCall;

#[derive(Deserialize)]
struct OptionRecord {
    id: u64,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct QuestionRecord {
    id: u64,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    options: Vec<OptionRecord>,
}

#[derive(Deserialize)]
struct MoodRecord {
    id: u64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoodsEnvelope {
    Named { moods: Vec<MoodRecord> },
    Bare(Vec<MoodRecord>),
}

#[derive(Serialize)]
struct AddMoodArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct AddQuestionArgs<'a> {
    question: &'a str,
    options: &'a [String],
}

#[derive(Serialize)]
struct AddOptionsArgs<'a> {
    options: &'a [String],
}

pub async fn list_moods(api: &ApiClient) -> Result<Vec<Mood>, ApiError> {
    let value = api.get_value("admin/moods").await?;
    let envelope: MoodsEnvelope =
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    let records = match envelope {
        MoodsEnvelope::Named { moods } => moods,
        MoodsEnvelope::Bare(moods) => moods,
    };

    Ok(records
        .into_iter()
        .map(|m| Mood {
            id: m.id,
            name: m.name.unwrap_or_else(|| "N/A".to_string()),
            questions: m
                .questions
                .into_iter()
                .map(|q| Question {
                    id: EntityId::Existing(q.id),
                    text: q.question.unwrap_or_default(),
                    options: q
                        .options
                        .into_iter()
                        .map(|o| AnswerOption {
                            id: EntityId::Existing(o.id),
                            text: o.text.unwrap_or_default(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect())
}

pub async fn add_mood(api: &ApiClient, name: &str) -> Result<(), ApiError> {
    api.post_unit("admin/moods/add", &AddMoodArgs { name }).await
}

pub async fn delete_mood(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("admin/moods/{id}/delete")).await
}

pub async fn add_question(
    api: &ApiClient,
    mood_id: u64,
    question: &str,
    options: &[String],
) -> Result<(), ApiError> {
    api.post_unit(
        &format!("admin/moods/{mood_id}/questions/add"),
        &AddQuestionArgs { question, options },
    )
    .await
}

pub async fn delete_question(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("admin/questions/{id}/delete")).await
}

pub async fn add_options(
    api: &ApiClient,
    question_id: u64,
    options: &[String],
) -> Result<(), ApiError> {
    api.post_unit(
        &format!("admin/questions/{question_id}/options/add"),
        &AddOptionsArgs { options },
    )
    .await
}

pub async fn delete_option(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("admin/options/{id}/delete")).await
}

/// Execute one reconciler call
pub async fn run_save_call(api: &ApiClient, call: SaveCall) -> Result<(), ApiError> {
    match call {
        SaveCall::AddQuestion {
            mood_id,
            text,
            options,
        } => add_question(api, mood_id, &text, &options).await,
        SaveCall::AddOptions {
            question_id,
            options,
        } => add_options(api, question_id, &options).await,
    }
}
