//! Session Listing Endpoint
//!
//! The backend has returned both `{ sessions: [...], pagination: {...} }`
//! and a bare array for this endpoint, so decoding goes through a loose
//! value first.

use serde::Deserialize;

use super::{ApiClient, ApiError, Pagination};
use crate::models::SessionRow;

#[derive(Deserialize)]
struct SessionRecord {
    #[serde(default, alias = "username")]
    user_name: Option<String>,
    #[serde(default)]
    average_mood: Option<String>,
    #[serde(default)]
    after_session: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SessionsEnvelope {
    Named {
        sessions: Vec<SessionRecord>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    Bare(Vec<SessionRecord>),
}

pub struct SessionPage {
    pub rows: Vec<SessionRow>,
    pub total_pages: u32,
}

pub async fn list_sessions(api: &ApiClient, page: u32) -> Result<SessionPage, ApiError> {
    let value = api.get_value(&format!("admin/sessions?page={page}")).await?;
    let envelope: SessionsEnvelope =
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;

    let (records, pagination) = match envelope {
        SessionsEnvelope::Named {
            sessions,
            pagination,
        } => (sessions, pagination),
        SessionsEnvelope::Bare(sessions) => (sessions, None),
    };

    let rows = records
        .into_iter()
        .map(|r| SessionRow {
            user_name: r.user_name.unwrap_or_else(|| "N/A".to_string()),
            average_mood: r.average_mood.unwrap_or_else(|| "N/A".to_string()),
            after_session: r.after_session.unwrap_or_else(|| "N/A".to_string()),
        })
        .collect();

    Ok(SessionPage {
        rows,
        total_pages: pagination.map(|p| p.total_pages).unwrap_or(1),
    })
}
