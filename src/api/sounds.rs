//! Background Sound Endpoints
//!
//! Listing, multipart upload, and delete. A 413 on upload gets its own
//! user-facing message; everything else follows the shared error mapping.

use serde::Deserialize;
use web_sys::FormData;

use super::{ApiClient, ApiError};
use crate::models::BackgroundSound;

#[derive(Deserialize)]
struct SoundRecord {
    id: u64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "file_url")]
    url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SoundsEnvelope {
    Named { sounds: Vec<SoundRecord> },
    Bare(Vec<SoundRecord>),
}

pub async fn list_sounds(api: &ApiClient) -> Result<Vec<BackgroundSound>, ApiError> {
    let value = api.get_value("admin/background-sounds").await?;
    let envelope: SoundsEnvelope =
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    let records = match envelope {
        SoundsEnvelope::Named { sounds } => sounds,
        SoundsEnvelope::Bare(sounds) => sounds,
    };

    Ok(records
        .into_iter()
        .map(|s| BackgroundSound {
            id: s.id,
            name: s.name.unwrap_or_else(|| "N/A".to_string()),
            url: s.url.unwrap_or_default(),
        })
        .collect())
}

pub async fn upload_sound(api: &ApiClient, file: &web_sys::File) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;

    match api.post_form("admin/background-sounds/add", &form).await {
        Err(ApiError::Server { status: 413, .. }) => Err(ApiError::Server {
            status: 413,
            message: "Audio file is too large. Please upload a smaller file.".to_string(),
        }),
        other => other,
    }
}

pub async fn delete_sound(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("admin/background-sounds/{id}/delete"))
        .await
}
