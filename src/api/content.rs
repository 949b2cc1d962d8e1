//! Content Endpoints
//!
//! Privacy policy and terms share a get/update shape, so one module covers
//! both documents.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

/// Which stored document a content screen edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    PrivacyPolicy,
    Terms,
}

impl Document {
    pub fn title(&self) -> &'static str {
        match self {
            Document::PrivacyPolicy => "Privacy Policy",
            Document::Terms => "Terms & Conditions",
        }
    }

    fn fetch_path(&self) -> &'static str {
        match self {
            Document::PrivacyPolicy => "admin/privacy-policy",
            Document::Terms => "admin/terms-conditions",
        }
    }

    fn update_path(&self) -> &'static str {
        match self {
            Document::PrivacyPolicy => "admin/privacy-policy/update",
            Document::Terms => "admin/terms-conditions/update",
        }
    }
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

#[derive(Serialize)]
struct UpdateContentArgs<'a> {
    content: &'a str,
}

pub struct ContentDoc {
    pub content: String,
    pub updated_at: Option<String>,
}

pub async fn fetch_content(api: &ApiClient, doc: Document) -> Result<ContentDoc, ApiError> {
    let resp: ContentResponse = api.get_json(doc.fetch_path()).await?;
    Ok(ContentDoc {
        content: resp.content.unwrap_or_default(),
        updated_at: resp.updated_at,
    })
}

/// Post the edited markup back verbatim. Returns the new `updated_at`.
pub async fn update_content(
    api: &ApiClient,
    doc: Document,
    content: &str,
) -> Result<Option<String>, ApiError> {
    let resp: ContentResponse = api
        .post_json(doc.update_path(), &UpdateContentArgs { content })
        .await?;
    Ok(resp.updated_at)
}
