//! Administrator Endpoints
//!
//! Paginated listing plus add/edit/delete. The backend refuses edits to
//! super admins; those refusals come back as `ApiError::Server` with the
//! backend's own message and are shown to the user unchanged.

use serde::Deserialize;

use super::{ApiClient, ApiError, Pagination};
use crate::models::Administrator;

#[derive(Deserialize)]
struct AdminRecord {
    id: u64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default, alias = "accessLevel")]
    access_level: Option<String>,
}

#[derive(Deserialize)]
struct AdminsEnvelope {
    admins: Vec<AdminRecord>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

/// Create/edit form payload
#[derive(serde::Serialize)]
pub struct AdminForm<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
    pub phone: &'a str,
    #[serde(rename = "accessLevel")]
    pub access_level: &'a str,
}

pub struct AdminPage {
    pub admins: Vec<Administrator>,
    pub total_pages: u32,
}

pub async fn list_admins(api: &ApiClient, page: u32) -> Result<AdminPage, ApiError> {
    let envelope: AdminsEnvelope = api.get_json(&format!("admin/admins?page={page}")).await?;

    let admins = envelope
        .admins
        .into_iter()
        .map(|a| Administrator {
            id: a.id,
            name: a.name.unwrap_or_else(|| "N/A".to_string()),
            email: a.email.unwrap_or_else(|| "N/A".to_string()),
            phone: a.phone.unwrap_or_else(|| "N/A".to_string()),
            access_level: a.access_level.unwrap_or_else(|| "admin".to_string()),
        })
        .collect();

    Ok(AdminPage {
        admins,
        total_pages: envelope.pagination.map(|p| p.total_pages).unwrap_or(1),
    })
}

pub async fn add_admin(api: &ApiClient, form: &AdminForm<'_>) -> Result<(), ApiError> {
    api.post_unit("admin/admins/add", form).await
}

pub async fn edit_admin(api: &ApiClient, id: u64, form: &AdminForm<'_>) -> Result<(), ApiError> {
    api.post_unit(&format!("admin/admins/{id}/edit"), form).await
}

pub async fn delete_admin(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("admin/admins/{id}/delete")).await
}
