//! Auth Endpoints
//!
//! Login and profile update. Login failures come back as ordinary server
//! errors so they can render inline; the 401-clears-session rule explicitly
//! skips this path.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::models::Profile;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Serialize)]
struct UpdateProfileArgs<'a> {
    username: &'a str,
    email: &'a str,
}

pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<(String, Profile), ApiError> {
    let resp: LoginResponse = api
        .post_json("admin/login", &LoginArgs { email, password })
        .await?;

    let profile = Profile {
        username: resp.username.unwrap_or_else(|| email.to_string()),
        email: email.to_string(),
        role: resp.role.unwrap_or_else(|| "Admin".to_string()),
    };
    Ok((resp.token, profile))
}

pub async fn update_profile(api: &ApiClient, username: &str, email: &str) -> Result<(), ApiError> {
    api.post_unit(
        "admin/profile/update",
        &UpdateProfileArgs { username, email },
    )
    .await
}
