//! User Endpoints
//!
//! Paginated end-user listing with an optional subscription tier filter.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use super::{ApiClient, ApiError, Pagination};
use crate::models::UserAccount;

/// Subscription tier tabs on the Users screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionFilter {
    #[default]
    All,
    Free,
    Subscribers,
}

impl SubscriptionFilter {
    fn query_value(&self) -> Option<&'static str> {
        match self {
            SubscriptionFilter::All => None,
            SubscriptionFilter::Free => Some("Free"),
            SubscriptionFilter::Subscribers => Some("Subscriber"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionFilter::All => "All",
            SubscriptionFilter::Free => "Free",
            SubscriptionFilter::Subscribers => "Subscribers",
        }
    }
}

#[derive(Deserialize)]
struct UserRecord {
    id: u64,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    subscription: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<UserRecord>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

pub struct UserPage {
    pub users: Vec<UserAccount>,
    pub total_pages: u32,
}

pub async fn list_users(
    api: &ApiClient,
    page: u32,
    filter: SubscriptionFilter,
) -> Result<UserPage, ApiError> {
    let mut path = format!("admin/users?page={page}");
    if let Some(tier) = filter.query_value() {
        path.push_str(&format!(
            "&subscription={}",
            utf8_percent_encode(tier, NON_ALPHANUMERIC)
        ));
    }

    let envelope: UsersEnvelope = api.get_json(&path).await?;

    let mut users: Vec<UserAccount> = envelope
        .users
        .into_iter()
        .map(|u| UserAccount {
            id: u.id,
            name: u.username.unwrap_or_else(|| "N/A".to_string()),
            email: u.email.unwrap_or_else(|| "N/A".to_string()),
            subscription: u.subscription.unwrap_or_else(|| "Free".to_string()),
            phone: u.phone.unwrap_or_else(|| "N/A".to_string()),
        })
        .collect();

    // The backend has been seen ignoring the subscription filter; drop free
    // rows here so the Subscribers tab stays coherent either way.
    if filter == SubscriptionFilter::Subscribers {
        users.retain(|u| u.subscription != "Free");
    }

    Ok(UserPage {
        users,
        total_pages: envelope.pagination.map(|p| p.total_pages).unwrap_or(1),
    })
}
