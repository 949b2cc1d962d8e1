//! Dashboard Endpoint

use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::models::DashboardSummary;

#[derive(Deserialize)]
struct SummaryRecord {
    #[serde(default, alias = "totalUsers")]
    total_users: u64,
    #[serde(default, alias = "todayNewUsers", alias = "today_new_users")]
    new_users_today: u64,
    #[serde(default, alias = "totalPositiveReviews", alias = "total_positive_reviews")]
    positive_reviews: u64,
}

pub async fn dashboard_summary(api: &ApiClient) -> Result<DashboardSummary, ApiError> {
    let record: SummaryRecord = api.get_json("admin/dashboard").await?;
    Ok(DashboardSummary {
        total_users: record.total_users,
        new_users_today: record.new_users_today,
        positive_reviews: record.positive_reviews,
    })
}
