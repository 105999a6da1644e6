use reqwest::Method;

use crate::{
	models::DashboardStats,
	utils::{request_json, ApiError},
};

/// Aggregate counters for the landing page
pub async fn get_dashboard_stats(token: Option<String>) -> Result<DashboardStats, ApiError> {
	request_json(Method::GET, "/dashboard/stats", &[], token, None).await
}
