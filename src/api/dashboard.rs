use crate::client::{ApiClient, ApiResponse};
use crate::endpoints;
use crate::error::ApiError;

/// Dashboard aggregates
#[derive(Clone)]
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /dashboard/stats/ - decodes as [`DashboardStats`](crate::models::DashboardStats)
    pub async fn get_stats(&self) -> Result<ApiResponse, ApiError> {
        self.client.get(endpoints::DASHBOARD_STATS).await
    }
}
