//! Resource namespaces
//!
//! Each namespace is a thin set of request builders over the shared
//! [`ApiClient`]: one call, one HTTP request, the response returned as-is.

pub mod cycles;
pub mod dashboard;
pub mod events;
pub mod plants;
pub mod tasks;

mod resource;

pub use cycles::CycleApi;
pub use dashboard::DashboardApi;
pub use events::EventApi;
pub use plants::PlantApi;
pub use tasks::TaskApi;

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// All namespaces, sharing one client
#[derive(Clone)]
pub struct Api {
    pub plants: PlantApi,
    pub cycles: CycleApi,
    pub events: EventApi,
    pub tasks: TaskApi,
    pub dashboard: DashboardApi,
    client: ApiClient,
}

impl Api {
    pub fn new(client: ApiClient) -> Self {
        Self {
            plants: PlantApi::new(client.clone()),
            cycles: CycleApi::new(client.clone()),
            events: EventApi::new(client.clone()),
            tasks: TaskApi::new(client.clone()),
            dashboard: DashboardApi::new(client.clone()),
            client,
        }
    }

    pub fn from_config(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    /// The shared client, for requests outside the namespaces
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
