use std::fmt::Display;

use serde::Serialize;

use super::resource::Resource;
use crate::client::{ApiClient, ApiResponse};
use crate::endpoints;
use crate::error::ApiError;

/// Planting cycles: `/cycles/`
#[derive(Clone)]
pub struct CycleApi {
    resource: Resource,
}

impl CycleApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, endpoints::CYCLES),
        }
    }

    /// GET /cycles/ with `params` as the query string (see [`CycleFilter`](crate::models::CycleFilter))
    pub async fn get_all<Q>(&self, params: &Q) -> Result<ApiResponse, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        self.resource.get_all(params).await
    }

    pub async fn get(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.resource.get(id).await
    }

    pub async fn create<B>(&self, data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.resource.create(data).await
    }

    pub async fn update<B>(&self, id: impl Display, data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.resource.update(id, data).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.resource.delete(id).await
    }

    /// POST /cycles/{id}/add_event/ - the backend attaches the event to this cycle
    pub async fn add_event<B>(&self, id: impl Display, data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let path = self.resource.action_path(id, endpoints::CYCLE_ADD_EVENT);
        self.resource.client().post(&path, data).await
    }

    /// POST /cycles/{id}/add_task/
    pub async fn add_task<B>(&self, id: impl Display, data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let path = self.resource.action_path(id, endpoints::CYCLE_ADD_TASK);
        self.resource.client().post(&path, data).await
    }
}
