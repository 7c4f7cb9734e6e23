use std::fmt::Display;

use serde::Serialize;

use super::resource::Resource;
use crate::client::{ApiClient, ApiResponse};
use crate::endpoints;
use crate::error::ApiError;

/// Care events: `/events/`
#[derive(Clone)]
pub struct EventApi {
    resource: Resource,
}

impl EventApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, endpoints::EVENTS),
        }
    }

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
}
