use std::fmt::Display;

use serde::Serialize;

use super::resource::Resource;
use crate::client::{ApiClient, ApiResponse};
use crate::endpoints;
use crate::error::ApiError;

/// Tasks: `/tasks/`
#[derive(Clone)]
pub struct TaskApi {
    resource: Resource,
}

impl TaskApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, endpoints::TASKS),
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

    /// POST /tasks/{id}/toggle_complete/ with no body. The backend flips
    /// `completed` and answers with the updated task.
    pub async fn toggle_complete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        let path = self.resource.action_path(id, endpoints::TASK_TOGGLE_COMPLETE);
        self.resource.client().post_empty(&path).await
    }
}
