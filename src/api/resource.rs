use std::fmt::Display;

use serde::Serialize;

use crate::client::{ApiClient, ApiResponse};
use crate::endpoints;
use crate::error::ApiError;

/// Standard CRUD calls for one collection prefix, e.g. `/plants/`
#[derive(Clone)]
pub(crate) struct Resource {
    client: ApiClient,
    collection: &'static str,
}

impl Resource {
    pub(crate) fn new(client: ApiClient, collection: &'static str) -> Self {
        Self { client, collection }
    }

    pub(crate) async fn get_all<Q>(&self, params: &Q) -> Result<ApiResponse, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        self.client.get_with_query(self.collection, params).await
    }

    pub(crate) async fn get(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.get(&endpoints::detail(self.collection, id)).await
    }

    pub(crate) async fn create<B>(&self, data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post(self.collection, data).await
    }

    pub(crate) async fn update<B>(&self, id: impl Display, data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.client.put(&endpoints::detail(self.collection, id), data).await
    }

    pub(crate) async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.delete(&endpoints::detail(self.collection, id)).await
    }

    /// Path of a detail-level action such as `/tasks/7/toggle_complete/`
    pub(crate) fn action_path(&self, id: impl Display, action: &str) -> String {
        endpoints::action(self.collection, id, action)
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }
}
