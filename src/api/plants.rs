use std::fmt::Display;

use serde::Serialize;

use super::resource::Resource;
use crate::client::{ApiClient, ApiResponse};
use crate::endpoints;
use crate::error::ApiError;

/// Plants: `/plants/`
#[derive(Clone)]
pub struct PlantApi {
    resource: Resource,
}

impl PlantApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            resource: Resource::new(client, endpoints::PLANTS),
        }
    }

    /// GET /plants/ with `params` as the query string (see [`PlantFilter`](crate::models::PlantFilter))
    pub async fn get_all<Q>(&self, params: &Q) -> Result<ApiResponse, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        self.resource.get_all(params).await
    }

    /// GET /plants/{id}/
    pub async fn get(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.resource.get(id).await
    }

    /// POST /plants/
    pub async fn create<B>(&self, data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.resource.create(data).await
    }

    /// PUT /plants/{id}/
    pub async fn update<B>(&self, id: impl Display, data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.resource.update(id, data).await
    }

    /// DELETE /plants/{id}/
    pub async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.resource.delete(id).await
    }

    /// GET /plants/{id}/cycles_detail/ - every cycle of the plant, with events and tasks
    pub async fn get_cycles(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        let path = self.resource.action_path(id, endpoints::PLANT_CYCLES_DETAIL);
        self.resource.client().get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewPlant, PlantFilter};
    use crate::testing::MockBackend;
    use axum::http::Method;
    use reqwest::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_all_forwards_params() {
        let backend = MockBackend::start().await;
        let plants = PlantApi::new(backend.client("api"));

        let filter = PlantFilter {
            search: Some("tomate".to_string()),
            year: Some(2024),
        };
        plants.get_all(&filter).await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/plants/");
        assert_eq!(request.query.as_deref(), Some("search=tomate&year=2024"));
    }

    #[tokio::test]
    async fn test_get_all_without_params_adds_no_query() {
        let backend = MockBackend::start().await;
        let plants = PlantApi::new(backend.client("api"));

        plants.get_all(&PlantFilter::default()).await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.path, "/api/plants/");
        assert_eq!(request.query, None);
    }

    #[tokio::test]
    async fn test_get_all_accepts_raw_pairs() {
        let backend = MockBackend::start().await;
        let plants = PlantApi::new(backend.client("api"));

        plants.get_all(&[("search", "bohne")]).await.unwrap();

        assert_eq!(backend.single_request().query.as_deref(), Some("search=bohne"));
    }

    #[tokio::test]
    async fn test_get() {
        let backend = MockBackend::start().await;
        backend.respond_with(200, json!({"id": 42, "name": "Tomate"}));
        let plants = PlantApi::new(backend.client("api"));

        let response = plants.get(42).await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/plants/42/");
        assert!(request.body.is_empty());
        assert_eq!(response.json::<serde_json::Value>().unwrap()["name"], "Tomate");
    }

    #[tokio::test]
    async fn test_create_sends_json_body() {
        let backend = MockBackend::start().await;
        let plants = PlantApi::new(backend.client("api"));

        let plant = NewPlant {
            name: "Tomate".to_string(),
            variety: Some("Cherry".to_string()),
            ..Default::default()
        };
        plants.create(&plant).await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/api/plants/");
        assert_eq!(request.json(), json!({"name": "Tomate", "variety": "Cherry"}));
    }

    #[tokio::test]
    async fn test_update() {
        let backend = MockBackend::start().await;
        let plants = PlantApi::new(backend.client("api"));

        plants.update(3, &json!({"name": "Paprika"})).await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/api/plants/3/");
        assert_eq!(request.json(), json!({"name": "Paprika"}));
    }

    #[tokio::test]
    async fn test_delete() {
        let backend = MockBackend::start().await;
        backend.respond_with(204, serde_json::Value::Null);
        let plants = PlantApi::new(backend.client("api"));

        let response = plants.delete(3).await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/api/plants/3/");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_get_cycles() {
        let backend = MockBackend::start().await;
        let plants = PlantApi::new(backend.client("api"));

        plants.get_cycles(5).await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/plants/5/cycles_detail/");
    }

    #[tokio::test]
    async fn test_id_substituted_verbatim() {
        let backend = MockBackend::start().await;
        let plants = PlantApi::new(backend.client("api"));

        plants.get("abc-1").await.unwrap();

        assert_eq!(backend.single_request().path, "/api/plants/abc-1/");
    }

    #[tokio::test]
    async fn test_server_error_carries_response() {
        let backend = MockBackend::start().await;
        backend.respond_with(500, json!({"detail": "database unavailable"}));
        let plants = PlantApi::new(backend.client("api"));

        let result = plants.get(1).await;

        let err = result.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        let response = err.response().expect("status error carries the response");
        assert_eq!(
            response.json::<serde_json::Value>().unwrap(),
            json!({"detail": "database unavailable"})
        );
        assert!(err.to_string().contains("500"));
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_error() {
        let backend = MockBackend::start().await;
        backend.respond_with(404, json!({"detail": "Not found."}));
        let plants = PlantApi::new(backend.client("api"));

        let err = plants.get(999).await.unwrap_err();

        assert!(matches!(err, ApiError::Status(_)));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}
