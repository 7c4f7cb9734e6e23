//! Client for the plant-care tracking backend
//!
//! Two independent halves, both consumed by the view layer:
//! - [`router`] / [`history`]: the client route table and path-based navigation
//! - [`api`]: request builders per resource over one shared [`ApiClient`]
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use plant_care_client::{Api, ApiConfig};
//! use plant_care_client::models::{DashboardStats, TaskFilter};
//!
//! let config = ApiConfig::load()?;
//! config.log_startup();
//!
//! let api = Api::from_config(config)?;
//! let stats: DashboardStats = api.dashboard.get_stats().await?.json()?;
//! let open = api.tasks.get_all(&TaskFilter { completed: Some(false), ..Default::default() }).await?;
//! api.tasks.toggle_complete(7).await?;
//! # let _ = (stats, open);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod history;
pub mod models;
pub mod router;

#[cfg(test)]
mod testing;

pub use api::Api;
pub use client::{ApiClient, ApiResponse};
pub use config::ApiConfig;
pub use error::{ApiError, RouteError};
pub use history::History;
pub use router::{ResolvedRoute, RouteRecord, Router, View};
