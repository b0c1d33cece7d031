use crate::{di::DependenciesInject, metrics::Metrics};
use anyhow::{Context, Result};
use shared::config::PointConfig;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub async fn new(config: &PointConfig) -> Result<Self> {
        let di_container = DependenciesInject::new(config)
            .await
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            metrics: Arc::new(Metrics::new()),
        })
    }
}
