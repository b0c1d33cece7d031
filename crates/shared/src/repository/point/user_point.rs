use crate::{
    abstract_trait::point::repository::UserPointRepositoryTrait, errors::RepositoryError,
    model::point::UserPointModel, repository::point::StoreLatency,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory balance table keyed by user id.
#[derive(Debug, Default)]
pub struct UserPointTable {
    table: RwLock<HashMap<i64, UserPointModel>>,
    latency: StoreLatency,
}

impl UserPointTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: StoreLatency) -> Self {
        Self {
            table: RwLock::new(HashMap::new()),
            latency,
        }
    }
}

#[async_trait]
impl UserPointRepositoryTrait for UserPointTable {
    async fn select_by_id(&self, user_id: i64) -> Result<UserPointModel, RepositoryError> {
        self.latency.pause().await;

        let table = self.table.read().await;
        let model = table
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| UserPointModel::empty(user_id));

        debug!("🔍 user_point selected: id={user_id} point={}", model.point);

        Ok(model)
    }

    async fn insert_or_update(
        &self,
        user_id: i64,
        point: i64,
    ) -> Result<UserPointModel, RepositoryError> {
        self.latency.pause().await;

        let model = UserPointModel {
            id: user_id,
            point,
            updated_at: Utc::now().naive_utc(),
        };

        self.table.write().await.insert(user_id, model.clone());

        debug!("💾 user_point stored: id={user_id} point={point}");

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unseen_user_reads_as_zero() {
        let table = UserPointTable::new();

        let model = table.select_by_id(42).await.unwrap();

        assert_eq!(model.id, 42);
        assert_eq!(model.point, 0);
    }

    #[tokio::test]
    async fn insert_or_update_overwrites_previous_value() {
        let table = UserPointTable::new();

        table.insert_or_update(1, 500).await.unwrap();
        let updated = table.insert_or_update(1, 120).await.unwrap();

        assert_eq!(updated.point, 120);
        assert_eq!(table.select_by_id(1).await.unwrap().point, 120);
        assert_eq!(table.select_by_id(2).await.unwrap().point, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_applied_before_access() {
        let table = UserPointTable::with_latency(StoreLatency::from_millis(50));

        table.insert_or_update(7, 30).await.unwrap();

        assert_eq!(table.select_by_id(7).await.unwrap().point, 30);
    }
}
