use crate::{
    abstract_trait::point::repository::PointHistoryRepositoryTrait,
    errors::RepositoryError,
    model::point_history::{PointHistoryModel, TransactionType},
    repository::point::StoreLatency,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use tracing::debug;

/// Append-only in-memory history log.
///
/// Entry ids start at 1 and follow insertion order.
#[derive(Debug, Default)]
pub struct PointHistoryTable {
    table: RwLock<Vec<PointHistoryModel>>,
    latency: StoreLatency,
}

impl PointHistoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: StoreLatency) -> Self {
        Self {
            table: RwLock::new(Vec::new()),
            latency,
        }
    }
}

#[async_trait]
impl PointHistoryRepositoryTrait for PointHistoryTable {
    async fn insert(
        &self,
        user_id: i64,
        amount: i64,
        kind: TransactionType,
        occurred_at: NaiveDateTime,
    ) -> Result<PointHistoryModel, RepositoryError> {
        self.latency.pause().await;

        let mut table = self.table.write().await;
        let id = i64::try_from(table.len())
            .map_err(|e| RepositoryError::Custom(format!("history id overflow: {e}")))?
            + 1;

        let entry = PointHistoryModel {
            id,
            user_id,
            amount,
            kind,
            occurred_at,
        };
        table.push(entry.clone());

        debug!("📝 point_history appended: id={id} user_id={user_id} amount={amount} kind={kind}");

        Ok(entry)
    }

    async fn select_all_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<PointHistoryModel>, RepositoryError> {
        self.latency.pause().await;

        let entries: Vec<PointHistoryModel> = self
            .table
            .read()
            .await
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();

        debug!(
            "🔍 point_history selected: user_id={user_id} entries={}",
            entries.len()
        );

        Ok(entries)
    }
}
