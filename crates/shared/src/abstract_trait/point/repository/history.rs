use crate::{
    errors::RepositoryError,
    model::point_history::{PointHistoryModel, TransactionType},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynPointHistoryRepository = Arc<dyn PointHistoryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PointHistoryRepositoryTrait {
    async fn insert(
        &self,
        user_id: i64,
        amount: i64,
        kind: TransactionType,
        occurred_at: NaiveDateTime,
    ) -> Result<PointHistoryModel, RepositoryError>;
    /// Entries in insertion order, oldest first.
    async fn select_all_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<PointHistoryModel>, RepositoryError>;
}
