use crate::{errors::RepositoryError, model::point::UserPointModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserPointRepository = Arc<dyn UserPointRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserPointRepositoryTrait {
    /// Returns the stored balance, or a zero balance for an unseen user.
    async fn select_by_id(&self, user_id: i64) -> Result<UserPointModel, RepositoryError>;
    async fn insert_or_update(
        &self,
        user_id: i64,
        point: i64,
    ) -> Result<UserPointModel, RepositoryError>;
}
