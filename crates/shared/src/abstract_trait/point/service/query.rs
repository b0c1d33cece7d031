use crate::{
    domain::responses::{ApiResponse, PointHistoryResponse, UserPointResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPointQueryService = Arc<dyn PointQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait PointQueryServiceTrait {
    async fn select(&self, user_id: i64) -> Result<ApiResponse<UserPointResponse>, ServiceError>;
    async fn history(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<PointHistoryResponse>>, ServiceError>;
}
