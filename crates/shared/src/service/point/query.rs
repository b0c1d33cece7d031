use crate::{
    abstract_trait::point::{
        repository::{DynPointHistoryRepository, DynUserPointRepository},
        service::PointQueryServiceTrait,
    },
    domain::responses::{ApiResponse, PointHistoryResponse, UserPointResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

/// Snapshot reads. Never waits on a user's token.
pub struct PointQueryService {
    user_point: DynUserPointRepository,
    history: DynPointHistoryRepository,
}

impl PointQueryService {
    pub async fn new(
        user_point: DynUserPointRepository,
        history: DynPointHistoryRepository,
    ) -> Self {
        Self {
            user_point,
            history,
        }
    }
}

#[async_trait]
impl PointQueryServiceTrait for PointQueryService {
    async fn select(&self, user_id: i64) -> Result<ApiResponse<UserPointResponse>, ServiceError> {
        info!("🔍 Fetching point for user {user_id}");

        let point = self.user_point.select_by_id(user_id).await.map_err(|e| {
            error!("❌ Failed to fetch point for user {user_id}: {e:?}");
            ServiceError::from(e)
        })?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Point retrieved successfully".into(),
            data: UserPointResponse::from(point),
        })
    }

    async fn history(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<PointHistoryResponse>>, ServiceError> {
        info!("🔍 Fetching point history for user {user_id}");

        let entries = self
            .history
            .select_all_by_user_id(user_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch point history for user {user_id}: {e:?}");
                ServiceError::from(e)
            })?;

        info!("✅ Retrieved {} history entries for user {user_id}", entries.len());

        Ok(ApiResponse {
            status: "success".into(),
            message: "Point history retrieved successfully".into(),
            data: entries.into_iter().map(PointHistoryResponse::from).collect(),
        })
    }
}
