use crate::{
    domain::requests::{ChargePointRequest, UsePointRequest},
    domain::responses::{ApiResponse, UserPointResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPointCommandService = Arc<dyn PointCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait PointCommandServiceTrait {
    async fn charge(
        &self,
        req: &ChargePointRequest,
    ) -> Result<ApiResponse<UserPointResponse>, ServiceError>;
    async fn use_point(
        &self,
        req: &UsePointRequest,
    ) -> Result<ApiResponse<UserPointResponse>, ServiceError>;
}
