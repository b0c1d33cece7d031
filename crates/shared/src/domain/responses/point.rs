use crate::model::{
    point::UserPointModel,
    point_history::{PointHistoryModel, TransactionType},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPointResponse {
    pub id: i64,
    pub point: i64,
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PointHistoryResponse {
    pub id: i64,
    pub user_id: i64,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(rename = "occurred_at")]
    pub occurred_at: String,
}

// model to response
impl From<UserPointModel> for UserPointResponse {
    fn from(model: UserPointModel) -> Self {
        Self {
            id: model.id,
            point: model.point,
            updated_at: model.updated_at.to_string(),
        }
    }
}

impl From<PointHistoryModel> for PointHistoryResponse {
    fn from(model: PointHistoryModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            amount: model.amount,
            kind: model.kind,
            occurred_at: model.occurred_at.to_string(),
        }
    }
}
