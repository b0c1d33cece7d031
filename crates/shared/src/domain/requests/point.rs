use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ChargePointRequest {
    pub user_id: i64,

    #[validate(range(min = 1, message = "charge amount must be greater than zero"))]
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UsePointRequest {
    pub user_id: i64,

    #[validate(range(min = 1, message = "use amount must be greater than zero"))]
    pub amount: i64,
}
