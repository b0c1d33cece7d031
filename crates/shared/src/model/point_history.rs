use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Charge,
    Use,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Charge => write!(f, "CHARGE"),
            TransactionType::Use => write!(f, "USE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointHistoryModel {
    pub id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub kind: TransactionType,
    pub occurred_at: NaiveDateTime,
}

impl PointHistoryModel {
    /// Signed contribution of this entry to the owner's balance.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            TransactionType::Charge => self.amount,
            TransactionType::Use => -self.amount,
        }
    }
}
