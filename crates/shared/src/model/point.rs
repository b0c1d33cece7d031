use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPointModel {
    pub id: i64,
    pub point: i64,
    pub updated_at: NaiveDateTime,
}

impl UserPointModel {
    pub fn empty(id: i64) -> Self {
        Self {
            id,
            point: 0,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
