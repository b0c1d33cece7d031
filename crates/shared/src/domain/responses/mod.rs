mod api;
mod point;

pub use self::api::ApiResponse;
pub use self::point::{PointHistoryResponse, UserPointResponse};
