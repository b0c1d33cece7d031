mod history;
mod user_point;

pub use self::history::{DynPointHistoryRepository, PointHistoryRepositoryTrait};
pub use self::user_point::{DynUserPointRepository, UserPointRepositoryTrait};
