mod history;
mod latency;
mod user_point;

pub use self::history::PointHistoryTable;
pub use self::latency::StoreLatency;
pub use self::user_point::UserPointTable;
