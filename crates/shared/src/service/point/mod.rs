mod command;
mod lock;
mod policy;
mod query;

pub use self::command::PointCommandService;
pub use self::lock::{PointLockGuard, PointLockRegistry};
pub use self::policy::{DEFAULT_MAX_BALANCE, PointPolicy};
pub use self::query::PointQueryService;
