mod command;
mod query;

pub use self::command::{DynPointCommandService, PointCommandServiceTrait};
pub use self::query::{DynPointQueryService, PointQueryServiceTrait};
