pub mod point;
pub mod point_history;
