pub mod di;
pub mod handler;
pub mod metrics;
pub mod state;
