mod logs;
mod shutdown;

pub use self::logs::Logger;
pub use self::shutdown::shutdown_signal;
