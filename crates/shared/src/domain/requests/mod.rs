mod point;

pub use self::point::{ChargePointRequest, UsePointRequest};
