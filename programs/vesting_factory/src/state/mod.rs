pub mod factory;
pub mod recipient_vesting;
pub mod schedule;

pub use factory::*;
pub use recipient_vesting::*;
pub use schedule::*;
