pub mod initialize_factory;
pub mod fund_factory;
pub mod create_vesting;
pub mod change_treasury;
pub mod withdraw;
pub mod claim;
pub mod claim_all;
pub mod cancel_vest;
pub mod change_recipient;
pub mod quote_claimable;

pub use initialize_factory::*;
pub use fund_factory::*;
pub use create_vesting::*;
pub use change_treasury::*;
pub use withdraw::*;
pub use claim::*;
pub use claim_all::*;
pub use cancel_vest::*;
pub use change_recipient::*;
pub use quote_claimable::*;
