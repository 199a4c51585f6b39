pub mod token;
pub mod vesting;

pub use token::*;
pub use vesting::*;
