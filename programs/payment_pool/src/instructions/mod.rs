pub mod initialize;
pub mod claim;
pub mod quote;
pub mod admin_transfer;
pub mod ownership;

pub use initialize::*;
pub use claim::*;
pub use quote::*;
pub use admin_transfer::*;
pub use ownership::*;
