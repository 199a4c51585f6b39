use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds used for PDA derivation and the calendar constants that turn a
 * configured number of vesting months into a whole-day vesting ramp.
 */

/// ===== VESTING CALENDAR CONSTANTS =====

/// Length of one vesting day in seconds
/// - Elapsed time since release is counted in whole days of this length
#[constant]
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Days in a vesting year
/// - vesting_days = vesting_months * DAYS_PER_YEAR / MONTHS_PER_YEAR
/// - 2 months -> 60 days, 3 months -> 91 days, 36 months -> 1095 days
#[constant]
pub const DAYS_PER_YEAR: u64 = 365;

/// Months in a vesting year
#[constant]
pub const MONTHS_PER_YEAR: u64 = 12;

/// Longest vesting ramp accepted at initialization (50 years)
#[constant]
pub const MAX_VESTING_MONTHS: u16 = 600;

/// ===== REGISTRY LIMITS =====

/// Maximum number of payees a single pool can register
/// - Bounds the pool account size, which is allocated once at initialization
pub const MAX_PAYEES: usize = 32;

/// ===== PDA SEED CONSTANTS =====

/// Seed for pool PDA derivation
/// - Used in: ["payment_pool", payment_token_mint, creator]
/// - One pool per (token, creator) pair; creator is kept apart from owner
///   because ownership can be transferred or renounced
pub const POOL_SEED: &str = "payment_pool";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", pool_key]
/// - The vault's token authority is the pool PDA
pub const VAULT_SEED: &str = "vault";
