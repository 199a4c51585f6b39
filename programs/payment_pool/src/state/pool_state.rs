use anchor_lang::prelude::*;

use crate::constants::MAX_PAYEES;

/// A registered payee and its accounting.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Payee {
    /// Payee wallet
    pub wallet: Pubkey,
    /// Share weight, fixed at initialization
    pub shares: u64,
    /// Cumulative amount released to this payee through claims
    pub released: u64,
}

impl Payee {
    pub const SIZE: usize = 32 + 8 + 8;
}

/**
 * Payment pool state account
 *
 * The single record behind a share-based, time-vested payment pool: the payee
 * registry with per-payee released amounts, the payment token, and the vesting
 * parameters. Accounting operations live in `crate::ledger`.
 *
 * Derivation: ["payment_pool", payment_token_mint, creator]
 *
 * Lifecycle:
 * 1. Allocated and populated once by `initialize`
 * 2. `released` counters grow with each claim
 * 3. Ownership may be transferred or renounced
 * 4. Never closed; the pool is only drained
 */
#[account]
#[derive(Default, Debug)]
pub struct PaymentPool {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Signer that created the pool
    /// - Part of the PDA seeds, so it never changes
    pub creator: Pubkey,

    /// Holder of the administrative transfer capability
    /// - Pubkey::default() once ownership has been renounced
    pub owner: Pubkey,

    /// Mint of the single token this pool disburses
    pub payment_token_mint: Pubkey,

    /// Token vault holding the pool's balance
    /// - Derived from: ["vault", pool_key]
    pub token_vault: Pubkey,

    /// Lock-up end and vesting start (Unix timestamp)
    pub release_time: i64,

    /// Configured vesting length in months
    pub vesting_months: u16,

    /// Sum of all registered shares
    pub total_shares: u64,

    /// Set exactly once by `initialize`
    pub initialized: bool,

    /// Registered payees in initialization order
    pub payees: Vec<Payee>,
}

impl PaymentPool {
    /// Space for discriminator + fixed fields + a full payee vector
    pub const LEN: usize = 8 + // discriminator
        1 +  // bump
        32 + // creator
        32 + // owner
        32 + // payment_token_mint
        32 + // token_vault
        8 +  // release_time
        2 +  // vesting_months
        8 +  // total_shares
        1 +  // initialized
        4 + MAX_PAYEES * Payee::SIZE; // payees

    pub fn payee(&self, wallet: &Pubkey) -> Option<&Payee> {
        self.payees.iter().find(|p| p.wallet == *wallet)
    }

    /// Registered shares of `wallet`, zero when it is not a payee.
    pub fn shares_of(&self, wallet: &Pubkey) -> u64 {
        self.payee(wallet).map_or(0, |p| p.shares)
    }

    /// Cumulative amount released to `wallet`, zero when it is not a payee.
    pub fn released_of(&self, wallet: &Pubkey) -> u64 {
        self.payee(wallet).map_or(0, |p| p.released)
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner != Pubkey::default() && self.owner == *key
    }
}
