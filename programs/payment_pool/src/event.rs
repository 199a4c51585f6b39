use anchor_lang::prelude::*;

/// Event emitted when a pool is initialized
#[event]
pub struct PoolInitialized {
    /// The pool account public key
    pub pool: Pubkey,
    /// Owner holding the administrative transfer capability
    pub owner: Pubkey,
    /// Payment token mint
    pub payment_token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Number of registered payees
    pub payee_count: u8,
    /// Sum of all registered shares
    pub total_shares: u64,
    /// Lock-up end / vesting start (Unix timestamp)
    pub release_time: i64,
    /// Configured vesting length in months
    pub vesting_months: u16,
}

/// Event emitted when a payee claims vested tokens
#[event]
pub struct TokensClaimed {
    /// The pool account public key
    pub pool: Pubkey,
    /// Payee who claimed
    pub payee: Pubkey,
    /// Amount transferred in this claim
    pub amount: u64,
    /// Cumulative amount released to this payee
    pub released: u64,
}

/// Event emitted by the view instructions
#[event]
pub struct BalanceQuoted {
    /// The pool account public key
    pub pool: Pubkey,
    /// Wallet the quote was computed for
    pub payee: Pubkey,
    /// Vesting-gated amount claimable now, None while the lock-up is active
    pub claimable: Option<u64>,
    /// Unclaimed part of the payee's proportional share
    pub total_balance: u64,
}

/// Event emitted when the owner moves tokens out of the pool directly
#[event]
pub struct AdminTransferExecuted {
    /// The pool account public key
    pub pool: Pubkey,
    /// Owner who executed the transfer
    pub owner: Pubkey,
    /// Recipient wallet
    pub recipient: Pubkey,
    /// Amount transferred
    pub amount: u64,
}

/// Event emitted when ownership changes, including renouncement
#[event]
pub struct OwnershipTransferred {
    /// The pool account public key
    pub pool: Pubkey,
    /// Previous owner
    pub previous_owner: Pubkey,
    /// New owner (default public key after renouncement)
    pub new_owner: Pubkey,
}
