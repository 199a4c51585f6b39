use anchor_lang::prelude::*;

#[error_code]
pub enum PaymentPoolError {
    // Claim errors, reported in this order by `claim`
    #[msg("TokenPaymentSplitter: account has no shares")]
    NoShares,
    #[msg("Still in lock-up period")]
    LockupActive,
    #[msg("More than total assets")]
    ExceedsTotalAssets,
    #[msg("More than claimable amount")]
    ExceedsClaimable,

    // Access control errors
    #[msg("Caller is not the owner")]
    NotOwner,
    #[msg("New owner cannot be the default public key")]
    InvalidOwner,

    // Initialization errors
    #[msg("Pool is already initialized")]
    AlreadyInitialized,
    #[msg("Payees and shares must be non-empty and of equal length")]
    InvalidPayees,
    #[msg("Too many payees for a single pool")]
    TooManyPayees,
    #[msg("Payee is already registered")]
    DuplicatePayee,
    #[msg("Shares must be greater than zero")]
    InvalidShares,
    #[msg("Invalid release time")]
    InvalidReleaseTime,
    #[msg("Invalid number of vesting months")]
    InvalidVestingMonths,

    // Token movement errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient vault balance for this transfer")]
    InsufficientVaultBalance,
    #[msg("Destination token account is not owned by the recipient")]
    InvalidTokenAccount,
    #[msg("Token mint does not match the pool's payment token")]
    TokenMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
