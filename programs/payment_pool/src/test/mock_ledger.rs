use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::error::PaymentPoolError;
use crate::state::PaymentPool;
use crate::utils::TokenLedger;

/// In-memory token balances keyed by (mint, holder).
///
/// Plays the token program for one pool: `balance` and `transfer` act on the
/// pool's holdings of the payment mint, while `mint` can credit any mint to
/// any holder.
pub struct MockTokenLedger {
    pub payment_mint: Pubkey,
    pub pool: Pubkey,
    /// Makes every transfer fail, to exercise error paths after validation
    pub fail_transfers: bool,
    balances: HashMap<(Pubkey, Pubkey), u64>,
}

impl MockTokenLedger {
    pub fn new(payment_mint: Pubkey, pool: Pubkey) -> Self {
        MockTokenLedger {
            payment_mint,
            pool,
            fail_transfers: false,
            balances: HashMap::new(),
        }
    }

    pub fn mint(&mut self, mint: &Pubkey, holder: &Pubkey, amount: u64) {
        *self.balances.entry((*mint, *holder)).or_insert(0) += amount;
    }

    pub fn balance_of(&self, mint: &Pubkey, holder: &Pubkey) -> u64 {
        self.balances.get(&(*mint, *holder)).copied().unwrap_or(0)
    }

    /// Payment token balance of `holder`.
    pub fn paid(&self, holder: &Pubkey) -> u64 {
        self.balance_of(&self.payment_mint, holder)
    }
}

impl TokenLedger for MockTokenLedger {
    fn balance(&self) -> u64 {
        self.balance_of(&self.payment_mint, &self.pool)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.fail_transfers, PaymentPoolError::InvalidTokenAccount);
        let held = self.balance();
        require!(held >= amount, PaymentPoolError::InsufficientVaultBalance);

        let mint = self.payment_mint;
        self.balances.insert((mint, self.pool), held - amount);
        self.mint(&mint, to, amount);
        Ok(())
    }
}

/// Release time shared by most scenarios (2022-09-10T08:30:31Z)
pub const RELEASE_TIME: i64 = 1_662_798_631;

/// A time well past the end of any ramp of up to two months from RELEASE_TIME
pub const NOW: i64 = 1_670_730_607;

pub const POOL_FUNDING: u64 = 100_000;

pub struct Fixture {
    pub pool: PaymentPool,
    pub ledger: MockTokenLedger,
    pub owner: Pubkey,
    pub payees: Vec<Pubkey>,
}

impl Fixture {
    /// Initialized pool with one fresh payee per share entry and `funding`
    /// payment tokens in the vault.
    pub fn new(shares: &[u64], release_time: i64, vesting_months: u16, funding: u64) -> Self {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let pool_key = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let payees: Vec<Pubkey> = shares.iter().map(|_| Pubkey::new_unique()).collect();

        let mut pool = PaymentPool::default();
        pool.initialize(owner, mint, vault, &payees, shares, release_time, vesting_months)
            .expect("fixture initialization failed");

        let mut ledger = MockTokenLedger::new(mint, pool_key);
        ledger.mint(&mint, &pool_key, funding);

        Fixture {
            pool,
            ledger,
            owner,
            payees,
        }
    }

    /// Four equal payees, fully vested at NOW.
    pub fn equal_four() -> Self {
        Self::new(&[10, 10, 10, 10], RELEASE_TIME, 2, POOL_FUNDING)
    }

    pub fn claim(&mut self, payee: usize, amount: u64, now: i64) -> Result<u64> {
        let wallet = self.payees[payee];
        self.pool.claim(&mut self.ledger, &wallet, amount, now)
    }

    pub fn total_balance(&self, payee: usize) -> u64 {
        self.pool
            .remaining_entitlement(&self.payees[payee], self.ledger.balance())
            .expect("total balance")
    }

    pub fn claimable(&self, payee: usize, now: i64) -> Result<u64> {
        self.pool
            .claimable(&self.payees[payee], self.ledger.balance(), now)
    }
}

/// Asserts that `result` failed with the given program error.
pub fn assert_pool_error<T: std::fmt::Debug>(result: Result<T>, expected: PaymentPoolError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(error)) => assert_eq!(
            error.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            error.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
