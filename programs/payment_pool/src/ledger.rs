//! Share-based, time-vested accounting over a `PaymentPool`.
//!
//! Every operation takes the pool record by reference plus the inputs the host
//! supplies for one instruction: the vault balance or a `TokenLedger`, the
//! caller, and `now`. Nothing here reads accounts or the clock.

use anchor_lang::prelude::*;

use crate::constants::{MAX_PAYEES, MAX_VESTING_MONTHS};
use crate::error::PaymentPoolError;
use crate::state::{Payee, PaymentPool};
use crate::utils::{proportional_share, vested_amount, TokenLedger};

impl PaymentPool {
    /**
     * Registers payees and vesting parameters
     *
     * Runs once per pool. All validation happens before the record is touched,
     * so a rejected call leaves it as it was.
     *
     * Validation Rules:
     * - Pool not initialized yet
     * - payees and shares non-empty, equal length, at most MAX_PAYEES
     * - No default or duplicate payee, every share > 0
     * - release_time > 0 and 1 <= vesting_months <= MAX_VESTING_MONTHS
     */
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        payment_token_mint: Pubkey,
        token_vault: Pubkey,
        payees: &[Pubkey],
        shares: &[u64],
        release_time: i64,
        vesting_months: u16,
    ) -> Result<()> {
        require!(!self.initialized, PaymentPoolError::AlreadyInitialized);

        require!(
            !payees.is_empty() && payees.len() == shares.len(),
            PaymentPoolError::InvalidPayees
        );
        require!(payees.len() <= MAX_PAYEES, PaymentPoolError::TooManyPayees);
        require!(release_time > 0, PaymentPoolError::InvalidReleaseTime);
        require!(
            vesting_months > 0 && vesting_months <= MAX_VESTING_MONTHS,
            PaymentPoolError::InvalidVestingMonths
        );

        let mut registry: Vec<Payee> = Vec::with_capacity(payees.len());
        let mut total_shares: u64 = 0;
        for (wallet, share) in payees.iter().zip(shares.iter()) {
            require!(*wallet != Pubkey::default(), PaymentPoolError::InvalidPayees);
            require!(*share > 0, PaymentPoolError::InvalidShares);
            if registry.iter().any(|p| p.wallet == *wallet) {
                return err!(PaymentPoolError::DuplicatePayee);
            }

            total_shares = total_shares
                .checked_add(*share)
                .ok_or(PaymentPoolError::ArithmeticOverflow)?;
            registry.push(Payee {
                wallet: *wallet,
                shares: *share,
                released: 0,
            });
        }

        self.creator = owner;
        self.owner = owner;
        self.payment_token_mint = payment_token_mint;
        self.token_vault = token_vault;
        self.release_time = release_time;
        self.vesting_months = vesting_months;
        self.total_shares = total_shares;
        self.payees = registry;
        self.initialized = true;

        Ok(())
    }

    /// Sum of released amounts across every payee.
    pub fn total_released(&self) -> Result<u128> {
        self.payees.iter().try_fold(0u128, |acc, p| {
            acc.checked_add(u128::from(p.released))
                .ok_or_else(|| error!(PaymentPoolError::ArithmeticOverflow))
        })
    }

    /// Everything the pool has ever held: what it holds now plus everything
    /// already paid out through claims.
    pub fn total_ever_held(&self, vault_balance: u64) -> Result<u128> {
        self.total_released()?
            .checked_add(u128::from(vault_balance))
            .ok_or_else(|| error!(PaymentPoolError::ArithmeticOverflow))
    }

    /// floor(total_ever_held * shares / total_shares), zero for non-payees.
    pub fn entitlement(&self, wallet: &Pubkey, vault_balance: u64) -> Result<u64> {
        let shares = self.shares_of(wallet);
        if shares == 0 {
            return Ok(0);
        }
        proportional_share(self.total_ever_held(vault_balance)?, shares, self.total_shares)
    }

    /// Not-yet-claimed part of the proportional share ("total balance").
    ///
    /// Floored at zero: owner transfers shrink the pool without touching any
    /// `released` counter, which can push entitlement below what was released.
    pub fn remaining_entitlement(&self, wallet: &Pubkey, vault_balance: u64) -> Result<u64> {
        let entitlement = self.entitlement(wallet, vault_balance)?;
        Ok(entitlement.saturating_sub(self.released_of(wallet)))
    }

    /// Vesting-gated amount `wallet` can claim at `now`, floored at zero.
    pub fn claimable(&self, wallet: &Pubkey, vault_balance: u64, now: i64) -> Result<u64> {
        require!(now >= self.release_time, PaymentPoolError::LockupActive);

        let entitlement = self.entitlement(wallet, vault_balance)?;
        let vested = vested_amount(entitlement, self.release_time, self.vesting_months, now)?;
        Ok(vested.saturating_sub(self.released_of(wallet)))
    }

    /**
     * Pays `amount` from the pool to a payee
     *
     * Checks run in a fixed order and the first failure is reported:
     * 1. caller has shares (NoShares)
     * 2. lock-up has ended (LockupActive)
     * 3. amount > 0 (InvalidAmount)
     * 4. amount <= remaining entitlement (ExceedsTotalAssets)
     * 5. amount <= vesting-gated claimable (ExceedsClaimable)
     *
     * `released` is only written after the transfer succeeded.
     *
     * @returns the payee's cumulative released amount after the claim
     */
    pub fn claim<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        caller: &Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<u64> {
        require!(self.shares_of(caller) > 0, PaymentPoolError::NoShares);
        if now < self.release_time {
            msg!("Lock-up active until {}, now {}", self.release_time, now);
            return err!(PaymentPoolError::LockupActive);
        }
        require!(amount > 0, PaymentPoolError::InvalidAmount);

        let vault_balance = ledger.balance();
        let remaining = self.remaining_entitlement(caller, vault_balance)?;
        require!(amount <= remaining, PaymentPoolError::ExceedsTotalAssets);

        let claimable = self.claimable(caller, vault_balance, now)?;
        if amount > claimable {
            msg!("Requested {}, claimable {}", amount, claimable);
            return err!(PaymentPoolError::ExceedsClaimable);
        }

        let new_released = self
            .released_of(caller)
            .checked_add(amount)
            .ok_or(PaymentPoolError::ArithmeticOverflow)?;

        ledger.transfer(caller, amount)?;

        let payee = self
            .payees
            .iter_mut()
            .find(|p| p.wallet == *caller)
            .ok_or(PaymentPoolError::NoShares)?;
        payee.released = new_released;

        Ok(new_released)
    }

    /// Owner-only transfer out of the pool.
    ///
    /// Bypasses entitlement and vesting and leaves every `released` counter
    /// alone, so repeated use lets the sum of released amounts drift from what
    /// actually left the pool. That drift is accepted administrative behavior.
    pub fn admin_transfer<L: TokenLedger>(
        &self,
        ledger: &mut L,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        require!(self.is_owner(caller), PaymentPoolError::NotOwner);
        require!(amount > 0, PaymentPoolError::InvalidAmount);
        ledger.transfer(to, amount)
    }

    /// Hands the administrative capability to `new_owner`; returns the previous owner.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        require!(self.is_owner(caller), PaymentPoolError::NotOwner);
        require!(new_owner != Pubkey::default(), PaymentPoolError::InvalidOwner);

        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    /// Clears the owner for good: afterwards no key passes `is_owner`,
    /// the former owner included.
    pub fn renounce_ownership(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        require!(self.is_owner(caller), PaymentPoolError::NotOwner);

        let previous = self.owner;
        self.owner = Pubkey::default();
        Ok(previous)
    }
}
