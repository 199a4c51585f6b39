use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::error::PaymentPoolError;

/// PDA-signed token transfer that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
        decimals,
    )
}

/// The pool's view of the payment token.
///
/// `balance` is what the pool currently holds of its payment token; `transfer`
/// moves tokens out of the pool. A failed transfer must leave nothing moved.
pub trait TokenLedger {
    fn balance(&self) -> u64;
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// `TokenLedger` over the pool vault, paying out through a PDA-signed CPI.
///
/// One instance serves one instruction and one destination token account.
pub struct VaultLedger<'info, 'a> {
    pub vault: AccountInfo<'info>,
    pub vault_amount: u64,
    pub destination: AccountInfo<'info>,
    /// Token-account owner of `destination`
    pub destination_owner: Pubkey,
    pub mint: AccountInfo<'info>,
    pub decimals: u8,
    /// Pool PDA, the vault's token authority
    pub authority: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'info, 'a> TokenLedger for VaultLedger<'info, 'a> {
    fn balance(&self) -> u64 {
        self.vault_amount
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            *to,
            self.destination_owner,
            PaymentPoolError::InvalidTokenAccount
        );
        require!(
            self.vault_amount >= amount,
            PaymentPoolError::InsufficientVaultBalance
        );

        transfer_token(
            self.authority.clone(),
            self.vault.clone(),
            self.destination.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            self.signer_seeds,
        )?;

        self.vault_amount -= amount;
        Ok(())
    }
}
