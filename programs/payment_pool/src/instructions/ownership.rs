use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for ownership changes
 *
 * Access Control: Owner only. After renounce_ownership the owner is the
 * default public key and both instructions reject every signer.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateOwner<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.payment_token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, PaymentPool>,

    pub owner: Signer<'info>,
}

pub fn handle_transfer_ownership(ctx: Context<UpdateOwner>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let pool = &mut ctx.accounts.pool;
    let previous_owner = pool.transfer_ownership(&caller, new_owner)?;
    let pool_key = pool.key();

    emit_cpi!(OwnershipTransferred {
        pool: pool_key,
        previous_owner,
        new_owner,
    });

    Ok(())
}

pub fn handle_renounce_ownership(ctx: Context<UpdateOwner>) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let pool = &mut ctx.accounts.pool;
    let previous_owner = pool.renounce_ownership(&caller)?;
    let pool_key = pool.key();

    emit_cpi!(OwnershipTransferred {
        pool: pool_key,
        previous_owner,
        new_owner: Pubkey::default(),
    });

    Ok(())
}
