use anchor_lang::prelude::*;

use crate::constants::{DAYS_PER_YEAR, MONTHS_PER_YEAR, SECONDS_PER_DAY};
use crate::error::PaymentPoolError;

/// Length of the vesting ramp in whole days.
pub fn vesting_days(vesting_months: u16) -> u64 {
    u64::from(vesting_months) * DAYS_PER_YEAR / MONTHS_PER_YEAR
}

/// Whole days elapsed since `release_time`.
///
/// Fails with `LockupActive` before `release_time` so callers can tell
/// "not yet unlocked" apart from "unlocked with nothing vested".
pub fn elapsed_days(release_time: i64, now: i64) -> Result<u64> {
    if now < release_time {
        return err!(PaymentPoolError::LockupActive);
    }
    let elapsed = now
        .checked_sub(release_time)
        .ok_or(PaymentPoolError::ArithmeticOverflow)?;
    Ok((elapsed / SECONDS_PER_DAY) as u64)
}

/// Portion of `entitlement` unlocked at `now`.
///
/// Vesting accrues a whole-day rate of `entitlement / vesting_days`; once the
/// ramp has fully elapsed the whole entitlement is vested.
pub fn vested_amount(
    entitlement: u64,
    release_time: i64,
    vesting_months: u16,
    now: i64,
) -> Result<u64> {
    let days = elapsed_days(release_time, now)?;
    let ramp = vesting_days(vesting_months);
    if days >= ramp {
        return Ok(entitlement);
    }

    // days < ramp here, so the product stays below entitlement
    let daily = entitlement / ramp;
    daily
        .checked_mul(days)
        .ok_or_else(|| error!(PaymentPoolError::ArithmeticOverflow))
}

/// floor(total * shares / total_shares) computed in u128.
pub fn proportional_share(total: u128, shares: u64, total_shares: u64) -> Result<u64> {
    require!(total_shares > 0, PaymentPoolError::InvalidShares);
    let product = total
        .checked_mul(u128::from(shares))
        .ok_or(PaymentPoolError::ArithmeticOverflow)?;
    let share = product / u128::from(total_shares);
    u64::try_from(share).map_err(|_| error!(PaymentPoolError::ArithmeticOverflow))
}
