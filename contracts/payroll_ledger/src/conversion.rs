//! Oracle access and unit conversions.
//!
//! Ledger amounts use [`INTERNAL_DECIMALS`] regardless of the token they
//! end up in. Conversions between the stable and volatile unit happen at
//! that precision; rescaling to a token's own decimals is done once, at
//! the point money crosses the token boundary.

use soroban_sdk::{log, Env};

use crate::interfaces::PriceOracleClient;
use crate::storage::{LedgerConfig, PayrollError, PriceData};

/// Fixed-point precision of ledger amounts.
pub const INTERNAL_DECIMALS: u32 = 18;

/// One whole stable unit at internal precision.
pub const ONE_UNIT: i128 = 1_000_000_000_000_000_000;

fn pow10(exponent: u32) -> Result<i128, PayrollError> {
    10i128
        .checked_pow(exponent)
        .ok_or(PayrollError::ArithmeticOverflow)
}

/// Rescales an internal amount to a token with `decimals` places,
/// truncating anything below the token's smallest unit.
pub fn to_token_units(amount: i128, decimals: u32) -> Result<i128, PayrollError> {
    if decimals <= INTERNAL_DECIMALS {
        Ok(amount / pow10(INTERNAL_DECIMALS - decimals)?)
    } else {
        amount
            .checked_mul(pow10(decimals - INTERNAL_DECIMALS)?)
            .ok_or(PayrollError::ArithmeticOverflow)
    }
}

/// Inverse of [`to_token_units`].
pub fn from_token_units(amount: i128, decimals: u32) -> Result<i128, PayrollError> {
    if decimals <= INTERNAL_DECIMALS {
        amount
            .checked_mul(pow10(INTERNAL_DECIMALS - decimals)?)
            .ok_or(PayrollError::ArithmeticOverflow)
    } else {
        Ok(amount / pow10(decimals - INTERNAL_DECIMALS)?)
    }
}

/// Largest amount not above `amount` that a token with `decimals` places
/// can represent exactly.
pub fn round_to_token(amount: i128, decimals: u32) -> Result<i128, PayrollError> {
    from_token_units(to_token_units(amount, decimals)?, decimals)
}

/// Reads the oracle and rejects non-positive, future-dated or stale prices.
///
/// An oracle that fails or has nothing to report is treated like a bad price.
pub fn fetch_price(env: &Env, config: &LedgerConfig) -> Result<PriceData, PayrollError> {
    let data = match PriceOracleClient::new(env, &config.oracle).try_latest_price() {
        Ok(Ok(data)) => data,
        _ => return Err(PayrollError::InvalidPrice),
    };
    validate_price(&data, env.ledger().timestamp(), config.max_price_age)?;
    Ok(data)
}

pub(crate) fn validate_price(
    data: &PriceData,
    now: u64,
    max_price_age: u64,
) -> Result<(), PayrollError> {
    if data.price <= 0 || data.timestamp > now || now - data.timestamp > max_price_age {
        return Err(PayrollError::InvalidPrice);
    }
    // Anything wider cannot be scaled in i128.
    if data.decimals > 2 * INTERNAL_DECIMALS {
        return Err(PayrollError::InvalidPrice);
    }
    Ok(())
}

/// Stable amount to volatile amount at `price`.
pub fn stable_to_volatile(stable_amount: i128, price: &PriceData) -> Result<i128, PayrollError> {
    if price.price <= 0 {
        return Err(PayrollError::InvalidPrice);
    }
    stable_amount
        .checked_mul(pow10(price.decimals)?)
        .map(|scaled| scaled / price.price)
        .ok_or(PayrollError::ArithmeticOverflow)
}

/// Volatile amount to stable amount at `price`.
pub fn volatile_to_stable(volatile_amount: i128, price: &PriceData) -> Result<i128, PayrollError> {
    if price.price <= 0 {
        return Err(PayrollError::InvalidPrice);
    }
    let divisor = pow10(price.decimals)?;
    volatile_amount
        .checked_mul(price.price)
        .map(|scaled| scaled / divisor)
        .ok_or(PayrollError::ArithmeticOverflow)
}

/// Converts `stable_amount` into the volatile asset at the current oracle price.
pub fn to_volatile(
    env: &Env,
    config: &LedgerConfig,
    stable_amount: i128,
) -> Result<i128, PayrollError> {
    let price = fetch_price(env, config)?;
    let volatile_amount = stable_to_volatile(stable_amount, &price)?;
    log!(
        env,
        "to_volatile: stable {} at price {}e-{} -> {}",
        stable_amount,
        price.price,
        price.decimals,
        volatile_amount
    );
    Ok(volatile_amount)
}

/// Converts `volatile_amount` into the stable unit at the current oracle price.
pub fn to_stable(
    env: &Env,
    config: &LedgerConfig,
    volatile_amount: i128,
) -> Result<i128, PayrollError> {
    let price = fetch_price(env, config)?;
    volatile_to_stable(volatile_amount, &price)
}
