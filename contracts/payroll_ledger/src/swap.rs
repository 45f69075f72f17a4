//! Conversion of stable custody into the native asset through the AMM venue.

use soroban_sdk::{log, token::Client as TokenClient, Address, Env};

use crate::conversion;
use crate::interfaces::{SwapRouterClient, WrappedNativeClient};
use crate::storage::{LedgerConfig, PayrollError};

/// Largest tolerated deviation between realized and oracle-implied output, in bps.
pub const MAX_SLIPPAGE_BPS: i128 = 200;

/// How long a swap request stays executable.
pub const SWAP_DEADLINE_SECONDS: u64 = 300;

/// Ledgers the router allowance stays valid for.
const APPROVAL_LEDGERS: u32 = 100;

const BPS_DENOMINATOR: i128 = 10_000;

/// Inclusive band `[min, max]` around `expected` allowed for a swap's output.
pub fn slippage_bounds(expected: i128) -> Result<(i128, i128), PayrollError> {
    let min = expected
        .checked_mul(BPS_DENOMINATOR - MAX_SLIPPAGE_BPS)
        .ok_or(PayrollError::ArithmeticOverflow)?
        / BPS_DENOMINATOR;
    let max = expected
        .checked_mul(BPS_DENOMINATOR + MAX_SLIPPAGE_BPS)
        .ok_or(PayrollError::ArithmeticOverflow)?
        / BPS_DENOMINATOR;
    Ok((min, max))
}

/// Fails with `InsufficientFunds` unless this contract holds `amount` of `token`.
pub(crate) fn ensure_custody(
    env: &Env,
    token: &TokenClient,
    amount: i128,
) -> Result<(), PayrollError> {
    if token.balance(&env.current_contract_address()) < amount {
        return Err(PayrollError::InsufficientFunds);
    }
    Ok(())
}

/// Swaps `stable_amount` for the native asset and pays it to `employee`.
///
/// # Arguments
/// * `stable_amount` - amount to sell, internal precision
/// * `expected_volatile` - oracle-implied proceeds, internal precision
///
/// # Returns
/// Native units delivered to the employee
///
/// The venue is given a minimum-output floor, but its report is not taken
/// on trust: the wrapped balance actually received must also lie within
/// [`MAX_SLIPPAGE_BPS`] of the oracle-implied amount, or the call fails
/// with `PriceDeviation`.
pub fn swap_to_volatile(
    env: &Env,
    config: &LedgerConfig,
    employee: &Address,
    stable_amount: i128,
    expected_volatile: i128,
) -> Result<i128, PayrollError> {
    let this = env.current_contract_address();
    let stable = TokenClient::new(env, &config.stable_token);
    let wrapped = TokenClient::new(env, &config.wrapped_native);

    let amount_in = conversion::to_token_units(stable_amount, stable.decimals())?;
    let expected_out = conversion::to_token_units(expected_volatile, wrapped.decimals())?;
    if amount_in <= 0 || expected_out <= 0 {
        return Err(PayrollError::InvalidAmount);
    }
    ensure_custody(env, &stable, amount_in)?;

    let (min_out, max_out) = slippage_bounds(expected_out)?;
    let deadline = env.ledger().timestamp() + SWAP_DEADLINE_SECONDS;
    let expiration_ledger = env.ledger().sequence() + APPROVAL_LEDGERS;

    stable.approve(&this, &config.swap_router, &amount_in, &expiration_ledger);

    let balance_before = wrapped.balance(&this);
    let reported = SwapRouterClient::new(env, &config.swap_router).swap_exact_in(
        &this,
        &config.stable_token,
        &config.wrapped_native,
        &config.fee_tier,
        &this,
        &deadline,
        &amount_in,
        &min_out,
    );
    let received = wrapped.balance(&this) - balance_before;

    log!(
        env,
        "swap: in {} expected {} reported {} received {}",
        amount_in,
        expected_out,
        reported,
        received
    );
    if received < min_out || received > max_out {
        return Err(PayrollError::PriceDeviation);
    }

    WrappedNativeClient::new(env, &config.wrapped_native).unwrap(&this, &received);

    let native = TokenClient::new(env, &config.native_token);
    ensure_custody(env, &native, received)?;
    native.transfer(&this, employee, &received);

    Ok(received)
}
