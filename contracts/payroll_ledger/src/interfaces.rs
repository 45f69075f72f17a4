//! Interfaces of the external contracts the ledger calls into.
//!
//! Fungible tokens go through `soroban_sdk::token`; only the calls that
//! interface lacks are declared here.

use soroban_sdk::{contractclient, Address, Env};

use crate::storage::PriceData;

/// Price feed for the stable/volatile pair.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracleInterface {
    /// Most recent price, in stable units per volatile unit.
    fn latest_price(env: Env) -> PriceData;
}

/// AMM venue able to execute an exact-input swap.
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    /// Pulls `amount_in` of `token_in` from `sender` (against an allowance
    /// granted to the router), swaps it through the `fee_tier` pool and sends
    /// the `token_out` proceeds to `recipient`. Fails if the output is below
    /// `min_amount_out` or the ledger time is past `deadline`.
    fn swap_exact_in(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        fee_tier: u32,
        recipient: Address,
        deadline: u64,
        amount_in: i128,
        min_amount_out: i128,
    ) -> i128;
}

/// Wrapped form of the native asset.
#[contractclient(name = "WrappedNativeClient")]
pub trait WrappedNativeInterface {
    /// Burns `amount` wrapped units held by `from` and sends the same
    /// number of native units to `from`.
    fn unwrap(env: Env, from: Address, amount: i128);
}
