#![no_std]

//! Admin-fed price oracle.
//!
//! Publishes a single stable-per-native price with its decimals and the
//! ledger time it was set at. The payroll ledger reads it through
//! `latest_price` and applies its own staleness rules.

mod events;
mod storage;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, log, Address, Env};

pub use storage::{OracleError, PriceData};

#[contract]
pub struct PriceOracleContract;

#[contractimpl]
impl PriceOracleContract {
    /// Sets the feeding admin and the fixed number of price decimals.
    pub fn initialize(env: Env, admin: Address, decimals: u32) -> Result<(), OracleError> {
        admin.require_auth();
        if storage::has_admin(&env) {
            return Err(OracleError::AlreadyInitialized);
        }
        storage::write_admin(&env, &admin);
        storage::write_decimals(&env, decimals);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Publishes `price` stamped with the current ledger time.
    ///
    /// # Access Control
    ///
    /// Only the admin.
    ///
    /// # Events
    ///
    /// Emits `PriceUpdated`.
    pub fn set_price(env: Env, admin: Address, price: i128) -> Result<(), OracleError> {
        admin.require_auth();
        if storage::read_admin(&env)? != admin {
            return Err(OracleError::Unauthorized);
        }
        if price <= 0 {
            return Err(OracleError::InvalidPrice);
        }

        let data = PriceData {
            price,
            decimals: storage::read_decimals(&env)?,
            timestamp: env.ledger().timestamp(),
        };
        storage::write_price(&env, &data);
        storage::extend_instance_ttl(&env);
        log!(&env, "set_price: {} at {}", price, data.timestamp);

        events::emit_price_updated(
            &env,
            events::PriceUpdated {
                price,
                decimals: data.decimals,
                timestamp: data.timestamp,
            },
        );
        Ok(())
    }

    pub fn latest_price(env: Env) -> Result<PriceData, OracleError> {
        storage::read_price(&env)
    }

    pub fn admin(env: Env) -> Result<Address, OracleError> {
        storage::read_admin(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, OracleError> {
        storage::read_decimals(&env)
    }
}
