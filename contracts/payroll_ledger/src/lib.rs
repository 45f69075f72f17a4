#![no_std]

//! Payroll ledger contract.
//!
//! Tracks employment periods and linearly accrued wages denominated in a
//! stable token, and pays employees on demand either in that token or in
//! the native asset bought through an AMM venue at an oracle-checked price.
//!
//! # Security Model
//!
//! - Only the manager can register, terminate or hand over the manager role
//! - Employees can only withdraw or switch currency for themselves
//! - Payouts run under a re-entrancy lock and persist all bookkeeping
//!   before calling the venue or any token
//! - Swap proceeds are checked against the oracle-implied amount, not just
//!   the venue's own minimum-output floor

pub mod accrual;
pub mod conversion;
pub mod events;
pub mod guard;
pub mod interfaces;
pub mod registry;
pub mod storage;
pub mod swap;
pub mod withdrawal;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, token::Client as TokenClient, Address, Env};

use events::{emit_funds_deposited, emit_manager_transferred, FundsDeposited, ManagerTransferred};
use storage::{EmployeeRecord, EmployeeStatus, LedgerConfig, PayoutCurrency, PayrollError};

#[contract]
pub struct PayrollLedgerContract;

#[contractimpl]
impl PayrollLedgerContract {
    /// Initializes the ledger.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `manager` - Address allowed to register and terminate employees (must authenticate)
    /// * `config` - Collaborator contracts and tunables
    ///
    /// # Requirements
    ///
    /// * Contract must not be already initialized
    /// * `config.max_price_age` must be positive
    pub fn initialize(env: Env, manager: Address, config: LedgerConfig) -> Result<(), PayrollError> {
        manager.require_auth();
        if storage::is_initialized(&env) {
            return Err(PayrollError::AlreadyInitialized);
        }
        if config.max_price_age == 0 {
            return Err(PayrollError::InvalidConfig);
        }

        storage::write_manager(&env, &manager);
        storage::write_config(&env, &config);
        storage::write_active_count(&env, 0);
        storage::set_initialized(&env);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Moves stable tokens from `from` into the ledger's custody.
    ///
    /// `amount` is in the stable token's own precision.
    ///
    /// # Events
    ///
    /// Emits `FundsDeposited` on success.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), PayrollError> {
        storage::require_initialized(&env)?;
        from.require_auth();
        if amount <= 0 {
            return Err(PayrollError::InvalidAmount);
        }

        let config = storage::read_config(&env)?;
        TokenClient::new(&env, &config.stable_token).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );
        storage::extend_instance_ttl(&env);

        emit_funds_deposited(&env, FundsDeposited { from, amount });
        Ok(())
    }

    /// Registers `employee` at `weekly_salary` (internal precision), or
    /// reinstates them if they were terminated.
    ///
    /// # Access Control
    ///
    /// Only the manager.
    pub fn register(
        env: Env,
        manager: Address,
        employee: Address,
        weekly_salary: i128,
    ) -> Result<(), PayrollError> {
        storage::require_initialized(&env)?;
        registry::register(&env, &manager, &employee, weekly_salary)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Terminates an active employee.
    ///
    /// # Access Control
    ///
    /// Only the manager.
    pub fn terminate(env: Env, manager: Address, employee: Address) -> Result<(), PayrollError> {
        storage::require_initialized(&env)?;
        registry::terminate(&env, &manager, &employee)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Pays out all pending salary in the employee's preferred currency.
    ///
    /// # Returns
    ///
    /// The amount paid in the paid token's precision, `0` if less than one
    /// base unit of the stable token was owed.
    pub fn withdraw(env: Env, employee: Address) -> Result<i128, PayrollError> {
        storage::require_initialized(&env)?;
        let paid = withdrawal::withdraw(&env, &employee)?;
        storage::extend_instance_ttl(&env);
        Ok(paid)
    }

    /// Settles pending salary under the current currency, then switches
    /// to the other one.
    ///
    /// # Returns
    ///
    /// The currency future withdrawals will use.
    pub fn switch_preference(env: Env, employee: Address) -> Result<PayoutCurrency, PayrollError> {
        storage::require_initialized(&env)?;
        let currency = withdrawal::switch_preference(&env, &employee)?;
        storage::extend_instance_ttl(&env);
        Ok(currency)
    }

    /// Hands the manager role to `new_manager`.
    pub fn transfer_manager(
        env: Env,
        manager: Address,
        new_manager: Address,
    ) -> Result<(), PayrollError> {
        storage::require_initialized(&env)?;
        registry::require_manager(&env, &manager)?;
        storage::write_manager(&env, &new_manager);
        storage::extend_instance_ttl(&env);

        emit_manager_transferred(
            &env,
            ManagerTransferred {
                previous_manager: manager,
                new_manager,
            },
        );
        Ok(())
    }

    /// Salary available to `employee` right now, internal precision.
    ///
    /// For an active employee this is the unwithdrawn part of the current
    /// period; for a terminated one the carried balance.
    pub fn salary_available(env: Env, employee: Address) -> Result<i128, PayrollError> {
        let record = storage::read_employee(&env, &employee);
        accrual::available(&record, env.ledger().timestamp())
    }

    /// What `withdraw` would settle right now, internal precision.
    pub fn pending_payout(env: Env, employee: Address) -> Result<i128, PayrollError> {
        let record = storage::read_employee(&env, &employee);
        accrual::pending_payout(&record, env.ledger().timestamp())
    }

    /// `(weekly_salary, employed_since, terminated_at)` for `employee`.
    pub fn employee_info(env: Env, employee: Address) -> (i128, u64, u64) {
        registry::get_info(&env, &employee)
    }

    pub fn employee_record(env: Env, employee: Address) -> Option<EmployeeRecord> {
        registry::get_record(&env, &employee)
    }

    pub fn employee_status(env: Env, employee: Address) -> EmployeeStatus {
        registry::get_status(&env, &employee)
    }

    pub fn active_employee_count(env: Env) -> u32 {
        registry::active_count(&env)
    }

    pub fn manager_address(env: Env) -> Result<Address, PayrollError> {
        storage::read_manager(&env)
    }

    pub fn config(env: Env) -> Result<LedgerConfig, PayrollError> {
        storage::read_config(&env)
    }

    /// Volatile amount `stable_amount` buys at the current oracle price.
    /// Both amounts at internal precision.
    pub fn quote_volatile(env: Env, stable_amount: i128) -> Result<i128, PayrollError> {
        let config = storage::read_config(&env)?;
        conversion::to_volatile(&env, &config, stable_amount)
    }

    /// Stable value of `volatile_amount` at the current oracle price.
    pub fn quote_stable(env: Env, volatile_amount: i128) -> Result<i128, PayrollError> {
        let config = storage::read_config(&env)?;
        conversion::to_stable(&env, &config, volatile_amount)
    }
}
