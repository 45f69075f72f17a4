//! Settlement of pending salary.
//!
//! Every path here runs under the [`ReentrancyGuard`] and writes the
//! employee record back to storage before any external contract is called.

use soroban_sdk::{log, token::Client as TokenClient, Address, Env};

use crate::conversion;
use crate::events::{
    emit_currency_switched, emit_salary_withdrawn, CurrencySwitched, SalaryWithdrawn,
};
use crate::guard::ReentrancyGuard;
use crate::storage::{self, EmployeeStatus, LedgerConfig, PayoutCurrency, PayrollError};
use crate::swap;

/// Pays `employee` everything owed to them in their preferred currency.
///
/// # Returns
/// Amount paid, in the paid token's precision; `0` when nothing is owed
///
/// # Access Control
/// Requires `employee` authentication; the employee must have been
/// registered at some point
pub fn withdraw(env: &Env, employee: &Address) -> Result<i128, PayrollError> {
    employee.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;

    let record = storage::read_employee(env, employee);
    if record.status() == EmployeeStatus::Unregistered {
        return Err(PayrollError::NotAuthorized);
    }
    let currency = currency_of(record.prefers_volatile);
    settle(env, employee, currency, false)
}

/// Settles under the current preference, then flips it.
///
/// # Returns
/// The newly selected currency
///
/// # Access Control
/// Requires `employee` authentication; the employee must be active
pub fn switch_preference(env: &Env, employee: &Address) -> Result<PayoutCurrency, PayrollError> {
    employee.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;

    let record = storage::read_employee(env, employee);
    if !record.is_active() {
        return Err(PayrollError::NotAuthorized);
    }
    let old_currency = currency_of(record.prefers_volatile);
    settle(env, employee, old_currency, true)?;

    let new_currency = currency_of(!record.prefers_volatile);
    emit_currency_switched(
        env,
        CurrencySwitched {
            employee: employee.clone(),
            currency: new_currency,
        },
    );
    Ok(new_currency)
}

fn currency_of(prefers_volatile: bool) -> PayoutCurrency {
    if prefers_volatile {
        PayoutCurrency::Volatile
    } else {
        PayoutCurrency::Stable
    }
}

/// Settles the record, optionally flips its preference, persists it and
/// only then pays out in `currency`.
///
/// Only the part of what is owed that the stable token can represent is
/// paid; the sub-unit remainder stays on the record as carried salary.
fn settle(
    env: &Env,
    employee: &Address,
    currency: PayoutCurrency,
    flip_preference: bool,
) -> Result<i128, PayrollError> {
    let config = storage::read_config(env)?;
    let stable_decimals = TokenClient::new(env, &config.stable_token).decimals();

    let mut record = storage::read_employee(env, employee);
    let owed = record.settle(env.ledger().timestamp())?;
    let payable = conversion::round_to_token(owed, stable_decimals)?;
    record.carry(owed - payable)?;

    if flip_preference {
        record.prefers_volatile = !record.prefers_volatile;
    }
    if payable == 0 {
        log!(env, "settle: nothing payable to {} (owed {})", employee, owed);
        if flip_preference {
            storage::write_employee(env, employee, &record);
        }
        return Ok(0);
    }
    storage::write_employee(env, employee, &record);

    let paid = pay_out(env, &config, employee, currency, payable)?;
    emit_salary_withdrawn(
        env,
        SalaryWithdrawn {
            employee: employee.clone(),
            currency,
            amount: paid,
        },
    );
    Ok(paid)
}

/// `payable` is exactly representable in the stable token.
fn pay_out(
    env: &Env,
    config: &LedgerConfig,
    employee: &Address,
    currency: PayoutCurrency,
    payable: i128,
) -> Result<i128, PayrollError> {
    match currency {
        PayoutCurrency::Stable => {
            let stable = TokenClient::new(env, &config.stable_token);
            let amount = conversion::to_token_units(payable, stable.decimals())?;
            swap::ensure_custody(env, &stable, amount)?;
            stable.transfer(&env.current_contract_address(), employee, &amount);
            Ok(amount)
        }
        PayoutCurrency::Volatile => {
            let expected = conversion::to_volatile(env, config, payable)?;
            swap::swap_to_volatile(env, config, employee, payable, expected)
        }
    }
}
