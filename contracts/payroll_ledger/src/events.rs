//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------

use soroban_sdk::{contractevent, Address, Env};

use crate::storage::PayoutCurrency;

/// Event: employee registered or reinstated
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeRegistered {
    #[topic]
    pub employee: Address,
    pub weekly_salary: i128,
    pub employed_since: u64,
}

/// Event: employee terminated
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeTerminated {
    #[topic]
    pub employee: Address,
    pub terminated_at: u64,
    /// Salary carried forward and still payable
    pub accrued_salary: i128,
}

/// Event: salary paid out; `amount` is in the paid token's own precision
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SalaryWithdrawn {
    #[topic]
    pub employee: Address,
    pub currency: PayoutCurrency,
    pub amount: i128,
}

/// Event: payout currency changed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurrencySwitched {
    #[topic]
    pub employee: Address,
    pub currency: PayoutCurrency,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDeposited {
    #[topic]
    pub from: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerTransferred {
    pub previous_manager: Address,
    pub new_manager: Address,
}

pub fn emit_employee_registered(e: &Env, event: EmployeeRegistered) {
    event.publish(e);
}

pub fn emit_employee_terminated(e: &Env, event: EmployeeTerminated) {
    event.publish(e);
}

pub fn emit_salary_withdrawn(e: &Env, event: SalaryWithdrawn) {
    event.publish(e);
}

pub fn emit_currency_switched(e: &Env, event: CurrencySwitched) {
    event.publish(e);
}

pub fn emit_funds_deposited(e: &Env, event: FundsDeposited) {
    event.publish(e);
}

pub fn emit_manager_transferred(e: &Env, event: ManagerTransferred) {
    event.publish(e);
}
