use soroban_sdk::{log, Address, Env};

use crate::events::{
    emit_employee_registered, emit_employee_terminated, EmployeeRegistered, EmployeeTerminated,
};
use crate::storage::{self, EmployeeRecord, EmployeeStatus, PayrollError};

/// Authenticates `caller` and checks it holds the manager role.
///
/// # Access Control
/// Requires `caller` authentication
pub fn require_manager(env: &Env, caller: &Address) -> Result<(), PayrollError> {
    caller.require_auth();
    let manager = storage::read_manager(env)?;
    if *caller != manager {
        return Err(PayrollError::NotAuthorized);
    }
    Ok(())
}

/// Registers a new employee, or reinstates a terminated one.
///
/// # Arguments
/// * `env` - Contract environment
/// * `manager` - Manager address
/// * `employee` - Employee to register
/// * `weekly_salary` - Salary per 7 days, internal precision
///
/// # State Transition
/// Unregistered -> Active, Terminated -> Active
///
/// # Access Control
/// Requires manager authentication
pub fn register(
    env: &Env,
    manager: &Address,
    employee: &Address,
    weekly_salary: i128,
) -> Result<(), PayrollError> {
    require_manager(env, manager)?;
    if weekly_salary <= 0 {
        return Err(PayrollError::InvalidAmount);
    }

    let mut record = storage::read_employee(env, employee);
    let status = record.status();
    if status == EmployeeStatus::Active {
        return Err(PayrollError::AlreadyRegistered);
    }

    let now = env.ledger().timestamp();
    if status == EmployeeStatus::Unregistered {
        record = EmployeeRecord::default();
    }
    record.start_period(now, weekly_salary);
    storage::write_employee(env, employee, &record);

    let active = storage::read_active_count(env)
        .checked_add(1)
        .ok_or(PayrollError::ArithmeticOverflow)?;
    storage::write_active_count(env, active);

    log!(
        env,
        "register: {} at {} (carried {})",
        employee,
        weekly_salary,
        record.accrued_salary
    );
    emit_employee_registered(
        env,
        EmployeeRegistered {
            employee: employee.clone(),
            weekly_salary,
            employed_since: now,
        },
    );
    Ok(())
}

/// Terminates an active employee.
///
/// Salary earned but not yet withdrawn in the closing period stays payable
/// through `accrued_salary`.
///
/// # State Transition
/// Active -> Terminated
///
/// # Access Control
/// Requires manager authentication
pub fn terminate(env: &Env, manager: &Address, employee: &Address) -> Result<(), PayrollError> {
    require_manager(env, manager)?;

    let mut record = storage::read_employee(env, employee);
    if !record.is_active() {
        return Err(PayrollError::NotRegistered);
    }

    let now = env.ledger().timestamp();
    record.close_period(now)?;
    storage::write_employee(env, employee, &record);

    let active = storage::read_active_count(env).saturating_sub(1);
    storage::write_active_count(env, active);

    emit_employee_terminated(
        env,
        EmployeeTerminated {
            employee: employee.clone(),
            terminated_at: now,
            accrued_salary: record.accrued_salary,
        },
    );
    Ok(())
}

pub fn get_record(env: &Env, employee: &Address) -> Option<EmployeeRecord> {
    let record = storage::read_employee(env, employee);
    match record.status() {
        EmployeeStatus::Unregistered => None,
        _ => Some(record),
    }
}

pub fn get_status(env: &Env, employee: &Address) -> EmployeeStatus {
    storage::read_employee(env, employee).status()
}

/// `(weekly_salary, employed_since, terminated_at)`, all zero if unregistered.
pub fn get_info(env: &Env, employee: &Address) -> (i128, u64, u64) {
    let record = storage::read_employee(env, employee);
    (
        record.weekly_salary,
        record.employed_since,
        record.terminated_at,
    )
}

pub fn active_count(env: &Env) -> u32 {
    storage::read_active_count(env)
}
