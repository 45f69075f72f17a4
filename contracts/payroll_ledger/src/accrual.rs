//! Linear salary accrual.
//!
//! Everything here is a pure function of an [`EmployeeRecord`] and a
//! timestamp. The registry and the withdrawal path apply the record
//! transitions below and persist the result themselves.

use crate::storage::{EmployeeRecord, EmployeeStatus, PayrollError};

/// Length of the period `weekly_salary` is quoted for.
pub const SECONDS_PER_WEEK: u64 = 7 * 24 * 60 * 60;

impl EmployeeRecord {
    pub fn status(&self) -> EmployeeStatus {
        if self.employed_since == 0 {
            EmployeeStatus::Unregistered
        } else if self.terminated_at == 0 {
            EmployeeStatus::Active
        } else {
            EmployeeStatus::Terminated
        }
    }

    pub fn is_active(&self) -> bool {
        self.status() == EmployeeStatus::Active
    }

    /// Opens a new employment period at `now`.
    ///
    /// Used for both first registration and reinstatement. Salary carried
    /// in `accrued_salary` from an earlier period is left untouched.
    pub fn start_period(&mut self, now: u64, weekly_salary: i128) {
        self.weekly_salary = weekly_salary;
        self.employed_since = now;
        self.terminated_at = 0;
        self.withdrawn_salary = 0;
        self.prefers_volatile = false;
    }

    /// Closes the current period at `now`, folding its unpaid part into
    /// `accrued_salary`.
    pub fn close_period(&mut self, now: u64) -> Result<(), PayrollError> {
        let unpaid = period_owed(self, now)?
            .checked_sub(self.withdrawn_salary)
            .ok_or(PayrollError::ArithmeticOverflow)?;
        self.accrued_salary = self
            .accrued_salary
            .checked_add(unpaid)
            .ok_or(PayrollError::ArithmeticOverflow)?;
        self.withdrawn_salary = 0;
        self.terminated_at = now;
        Ok(())
    }

    /// Marks everything owed at `now` as settled and returns it.
    ///
    /// For an active record that is the unpaid part of the current period
    /// plus any carried salary; for a terminated one only the carried
    /// salary. `accrued_salary` is always zero afterwards.
    pub fn settle(&mut self, now: u64) -> Result<i128, PayrollError> {
        let mut owed = 0i128;
        if self.is_active() {
            let period = period_owed(self, now)?;
            owed = period
                .checked_sub(self.withdrawn_salary)
                .ok_or(PayrollError::ArithmeticOverflow)?;
            self.withdrawn_salary = period;
        }
        owed = owed
            .checked_add(self.accrued_salary)
            .ok_or(PayrollError::ArithmeticOverflow)?;
        self.accrued_salary = 0;
        Ok(owed)
    }

    /// Puts back the part of a settlement that could not be paid out, so a
    /// later withdrawal picks it up.
    pub fn carry(&mut self, unpaid: i128) -> Result<(), PayrollError> {
        self.accrued_salary = self
            .accrued_salary
            .checked_add(unpaid)
            .ok_or(PayrollError::ArithmeticOverflow)?;
        Ok(())
    }
}

/// Salary earned in the current period up to `now`.
///
/// Truncates toward zero; the fractional remainder of a second's pay is
/// never credited. Zero for records that are not active.
pub fn period_owed(record: &EmployeeRecord, now: u64) -> Result<i128, PayrollError> {
    if !record.is_active() {
        return Ok(0);
    }
    let elapsed = now.saturating_sub(record.employed_since);
    record
        .weekly_salary
        .checked_mul(i128::from(elapsed))
        .map(|earned| earned / i128::from(SECONDS_PER_WEEK))
        .ok_or(PayrollError::ArithmeticOverflow)
}

/// Salary available to the employee as reported by `salary_available`.
pub fn available(record: &EmployeeRecord, now: u64) -> Result<i128, PayrollError> {
    match record.status() {
        EmployeeStatus::Unregistered => Ok(0),
        EmployeeStatus::Active => period_owed(record, now)?
            .checked_sub(record.withdrawn_salary)
            .ok_or(PayrollError::ArithmeticOverflow),
        EmployeeStatus::Terminated => Ok(record.accrued_salary),
    }
}

/// Amount a withdrawal at `now` would settle.
pub fn pending_payout(record: &EmployeeRecord, now: u64) -> Result<i128, PayrollError> {
    match record.status() {
        EmployeeStatus::Active => available(record, now)?
            .checked_add(record.accrued_salary)
            .ok_or(PayrollError::ArithmeticOverflow),
        _ => available(record, now),
    }
}
