use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use super::*;
use crate::storage::{EmployeeStatus, PayrollError};

#[test]
fn test_initialize_sets_manager_and_config() {
    let s = Setup::new();
    assert_eq!(s.client.manager_address(), s.manager);
    assert_eq!(s.client.active_employee_count(), 0);

    let config = s.client.config();
    assert_eq!(config.stable_token, s.stable);
    assert_eq!(config.native_token, s.native);
    assert_eq!(config.fee_tier, FEE_TIER);
    assert_eq!(config.max_price_age, MAX_PRICE_AGE);
}

#[test]
fn test_initialize_twice_fails() {
    let s = Setup::new();
    let config = s.client.config();
    let result = s.client.try_initialize(&s.manager, &config);
    assert_eq!(result, Err(Ok(PayrollError::AlreadyInitialized)));
}

#[test]
fn test_initialize_rejects_zero_price_age() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(PayrollLedgerContract, ());
    let client = PayrollLedgerContractClient::new(&env, &contract_id);

    let config = LedgerConfig {
        stable_token: Address::generate(&env),
        wrapped_native: Address::generate(&env),
        native_token: Address::generate(&env),
        oracle: Address::generate(&env),
        swap_router: Address::generate(&env),
        fee_tier: FEE_TIER,
        max_price_age: 0,
    };
    let result = client.try_initialize(&Address::generate(&env), &config);
    assert_eq!(result, Err(Ok(PayrollError::InvalidConfig)));
}

#[test]
fn test_operations_before_initialize_fail() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(PayrollLedgerContract, ());
    let client = PayrollLedgerContractClient::new(&env, &contract_id);
    let someone = Address::generate(&env);

    assert_eq!(
        client.try_register(&someone, &someone, &WEEKLY_SALARY),
        Err(Ok(PayrollError::NotInitialized))
    );
    assert_eq!(
        client.try_withdraw(&someone),
        Err(Ok(PayrollError::NotInitialized))
    );
    assert_eq!(
        client.try_manager_address(),
        Err(Ok(PayrollError::NotInitialized))
    );
}

#[test]
fn test_register_creates_active_record() {
    let s = Setup::new();
    let employee = s.hire(WEEKLY_SALARY);

    assert_eq!(s.client.employee_status(&employee), EmployeeStatus::Active);
    assert_eq!(s.client.active_employee_count(), 1);
    assert_eq!(s.client.employee_info(&employee), (WEEKLY_SALARY, START, 0));

    let record = s.client.employee_record(&employee).unwrap();
    assert_eq!(record.withdrawn_salary, 0);
    assert_eq!(record.accrued_salary, 0);
    assert!(!record.prefers_volatile);
}

#[test]
fn test_unregistered_lookup_is_empty() {
    let s = Setup::new();
    let stranger = s.address();

    assert_eq!(
        s.client.employee_status(&stranger),
        EmployeeStatus::Unregistered
    );
    assert_eq!(s.client.employee_info(&stranger), (0, 0, 0));
    assert_eq!(s.client.employee_record(&stranger), None);
    assert_eq!(s.client.salary_available(&stranger), 0);
}

#[test]
fn test_register_active_employee_fails() {
    let s = Setup::new();
    let employee = s.hire(WEEKLY_SALARY);

    let result = s.client.try_register(&s.manager, &employee, &WEEKLY_SALARY);
    assert_eq!(result, Err(Ok(PayrollError::AlreadyRegistered)));
    assert_eq!(s.client.active_employee_count(), 1);
}

#[test]
fn test_register_rejects_non_positive_salary() {
    let s = Setup::new();
    let employee = s.address();

    assert_eq!(
        s.client.try_register(&s.manager, &employee, &0),
        Err(Ok(PayrollError::InvalidAmount))
    );
    assert_eq!(
        s.client.try_register(&s.manager, &employee, &-1),
        Err(Ok(PayrollError::InvalidAmount))
    );
}

#[test]
fn test_only_manager_can_register_and_terminate() {
    let s = Setup::new();
    let intruder = s.address();
    let employee = s.hire(WEEKLY_SALARY);

    assert_eq!(
        s.client.try_register(&intruder, &s.address(), &WEEKLY_SALARY),
        Err(Ok(PayrollError::NotAuthorized))
    );
    assert_eq!(
        s.client.try_terminate(&intruder, &employee),
        Err(Ok(PayrollError::NotAuthorized))
    );
    assert_eq!(
        s.client.try_terminate(&employee, &employee),
        Err(Ok(PayrollError::NotAuthorized))
    );
}

#[test]
fn test_terminate_folds_unpaid_salary() {
    let s = Setup::new();
    let employee = s.hire(WEEKLY_SALARY);

    s.advance(3 * ONE_DAY);
    s.client.terminate(&s.manager, &employee);

    let record = s.client.employee_record(&employee).unwrap();
    assert_eq!(record.terminated_at, START + 3 * ONE_DAY);
    assert_eq!(record.accrued_salary, 900 * ONE_UNIT);
    assert_eq!(record.withdrawn_salary, 0);
    assert_eq!(
        s.client.employee_status(&employee),
        EmployeeStatus::Terminated
    );
    assert_eq!(s.client.active_employee_count(), 0);
    assert_eq!(s.client.salary_available(&employee), 900 * ONE_UNIT);
}

#[test]
fn test_terminate_non_active_fails() {
    let s = Setup::new();
    let stranger = s.address();
    assert_eq!(
        s.client.try_terminate(&s.manager, &stranger),
        Err(Ok(PayrollError::NotRegistered))
    );

    let employee = s.hire(WEEKLY_SALARY);
    s.client.terminate(&s.manager, &employee);
    assert_eq!(
        s.client.try_terminate(&s.manager, &employee),
        Err(Ok(PayrollError::NotRegistered))
    );
}

#[test]
fn test_reinstatement_keeps_carried_salary() {
    let s = Setup::new();
    let employee = s.hire(WEEKLY_SALARY);

    s.advance(3 * ONE_DAY);
    s.client.terminate(&s.manager, &employee);
    s.advance(10 * ONE_DAY);

    let new_salary = 3_500 * ONE_UNIT;
    s.client.register(&s.manager, &employee, &new_salary);

    let record = s.client.employee_record(&employee).unwrap();
    assert_eq!(record.employed_since, s.now());
    assert_eq!(record.terminated_at, 0);
    assert_eq!(record.weekly_salary, new_salary);
    assert_eq!(record.accrued_salary, 900 * ONE_UNIT);
    assert_eq!(s.client.active_employee_count(), 1);
    // Current period only; carried salary shows in pending_payout
    assert_eq!(s.client.salary_available(&employee), 0);
    assert_eq!(s.client.pending_payout(&employee), 900 * ONE_UNIT);
}

#[test]
fn test_active_count_tracks_many_employees() {
    let s = Setup::new();
    let a = s.hire(WEEKLY_SALARY);
    let b = s.hire(WEEKLY_SALARY);
    let _c = s.hire(WEEKLY_SALARY);
    assert_eq!(s.client.active_employee_count(), 3);

    s.client.terminate(&s.manager, &a);
    s.client.terminate(&s.manager, &b);
    assert_eq!(s.client.active_employee_count(), 1);

    s.client.register(&s.manager, &a, &WEEKLY_SALARY);
    assert_eq!(s.client.active_employee_count(), 2);
}

#[test]
fn test_transfer_manager() {
    let s = Setup::new();
    let new_manager = s.address();

    s.client.transfer_manager(&s.manager, &new_manager);
    assert_eq!(s.client.manager_address(), new_manager);

    assert_eq!(
        s.client.try_register(&s.manager, &s.address(), &WEEKLY_SALARY),
        Err(Ok(PayrollError::NotAuthorized))
    );
    s.client.register(&new_manager, &s.address(), &WEEKLY_SALARY);
    assert_eq!(s.client.active_employee_count(), 1);
}
