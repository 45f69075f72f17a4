use soroban_sdk::{contracterror, contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const EMPLOYEE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const EMPLOYEE_LIFETIME_THRESHOLD: u32 = EMPLOYEE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Errors surfaced by the payroll ledger.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PayrollError {
    /// Caller lacks the role or employment state required for the action
    NotAuthorized = 1,
    AlreadyRegistered = 2,
    NotRegistered = 3,
    /// Oracle price is non-positive, stale or unusable
    InvalidPrice = 4,
    /// Venue output outside the tolerated band around the oracle-implied amount
    PriceDeviation = 5,
    Reentrancy = 6,
    /// Custody cannot cover the payout
    InsufficientFunds = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
    InvalidAmount = 10,
    InvalidConfig = 11,
    ArithmeticOverflow = 12,
}

/// Employment state derived from an [`EmployeeRecord`].
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmployeeStatus {
    /// No record has ever been created
    Unregistered,
    /// Accruing salary in the current period
    Active,
    /// Period closed; only carried salary remains payable
    Terminated,
}

/// Currency an employee is paid in.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayoutCurrency {
    /// The stable unit of account, paid by direct transfer
    Stable,
    /// The native asset, bought through the AMM venue
    Volatile,
}

/// Per-employee ledger entry.
///
/// Amounts are in the stable unit at internal precision
/// (see [`crate::conversion::INTERNAL_DECIMALS`]).
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EmployeeRecord {
    pub weekly_salary: i128,
    /// Start of the current period, `0` if never registered
    pub employed_since: u64,
    /// `0` while the employee is active
    pub terminated_at: u64,
    /// Settled out of the current period
    pub withdrawn_salary: i128,
    /// Carried over from a closed period, not yet paid
    pub accrued_salary: i128,
    pub prefers_volatile: bool,
}

/// Latest reading reported by a price oracle.
///
/// `price` is the number of stable units per volatile unit scaled by
/// `10^decimals`; `timestamp` is when the reading was taken.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub decimals: u32,
    pub timestamp: u64,
}

/// Collaborator addresses and tunables fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Token contract salaries are denominated and held in
    pub stable_token: Address,
    /// Wrapped volatile asset returned by the venue
    pub wrapped_native: Address,
    /// Bare native asset obtained by unwrapping
    pub native_token: Address,
    pub oracle: Address,
    pub swap_router: Address,
    /// Pool fee tier in hundredths of a bip
    pub fee_tier: u32,
    /// Seconds after which an oracle reading is considered stale
    pub max_price_age: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Manager,
    Config,
    /// Number of records in the Active state
    ActiveCount,
    /// Held for the duration of a payout call
    ReentrancyLock,
    /// Employee record keyed by employee address
    Employee(Address),
}

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub(crate) fn require_initialized(env: &Env) -> Result<(), PayrollError> {
    if is_initialized(env) {
        Ok(())
    } else {
        Err(PayrollError::NotInitialized)
    }
}

pub(crate) fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

pub(crate) fn read_manager(env: &Env) -> Result<Address, PayrollError> {
    env.storage()
        .instance()
        .get(&StorageKey::Manager)
        .ok_or(PayrollError::NotInitialized)
}

pub(crate) fn write_manager(env: &Env, manager: &Address) {
    env.storage().instance().set(&StorageKey::Manager, manager);
}

pub(crate) fn read_config(env: &Env) -> Result<LedgerConfig, PayrollError> {
    env.storage()
        .instance()
        .get(&StorageKey::Config)
        .ok_or(PayrollError::NotInitialized)
}

pub(crate) fn write_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub(crate) fn read_active_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&StorageKey::ActiveCount)
        .unwrap_or(0)
}

pub(crate) fn write_active_count(env: &Env, count: u32) {
    env.storage().instance().set(&StorageKey::ActiveCount, &count);
}

/// Returns the stored record, or an empty (Unregistered) one.
pub(crate) fn read_employee(env: &Env, employee: &Address) -> EmployeeRecord {
    env.storage()
        .persistent()
        .get(&StorageKey::Employee(employee.clone()))
        .unwrap_or_default()
}

pub(crate) fn write_employee(env: &Env, employee: &Address, record: &EmployeeRecord) {
    let key = StorageKey::Employee(employee.clone());
    let storage = env.storage().persistent();
    storage.set(&key, record);
    storage.extend_ttl(&key, EMPLOYEE_LIFETIME_THRESHOLD, EMPLOYEE_BUMP_AMOUNT);
}
