use soroban_sdk::{contracterror, contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidPrice = 4,
    /// No price has been published yet
    NoPrice = 5,
}

/// Stable units per native unit, scaled by `10^decimals`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub decimals: u32,
    /// Ledger time the price was published at
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Admin,
    Decimals,
    Price,
}

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub(crate) fn read_admin(env: &Env) -> Result<Address, OracleError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(OracleError::NotInitialized)
}

pub(crate) fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub(crate) fn read_decimals(env: &Env) -> Result<u32, OracleError> {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .ok_or(OracleError::NotInitialized)
}

pub(crate) fn write_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}

pub(crate) fn read_price(env: &Env) -> Result<PriceData, OracleError> {
    env.storage()
        .instance()
        .get(&DataKey::Price)
        .ok_or(OracleError::NoPrice)
}

pub(crate) fn write_price(env: &Env, data: &PriceData) {
    env.storage().instance().set(&DataKey::Price, data);
}
