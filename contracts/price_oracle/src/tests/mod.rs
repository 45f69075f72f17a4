use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

use crate::{OracleError, PriceData, PriceOracleContract, PriceOracleContractClient};

fn setup() -> (Env, PriceOracleContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);

    let contract_id = env.register(PriceOracleContract, ());
    let client = PriceOracleContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin, &8);
    (env, client, admin)
}

#[test]
fn test_initialize() {
    let (_env, client, admin) = setup();
    assert_eq!(client.admin(), admin);
    assert_eq!(client.decimals(), 8);
}

#[test]
fn test_initialize_twice_fails() {
    let (_env, client, admin) = setup();
    assert_eq!(
        client.try_initialize(&admin, &7),
        Err(Ok(OracleError::AlreadyInitialized))
    );
    assert_eq!(client.decimals(), 8);
}

#[test]
fn test_no_price_before_first_update() {
    let (_env, client, _admin) = setup();
    assert_eq!(client.try_latest_price(), Err(Ok(OracleError::NoPrice)));
}

#[test]
fn test_set_price_stamps_ledger_time() {
    let (env, client, admin) = setup();
    client.set_price(&admin, &25_000_000);
    assert_eq!(
        client.latest_price(),
        PriceData {
            price: 25_000_000,
            decimals: 8,
            timestamp: 1_700_000_000,
        }
    );

    env.ledger().with_mut(|li| li.timestamp += 60);
    client.set_price(&admin, &26_000_000);
    let latest = client.latest_price();
    assert_eq!(latest.price, 26_000_000);
    assert_eq!(latest.timestamp, 1_700_000_060);
}

#[test]
fn test_set_price_rejects_non_positive() {
    let (_env, client, admin) = setup();
    assert_eq!(
        client.try_set_price(&admin, &0),
        Err(Ok(OracleError::InvalidPrice))
    );
    assert_eq!(
        client.try_set_price(&admin, &-5),
        Err(Ok(OracleError::InvalidPrice))
    );
}

#[test]
fn test_only_admin_sets_price() {
    let (env, client, _admin) = setup();
    let intruder = Address::generate(&env);
    assert_eq!(
        client.try_set_price(&intruder, &25_000_000),
        Err(Ok(OracleError::Unauthorized))
    );
}

#[test]
fn test_uninitialized_oracle() {
    let env = Env::default();
    env.mock_all_auths();
    let client = PriceOracleContractClient::new(&env, &env.register(PriceOracleContract, ()));
    let admin = Address::generate(&env);

    assert_eq!(client.try_admin(), Err(Ok(OracleError::NotInitialized)));
    assert_eq!(
        client.try_set_price(&admin, &1),
        Err(Ok(OracleError::NotInitialized))
    );
}
