mod test_registry;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use crate::conversion::ONE_UNIT;
use crate::storage::LedgerConfig;
use crate::testutils::{
    MockPriceOracle, MockPriceOracleClient, MockSwapRouter, MockSwapRouterClient,
    MockWrappedNative, MockWrappedNativeClient,
};
use crate::{PayrollLedgerContract, PayrollLedgerContractClient};

// ============================================================================
// CONSTANTS
// ============================================================================

pub const START: u64 = 1_700_000_000;
pub const ONE_DAY: u64 = 86_400;
pub const ONE_WEEK: u64 = 604_800;

/// One whole unit of a 7-decimal Stellar asset.
pub const TOKEN_UNIT: i128 = 10_000_000;

/// 0.25 stable units per native unit, 8 decimals.
pub const PRICE: i128 = 25_000_000;
pub const PRICE_DECIMALS: u32 = 8;
pub const MAX_PRICE_AGE: u64 = 3_600;
pub const FEE_TIER: u32 = 3_000;

pub const WEEKLY_SALARY: i128 = 2_100 * ONE_UNIT;

// ============================================================================
// HELPERS
// ============================================================================

pub struct Setup {
    pub env: Env,
    pub contract_id: Address,
    pub client: PayrollLedgerContractClient<'static>,
    pub manager: Address,
    pub stable: Address,
    pub native: Address,
    pub wrapped: MockWrappedNativeClient<'static>,
    pub oracle: MockPriceOracleClient<'static>,
    pub router: MockSwapRouterClient<'static>,
}

impl Setup {
    /// Deploys the ledger with mocked collaborators and all auths mocked.
    /// Ledger time starts at [`START`]; the oracle reports [`PRICE`] at that time.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.timestamp = START);

        let token_admin = Address::generate(&env);
        let stable = env
            .register_stellar_asset_contract_v2(token_admin.clone())
            .address();
        let native = env
            .register_stellar_asset_contract_v2(token_admin)
            .address();

        let wrapped_id = env.register(MockWrappedNative, ());
        let wrapped = MockWrappedNativeClient::new(&env, &wrapped_id);
        wrapped.initialize(&native, &7);

        let oracle_id = env.register(MockPriceOracle, ());
        let oracle = MockPriceOracleClient::new(&env, &oracle_id);
        oracle.set_price(&PRICE, &PRICE_DECIMALS, &START);

        let router_id = env.register(MockSwapRouter, ());
        let router = MockSwapRouterClient::new(&env, &router_id);

        // Venue and wrapper liquidity
        wrapped.mint(&router_id, &(10_000_000 * TOKEN_UNIT));
        StellarAssetClient::new(&env, &native).mint(&wrapped_id, &(10_000_000 * TOKEN_UNIT));

        let contract_id = env.register(PayrollLedgerContract, ());
        let client = PayrollLedgerContractClient::new(&env, &contract_id);
        let manager = Address::generate(&env);
        client.initialize(
            &manager,
            &LedgerConfig {
                stable_token: stable.clone(),
                wrapped_native: wrapped_id,
                native_token: native.clone(),
                oracle: oracle_id,
                swap_router: router_id,
                fee_tier: FEE_TIER,
                max_price_age: MAX_PRICE_AGE,
            },
        );

        Setup {
            env,
            contract_id,
            client,
            manager,
            stable,
            native,
            wrapped,
            oracle,
            router,
        }
    }

    pub fn address(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn advance(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| li.timestamp += seconds);
    }

    /// Re-publishes [`PRICE`] stamped with the current ledger time.
    pub fn refresh_price(&self) {
        self.oracle.set_price(&PRICE, &PRICE_DECIMALS, &self.now());
    }

    /// Mints `amount` stable tokens to a fresh employer and deposits them.
    pub fn fund(&self, amount: i128) {
        let employer = self.address();
        StellarAssetClient::new(&self.env, &self.stable).mint(&employer, &amount);
        self.client.deposit(&employer, &amount);
    }

    pub fn hire(&self, weekly_salary: i128) -> Address {
        let employee = self.address();
        self.client.register(&self.manager, &employee, &weekly_salary);
        employee
    }

    pub fn stable_balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.stable).balance(who)
    }

    pub fn native_balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.native).balance(who)
    }
}
