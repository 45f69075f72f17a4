//! Stand-ins for the ledger's external collaborators, for tests only.

use soroban_sdk::{
    contract, contractimpl, contracttype, token::Client as TokenClient, Address, Env,
};

use crate::storage::PriceData;

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Price,
    Payout,
    LastSwap,
    Native,
    Decimals,
    Balance(Address),
}

/// Oracle reporting whatever price it was last given.
#[contract]
pub struct MockPriceOracle;

#[contractimpl]
impl MockPriceOracle {
    pub fn set_price(env: Env, price: i128, decimals: u32, timestamp: u64) {
        env.storage().instance().set(
            &MockKey::Price,
            &PriceData {
                price,
                decimals,
                timestamp,
            },
        );
    }

    pub fn latest_price(env: Env) -> PriceData {
        env.storage()
            .instance()
            .get(&MockKey::Price)
            .expect("Price not set")
    }
}

/// Arguments of the last swap a [`MockSwapRouter`] executed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapCall {
    pub sender: Address,
    pub fee_tier: u32,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_in: i128,
    pub min_amount_out: i128,
}

/// Venue that pays out a preset amount regardless of its minimum-output
/// argument, standing in for a pool whose price has been moved.
#[contract]
pub struct MockSwapRouter;

#[contractimpl]
impl MockSwapRouter {
    /// Sets how many `token_out` units the next swaps deliver.
    pub fn set_payout(env: Env, amount: i128) {
        env.storage().instance().set(&MockKey::Payout, &amount);
    }

    pub fn last_swap(env: Env) -> Option<SwapCall> {
        env.storage().instance().get(&MockKey::LastSwap)
    }

    pub fn swap_exact_in(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        fee_tier: u32,
        recipient: Address,
        deadline: u64,
        amount_in: i128,
        min_amount_out: i128,
    ) -> i128 {
        assert!(env.ledger().timestamp() <= deadline, "Swap deadline passed");
        let this = env.current_contract_address();

        TokenClient::new(&env, &token_in).transfer_from(&this, &sender, &this, &amount_in);

        let payout: i128 = env
            .storage()
            .instance()
            .get(&MockKey::Payout)
            .expect("Payout not set");
        TokenClient::new(&env, &token_out).transfer(&this, &recipient, &payout);

        env.storage().instance().set(
            &MockKey::LastSwap,
            &SwapCall {
                sender,
                fee_tier,
                recipient,
                deadline,
                amount_in,
                min_amount_out,
            },
        );
        payout
    }
}

/// Minimal wrapped-native token backed one-to-one by a native asset
/// balance held by this contract.
#[contract]
pub struct MockWrappedNative;

#[contractimpl]
impl MockWrappedNative {
    pub fn initialize(env: Env, native: Address, decimals: u32) {
        env.storage().instance().set(&MockKey::Native, &native);
        env.storage().instance().set(&MockKey::Decimals, &decimals);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        write_balance(&env, &to, balance + amount);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&MockKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockKey::Decimals)
            .unwrap_or(7)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        debit(&env, &from, amount);
        let balance = Self::balance(env.clone(), to.clone());
        write_balance(&env, &to, balance + amount);
    }

    pub fn unwrap(env: Env, from: Address, amount: i128) {
        from.require_auth();
        debit(&env, &from, amount);
        let native: Address = env
            .storage()
            .instance()
            .get(&MockKey::Native)
            .expect("Not initialized");
        TokenClient::new(&env, &native).transfer(&env.current_contract_address(), &from, &amount);
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&MockKey::Balance(id.clone()), &amount);
}

fn debit(env: &Env, id: &Address, amount: i128) {
    assert!(amount >= 0, "Negative amount");
    let balance = MockWrappedNative::balance(env.clone(), id.clone());
    assert!(balance >= amount, "Insufficient balance");
    write_balance(env, id, balance - amount);
}
