use soroban_sdk::{contractevent, Env};

/// Event: new price published
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceUpdated {
    pub price: i128,
    pub decimals: u32,
    pub timestamp: u64,
}

pub fn emit_price_updated(env: &Env, event: PriceUpdated) {
    event.publish(env);
}
