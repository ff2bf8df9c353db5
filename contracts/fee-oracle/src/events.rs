use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleInitialized {
    #[topic]
    pub admin: Address,
    pub feed: Address,
    pub bid_fee_quote: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleConfigUpdated {
    #[topic]
    pub admin: Address,
    pub feed: Address,
    pub bid_fee_quote: i128,
    pub max_age: u64,
}

pub fn emit_oracle_initialized(env: &Env, admin: Address, feed: Address, bid_fee_quote: i128) {
    OracleInitialized {
        admin,
        feed,
        bid_fee_quote,
    }
    .publish(env);
}

pub fn emit_oracle_config_updated(env: &Env, admin: Address, feed: Address, bid_fee_quote: i128, max_age: u64) {
    OracleConfigUpdated {
        admin,
        feed,
        bid_fee_quote,
        max_age,
    }
    .publish(env);
}
