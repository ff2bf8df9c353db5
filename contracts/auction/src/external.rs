use soroban_sdk::{contractclient, Address, Env};

/// Fee oracle consulted under `BidFeePolicy::Oracle`.
#[contractclient(name = "FeeOracleClient")]
pub trait FeeOracle {
    fn quote_bid_fee(env: Env) -> i128;
}

/// The creating factory, which books the platform's share of bid fees.
#[contractclient(name = "FactoryClient")]
pub trait FeeSink {
    fn receive_fee_share(env: Env, instance: Address, amount: i128);
}
