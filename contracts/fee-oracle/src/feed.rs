use soroban_sdk::{contractclient, contracttype, Env};

/// Latest observation published by a price feed: the price of one whole
/// unit of the value token in the quote currency.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

/// The part of a SEP-40 style price feed the oracle reads.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn lastprice(env: Env) -> Option<PriceData>;
}
