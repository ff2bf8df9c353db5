use soroban_sdk::{contracttype, Address};

/// Upper bound for the value token's decimals; keeps `10^decimals` in range.
pub const MAX_ASSET_DECIMALS: u32 = 18;

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Config,
}

/// Oracle configuration.
///
/// `bid_fee_quote` is expressed in the feed's quote currency using the same
/// precision as the feed's prices, so the two cancel out when converting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleConfig {
    pub admin: Address,
    pub feed: Address,
    pub bid_fee_quote: i128,
    pub asset_decimals: u32,
    pub max_age: u64,
}
