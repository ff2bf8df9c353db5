use soroban_sdk::{contracttype, Address, BytesN, String};

/// Maximum fee share: 100% in basis points
pub const MAX_BPS: u32 = 10_000;

/// Largest page `list_instances` returns.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Storage keys for factory contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Initialized,
    Paused,
    Config,
    Revenue,
    InstanceCounter,
    Instance(u64),
    InstanceByAddress(Address),
}

/// Bid fee policy handed to every new auction.
///
/// Mirrors the auction contract's type of the same name.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BidFeePolicy {
    Fixed(i128),
    Oracle(Address),
}

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryConfig {
    pub token: Address,
    pub deploy_fee: i128,
    pub bid_fee_policy: BidFeePolicy,
    pub fee_share_bps: u32,
    pub auction_wasm_hash: BytesN<32>,
}

/// Parameters for auction initialization (passed to deployed contract)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionParams {
    pub owner: Address,
    pub token: Address,
    pub name: String,
    pub metadata_uri: String,
    pub commit_deadline: u64,
    pub reveal_deadline: u64,
    pub warranty_amount: i128,
    pub bid_fee_policy: BidFeePolicy,
    pub fee_share_bps: u32,
}

/// A created auction instance
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceRecord {
    pub id: u64,
    pub address: Address,
    pub owner: Address,
    pub name: String,
    pub created_at: u64,
    pub deploy_fee_paid: i128,
}

/// Fees received by the factory
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Revenue {
    pub deploy_fees: i128,
    pub fee_shares: i128,
    pub withdrawn: i128,
}

impl Revenue {
    pub fn available(&self) -> i128 {
        self.deploy_fees + self.fee_shares - self.withdrawn
    }
}

impl BidFeePolicy {
    pub fn is_valid(&self) -> bool {
        match self {
            BidFeePolicy::Fixed(fee) => *fee >= 0,
            BidFeePolicy::Oracle(_) => true,
        }
    }
}
