use soroban_sdk::{contracttype, Address, Bytes, BytesN, String};

/// How the non-refundable part of the bid cost is determined.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BidFeePolicy {
    /// Flat fee fixed when the auction is created
    Fixed(i128),
    /// Fee quoted by a fee oracle contract at commit time
    Oracle(Address),
}

/// Parameters handed over by the factory when it creates an instance.
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

/// Absolute phase boundaries, fixed at initialization.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub commit_opens_at: u64,
    pub commit_closes_at: u64,
    pub reveal_closes_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Commit = 0,
    Reveal = 1,
    Closed = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub factory: Address,
    pub owner: Address,
    pub token: Address,
    pub name: String,
    pub metadata_uri: String,
    pub warranty_amount: i128,
    pub bid_fee_policy: BidFeePolicy,
    pub fee_share_bps: u32,
    pub schedule: Schedule,
    pub winner: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub display_name: String,
    pub commitment: BytesN<32>,
    pub committed_at: u64,
    pub fee_paid: i128,
    pub warranty_held: i128,
    pub revealed: bool,
    pub revealed_at: Option<u64>,
    pub revealed_value: Option<Bytes>,
}

/// Running totals of every amount that entered or left the instance.
///
/// The instance's token balance always equals
/// `escrowed_warranties + retained_fees`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Accounts {
    pub escrowed_warranties: i128,
    pub retained_fees: i128,
    pub forwarded_fees: i128,
    pub refunded_warranties: i128,
    pub forfeited_warranties: i128,
    pub withdrawn: i128,
}

impl Accounts {
    pub fn held(&self) -> i128 {
        self.escrowed_warranties + self.retained_fees
    }
}

/// Largest page `get_bidders` returns.
pub const MAX_PAGE_SIZE: u32 = 100;

#[contracttype]
pub enum DataKey {
    Auction,
    Accounts,
    BidderCount,
    /// 1-based commitment position
    Bidder(u32),
    Bid(Address),
}
