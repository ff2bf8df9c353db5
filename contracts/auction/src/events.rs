use soroban_sdk::{contractevent, Address, BytesN, Env, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInitialized {
    #[topic]
    pub owner: Address,
    pub factory: Address,
    pub name: String,
    pub commit_closes_at: u64,
    pub reveal_closes_at: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidCommitted {
    #[topic]
    pub bidder: Address,
    pub display_name: String,
    pub commitment: BytesN<32>,
    pub payment: i128,
    pub forwarded: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRevealed {
    #[topic]
    pub bidder: Address,
    pub refunded: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerChosen {
    #[topic]
    pub winner: Address,
    pub owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsWithdrawn {
    #[topic]
    pub owner: Address,
    pub amount: i128,
    pub forfeited_warranties: i128,
}

pub fn emit_auction_initialized(
    env: &Env,
    owner: Address,
    factory: Address,
    name: String,
    commit_closes_at: u64,
    reveal_closes_at: u64,
) {
    AuctionInitialized {
        owner,
        factory,
        name,
        commit_closes_at,
        reveal_closes_at,
    }
    .publish(env);
}

pub fn emit_bid_committed(
    env: &Env,
    bidder: Address,
    display_name: String,
    commitment: BytesN<32>,
    payment: i128,
    forwarded: i128,
) {
    BidCommitted {
        bidder,
        display_name,
        commitment,
        payment,
        forwarded,
    }
    .publish(env);
}

pub fn emit_bid_revealed(env: &Env, bidder: Address, refunded: i128) {
    BidRevealed { bidder, refunded }.publish(env);
}

pub fn emit_winner_chosen(env: &Env, winner: Address, owner: Address) {
    WinnerChosen { winner, owner }.publish(env);
}

pub fn emit_proceeds_withdrawn(env: &Env, owner: Address, amount: i128, forfeited_warranties: i128) {
    ProceedsWithdrawn {
        owner,
        amount,
        forfeited_warranties,
    }
    .publish(env);
}
