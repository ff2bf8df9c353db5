use soroban_sdk::{Address, Env};

use crate::types::{Accounts, Auction, Bid, DataKey};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Auction ==========

pub fn has_auction(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Auction)
}

pub fn get_auction(env: &Env) -> Option<Auction> {
    env.storage().instance().get(&DataKey::Auction)
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage().instance().set(&DataKey::Auction, auction);
}

// ========== Accounts ==========

pub fn get_accounts(env: &Env) -> Accounts {
    env.storage()
        .instance()
        .get(&DataKey::Accounts)
        .unwrap_or_default()
}

pub fn save_accounts(env: &Env, accounts: &Accounts) {
    env.storage().instance().set(&DataKey::Accounts, accounts);
}

// ========== Bids ==========

pub fn has_bid(env: &Env, bidder: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Bid(bidder.clone()))
}

pub fn get_bid(env: &Env, bidder: &Address) -> Option<Bid> {
    let key = DataKey::Bid(bidder.clone());
    let bid = env.storage().persistent().get::<_, Bid>(&key);
    if bid.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    bid
}

pub fn save_bid(env: &Env, bid: &Bid) {
    let key = DataKey::Bid(bid.bidder.clone());
    env.storage().persistent().set(&key, bid);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Bidders ==========

pub fn get_bidder_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BidderCount)
        .unwrap_or(0)
}

pub fn get_bidder(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Bidder(index))
}

pub fn add_bidder(env: &Env, bidder: &Address) {
    let index = get_bidder_count(env) + 1;
    let key = DataKey::Bidder(index);
    env.storage().persistent().set(&key, bidder);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    env.storage().instance().set(&DataKey::BidderCount, &index);
}
