pub mod reveal_test;

use crate::{AuctionInstance, AuctionInstanceClient, AuctionParams, BidFeePolicy};
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short,
    testutils::{Address as _, Ledger},
    token, Address, Bytes, BytesN, Env, String,
};

pub const START: u64 = 1_000;
pub const COMMIT_DEADLINE: u64 = 172_800;
pub const REVEAL_DEADLINE: u64 = 172_800;
pub const BID_FEE: i128 = 5;
pub const WARRANTY: i128 = 1;
pub const BID_COST: i128 = BID_FEE + WARRANTY;
pub const STARTING_BALANCE: i128 = 1_000;

/// Stands in for the factory: books whatever fee share it is told about.
#[contract]
pub struct MockFactory;

#[contractimpl]
impl MockFactory {
    pub fn receive_fee_share(env: Env, instance: Address, amount: i128) {
        instance.require_auth();
        let total: i128 = env
            .storage()
            .instance()
            .get(&symbol_short!("shares"))
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&symbol_short!("shares"), &(total + amount));
    }

    pub fn received(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&symbol_short!("shares"))
            .unwrap_or(0)
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockOracleError {
    NoQuote = 1,
}

/// Fee oracle double quoting a settable fee.
#[contract]
pub struct MockOracle;

#[contractimpl]
impl MockOracle {
    pub fn set_fee(env: Env, fee: i128) {
        env.storage().instance().set(&symbol_short!("fee"), &fee);
    }

    pub fn quote_bid_fee(env: Env) -> Result<i128, MockOracleError> {
        env.storage()
            .instance()
            .get(&symbol_short!("fee"))
            .ok_or(MockOracleError::NoQuote)
    }
}

pub struct Setup {
    pub env: Env,
    pub client: AuctionInstanceClient<'static>,
    pub factory: MockFactoryClient<'static>,
    pub owner: Address,
    pub bidder: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl Setup {
    pub fn new_bidder(&self) -> Address {
        let bidder = Address::generate(&self.env);
        self.token_admin.mint(&bidder, &STARTING_BALANCE);
        bidder
    }

    pub fn instance_balance(&self) -> i128 {
        self.token.balance(&self.client.address)
    }
}

pub fn setup_test() -> Setup {
    setup_with(BidFeePolicy::Fixed(BID_FEE), 0)
}

pub fn setup_with(bid_fee_policy: BidFeePolicy, fee_share_bps: u32) -> Setup {
    let setup = deploy();
    let params = default_params(
        &setup.env,
        &setup.owner,
        &setup.token.address,
        bid_fee_policy,
        fee_share_bps,
    );
    setup.client.initialize(&setup.factory.address, &params);
    setup
}

/// Auction whose bid fee is quoted by a `MockOracle`, optionally preloaded with `fee`.
pub fn setup_with_oracle(fee: Option<i128>) -> (Setup, MockOracleClient<'static>) {
    let setup = deploy();

    let oracle_id = setup.env.register(MockOracle, ());
    let oracle = MockOracleClient::new(&setup.env, &oracle_id);
    if let Some(fee) = fee {
        oracle.set_fee(&fee);
    }

    let params = default_params(
        &setup.env,
        &setup.owner,
        &setup.token.address,
        BidFeePolicy::Oracle(oracle_id),
        0,
    );
    setup.client.initialize(&setup.factory.address, &params);
    (setup, oracle)
}

/// Registers the token, the mock factory and an uninitialized auction.
fn deploy() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    let factory_id = env.register(MockFactory, ());
    let factory = MockFactoryClient::new(&env, &factory_id);

    let contract_id = env.register(AuctionInstance, ());
    let client = AuctionInstanceClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let bidder = Address::generate(&env);
    token_admin.mint(&bidder, &STARTING_BALANCE);

    Setup {
        env,
        client,
        factory,
        owner,
        bidder,
        token,
        token_admin,
    }
}

pub fn default_params(
    env: &Env,
    owner: &Address,
    token: &Address,
    bid_fee_policy: BidFeePolicy,
    fee_share_bps: u32,
) -> AuctionParams {
    AuctionParams {
        owner: owner.clone(),
        token: token.clone(),
        name: String::from_str(env, "Road maintenance 2026"),
        metadata_uri: String::from_str(env, "ipfs://bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"),
        commit_deadline: COMMIT_DEADLINE,
        reveal_deadline: REVEAL_DEADLINE,
        warranty_amount: WARRANTY,
        bid_fee_policy,
        fee_share_bps,
    }
}

/// Offer document reference a bidder keeps secret until reveal.
pub fn offer(env: &Env, text: &str) -> Bytes {
    Bytes::from_slice(env, text.as_bytes())
}

pub fn commitment_for(env: &Env, preimage: &Bytes) -> BytesN<32> {
    env.crypto().sha256(preimage).to_bytes()
}

pub fn commit(setup: &Setup, bidder: &Address, text: &str) -> Bytes {
    let preimage = offer(&setup.env, text);
    let commitment = commitment_for(&setup.env, &preimage);
    setup.client.set_bid(
        bidder,
        &String::from_str(&setup.env, "ACME Paving"),
        &commitment,
        &setup.client.get_bid_cost(),
    );
    preimage
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

pub fn advance_to_reveal(env: &Env) {
    env.ledger()
        .with_mut(|li| li.timestamp = START + COMMIT_DEADLINE);
}

pub fn advance_past_reveal(env: &Env) {
    env.ledger()
        .with_mut(|li| li.timestamp = START + COMMIT_DEADLINE + REVEAL_DEADLINE);
}
