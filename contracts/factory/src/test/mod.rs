
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, BytesN, Env, String,
};

use crate::{AuctionFactory, AuctionFactoryClient, BidFeePolicy};

pub const START: u64 = 1_000;
pub const DEPLOY_FEE: i128 = 50;
pub const BID_FEE: i128 = 5;
pub const STARTING_BALANCE: i128 = 1_000;
pub const TWO_DAYS: u64 = 172_800;

pub struct Setup {
    pub env: Env,
    pub client: AuctionFactoryClient<'static>,
    pub admin: Address,
    pub owner: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl Setup {
    pub fn factory_balance(&self) -> i128 {
        self.token.balance(&self.client.address)
    }

    pub fn name(&self) -> String {
        String::from_str(&self.env, "Bridge inspection tender")
    }

    pub fn metadata_uri(&self) -> String {
        String::from_str(&self.env, "ipfs://bafybeihkoviema7g3gxyt6la7vd5ho32ictqbilu3wnlo3rs7ewhnp7lly")
    }
}

/// Factory registered but not yet initialized.
pub fn setup_uninitialized() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START);

    let contract_id = env.register(AuctionFactory, ());
    let client = AuctionFactoryClient::new(&env, &contract_id);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    token_admin.mint(&owner, &STARTING_BALANCE);

    Setup {
        env,
        client,
        admin,
        owner,
        token,
        token_admin,
    }
}

pub fn setup_test() -> Setup {
    let setup = setup_uninitialized();
    let wasm_hash = placeholder_wasm_hash(&setup.env);
    setup.client.initialize(
        &setup.admin,
        &setup.token.address,
        &DEPLOY_FEE,
        &BidFeePolicy::Fixed(BID_FEE),
        &0,
        &wasm_hash,
    );
    setup
}

/// Never deployed from: only paths that fail before deployment use it.
pub fn placeholder_wasm_hash(env: &Env) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[0] = 1;
    bytes[1] = 2;
    bytes[2] = 3;
    BytesN::from_array(env, &bytes)
}
