use soroban_sdk::{contractevent, Address, Env};

use crate::types::BidFeePolicy;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryInitialized {
    #[topic]
    pub admin: Address,
    pub token: Address,
    pub deploy_fee: i128,
}

/// Announces a new auction instance; clients locate auctions through it.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractDeployed {
    #[topic]
    pub contract_address: Address,
    #[topic]
    pub owner: Address,
    pub auction_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeCollected {
    #[topic]
    pub payer: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeShareReceived {
    #[topic]
    pub instance: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfigUpdated {
    pub deploy_fee: i128,
    pub bid_fee_policy: BidFeePolicy,
    pub fee_share_bps: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryPaused {
    #[topic]
    pub admin: Address,
    pub is_paused: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub old_admin: Address,
    #[topic]
    pub new_admin: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevenueWithdrawn {
    #[topic]
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit_factory_initialized(env: &Env, admin: Address, token: Address, deploy_fee: i128) {
    FactoryInitialized { admin, token, deploy_fee }.publish(env);
}

pub fn emit_contract_deployed(env: &Env, contract_address: Address, owner: Address, auction_id: u64) {
    ContractDeployed {
        contract_address,
        owner,
        auction_id,
    }
    .publish(env);
}

pub fn emit_fee_collected(env: &Env, payer: Address, amount: i128) {
    FeeCollected { payer, amount }.publish(env);
}

pub fn emit_fee_share_received(env: &Env, instance: Address, amount: i128) {
    FeeShareReceived { instance, amount }.publish(env);
}

pub fn emit_fee_config_updated(env: &Env, deploy_fee: i128, bid_fee_policy: BidFeePolicy, fee_share_bps: u32) {
    FeeConfigUpdated {
        deploy_fee,
        bid_fee_policy,
        fee_share_bps,
    }
    .publish(env);
}

pub fn emit_factory_paused(env: &Env, admin: Address, is_paused: bool) {
    FactoryPaused { admin, is_paused }.publish(env);
}

pub fn emit_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    AdminChanged { old_admin, new_admin }.publish(env);
}

pub fn emit_revenue_withdrawn(env: &Env, recipient: Address, amount: i128) {
    RevenueWithdrawn { recipient, amount }.publish(env);
}
