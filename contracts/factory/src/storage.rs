use soroban_sdk::{Address, Env, Vec};
use crate::types::{FactoryConfig, InstanceRecord, Revenue, StorageKey};

const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// ========== Paused State ==========

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&StorageKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&StorageKey::Paused, &paused);
}

// ========== Config ==========

pub fn get_config(env: &Env) -> Option<FactoryConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &FactoryConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

// ========== Revenue ==========

pub fn get_revenue(env: &Env) -> Revenue {
    env.storage()
        .instance()
        .get(&StorageKey::Revenue)
        .unwrap_or_default()
}

pub fn set_revenue(env: &Env, revenue: &Revenue) {
    env.storage().instance().set(&StorageKey::Revenue, revenue);
}

// ========== Instance Counter ==========

pub fn get_instance_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::InstanceCounter).unwrap_or(0)
}

pub fn increment_instance_counter(env: &Env) -> u64 {
    let counter = get_instance_counter(env) + 1;
    env.storage().instance().set(&StorageKey::InstanceCounter, &counter);
    counter
}

// ========== Instances ==========

pub fn get_instance(env: &Env, id: u64) -> Option<InstanceRecord> {
    let key = StorageKey::Instance(id);
    let record = env.storage().persistent().get::<_, InstanceRecord>(&key);
    if record.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn set_instance(env: &Env, record: &InstanceRecord) {
    let key = StorageKey::Instance(record.id);
    env.storage().persistent().set(&key, record);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);

    // Also index by address
    let address_key = StorageKey::InstanceByAddress(record.address.clone());
    env.storage().persistent().set(&address_key, &record.id);
    env.storage().persistent().extend_ttl(&address_key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_instance_id(env: &Env, address: &Address) -> Option<u64> {
    let key = StorageKey::InstanceByAddress(address.clone());
    let id = env.storage().persistent().get::<_, u64>(&key);
    if id.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    id
}

/// Records with ids in `offset + 1..=offset + limit`, in creation order.
pub fn list_instances(env: &Env, offset: u64, limit: u32) -> Vec<InstanceRecord> {
    let last = offset.saturating_add(limit as u64).min(get_instance_counter(env));
    let mut instances = Vec::new(env);

    for id in offset.saturating_add(1)..=last {
        if let Some(record) = get_instance(env, id) {
            instances.push_back(record);
        }
    }

    instances
}
