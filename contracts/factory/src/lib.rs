#![no_std]

use soroban_sdk::{contract, contractimpl, log, token, vec, Address, BytesN, Env, IntoVal, String, Symbol, Val, Vec};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::{AuctionParams, BidFeePolicy, FactoryConfig, InstanceRecord, Revenue};

use types::{MAX_BPS, MAX_PAGE_SIZE};

#[contract]
pub struct AuctionFactory;

#[contractimpl]
impl AuctionFactory {
    // ========== INITIALIZATION ==========

    /// Initialize the factory.
    ///
    /// # Arguments
    /// * `token` - Token every fee, warranty and payment is denominated in
    /// * `deploy_fee` - Exact amount charged per created auction
    /// * `bid_fee_policy` - Fixed bid fee or fee oracle used by new auctions
    /// * `fee_share_bps` - Share of each bid fee auctions forward to the factory
    /// * `auction_wasm_hash` - Uploaded auction contract code
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        deploy_fee: i128,
        bid_fee_policy: BidFeePolicy,
        fee_share_bps: u32,
        auction_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        if deploy_fee < 0 || fee_share_bps > MAX_BPS || !bid_fee_policy.is_valid() {
            return Err(Error::InvalidParameters);
        }

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::set_paused(&env, false);
        storage::set_config(
            &env,
            &FactoryConfig {
                token: token.clone(),
                deploy_fee,
                bid_fee_policy,
                fee_share_bps,
                auction_wasm_hash,
            },
        );
        storage::extend_instance_ttl(&env);

        events::emit_factory_initialized(&env, admin, token, deploy_fee);

        Ok(())
    }

    // ========== AUCTION CREATION ==========

    /// Create a new auction instance owned by `owner`.
    ///
    /// Collecting the fee, deploying, initializing and recording the instance
    /// all happen in this one invocation.
    ///
    /// # Errors
    /// * `Error::FactoryPaused` - Creation is paused
    /// * `Error::IncorrectDeployFee` - `payment` differs from the deploy fee
    /// * `Error::InvalidParameters` - Zero-length phase, negative warranty or empty name
    pub fn create_auction(
        env: Env,
        owner: Address,
        name: String,
        metadata_uri: String,
        commit_deadline: u64,
        reveal_deadline: u64,
        warranty_amount: i128,
        payment: i128,
    ) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;

        owner.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if payment != config.deploy_fee {
            log!(&env, "deploy fee mismatch", payment, config.deploy_fee);
            return Err(Error::IncorrectDeployFee);
        }

        if commit_deadline == 0 || reveal_deadline == 0 || warranty_amount < 0 || name.is_empty() {
            return Err(Error::InvalidParameters);
        }

        if payment > 0 {
            let token_client = token::Client::new(&env, &config.token);
            token_client.transfer(&owner, &env.current_contract_address(), &payment);
            events::emit_fee_collected(&env, owner.clone(), payment);
        }

        let auction_id = storage::increment_instance_counter(&env);
        let auction_address = env
            .deployer()
            .with_current_contract(Self::instance_salt(&env, auction_id))
            .deploy_v2(config.auction_wasm_hash.clone(), ());

        let params = AuctionParams {
            owner: owner.clone(),
            token: config.token.clone(),
            name: name.clone(),
            metadata_uri,
            commit_deadline,
            reveal_deadline,
            warranty_amount,
            bid_fee_policy: config.bid_fee_policy.clone(),
            fee_share_bps: config.fee_share_bps,
        };
        Self::call_auction_init(&env, &auction_address, &params);

        storage::set_instance(
            &env,
            &InstanceRecord {
                id: auction_id,
                address: auction_address.clone(),
                owner: owner.clone(),
                name,
                created_at: env.ledger().timestamp(),
                deploy_fee_paid: payment,
            },
        );

        let mut revenue = storage::get_revenue(&env);
        revenue.deploy_fees = revenue.deploy_fees.checked_add(payment).ok_or(Error::Overflow)?;
        storage::set_revenue(&env, &revenue);
        storage::extend_instance_ttl(&env);

        events::emit_contract_deployed(&env, auction_address.clone(), owner, auction_id);

        Ok(auction_address)
    }

    // ========== REVENUE ==========

    /// Book a fee share an auction instance has just transferred in.
    pub fn receive_fee_share(env: Env, instance: Address, amount: i128) -> Result<(), Error> {
        Self::require_initialized(&env)?;

        instance.require_auth();

        if storage::get_instance_id(&env, &instance).is_none() {
            return Err(Error::Unauthorized);
        }

        if amount <= 0 {
            return Err(Error::InvalidParameters);
        }

        let mut revenue = storage::get_revenue(&env);
        revenue.fee_shares = revenue.fee_shares.checked_add(amount).ok_or(Error::Overflow)?;
        storage::set_revenue(&env, &revenue);

        events::emit_fee_share_received(&env, instance, amount);

        Ok(())
    }

    /// Pay collected revenue out of the factory (admin only)
    pub fn withdraw_revenue(env: Env, admin: Address, recipient: Address, amount: i128) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &admin)?;

        if amount <= 0 {
            return Err(Error::InvalidParameters);
        }

        let mut revenue = storage::get_revenue(&env);
        if amount > revenue.available() {
            return Err(Error::InsufficientBalance);
        }

        revenue.withdrawn += amount;
        storage::set_revenue(&env, &revenue);

        events::emit_revenue_withdrawn(&env, recipient.clone(), amount);

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        token::Client::new(&env, &config.token).transfer(&env.current_contract_address(), &recipient, &amount);

        Ok(())
    }

    pub fn get_revenue(env: Env) -> Revenue {
        storage::get_revenue(&env)
    }

    // ========== FEE MANAGEMENT ==========

    /// Update deployment fee (admin only)
    pub fn set_deploy_fee(env: Env, admin: Address, fee: i128) -> Result<(), Error> {
        let mut config = Self::require_admin_config(&env, &admin)?;
        if fee < 0 {
            return Err(Error::InvalidParameters);
        }

        config.deploy_fee = fee;
        Self::save_fee_config(&env, &config);

        Ok(())
    }

    /// Update the bid fee policy for auctions created from now on (admin only)
    pub fn set_bid_fee_policy(env: Env, admin: Address, policy: BidFeePolicy) -> Result<(), Error> {
        let mut config = Self::require_admin_config(&env, &admin)?;
        if !policy.is_valid() {
            return Err(Error::InvalidParameters);
        }

        config.bid_fee_policy = policy;
        Self::save_fee_config(&env, &config);

        Ok(())
    }

    /// Update the forwarded bid fee share for auctions created from now on (admin only)
    pub fn set_fee_share(env: Env, admin: Address, fee_share_bps: u32) -> Result<(), Error> {
        let mut config = Self::require_admin_config(&env, &admin)?;
        if fee_share_bps > MAX_BPS {
            return Err(Error::InvalidParameters);
        }

        config.fee_share_bps = fee_share_bps;
        Self::save_fee_config(&env, &config);

        Ok(())
    }

    /// Point new deployments at another auction contract build (admin only)
    pub fn set_auction_wasm(env: Env, admin: Address, wasm_hash: BytesN<32>) -> Result<(), Error> {
        let mut config = Self::require_admin_config(&env, &admin)?;

        config.auction_wasm_hash = wasm_hash;
        storage::set_config(&env, &config);

        Ok(())
    }

    /// Get factory configuration
    pub fn get_config(env: Env) -> Result<FactoryConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    // ========== ACCESS CONTROL ==========

    /// Transfer admin role
    pub fn set_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &current_admin)?;

        storage::set_admin(&env, &new_admin);

        events::emit_admin_changed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Pause/unpause auction creation (admin only)
    pub fn set_paused(env: Env, admin: Address, paused: bool) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &admin)?;

        storage::set_paused(&env, paused);

        events::emit_factory_paused(&env, admin, paused);

        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ========== VIEWS ==========

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn get_instance(env: Env, auction_id: u64) -> Result<InstanceRecord, Error> {
        storage::get_instance(&env, auction_id).ok_or(Error::InstanceNotFound)
    }

    pub fn get_instance_id(env: Env, instance: Address) -> Result<u64, Error> {
        storage::get_instance_id(&env, &instance).ok_or(Error::InstanceNotFound)
    }

    pub fn is_instance(env: Env, instance: Address) -> bool {
        storage::get_instance_id(&env, &instance).is_some()
    }

    /// Created instances in creation order (paginated)
    ///
    /// # Arguments
    /// * `offset` - Number of instances to skip
    /// * `limit` - Maximum results to return, at most `MAX_PAGE_SIZE`
    pub fn list_instances(env: Env, offset: u64, limit: u32) -> Result<Vec<InstanceRecord>, Error> {
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(Error::InvalidParameters);
        }
        Ok(storage::list_instances(&env, offset, limit))
    }

    pub fn get_instance_count(env: Env) -> u64 {
        storage::get_instance_counter(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn require_admin_config(env: &Env, admin: &Address) -> Result<FactoryConfig, Error> {
        Self::require_initialized(env)?;
        Self::require_admin(env, admin)?;
        storage::get_config(env).ok_or(Error::NotInitialized)
    }

    fn require_not_paused(env: &Env) -> Result<(), Error> {
        if storage::is_paused(env) {
            return Err(Error::FactoryPaused);
        }
        Ok(())
    }

    fn save_fee_config(env: &Env, config: &FactoryConfig) {
        storage::set_config(env, config);
        events::emit_fee_config_updated(
            env,
            config.deploy_fee,
            config.bid_fee_policy.clone(),
            config.fee_share_bps,
        );
    }

    /// Deterministic deployment salt: the auction id, big-endian, right-aligned.
    fn instance_salt(env: &Env, auction_id: u64) -> BytesN<32> {
        let mut salt = [0u8; 32];
        salt[24..].copy_from_slice(&auction_id.to_be_bytes());
        BytesN::from_array(env, &salt)
    }

    /// Call the initialize function on the deployed auction contract
    fn call_auction_init(env: &Env, auction_address: &Address, params: &AuctionParams) {
        let init_fn = Symbol::new(env, "initialize");
        let args: Vec<Val> = vec![
            env,
            env.current_contract_address().into_val(env),
            params.clone().into_val(env),
        ];
        env.invoke_contract::<()>(auction_address, &init_fn, args);
    }
}

#[cfg(test)]
mod test;
