#![no_std]

//! Bid fee oracle.
//!
//! Converts a bid fee denominated in a quote currency (for example USD) into
//! the smallest units of the auction's value token, using the latest price
//! published by an external feed.

use soroban_sdk::{contract, contractimpl, log, Address, Env};

mod errors;
mod events;
mod feed;
mod storage;
mod types;

pub use errors::Error;
pub use feed::{PriceData, PriceFeedClient};
pub use types::OracleConfig;

use types::MAX_ASSET_DECIMALS;

#[contract]
pub struct BidFeeOracle;

#[contractimpl]
impl BidFeeOracle {
    // ========== INITIALIZATION ==========

    /// Initialize the oracle with the feed it reads and the fee it quotes.
    ///
    /// # Arguments
    /// * `feed` - Price feed contract publishing the token price
    /// * `bid_fee_quote` - Bid fee in quote currency, at the feed's precision
    /// * `asset_decimals` - Decimals of the value token
    /// * `max_age` - Seconds after which a feed price is considered stale
    pub fn initialize(
        env: Env,
        admin: Address,
        feed: Address,
        bid_fee_quote: i128,
        asset_decimals: u32,
        max_age: u64,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        if bid_fee_quote < 0 || max_age == 0 || asset_decimals > MAX_ASSET_DECIMALS {
            return Err(Error::InvalidParameters);
        }

        storage::set_initialized(&env);
        storage::set_config(
            &env,
            &OracleConfig {
                admin: admin.clone(),
                feed: feed.clone(),
                bid_fee_quote,
                asset_decimals,
                max_age,
            },
        );

        events::emit_oracle_initialized(&env, admin, feed, bid_fee_quote);

        Ok(())
    }

    // ========== QUOTES ==========

    /// Current bid fee in the value token's smallest units, rounded up.
    pub fn quote_bid_fee(env: Env) -> Result<i128, Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let feed = PriceFeedClient::new(&env, &config.feed);
        let observation = match feed.try_lastprice() {
            Ok(Ok(Some(observation))) => observation,
            _ => return Err(Error::OracleUnavailable),
        };

        let now = env.ledger().timestamp();
        if observation.timestamp > now || now - observation.timestamp > config.max_age {
            log!(&env, "stale price", observation.timestamp, now);
            return Err(Error::StalePrice);
        }

        convert(config.bid_fee_quote, observation.price, config.asset_decimals)
    }

    // ========== CONFIGURATION ==========

    /// Update the quoted fee (admin only)
    pub fn set_bid_fee_quote(env: Env, admin: Address, bid_fee_quote: i128) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        if bid_fee_quote < 0 {
            return Err(Error::InvalidParameters);
        }

        config.bid_fee_quote = bid_fee_quote;
        Self::save_and_announce(&env, &config);

        Ok(())
    }

    /// Point the oracle at another price feed (admin only)
    pub fn set_feed(env: Env, admin: Address, feed: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;

        config.feed = feed;
        Self::save_and_announce(&env, &config);

        Ok(())
    }

    /// Update the staleness window (admin only)
    pub fn set_max_age(env: Env, admin: Address, max_age: u64) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        if max_age == 0 {
            return Err(Error::InvalidParameters);
        }

        config.max_age = max_age;
        Self::save_and_announce(&env, &config);

        Ok(())
    }

    /// Transfer the admin role
    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;

        config.admin = new_admin;
        Self::save_and_announce(&env, &config);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<OracleConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_admin(env: &Env, admin: &Address) -> Result<OracleConfig, Error> {
        admin.require_auth();
        let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
        if *admin != config.admin {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    fn save_and_announce(env: &Env, config: &OracleConfig) {
        storage::set_config(env, config);
        events::emit_oracle_config_updated(
            env,
            config.admin.clone(),
            config.feed.clone(),
            config.bid_fee_quote,
            config.max_age,
        );
    }
}

/// `ceil(fee_quote * 10^asset_decimals / price)`
fn convert(fee_quote: i128, price: i128, asset_decimals: u32) -> Result<i128, Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }

    let scale = 10i128.checked_pow(asset_decimals).ok_or(Error::Overflow)?;
    let scaled = fee_quote.checked_mul(scale).ok_or(Error::Overflow)?;

    scaled
        .checked_add(price - 1)
        .map(|rounded| rounded / price)
        .ok_or(Error::Overflow)
}
