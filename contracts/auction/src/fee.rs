use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::external::FeeOracleClient;
use crate::types::BidFeePolicy;

/// Basis-point denominator for the factory's fee share.
pub const MAX_BPS: u32 = 10_000;

/// Source of the non-refundable part of the bid cost.
trait BidFee {
    fn bid_fee(&self, env: &Env) -> Result<i128, Error>;
}

struct FixedFee(i128);

struct OracleFee<'a>(&'a Address);

impl BidFee for FixedFee {
    fn bid_fee(&self, _env: &Env) -> Result<i128, Error> {
        Ok(self.0)
    }
}

impl BidFee for OracleFee<'_> {
    fn bid_fee(&self, env: &Env) -> Result<i128, Error> {
        let oracle = FeeOracleClient::new(env, self.0);
        match oracle.try_quote_bid_fee() {
            Ok(Ok(fee)) if fee >= 0 => Ok(fee),
            _ => {
                log!(env, "fee oracle did not return a usable quote", self.0.clone());
                Err(Error::OracleUnavailable)
            }
        }
    }
}

pub fn quote_bid_fee(env: &Env, policy: &BidFeePolicy) -> Result<i128, Error> {
    match policy {
        BidFeePolicy::Fixed(fee) => FixedFee(*fee).bid_fee(env),
        BidFeePolicy::Oracle(oracle) => OracleFee(oracle).bid_fee(env),
    }
}

/// Total a bidder must pay to commit: bid fee plus warranty.
pub fn quote_bid_cost(env: &Env, policy: &BidFeePolicy, warranty_amount: i128) -> Result<i128, Error> {
    quote_bid_fee(env, policy)?
        .checked_add(warranty_amount)
        .ok_or(Error::Overflow)
}

/// Split a bid fee into `(forwarded to factory, retained by instance)`.
pub fn split_fee(fee: i128, fee_share_bps: u32) -> Result<(i128, i128), Error> {
    let forwarded = fee
        .checked_mul(fee_share_bps as i128)
        .ok_or(Error::Overflow)?
        / MAX_BPS as i128;
    Ok((forwarded, fee - forwarded))
}

pub fn is_valid_policy(policy: &BidFeePolicy) -> bool {
    match policy {
        BidFeePolicy::Fixed(fee) => *fee >= 0,
        BidFeePolicy::Oracle(_) => true,
    }
}
