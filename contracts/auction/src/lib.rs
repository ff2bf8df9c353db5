#![no_std]

//! Sealed-bid procurement auction instance.
//!
//! Bidders commit the SHA-256 of their offer together with the bid cost
//! (a non-refundable fee plus a warranty deposit), reveal the offer once the
//! commit window closes to get the warranty back, and the owner picks a
//! winner among the revealed offers after the reveal window closes.

mod errors;
mod events;
mod external;
mod fee;
mod phase;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, BytesN, Env, String, Vec};

pub use errors::Error;
pub use types::{Accounts, Auction, AuctionParams, Bid, BidFeePolicy, Phase, Schedule};

use external::FactoryClient;
use fee::MAX_BPS;
use types::MAX_PAGE_SIZE;

#[contract]
pub struct AuctionInstance;

#[contractimpl]
impl AuctionInstance {
    // ========== INITIALIZATION ==========

    /// Initialize the instance; called by the factory right after deployment.
    ///
    /// The commit window opens at the current ledger timestamp.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the instance has already been set up
    /// * `Error::InvalidParameters` - Zero-length phases, negative warranty,
    ///   empty name, fee share above 100% or a negative fixed fee
    pub fn initialize(env: Env, factory: Address, params: AuctionParams) -> Result<(), Error> {
        if storage::has_auction(&env) {
            return Err(Error::AlreadyInitialized);
        }

        factory.require_auth();

        if params.name.is_empty()
            || params.warranty_amount < 0
            || params.fee_share_bps > MAX_BPS
            || !fee::is_valid_policy(&params.bid_fee_policy)
        {
            return Err(Error::InvalidParameters);
        }

        let schedule = Schedule::starting_at(
            env.ledger().timestamp(),
            params.commit_deadline,
            params.reveal_deadline,
        )
        .ok_or(Error::InvalidParameters)?;

        let auction = Auction {
            factory: factory.clone(),
            owner: params.owner,
            token: params.token,
            name: params.name,
            metadata_uri: params.metadata_uri,
            warranty_amount: params.warranty_amount,
            bid_fee_policy: params.bid_fee_policy,
            fee_share_bps: params.fee_share_bps,
            schedule,
            winner: None,
        };

        storage::save_auction(&env, &auction);
        storage::save_accounts(&env, &Accounts::default());
        storage::extend_instance_ttl(&env);

        events::emit_auction_initialized(
            &env,
            auction.owner,
            factory,
            auction.name,
            schedule.commit_closes_at,
            schedule.reveal_closes_at,
        );

        Ok(())
    }

    // ========== COMMIT ==========

    /// Commit a sealed bid.
    ///
    /// `payment` must equal `get_bid_cost()` exactly. The warranty part is held
    /// in escrow until reveal; of the fee part, `fee_share_bps` goes to the
    /// factory and the rest stays with the instance.
    ///
    /// # Errors
    /// * `Error::CommitPhaseClosed` - The commit window has ended
    /// * `Error::AlreadyCommitted` - The bidder already holds a commitment
    /// * `Error::OracleUnavailable` - The bid fee could not be quoted
    /// * `Error::IncorrectPaymentFee` - `payment` differs from the bid cost
    pub fn set_bid(
        env: Env,
        bidder: Address,
        display_name: String,
        commitment: BytesN<32>,
        payment: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let auction = Self::load(&env)?;
        let now = env.ledger().timestamp();

        if auction.schedule.phase_at(now) != Phase::Commit {
            return Err(Error::CommitPhaseClosed);
        }

        if storage::has_bid(&env, &bidder) {
            return Err(Error::AlreadyCommitted);
        }

        if display_name.is_empty() || commitment == BytesN::from_array(&env, &[0u8; 32]) {
            return Err(Error::InvalidParameters);
        }

        let cost = fee::quote_bid_cost(&env, &auction.bid_fee_policy, auction.warranty_amount)?;
        if payment != cost {
            log!(&env, "bid payment mismatch", payment, cost);
            return Err(Error::IncorrectPaymentFee);
        }

        let token_client = token::Client::new(&env, &auction.token);
        let contract_address = env.current_contract_address();
        if payment > 0 {
            token_client.transfer(&bidder, &contract_address, &payment);
        }

        let bid_fee = payment - auction.warranty_amount;
        let (forwarded, retained) = fee::split_fee(bid_fee, auction.fee_share_bps)?;

        storage::save_bid(
            &env,
            &Bid {
                bidder: bidder.clone(),
                display_name: display_name.clone(),
                commitment: commitment.clone(),
                committed_at: now,
                fee_paid: bid_fee,
                warranty_held: auction.warranty_amount,
                revealed: false,
                revealed_at: None,
                revealed_value: None,
            },
        );
        storage::add_bidder(&env, &bidder);

        let mut accounts = storage::get_accounts(&env);
        accounts.escrowed_warranties = accounts
            .escrowed_warranties
            .checked_add(auction.warranty_amount)
            .ok_or(Error::Overflow)?;
        accounts.retained_fees = accounts
            .retained_fees
            .checked_add(retained)
            .ok_or(Error::Overflow)?;
        accounts.forwarded_fees = accounts
            .forwarded_fees
            .checked_add(forwarded)
            .ok_or(Error::Overflow)?;
        storage::save_accounts(&env, &accounts);
        storage::extend_instance_ttl(&env);

        events::emit_bid_committed(&env, bidder, display_name, commitment, payment, forwarded);

        if forwarded > 0 {
            token_client.transfer(&contract_address, &auction.factory, &forwarded);
            FactoryClient::new(&env, &auction.factory).receive_fee_share(&contract_address, &forwarded);
        }

        Ok(())
    }

    // ========== REVEAL ==========

    /// Reveal the committed offer and get the warranty back.
    ///
    /// # Errors
    /// * `Error::NotRevealPhase` - Called outside the reveal window
    /// * `Error::NoCommitment` - The bidder never committed
    /// * `Error::AlreadyRevealed` - The bid was revealed before
    /// * `Error::InvalidReveal` - `sha256(preimage)` differs from the commitment
    pub fn reveal_bid(env: Env, bidder: Address, preimage: Bytes) -> Result<(), Error> {
        bidder.require_auth();

        let auction = Self::load(&env)?;
        let now = env.ledger().timestamp();

        if auction.schedule.phase_at(now) != Phase::Reveal {
            return Err(Error::NotRevealPhase);
        }

        let mut bid = storage::get_bid(&env, &bidder).ok_or(Error::NoCommitment)?;
        if bid.revealed {
            return Err(Error::AlreadyRevealed);
        }

        if env.crypto().sha256(&preimage).to_bytes() != bid.commitment {
            return Err(Error::InvalidReveal);
        }

        let refund = bid.warranty_held;
        bid.revealed = true;
        bid.revealed_at = Some(now);
        bid.revealed_value = Some(preimage);
        bid.warranty_held = 0;
        storage::save_bid(&env, &bid);

        let mut accounts = storage::get_accounts(&env);
        accounts.escrowed_warranties -= refund;
        accounts.refunded_warranties = accounts
            .refunded_warranties
            .checked_add(refund)
            .ok_or(Error::Overflow)?;
        storage::save_accounts(&env, &accounts);
        storage::extend_instance_ttl(&env);

        events::emit_bid_revealed(&env, bidder.clone(), refund);

        if refund > 0 {
            token::Client::new(&env, &auction.token).transfer(
                &env.current_contract_address(),
                &bidder,
                &refund,
            );
        }

        Ok(())
    }

    // ========== FINALIZATION ==========

    /// Record the winning bidder (owner only, after the reveal window).
    ///
    /// No funds move.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - `caller` is not the owner
    /// * `Error::WinnerAlreadySet` - A winner was chosen before
    /// * `Error::AuctionNotYetClosed` - The reveal window is still open
    /// * `Error::InvalidWinner` - `bidder` did not reveal a bid
    pub fn choose_winner(env: Env, caller: Address, bidder: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction = Self::load(&env)?;
        if caller != auction.owner {
            return Err(Error::Unauthorized);
        }

        if auction.winner.is_some() {
            return Err(Error::WinnerAlreadySet);
        }

        if !auction.schedule.is_closed_at(env.ledger().timestamp()) {
            return Err(Error::AuctionNotYetClosed);
        }

        match storage::get_bid(&env, &bidder) {
            Some(bid) if bid.revealed => {}
            _ => return Err(Error::InvalidWinner),
        }

        auction.winner = Some(bidder.clone());
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        events::emit_winner_chosen(&env, bidder, caller);

        Ok(())
    }

    /// Pay out retained fees and forfeited warranties to the owner.
    ///
    /// Warranties still escrowed once the reveal window has closed belong to
    /// bidders who never revealed; they are forfeited here as one total.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - `caller` is not the owner
    /// * `Error::AuctionNotYetClosed` - The reveal window is still open
    /// * `Error::NothingToWithdraw` - The instance holds no funds
    pub fn withdraw_proceeds(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let auction = Self::load(&env)?;
        if caller != auction.owner {
            return Err(Error::Unauthorized);
        }

        if !auction.schedule.is_closed_at(env.ledger().timestamp()) {
            return Err(Error::AuctionNotYetClosed);
        }

        let mut accounts = storage::get_accounts(&env);
        let forfeited = accounts.escrowed_warranties;
        let amount = accounts.held();
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        accounts.forfeited_warranties = accounts
            .forfeited_warranties
            .checked_add(forfeited)
            .ok_or(Error::Overflow)?;
        accounts.withdrawn = accounts
            .withdrawn
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        accounts.escrowed_warranties = 0;
        accounts.retained_fees = 0;
        storage::save_accounts(&env, &accounts);
        storage::extend_instance_ttl(&env);

        events::emit_proceeds_withdrawn(&env, caller.clone(), amount, forfeited);

        token::Client::new(&env, &auction.token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        Ok(amount)
    }

    // ========== VIEWS ==========

    /// Payment currently required by `set_bid`.
    pub fn get_bid_cost(env: Env) -> Result<i128, Error> {
        let auction = Self::load(&env)?;
        fee::quote_bid_cost(&env, &auction.bid_fee_policy, auction.warranty_amount)
    }

    pub fn get_phase(env: Env) -> Result<Phase, Error> {
        let auction = Self::load(&env)?;
        Ok(auction.schedule.phase_at(env.ledger().timestamp()))
    }

    pub fn get_auction(env: Env) -> Result<Auction, Error> {
        Self::load(&env)
    }

    /// A bid still unrevealed after the reveal window reports no warranty
    /// held: it is forfeited to the owner.
    pub fn get_bid(env: Env, bidder: Address) -> Result<Bid, Error> {
        let auction = Self::load(&env)?;
        let mut bid = storage::get_bid(&env, &bidder).ok_or(Error::NoCommitment)?;
        if !bid.revealed && auction.schedule.is_closed_at(env.ledger().timestamp()) {
            bid.warranty_held = 0;
        }
        Ok(bid)
    }

    /// Bidders in commitment order (paginated)
    ///
    /// # Arguments
    /// * `offset` - Number of bidders to skip
    /// * `limit` - Maximum results to return, at most `MAX_PAGE_SIZE`
    pub fn get_bidders(env: Env, offset: u32, limit: u32) -> Result<Vec<Address>, Error> {
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(Error::InvalidParameters);
        }

        let count = storage::get_bidder_count(&env);
        let last = offset.saturating_add(limit).min(count);
        let mut bidders = Vec::new(&env);
        for index in offset.saturating_add(1)..=last {
            if let Some(bidder) = storage::get_bidder(&env, index) {
                bidders.push_back(bidder);
            }
        }

        Ok(bidders)
    }

    pub fn get_bidder_count(env: Env) -> u32 {
        storage::get_bidder_count(&env)
    }

    pub fn get_winner(env: Env) -> Result<Option<Address>, Error> {
        Ok(Self::load(&env)?.winner)
    }

    pub fn get_accounts(env: Env) -> Result<Accounts, Error> {
        Self::load(&env)?;
        Ok(storage::get_accounts(&env))
    }

    // ========== INTERNAL HELPERS ==========

    fn load(env: &Env) -> Result<Auction, Error> {
        storage::get_auction(env).ok_or(Error::NotInitialized)
    }
}

#[cfg(test)]
mod test;
