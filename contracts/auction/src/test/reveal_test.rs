use crate::test::{
    advance_past_reveal, advance_to_reveal, commit, offer, setup_test, BID_COST, BID_FEE,
    STARTING_BALANCE, WARRANTY,
};
use crate::{Error, Phase};

#[test]
fn test_reveal_refunds_warranty() {
    // Fee 5, warranty 1: balance goes 0 -> 6 on commit and 6 -> 5 on reveal.
    let setup = setup_test();

    let preimage = commit(&setup, &setup.bidder, "ipfs://offer-a");
    assert_eq!(setup.instance_balance(), BID_COST);

    advance_to_reveal(&setup.env);
    assert_eq!(setup.client.get_phase(), Phase::Reveal);

    setup.client.reveal_bid(&setup.bidder, &preimage);

    assert_eq!(setup.instance_balance(), BID_FEE);
    assert_eq!(
        setup.token.balance(&setup.bidder),
        STARTING_BALANCE - BID_COST + WARRANTY
    );

    let bid = setup.client.get_bid(&setup.bidder);
    assert!(bid.revealed);
    assert_eq!(bid.warranty_held, 0);
    assert_eq!(bid.revealed_value, Some(preimage));

    let accounts = setup.client.get_accounts();
    assert_eq!(accounts.escrowed_warranties, 0);
    assert_eq!(accounts.refunded_warranties, WARRANTY);
    assert_eq!(accounts.held(), setup.instance_balance());
}

#[test]
fn test_reveal_twice_fails() {
    let setup = setup_test();

    let preimage = commit(&setup, &setup.bidder, "ipfs://offer-a");
    advance_to_reveal(&setup.env);
    setup.client.reveal_bid(&setup.bidder, &preimage);

    let result = setup.client.try_reveal_bid(&setup.bidder, &preimage);
    assert_eq!(result, Err(Ok(Error::AlreadyRevealed)));

    // The warranty was paid back exactly once.
    assert_eq!(setup.instance_balance(), BID_FEE);
    assert_eq!(setup.client.get_accounts().refunded_warranties, WARRANTY);
}

#[test]
fn test_reveal_during_commit_phase_fails() {
    let setup = setup_test();

    let preimage = commit(&setup, &setup.bidder, "ipfs://offer-a");

    let result = setup.client.try_reveal_bid(&setup.bidder, &preimage);
    assert_eq!(result, Err(Ok(Error::NotRevealPhase)));
    assert_eq!(setup.instance_balance(), BID_COST);
}

#[test]
fn test_reveal_after_reveal_deadline_fails() {
    let setup = setup_test();

    let preimage = commit(&setup, &setup.bidder, "ipfs://offer-a");
    advance_past_reveal(&setup.env);

    let result = setup.client.try_reveal_bid(&setup.bidder, &preimage);
    assert_eq!(result, Err(Ok(Error::NotRevealPhase)));
    assert_eq!(setup.instance_balance(), BID_COST);
}

#[test]
fn test_reveal_without_commitment_fails() {
    let setup = setup_test();

    advance_to_reveal(&setup.env);

    let result = setup
        .client
        .try_reveal_bid(&setup.bidder, &offer(&setup.env, "ipfs://offer-a"));
    assert_eq!(result, Err(Ok(Error::NoCommitment)));
}

#[test]
fn test_reveal_with_wrong_preimage_fails_and_can_be_retried() {
    let setup = setup_test();

    let preimage = commit(&setup, &setup.bidder, "ipfs://offer-a");
    advance_to_reveal(&setup.env);

    let result = setup
        .client
        .try_reveal_bid(&setup.bidder, &offer(&setup.env, "ipfs://offer-b"));
    assert_eq!(result, Err(Ok(Error::InvalidReveal)));
    assert_eq!(setup.instance_balance(), BID_COST);
    assert!(!setup.client.get_bid(&setup.bidder).revealed);

    setup.client.reveal_bid(&setup.bidder, &preimage);
    assert_eq!(setup.instance_balance(), BID_FEE);
}

#[test]
fn test_each_revealer_gets_own_warranty() {
    let setup = setup_test();
    let second = setup.new_bidder();
    let third = setup.new_bidder();

    let first_offer = commit(&setup, &setup.bidder, "ipfs://offer-a");
    let second_offer = commit(&setup, &second, "ipfs://offer-b");
    commit(&setup, &third, "ipfs://offer-c");

    advance_to_reveal(&setup.env);
    setup.client.reveal_bid(&setup.bidder, &first_offer);
    setup.client.reveal_bid(&second, &second_offer);

    // The third bidder's warranty is still escrowed.
    assert_eq!(setup.instance_balance(), 3 * BID_FEE + WARRANTY);
    assert_eq!(setup.token.balance(&third), STARTING_BALANCE - BID_COST);
    assert_eq!(setup.client.get_bid(&third).warranty_held, WARRANTY);
    assert_eq!(setup.client.get_accounts().held(), setup.instance_balance());
}
