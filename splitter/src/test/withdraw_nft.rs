#![cfg(test)]

use super::{SplitterTest, LISTING_FEE, PRICE_PER_SHARE};
use crate::types::Error;

#[test]
fn test_withdraw_without_full_ownership_fails() {
    let test = SplitterTest::setup();
    test.list_default();

    test.splitter_client
        .buy_fraction(&test.bob, &test.asset_id, &10u32, &(PRICE_PER_SHARE * 10));

    // Alice holds 60 of 70 issued shares
    assert_eq!(
        test.splitter_client
            .try_withdraw_my_nft(&test.alice, &test.asset_id, &test.alice),
        Err(Ok(Error::NotWholeOwner))
    );

    assert_eq!(
        test.collection_client.owner_of(&test.asset_id),
        test.splitter_client.address
    );
}

#[test]
fn test_withdraw_with_partial_issue() {
    let test = SplitterTest::setup();
    test.list_default();

    // Nothing sold: alice holds all 60 issued shares, redemption works
    test.splitter_client
        .withdraw_my_nft(&test.alice, &test.asset_id, &test.alice);

    assert_eq!(test.share_client.balance_of(&test.asset_id, &test.alice), 0);
    assert_eq!(test.share_client.total_supply(&test.asset_id), 0);
    assert_eq!(test.collection_client.owner_of(&test.asset_id), test.alice);
    assert!(!test.splitter_client.in_custody(&test.asset_id));
}

#[test]
fn test_withdraw_after_buying_back_all_shares() {
    let test = SplitterTest::setup();
    test.list_default();

    test.splitter_client
        .buy_fraction(&test.alice, &test.asset_id, &40u32, &(PRICE_PER_SHARE * 40));
    assert_eq!(test.share_client.total_supply(&test.asset_id), 100);

    test.splitter_client
        .withdraw_my_nft(&test.alice, &test.asset_id, &test.alice);

    assert_eq!(test.share_client.total_supply(&test.asset_id), 0);
    assert_eq!(test.collection_client.owner_of(&test.asset_id), test.alice);
}

#[test]
fn test_withdraw_after_secondary_transfer() {
    let test = SplitterTest::setup();
    test.list_default();

    test.splitter_client
        .buy_fraction(&test.bob, &test.asset_id, &10u32, &(PRICE_PER_SHARE * 10));

    // Bob hands his shares back to alice on the share ledger directly;
    // alice now holds all 70 issued shares without a second purchase
    test.share_client
        .safe_transfer(&test.bob, &test.alice, &test.asset_id, &10u32);

    test.splitter_client
        .withdraw_my_nft(&test.alice, &test.asset_id, &test.alice);

    assert_eq!(test.share_client.balance_of(&test.asset_id, &test.alice), 0);
    assert_eq!(test.share_client.total_supply(&test.asset_id), 0);
    assert_eq!(test.collection_client.owner_of(&test.asset_id), test.alice);
}

#[test]
fn test_withdraw_to_other_recipient() {
    let test = SplitterTest::setup();
    test.list_default();

    test.splitter_client
        .withdraw_my_nft(&test.alice, &test.asset_id, &test.bob);

    assert_eq!(test.collection_client.owner_of(&test.asset_id), test.bob);
}

#[test]
fn test_second_withdraw_fails() {
    let test = SplitterTest::setup();
    test.list_default();

    test.splitter_client
        .withdraw_my_nft(&test.alice, &test.asset_id, &test.alice);

    // No shares exist any more, nobody can redeem again
    assert_eq!(
        test.splitter_client
            .try_withdraw_my_nft(&test.alice, &test.asset_id, &test.alice),
        Err(Ok(Error::ListingNotFound))
    );
}

#[test]
fn test_withdraw_without_listing_fails() {
    let test = SplitterTest::setup();

    assert_eq!(
        test.splitter_client
            .try_withdraw_my_nft(&test.alice, &test.asset_id, &test.alice),
        Err(Ok(Error::ListingNotFound))
    );
}

#[test]
fn test_relist_after_redeem() {
    let test = SplitterTest::setup();
    test.list_default();

    test.splitter_client
        .withdraw_my_nft(&test.alice, &test.asset_id, &test.alice);

    // Fresh approval, fresh listing lifecycle for the same asset
    test.collection_client
        .approve(&test.alice, &test.splitter_client.address, &test.asset_id);
    test.splitter_client.list_nft(
        &test.alice,
        &test.asset_id,
        &PRICE_PER_SHARE,
        &25u32,
        &LISTING_FEE,
    );

    assert_eq!(test.share_client.balance_of(&test.asset_id, &test.alice), 75);
    assert_eq!(test.share_client.total_supply(&test.asset_id), 75);
    assert!(test.splitter_client.in_custody(&test.asset_id));
}
