#![cfg(test)]

use super::{SplitterTest, LISTING_FEE};
use crate::types::Error;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_initialize_sets_admin() {
    let test = SplitterTest::setup();
    assert_eq!(test.splitter_client.get_admin(), test.admin);
    assert_eq!(test.splitter_client.get_listing_fee(), LISTING_FEE);
}

#[test]
fn test_initialize_twice_fails() {
    let test = SplitterTest::setup();

    assert_eq!(
        test.splitter_client.try_initialize(
            &test.admin,
            &test.collection_client.address,
            &test.share_client.address,
            &test.token_client.address,
            &LISTING_FEE,
        ),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_set_admin() {
    let test = SplitterTest::setup();
    let new_admin: Address = Address::generate(&test.env);

    test.splitter_client.set_admin(&new_admin);
    assert_eq!(test.splitter_client.get_admin(), new_admin);
}

#[test]
fn test_version() {
    let test = SplitterTest::setup();
    assert_eq!(test.splitter_client.version(), 1);
}
