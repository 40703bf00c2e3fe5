use soroban_sdk::{panic_with_error, Address, Env};

use super::contract_clients::get_payment_token_client;
use crate::{
    storage::{get_data, get_persistent},
    types::{DataKey, Error, Listing, ADMIN},
};

pub fn get_listing_by_id(env: &Env, asset_id: u64) -> Listing {
    let listing: Option<Listing> = get_persistent(&env, &DataKey::Listing(asset_id));

    if listing.is_none() {
        panic_with_error!(&env, Error::ListingNotFound);
    }

    listing.unwrap()
}

pub fn require_admin(env: &Env) -> Address {
    let admin: Address = get_data(env, &ADMIN).unwrap();
    admin.require_auth();
    admin
}

// Moves exactly `amount` of the payment token; callers have already checked
// the attached value covers it, so any excess never leaves the payer.
pub fn transfer_payment(env: &Env, from: &Address, to: &Address, amount: i128) {
    let token_client = get_payment_token_client(env);
    let balance: i128 = token_client.balance(from);
    if balance < amount {
        panic_with_error!(&env, Error::InsufficientBalance)
    }
    token_client.transfer(from, to, &amount);
}
