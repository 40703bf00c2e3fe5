use crate::{
    storage::get_data,
    types::{COLLECTION_CONTRACT, PAYMENT_TOKEN, SHARE_TOKEN_CONTRACT},
};
use common::{
    collection::interface::CollectionClient, share_token::interface::ShareTokenClient,
};
use soroban_sdk::{token, Address, Env};

pub fn get_collection_client(env: &Env) -> CollectionClient<'_> {
    let collection_ca: Address = get_data(env, &COLLECTION_CONTRACT).unwrap();
    CollectionClient::new(&env, &collection_ca)
}

pub fn get_share_token_client(env: &Env) -> ShareTokenClient<'_> {
    let share_token_ca: Address = get_data(env, &SHARE_TOKEN_CONTRACT).unwrap();
    ShareTokenClient::new(&env, &share_token_ca)
}

pub fn get_payment_token_client(env: &Env) -> token::Client<'_> {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).unwrap();
    token::Client::new(&env, &token_addr)
}
