//! Asset custody. The splitter contract itself is the custodian: the asset is
//! pulled in when a listing is created and released exactly once on
//! redemption. The custody flag is written before any cross-contract call.

use soroban_sdk::{Address, Env};

use crate::{
    storage::{get_persistent, remove_persistent, store_persistent},
    types::DataKey,
    utils::contract_clients::get_collection_client,
};

// Requires the seller to have approved this contract on the collection.
pub fn take_custody(env: &Env, seller: &Address, asset_id: u64) {
    store_persistent(env, &DataKey::InCustody(asset_id), &true);

    let contract: Address = env.current_contract_address();
    get_collection_client(env).transfer(&contract, seller, &contract, &asset_id);
}

pub fn release_custody(env: &Env, recipient: &Address, asset_id: u64) {
    remove_persistent(env, &DataKey::InCustody(asset_id));

    let contract: Address = env.current_contract_address();
    get_collection_client(env).transfer(&contract, &contract, recipient, &asset_id);
}

pub fn in_custody(env: &Env, asset_id: u64) -> bool {
    get_persistent(env, &DataKey::InCustody(asset_id)).unwrap_or(false)
}
