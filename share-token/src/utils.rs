use crate::storage::get_data;
use common::share_token::types::ADMIN;
use soroban_sdk::{Address, Env};

// Mint and burn are reserved for the splitter contract once it has been
// installed as admin. require_auth passes for a contract invoking us directly.
pub fn require_admin_call(env: &Env) -> Address {
    let admin: Address = get_data(env, &ADMIN).unwrap();
    admin.require_auth();
    admin
}
