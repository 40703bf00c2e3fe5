use super::types::CollectionError as Error;
use soroban_sdk::{contractclient, Address, Env, String};

#[contractclient(name = "CollectionClient")]
pub trait CollectionInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address, token_uri: String) -> u64;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error>;
    fn get_approved(env: Env, token_id: u64) -> Option<Address>;
    fn transfer(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn balance_of(env: Env, owner: Address) -> u32;
}
