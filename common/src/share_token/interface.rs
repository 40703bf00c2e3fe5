use super::types::ShareTokenError as Error;
use soroban_sdk::{contractclient, Address, Env, Map, String, Vec};

#[contractclient(name = "ShareTokenClient")]
pub trait ShareTokenInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn get_admin(env: Env) -> Address;
    fn set_admin(env: Env, new_admin: Address) -> Result<(), Error>;
    fn mint(env: Env, to: Address, asset_id: u64, amount: u32) -> Result<(), Error>;
    fn burn(env: Env, from: Address, asset_id: u64, amount: u32) -> Result<(), Error>;
    fn safe_transfer(
        env: Env,
        from: Address,
        to: Address,
        asset_id: u64,
        amount: u32,
    ) -> Result<(), Error>;
    fn balance_of(env: Env, asset_id: u64, holder: Address) -> u32;
    fn total_supply(env: Env, asset_id: u64) -> u32;
    fn owners_of(env: Env, asset_id: u64) -> Vec<Address>;
    fn get_all_holders(env: Env, asset_id: u64) -> Option<Map<Address, u32>>;
}
