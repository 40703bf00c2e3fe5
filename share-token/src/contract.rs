use soroban_sdk::{contract, contractimpl, Address, Env, Map, String, Symbol, Vec};

use crate::{
    events::ShareTokenEvent,
    storage::{get_data, get_persistent, remove_persistent, store_data, store_persistent},
    utils::require_admin_call,
};
use common::share_token::{
    interface::ShareTokenInterface,
    types::{ShareTokenDataKey as DataKey, ShareTokenError as Error, ADMIN},
};

const NAME: &str = "Fractional NFT Shares";
const SYMBOL: &str = "FNFT";

#[contract]
pub struct ShareTokenContract;

#[contractimpl]
impl ShareTokenInterface for ShareTokenContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        ShareTokenEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    fn get_admin(env: Env) -> Address {
        get_data(&env, &ADMIN).unwrap()
    }

    fn set_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = require_admin_call(&env);
        store_data(&env, &ADMIN, &new_admin);
        ShareTokenEvent::AdminChanged(admin, new_admin).publish(&env);
        Ok(())
    }

    fn mint(env: Env, to: Address, asset_id: u64, amount: u32) -> Result<(), Error> {
        require_admin_call(&env);
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }

        let mut ownership: Map<Address, u32> =
            get_persistent(&env, &DataKey::Ownership(asset_id)).unwrap_or_else(|| Map::new(&env));
        let current: u32 = ownership.get(to.clone()).unwrap_or(0);
        ownership.set(to.clone(), current + amount);
        store_persistent(&env, &DataKey::Ownership(asset_id), &ownership);

        let issued: u32 = get_persistent(&env, &DataKey::Issued(asset_id)).unwrap_or(0);
        store_persistent(&env, &DataKey::Issued(asset_id), &(issued + amount));

        ShareTokenEvent::Mint(asset_id, to, amount).publish(&env);
        Ok(())
    }

    fn burn(env: Env, from: Address, asset_id: u64, amount: u32) -> Result<(), Error> {
        require_admin_call(&env);
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }

        let mut ownership: Map<Address, u32> =
            get_persistent(&env, &DataKey::Ownership(asset_id)).unwrap_or_else(|| Map::new(&env));
        let held: u32 = ownership.get(from.clone()).unwrap_or(0);
        if held < amount {
            return Err(Error::InsufficientShares);
        }

        if held == amount {
            ownership.remove(from.clone());
        } else {
            ownership.set(from.clone(), held - amount);
        }

        let issued: u32 = get_persistent(&env, &DataKey::Issued(asset_id)).unwrap_or(0);
        if issued == amount {
            // Last shares gone, drop the asset's records entirely
            remove_persistent(&env, &DataKey::Ownership(asset_id));
            remove_persistent(&env, &DataKey::Issued(asset_id));
        } else {
            store_persistent(&env, &DataKey::Ownership(asset_id), &ownership);
            store_persistent(&env, &DataKey::Issued(asset_id), &(issued - amount));
        }

        ShareTokenEvent::Burn(asset_id, from, amount).publish(&env);
        Ok(())
    }

    // Secondary share movement between holders; issued supply is untouched
    fn safe_transfer(
        env: Env,
        from: Address,
        to: Address,
        asset_id: u64,
        amount: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }

        let mut ownership: Map<Address, u32> =
            get_persistent(&env, &DataKey::Ownership(asset_id)).unwrap_or_else(|| Map::new(&env));
        let from_held: u32 = ownership.get(from.clone()).unwrap_or(0);
        if from_held < amount {
            return Err(Error::InsufficientShares);
        }

        if from_held == amount {
            ownership.remove(from.clone());
        } else {
            ownership.set(from.clone(), from_held - amount);
        }
        let to_held: u32 = ownership.get(to.clone()).unwrap_or(0);
        ownership.set(to.clone(), to_held + amount);

        store_persistent(&env, &DataKey::Ownership(asset_id), &ownership);
        ShareTokenEvent::TransferShares(asset_id, from, to, amount).publish(&env);
        Ok(())
    }

    fn balance_of(env: Env, asset_id: u64, holder: Address) -> u32 {
        let ownership: Option<Map<Address, u32>> =
            get_persistent(&env, &DataKey::Ownership(asset_id));

        if let Some(holders) = ownership {
            holders.get(holder).unwrap_or(0)
        } else {
            0
        }
    }

    fn total_supply(env: Env, asset_id: u64) -> u32 {
        get_persistent(&env, &DataKey::Issued(asset_id)).unwrap_or(0)
    }

    fn owners_of(env: Env, asset_id: u64) -> Vec<Address> {
        let holders: Option<Map<Address, u32>> =
            get_persistent(&env, &DataKey::Ownership(asset_id));
        match holders {
            Some(map) => map.keys(),
            None => Vec::new(&env),
        }
    }

    fn get_all_holders(env: Env, asset_id: u64) -> Option<Map<Address, u32>> {
        get_persistent(&env, &DataKey::Ownership(asset_id))
    }
}
