#![no_std]

mod events;

use common::collection::{
    interface::CollectionInterface,
    types::{CollectionDataKey as DataKey, CollectionError as Error, ADMIN},
};
use events::CollectionEvent;
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};

const NAME: &str = "Husky Art";
const SYMBOL: &str = "HART";

#[contract]
pub struct CollectionContract;

#[contractimpl]
impl CollectionInterface for CollectionContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&DataKey::NextTokenId, &0u64);
        CollectionEvent::Initialized.publish(&env);
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

    // Sequential IDs starting at 0, matching the collection this replaces
    fn mint(env: Env, to: Address, token_uri: String) -> u64 {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();

        let token_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(0);

        env.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), &to);
        env.storage()
            .persistent()
            .set(&DataKey::TokenUri(token_id), &token_uri);
        env.storage()
            .instance()
            .set(&DataKey::NextTokenId, &(token_id + 1));

        increment_balance(&env, &to);

        CollectionEvent::Mint(token_id, to).publish(&env);
        token_id
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(Error::TokenNotFound)
    }

    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let current: Address = env
            .storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(Error::TokenNotFound)?;
        if current != owner {
            return Err(Error::NotTokenOwner);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Approved(token_id), &operator);
        CollectionEvent::Approval(token_id, owner, operator).publish(&env);
        Ok(())
    }

    fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Approved(token_id))
    }

    // Spender must be the current owner or the approved operator. A contract
    // invoking this directly satisfies require_auth for its own address.
    fn transfer(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }

        if spender != owner {
            let approved: Option<Address> =
                env.storage().persistent().get(&DataKey::Approved(token_id));
            if approved != Some(spender) {
                return Err(Error::NotApproved);
            }
        }

        env.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), &to);
        // Approval does not survive a custody change
        if env
            .storage()
            .persistent()
            .has(&DataKey::Approved(token_id))
        {
            env.storage()
                .persistent()
                .remove(&DataKey::Approved(token_id));
        }

        decrement_balance(&env, &from);
        increment_balance(&env, &to);

        CollectionEvent::Transfer(token_id, from, to).publish(&env);
        Ok(())
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenUri(token_id))
            .ok_or(Error::TokenNotFound)
    }

    fn balance_of(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }
}

fn increment_balance(env: &Env, owner: &Address) {
    let key = DataKey::Balance(owner.clone());
    let current: u32 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().set(&key, &(current + 1));
}

fn decrement_balance(env: &Env, owner: &Address) {
    let key = DataKey::Balance(owner.clone());
    let current: u32 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().set(&key, &(current.saturating_sub(1)));
}
