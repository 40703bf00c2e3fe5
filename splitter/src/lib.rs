#![no_std]
#![allow(clippy::unused_unit)]

mod escrow;
mod events;
mod storage;
mod types;
mod utils;

use events::SplitterEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol};
use storage::{get_data, has_data, has_persistent, remove_persistent, store_data, store_persistent};
use types::{
    DataKey, Error, Listing, ADMIN, COLLECTION_CONTRACT, LISTING_FEE, PAYMENT_TOKEN,
    SHARE_TOKEN_CONTRACT, TOTAL_SHARES,
};
use utils::{
    contract_clients::{get_collection_client, get_share_token_client},
    helpers::{get_listing_by_id, require_admin, transfer_payment},
};

#[contract]
pub struct SplitterContract;

#[allow(dead_code)]
#[contractimpl]
impl SplitterContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        collection_ca: Address,
        share_token_ca: Address,
        payment_token: Address,
        listing_fee: i128,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &COLLECTION_CONTRACT, &collection_ca);
        store_data(&env, &SHARE_TOKEN_CONTRACT, &share_token_ca);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);
        store_data(&env, &LISTING_FEE, &listing_fee);

        SplitterEvent::Initialized(collection_ca, share_token_ca, payment_token).publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        require_admin(&env);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        SplitterEvent::Upgraded(Self::version()).publish(&env);
    }

    pub fn get_admin(env: Env) -> Address {
        get_data(&env, &ADMIN).unwrap()
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = require_admin(&env);
        store_data(&env, &ADMIN, &new_admin);
        SplitterEvent::AdminChanged(admin, new_admin).publish(&env);
        Ok(())
    }

    pub fn get_listing_fee(env: Env) -> i128 {
        get_data(&env, &LISTING_FEE).unwrap()
    }

    pub fn get_listing(env: Env, asset_id: u64) -> Listing {
        get_listing_by_id(&env, asset_id)
    }

    pub fn in_custody(env: Env, asset_id: u64) -> bool {
        escrow::in_custody(&env, asset_id)
    }

    /// Escrow the asset and open fractional sale. The seller retains
    /// `100 - shares_for_sale` shares, minted immediately; offered shares are
    /// minted on demand as they are bought.
    pub fn list_nft(
        env: Env,
        seller: Address,
        asset_id: u64,
        price_per_share: i128,
        shares_for_sale: u32,
        fee_paid: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        // An unredeemed listing blocks relisting, sold out or not
        if has_persistent(&env, &DataKey::Listing(asset_id)) {
            return Err(Error::AlreadyListed);
        }
        // Seller keeps a stake and must offer something
        if shares_for_sale == 0 || shares_for_sale >= TOTAL_SHARES {
            return Err(Error::InvalidShareCount);
        }
        if price_per_share <= 0 {
            return Err(Error::InvalidPrice);
        }

        let listing_fee: i128 = get_data(&env, &LISTING_FEE).unwrap();
        if fee_paid < listing_fee {
            return Err(Error::ListingFeeNotMet);
        }

        let owner: Address = get_collection_client(&env).owner_of(&asset_id);
        if owner != seller {
            return Err(Error::NotAssetOwner);
        }

        let listing = Listing {
            asset_id,
            seller: seller.clone(),
            price_per_share,
            shares_for_sale,
            shares_remaining: shares_for_sale,
            active: true,
        };
        store_persistent(&env, &DataKey::Listing(asset_id), &listing);

        escrow::take_custody(&env, &seller, asset_id);
        get_share_token_client(&env).mint(&seller, &asset_id, &(TOTAL_SHARES - shares_for_sale));

        // Only the required fee moves; any excess stays with the seller
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        transfer_payment(&env, &seller, &admin, listing_fee);

        SplitterEvent::Listed(asset_id, seller, price_per_share, shares_for_sale).publish(&env);
        Ok(())
    }

    /// Buy `quantity` offered shares at the listed per-share price. Shares are
    /// minted to the buyer and exactly `price_per_share * quantity` is
    /// forwarded to the seller.
    pub fn buy_fraction(
        env: Env,
        buyer: Address,
        asset_id: u64,
        quantity: u32,
        payment: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let mut listing: Listing = storage::get_persistent(&env, &DataKey::Listing(asset_id))
            .ok_or(Error::ListingNotFound)?;

        if !listing.active || quantity == 0 || listing.shares_remaining < quantity {
            return Err(Error::NoSharesRemaining);
        }

        let required: i128 = listing.price_per_share * quantity as i128;
        if payment < required {
            return Err(Error::InsufficientPayment);
        }

        listing.shares_remaining -= quantity;
        if listing.shares_remaining == 0 {
            listing.active = false;
        }
        store_persistent(&env, &DataKey::Listing(asset_id), &listing);

        get_share_token_client(&env).mint(&buyer, &asset_id, &quantity);
        transfer_payment(&env, &buyer, &listing.seller, required);

        SplitterEvent::FractionSold(asset_id, buyer, quantity, required).publish(&env);
        Ok(())
    }

    /// Redeem the underlying asset. The caller must hold every share currently
    /// in existence for the asset; the whole balance is burned and custody is
    /// released to `recipient`.
    pub fn withdraw_my_nft(
        env: Env,
        caller: Address,
        asset_id: u64,
        recipient: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        if !has_persistent(&env, &DataKey::Listing(asset_id)) {
            return Err(Error::ListingNotFound);
        }

        let share_token = get_share_token_client(&env);
        let issued: u32 = share_token.total_supply(&asset_id);
        let held: u32 = share_token.balance_of(&asset_id, &caller);

        if issued == 0 || held < issued {
            return Err(Error::NotWholeOwner);
        }

        remove_persistent(&env, &DataKey::Listing(asset_id));

        share_token.burn(&caller, &asset_id, &held);
        escrow::release_custody(&env, &recipient, asset_id);

        SplitterEvent::Redeemed(asset_id, caller, recipient).publish(&env);
        Ok(())
    }
}

#[cfg(test)]
mod test;
