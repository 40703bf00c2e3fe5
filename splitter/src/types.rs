use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    ListingNotFound = 2,
    AlreadyListed = 3,
    InvalidShareCount = 4,
    InvalidPrice = 5,
    NotAssetOwner = 6,
    ListingFeeNotMet = 7,
    NoSharesRemaining = 8,
    InsufficientPayment = 9,
    InsufficientBalance = 10,
    NotWholeOwner = 11,
}

/// One sale lifecycle per asset. The record survives a sell-out so the asset
/// stays queryable and cannot be relisted; redemption removes it.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Listing {
    pub asset_id: u64,
    pub seller: Address,
    pub price_per_share: i128,
    pub shares_for_sale: u32,
    pub shares_remaining: u32,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(u64),   // Active or sold-out listing per asset ID
    InCustody(u64), // Set while the asset is held by this contract
}

// A whole asset is always 100 shares; unsold shares stay unminted.
pub const TOTAL_SHARES: u32 = 100;

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const COLLECTION_CONTRACT: Symbol = symbol_short!("COL_CA");
pub const SHARE_TOKEN_CONTRACT: Symbol = symbol_short!("SHR_CA");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
pub const LISTING_FEE: Symbol = symbol_short!("LIST_FEE");
