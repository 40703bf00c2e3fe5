use soroban_sdk::{contracterror, contracttype, symbol_short, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ShareTokenError {
    AlreadyInitialized = 1,
    NotAdmin = 2,
    InsufficientShares = 3,
    ZeroAmount = 4,
}

#[derive(Clone)]
#[contracttype]
pub enum ShareTokenDataKey {
    Ownership(u64), // Map of holders to their share amounts per asset ID
    Issued(u64),    // Shares currently in existence per asset ID
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
