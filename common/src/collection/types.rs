use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CollectionError {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    NotTokenOwner = 3,
    NotApproved = 4,
}

#[derive(Clone)]
#[contracttype]
pub enum CollectionDataKey {
    TokenOwner(u64),    // Current owner of each token ID
    TokenUri(u64),      // Metadata URI for each token ID
    Approved(u64),      // Operator approved to move the token, if any
    Balance(Address),   // Tokens held per address
    NextTokenId,        // Sequential mint counter
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
