use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum SplitterEvent {
    Initialized(Address, Address, Address),
    Upgraded(u32),
    Listed(u64, Address, i128, u32),
    FractionSold(u64, Address, u32, i128),
    Redeemed(u64, Address, Address),
    AdminChanged(Address, Address),
}

impl SplitterEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SplitterEvent::Initialized(..) => stringify!(Initialized),
            SplitterEvent::Upgraded(..) => stringify!(Upgraded),
            SplitterEvent::Listed(..) => stringify!(Listed),
            SplitterEvent::FractionSold(..) => stringify!(FractionSold),
            SplitterEvent::Redeemed(..) => stringify!(Redeemed),
            SplitterEvent::AdminChanged(..) => stringify!(AdminChanged),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            SplitterEvent::Initialized(collection_contract, share_token_contract, payment_token) => {
                v.push_back(collection_contract.into_val(env));
                v.push_back(share_token_contract.into_val(env));
                v.push_back(payment_token.into_val(env));
            }
            SplitterEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            SplitterEvent::Listed(asset_id, seller, price_per_share, shares_for_sale) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(price_per_share.into_val(env));
                v.push_back(shares_for_sale.into_val(env));
            }
            SplitterEvent::FractionSold(asset_id, buyer, quantity, amount) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(quantity.into_val(env));
                v.push_back(amount.into_val(env));
            }
            SplitterEvent::Redeemed(asset_id, redeemer, recipient) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(redeemer.into_val(env));
                v.push_back(recipient.into_val(env));
            }
            SplitterEvent::AdminChanged(previous, next) => {
                v.push_back(previous.into_val(env));
                v.push_back(next.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
