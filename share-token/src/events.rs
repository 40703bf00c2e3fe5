use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum ShareTokenEvent {
    Initialized,
    AdminChanged(Address, Address),
    Mint(u64, Address, u32),
    Burn(u64, Address, u32),
    TransferShares(u64, Address, Address, u32),
}

impl ShareTokenEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ShareTokenEvent::Initialized => stringify!(Initialized),
            ShareTokenEvent::AdminChanged(..) => stringify!(AdminChanged),
            ShareTokenEvent::Mint(..) => stringify!(Mint),
            ShareTokenEvent::Burn(..) => stringify!(Burn),
            ShareTokenEvent::TransferShares(..) => stringify!(TransferShares),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            ShareTokenEvent::Initialized => {}
            ShareTokenEvent::AdminChanged(previous, next) => {
                v.push_back(previous.into_val(env));
                v.push_back(next.into_val(env));
            }
            ShareTokenEvent::Mint(asset_id, to, amount) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(amount.into_val(env));
            }
            ShareTokenEvent::Burn(asset_id, from, amount) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(amount.into_val(env));
            }
            ShareTokenEvent::TransferShares(asset_id, from, to, amount) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
