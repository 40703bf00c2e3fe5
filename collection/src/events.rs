use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum CollectionEvent {
    Initialized,
    Mint(u64, Address),
    Approval(u64, Address, Address),
    Transfer(u64, Address, Address),
}

impl CollectionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CollectionEvent::Initialized => stringify!(Initialized),
            CollectionEvent::Mint(..) => stringify!(Mint),
            CollectionEvent::Approval(..) => stringify!(Approval),
            CollectionEvent::Transfer(..) => stringify!(Transfer),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            CollectionEvent::Initialized => {}
            CollectionEvent::Mint(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            CollectionEvent::Approval(token_id, owner, operator) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
            }
            CollectionEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
