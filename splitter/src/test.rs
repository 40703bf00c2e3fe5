#![cfg(test)]
extern crate std;

use super::*;
use collection::CollectionContract;
use common::collection::interface::CollectionClient;
use common::share_token::interface::ShareTokenClient;
use share_token::contract::ShareTokenContract;
use soroban_sdk::testutils::{Address as _, StellarAssetContract};
use soroban_sdk::{token, Address, String};

// 0.5 per share, 0.005 listing fee, in 7-decimal units
pub const PRICE_PER_SHARE: i128 = 5_000_000;
pub const LISTING_FEE: i128 = 50_000;
pub const SHARES_FOR_SALE: u32 = 40;

fn create_splitter_contract<'a>(env: &Env) -> SplitterContractClient<'a> {
    let contract_id = env.register(SplitterContract, ());
    let contract_client = SplitterContractClient::new(&env, &contract_id);
    contract_client
}

fn create_collection_contract<'a>(env: &Env) -> CollectionClient<'a> {
    let contract_id: Address = env.register(CollectionContract, ());
    let contract_client: CollectionClient<'a> = CollectionClient::new(&env, &contract_id);
    contract_client
}

fn create_share_token_contract<'a>(env: &Env) -> ShareTokenClient<'a> {
    let contract_id: Address = env.register(ShareTokenContract, ());
    let contract_client: ShareTokenClient<'a> = ShareTokenClient::new(env, &contract_id);
    contract_client
}

fn create_payment_token<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac: StellarAssetContract = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

pub struct SplitterTest {
    env: Env,
    splitter_client: SplitterContractClient<'static>,
    collection_client: CollectionClient<'static>,
    share_client: ShareTokenClient<'static>,
    token_client: token::Client<'static>,
    alice: Address,
    bob: Address,
    admin: Address,
    asset_id: u64,
}

impl SplitterTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let splitter_client = create_splitter_contract(&env);
        let collection_client = create_collection_contract(&env);
        let share_client = create_share_token_contract(&env);

        // Generate the accounts (users)
        let alice: Address = Address::generate(&env);
        let bob: Address = Address::generate(&env);
        let admin: Address = Address::generate(&env);

        assert_ne!(alice, bob);
        assert_ne!(alice, admin);
        assert_ne!(bob, admin);

        let (token_client, token_admin_client) = create_payment_token(&env, &admin);
        token_admin_client.mint(&alice, &10_000_0000000_i128);
        token_admin_client.mint(&bob, &10_000_0000000_i128);

        splitter_client.initialize(
            &admin,
            &collection_client.address,
            &share_client.address,
            &token_client.address,
            &LISTING_FEE,
        );
        collection_client.initialize(&admin);
        share_client.initialize(&admin);
        // The splitter mints and burns shares from here on
        share_client.set_admin(&splitter_client.address);

        // Alice owns the asset and has approved the splitter to pull it
        let uri = String::from_str(
            &env,
            "ipfs://QmeSjSinHpPnmXmspMjwiXyN6zS4E9zccariGR3jxcaWtq/7440",
        );
        let asset_id: u64 = collection_client.mint(&alice, &uri);
        collection_client.approve(&alice, &splitter_client.address, &asset_id);

        SplitterTest {
            env,
            splitter_client,
            collection_client,
            share_client,
            token_client,
            alice,
            bob,
            admin,
            asset_id,
        }
    }

    // List the asset offering 40 of 100 shares at the default price and fee
    fn list_default(&self) {
        self.splitter_client.list_nft(
            &self.alice,
            &self.asset_id,
            &PRICE_PER_SHARE,
            &SHARES_FOR_SALE,
            &LISTING_FEE,
        );
    }

    fn assert_supply_matches_balances(&self) {
        let issued = self.share_client.total_supply(&self.asset_id);
        let mut sum: u32 = 0;
        if let Some(holders) = self.share_client.get_all_holders(&self.asset_id) {
            for (_, held) in holders.iter() {
                sum += held;
            }
        }
        assert_eq!(sum, issued, "holder balances must sum to issued supply");
    }
}

mod admin;
mod withdraw_nft;
