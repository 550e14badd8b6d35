#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

use delfy_auction_factory::{AuctionFactory, AuctionFactoryClient, CreateAuctionParams};

pub const DEFAULT_RATE: i128 = 20_000_000; // 2 sale tokens per base unit
pub const DEFAULT_SALES_PERIOD: u64 = 86_400;
pub const DEFAULT_DEV_FEE_PERCENT: u32 = 10;
pub const DEFAULT_LOCK_PERIOD: u64 = 10_368_000; // 120 days

/// Setup an initialized factory. Auction code deployment is exercised
/// end-to-end elsewhere; these suites use a placeholder hash.
pub fn setup_factory(env: &Env) -> (AuctionFactoryClient<'_>, Address) {
    let owner = Address::generate(env);
    let factory_id = env.register(AuctionFactory, ());
    let client = AuctionFactoryClient::new(env, &factory_id);

    client.initialize(&owner, &fake_wasm_hash(env));

    (client, owner)
}

pub fn fake_wasm_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

/// Well-formed creation parameters pointing at generated addresses
pub fn default_params(env: &Env) -> CreateAuctionParams {
    CreateAuctionParams {
        exchange_factory: Address::generate(env),
        exchange_router: Address::generate(env),
        base_asset: Address::generate(env),
        sales_period: DEFAULT_SALES_PERIOD,
        sale_token: Address::generate(env),
        rate: DEFAULT_RATE,
        dev_fee_percent: DEFAULT_DEV_FEE_PERCENT,
        lock_period: DEFAULT_LOCK_PERIOD,
        whitelist_enabled: false,
    }
}
