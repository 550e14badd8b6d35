#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, testutils::Ledger, token, Address, Env};

use delfy_locker::{DelfyLocker, DelfyLockerClient};

pub const LOCK_PERIOD: u64 = 10_368_000; // 120 days
pub const RECEIPT_AMOUNT: i128 = 500_000_000;

pub struct LockerTest<'a> {
    pub env: Env,
    pub locker: DelfyLockerClient<'a>,
    pub owner: Address,
    pub factory: Address,
    pub auction_owner: Address,
    pub sale_token: Address,
    pub base_asset: Address,
    pub pool_token: Address,
    pub receipt: Address,
}

/// Setup an initialized locker with one registered factory. The receipt
/// token already sits on the locker's balance, as it would after an
/// exchange launch.
pub fn setup_locker(env: &Env) -> LockerTest<'_> {
    let owner = Address::generate(env);
    let factory = Address::generate(env);
    let auction_owner = Address::generate(env);

    let sale_token = create_token(env, &owner);
    let base_asset = create_token(env, &owner);
    let pool_token = Address::generate(env);
    let receipt = create_token(env, &owner);

    let locker_id = env.register(DelfyLocker, ());
    let locker = DelfyLockerClient::new(env, &locker_id);
    locker.initialize(&owner);
    locker.set_factory(&factory);

    mint_tokens(env, &receipt, &locker_id, RECEIPT_AMOUNT);

    LockerTest {
        env: env.clone(),
        locker,
        owner,
        factory,
        auction_owner,
        sale_token,
        base_asset,
        pool_token,
        receipt,
    }
}

/// Register the default lock entry as the factory
pub fn register_default_lock(t: &LockerTest) {
    t.locker.register_lock(
        &t.factory,
        &t.sale_token,
        &t.base_asset,
        &t.pool_token,
        &t.auction_owner,
        &t.receipt,
        &RECEIPT_AMOUNT,
        &LOCK_PERIOD,
        &false,
    );
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    let client = token::StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn token_balance(env: &Env, token: &Address, who: &Address) -> i128 {
    token::Client::new(env, token).balance(who)
}

pub fn advance_time(env: &Env, by: u64) {
    env.ledger().with_mut(|l| l.timestamp += by);
}
