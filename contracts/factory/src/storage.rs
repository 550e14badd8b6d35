// Factory storage module

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::FactoryConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum FactoryDataKey {
    /// Factory configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Auction address by sale token
    Auction(Address),
    /// All auction addresses
    AuctionList,
    /// Total auction count
    AuctionCount,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &FactoryDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&FactoryDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::Initialized, &true);
    extend_ttl(env, &FactoryDataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&FactoryDataKey::Config, config);
    extend_ttl(env, &FactoryDataKey::Config);
}

pub fn read_config(env: &Env) -> FactoryConfig {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Config)
        .expect("factory not initialized")
}

// ============================================================
// AUCTION REGISTRY
// ============================================================

pub fn auction_exists(env: &Env, sale_token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&FactoryDataKey::Auction(sale_token.clone()))
}

pub fn read_auction(env: &Env, sale_token: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Auction(sale_token.clone()))
}

pub fn register_auction(env: &Env, sale_token: &Address, auction: &Address) {
    let key = FactoryDataKey::Auction(sale_token.clone());
    env.storage().persistent().set(&key, auction);
    extend_ttl(env, &key);

    let mut list = read_auction_list(env);
    list.push_back(auction.clone());
    env.storage()
        .persistent()
        .set(&FactoryDataKey::AuctionList, &list);
    extend_ttl(env, &FactoryDataKey::AuctionList);

    let count = read_auction_count(env) + 1;
    env.storage()
        .persistent()
        .set(&FactoryDataKey::AuctionCount, &count);
    extend_ttl(env, &FactoryDataKey::AuctionCount);
}

pub fn read_auction_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::AuctionList)
        .unwrap_or(Vec::new(env))
}

pub fn read_auction_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::AuctionCount)
        .unwrap_or(0)
}
