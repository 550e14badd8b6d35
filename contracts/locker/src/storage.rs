// Locker storage module

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{LockEntry, LockerConfig};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum LockerDataKey {
    /// Locker configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Authorized factory flag by address
    Factory(Address),
    /// Factory-granted registrar flag by address
    Registrar(Address),
    /// Lock entry by sale token
    Lock(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &LockerDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&LockerDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&LockerDataKey::Initialized, &true);
    extend_ttl(env, &LockerDataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &LockerConfig) {
    env.storage().persistent().set(&LockerDataKey::Config, config);
    extend_ttl(env, &LockerDataKey::Config);
}

pub fn read_config(env: &Env) -> LockerConfig {
    env.storage()
        .persistent()
        .get(&LockerDataKey::Config)
        .expect("locker not initialized")
}

// ============================================================
// FACTORY SET
// ============================================================

pub fn write_factory(env: &Env, factory: &Address, allowed: bool) {
    let key = LockerDataKey::Factory(factory.clone());
    if allowed {
        env.storage().persistent().set(&key, &true);
        extend_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn is_factory(env: &Env, factory: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&LockerDataKey::Factory(factory.clone()))
}

// ============================================================
// REGISTRARS
// ============================================================

pub fn write_registrar(env: &Env, registrar: &Address) {
    let key = LockerDataKey::Registrar(registrar.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
}

pub fn is_registrar(env: &Env, registrar: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&LockerDataKey::Registrar(registrar.clone()))
}

// ============================================================
// LOCK ENTRIES
// ============================================================

pub fn write_lock(env: &Env, sale_token: &Address, entry: &LockEntry) {
    let key = LockerDataKey::Lock(sale_token.clone());
    env.storage().persistent().set(&key, entry);
    extend_ttl(env, &key);
}

pub fn read_lock(env: &Env, sale_token: &Address) -> Option<LockEntry> {
    env.storage()
        .persistent()
        .get(&LockerDataKey::Lock(sale_token.clone()))
}

pub fn lock_exists(env: &Env, sale_token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&LockerDataKey::Lock(sale_token.clone()))
}
