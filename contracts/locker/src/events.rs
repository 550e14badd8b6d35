//! Locker events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when locker is initialized
pub fn emit_initialized(env: &Env, owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "LockerInit"),),
        (owner.clone(),),
    );
}

/// Emitted when a factory is authorized
pub fn emit_factory_set(env: &Env, factory: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactorySet"),),
        (factory.clone(),),
    );
}

/// Emitted when a factory is removed
pub fn emit_factory_removed(env: &Env, factory: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactoryRemoved"),),
        (factory.clone(),),
    );
}

/// Emitted when a factory grants lock-registration rights to an auction
pub fn emit_registrar_added(env: &Env, factory: &Address, registrar: &Address) {
    env.events().publish(
        (Symbol::new(env, "RegistrarAdded"),),
        (factory.clone(), registrar.clone()),
    );
}

/// Emitted when a lock entry is created
pub fn emit_lock_registered(
    env: &Env,
    sale_token: &Address,
    auction_owner: &Address,
    amount: i128,
    unlock_at: u64,
) {
    env.events().publish(
        (Symbol::new(env, "LockRegistered"),),
        (sale_token.clone(), auction_owner.clone(), amount, unlock_at),
    );
}

/// Emitted when receipt tokens are withdrawn after unlock
pub fn emit_withdraw(env: &Env, sale_token: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "LockWithdraw"),),
        (sale_token.clone(), to.clone(), amount),
    );
}

/// Emitted when receipt tokens are voluntarily destroyed
pub fn emit_burn(env: &Env, sale_token: &Address, by: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "LockBurn"),),
        (sale_token.clone(), by.clone(), amount),
    );
}
