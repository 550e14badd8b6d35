//! Factory events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when factory is initialized
pub fn emit_initialized(env: &Env, owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (owner.clone(),),
    );
}

/// Emitted when a new auction is created
pub fn emit_auction_created(
    env: &Env,
    auction: &Address,
    sale_token: &Address,
    owner: &Address,
    rate: i128,
) {
    env.events().publish(
        (Symbol::new(env, "AuctionNew"),),
        (auction.clone(), sale_token.clone(), owner.clone(), rate),
    );
}

/// Emitted when the locker address is set
pub fn emit_locker_set(env: &Env, locker: &Address) {
    env.events().publish(
        (Symbol::new(env, "LockerSet"),),
        (locker.clone(),),
    );
}

/// Emitted when the fee recipient changes
pub fn emit_fee_recipient_changed(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "FeesTo"),),
        (old.clone(), new.clone()),
    );
}

/// Emitted when factory ownership transfers
pub fn emit_owner_changed(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnerChanged"),),
        (old.clone(), new.clone()),
    );
}
