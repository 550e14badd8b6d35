//! Auction events
//!
//! Every state transition publishes a structured event for off-chain
//! indexers; nothing in the core logic consumes these.

use soroban_sdk::{Address, Env, Symbol};

use crate::types::CaseKind;

/// Emitted when the auction is initialized
pub fn emit_initialized(env: &Env, owner: &Address, sale_token: &Address, open_until: u64) {
    env.events().publish(
        (Symbol::new(env, "AuctionInit"),),
        (owner.clone(), sale_token.clone(), open_until),
    );
}

/// Emitted when the owner deposits sale inventory
pub fn emit_deposit(env: &Env, owner: &Address, total: i128) {
    env.events().publish(
        (Symbol::new(env, "Deposit"),),
        (owner.clone(), total),
    );
}

/// Emitted on every successful purchase
pub fn emit_purchase(env: &Env, buyer: &Address, amount: i128, tokens_out: i128) {
    env.events().publish(
        (Symbol::new(env, "Purchase"),),
        (buyer.clone(), amount, tokens_out),
    );
}

/// Emitted when purchase bounds change
pub fn emit_bounds_updated(env: &Env, min: i128, max: i128) {
    env.events().publish(
        (Symbol::new(env, "BoundsUpdated"),),
        (min, max),
    );
}

/// Emitted when an address is whitelisted
pub fn emit_whitelisted(env: &Env, addr: &Address) {
    env.events().publish(
        (Symbol::new(env, "Whitelisted"),),
        (addr.clone(),),
    );
}

/// Emitted at market launch
pub fn emit_exchange_launched(
    env: &Env,
    caller: &Address,
    liquidity_tokens: i128,
    liquidity_base: i128,
    receipt_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Launched"),),
        (caller.clone(), liquidity_tokens, liquidity_base, receipt_amount),
    );
}

/// Emitted when a dispute case is created
pub fn emit_case_created(env: &Env, index: u32, kind: CaseKind, creator: &Address, weight: i128) {
    env.events().publish(
        (Symbol::new(env, "CaseCreated"),),
        (index, kind as u32, creator.clone(), weight),
    );
}

/// Emitted when a case receives a vote
pub fn emit_case_upvoted(env: &Env, index: u32, voter: &Address, weight: i128) {
    env.events().publish(
        (Symbol::new(env, "CaseUpvoted"),),
        (index, voter.clone(), weight),
    );
}

/// Emitted when a case reaches quorum
pub fn emit_case_passed(env: &Env, index: u32, weight: i128) {
    env.events().publish(
        (Symbol::new(env, "CasePassed"),),
        (index, weight),
    );
}

/// Emitted when the release schedule is halted by a passed case
pub fn emit_release_stopped(env: &Env, index: u32, pool: i128) {
    env.events().publish(
        (Symbol::new(env, "ReleaseStop"),),
        (index, pool),
    );
}

/// Emitted when a tranche is released to the owner
pub fn emit_tranche_released(env: &Env, tranche: u32, amount: i128, next_eligible: u64) {
    env.events().publish(
        (Symbol::new(env, "Tranche"),),
        (tranche, amount, next_eligible),
    );
}

/// Emitted when a buyer reclaims their contribution
pub fn emit_refund(env: &Env, buyer: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Refund"),),
        (buyer.clone(), amount),
    );
}

/// Emitted when unsold inventory returns to the owner
pub fn emit_unsold_withdrawn(env: &Env, owner: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Unsold"),),
        (owner.clone(), amount),
    );
}
