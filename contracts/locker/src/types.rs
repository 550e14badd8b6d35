//! Locker type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// LOCKER CONFIG
// ============================================================

/// Locker configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct LockerConfig {
    pub owner: Address,
}

// ============================================================
// LOCK ENTRY
// ============================================================

/// Escrowed LP receipt for one auction, keyed by sale token.
///
/// `amount` only ever decreases (withdraw / burn) once registered.
/// `unlock_at` gates withdrawal; burning is allowed at any time.
#[contracttype]
#[derive(Clone, Debug)]
pub struct LockEntry {
    /// Token that was sold through the auction
    pub sale_token: Address,
    /// Base asset the pool was paired against
    pub base_asset: Address,
    /// Exchange pair contract
    pub pool_token: Address,
    /// Auction beneficiary, the only address allowed to withdraw/burn
    pub auction_owner: Address,
    /// Auction contract that registered this entry
    pub auction: Address,
    /// LP receipt token held in custody
    pub pool_receipt: Address,
    /// Custodied receipt amount
    pub amount: i128,
    /// Timestamp after which withdrawal is allowed
    pub unlock_at: u64,
}
