#![no_std]

//! # Delfy Locker
//!
//! Escrow for the LP receipt tokens minted when an auction converts to a
//! tradable market.
//!
//! ## Responsibilities:
//! 1. Custody LP receipts, one entry per sale token
//! 2. Time-gated withdrawal by the auction owner
//! 3. Voluntary early burn (rug-proofing signal)
//! 4. Capability checks: only registered factories (and the auctions they
//!    grant) may register locks

use soroban_sdk::{contract, contractimpl, token, Address, Env};

mod error;
mod events;
mod storage;
mod types;

pub use error::LockerError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct DelfyLocker;

#[contractimpl]
impl DelfyLocker {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize locker with its owner
    pub fn initialize(env: Env, owner: Address) -> Result<(), LockerError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(LockerError::AlreadyInitialized);
        }

        write_config(&env, &LockerConfig { owner: owner.clone() });
        set_initialized(&env);

        emit_initialized(&env, &owner);

        Ok(())
    }

    // ========================================================
    // FACTORY MANAGEMENT
    // ========================================================

    /// Authorize a factory to register locks
    pub fn set_factory(env: Env, factory: Address) -> Result<(), LockerError> {
        let config = read_config(&env);
        config.owner.require_auth();

        write_factory(&env, &factory, true);
        emit_factory_set(&env, &factory);

        Ok(())
    }

    /// Revoke a factory
    pub fn remove_factory(env: Env, factory: Address) -> Result<(), LockerError> {
        let config = read_config(&env);
        config.owner.require_auth();

        write_factory(&env, &factory, false);
        emit_factory_removed(&env, &factory);

        Ok(())
    }

    /// Grant lock-registration rights to an auction contract.
    ///
    /// Called by a registered factory when it mints a new auction, so the
    /// auction can register its own lock entry at exchange launch without the
    /// locker holding any ownership edge back to it.
    pub fn add_registrar(
        env: Env,
        factory: Address,
        registrar: Address,
    ) -> Result<(), LockerError> {
        factory.require_auth();

        if !is_factory(&env, &factory) {
            return Err(LockerError::NotFactory);
        }

        write_registrar(&env, &registrar);
        emit_registrar_added(&env, &factory, &registrar);

        Ok(())
    }

    // ========================================================
    // LOCK LIFECYCLE
    // ========================================================

    /// Register a lock entry for the LP receipt of a launched auction.
    ///
    /// The receipt tokens themselves must already sit on the locker's balance
    /// (the exchange mints them to the locker as the liquidity recipient).
    ///
    /// # Arguments
    /// * `registrar` - The calling factory or factory-granted auction
    /// * `burn_on_register` - Destroy the receipt immediately (permanent lock)
    #[allow(clippy::too_many_arguments)]
    pub fn register_lock(
        env: Env,
        registrar: Address,
        sale_token: Address,
        base_asset: Address,
        pool_token: Address,
        auction_owner: Address,
        pool_receipt: Address,
        amount: i128,
        lock_period: u64,
        burn_on_register: bool,
    ) -> Result<(), LockerError> {
        registrar.require_auth();

        if !is_factory(&env, &registrar) && !is_registrar(&env, &registrar) {
            return Err(LockerError::NotFactory);
        }

        if amount <= 0 {
            return Err(LockerError::InvalidAmount);
        }

        if lock_exists(&env, &sale_token) {
            return Err(LockerError::LockExists);
        }

        let unlock_at = env.ledger().timestamp().saturating_add(lock_period);

        let mut entry = LockEntry {
            sale_token: sale_token.clone(),
            base_asset,
            pool_token,
            auction_owner: auction_owner.clone(),
            auction: registrar,
            pool_receipt: pool_receipt.clone(),
            amount,
            unlock_at,
        };

        if burn_on_register {
            token::Client::new(&env, &pool_receipt)
                .burn(&env.current_contract_address(), &amount);
            entry.amount = 0;
        }

        write_lock(&env, &sale_token, &entry);
        emit_lock_registered(&env, &sale_token, &auction_owner, entry.amount, unlock_at);

        Ok(())
    }

    /// Withdraw custodied receipt tokens after the lock period
    pub fn withdraw(
        env: Env,
        sale_token: Address,
        amount: i128,
    ) -> Result<i128, LockerError> {
        let mut entry = read_lock(&env, &sale_token).ok_or(LockerError::LockNotFound)?;
        entry.auction_owner.require_auth();

        if env.ledger().timestamp() < entry.unlock_at {
            return Err(LockerError::LockActive);
        }

        if amount <= 0 {
            return Err(LockerError::InvalidAmount);
        }

        if amount > entry.amount {
            return Err(LockerError::InsufficientBalance);
        }

        token::Client::new(&env, &entry.pool_receipt).transfer(
            &env.current_contract_address(),
            &entry.auction_owner,
            &amount,
        );

        entry.amount -= amount;
        write_lock(&env, &sale_token, &entry);

        emit_withdraw(&env, &sale_token, &entry.auction_owner, amount);

        Ok(entry.amount)
    }

    /// Permanently destroy custodied receipt tokens. Allowed at any time,
    /// lock period notwithstanding.
    pub fn burn(env: Env, sale_token: Address, amount: i128) -> Result<i128, LockerError> {
        let mut entry = read_lock(&env, &sale_token).ok_or(LockerError::LockNotFound)?;
        entry.auction_owner.require_auth();

        if amount <= 0 {
            return Err(LockerError::InvalidAmount);
        }

        if amount > entry.amount {
            return Err(LockerError::InsufficientBalance);
        }

        token::Client::new(&env, &entry.pool_receipt)
            .burn(&env.current_contract_address(), &amount);

        entry.amount -= amount;
        write_lock(&env, &sale_token, &entry);

        emit_burn(&env, &sale_token, &entry.auction_owner, amount);

        Ok(entry.amount)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Get the lock entry for a sale token
    pub fn get_lock(env: Env, sale_token: Address) -> Option<LockEntry> {
        read_lock(&env, &sale_token)
    }

    /// Get the custodied receipt amount for a sale token
    pub fn get_lp_amount(env: Env, sale_token: Address) -> i128 {
        read_lock(&env, &sale_token).map(|e| e.amount).unwrap_or(0)
    }

    /// Check whether an address is a registered factory
    pub fn is_factory_registered(env: Env, factory: Address) -> bool {
        is_factory(&env, &factory)
    }
}
