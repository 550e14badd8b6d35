#![no_std]

//! # Delfy Auction Factory
//!
//! Mints one auction per sale token.
//!
//! ## Responsibilities:
//! 1. Create auctions (atomic: deploy + init + locker registrar grant)
//! 2. Duplicate prevention per sale token
//! 3. Global admin settings (owner, fee recipient, locker)

use soroban_sdk::{
    contract, contractimpl, contracttype, vec, Address, BytesN, Env, IntoVal, Symbol, Vec,
    xdr::ToXdr,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

/// Minimum LP receipt lock duration: 7 days
const MIN_LOCK_PERIOD: u64 = 604_800;

/// Maximum dev fee in percent
const MAX_DEV_FEE_PERCENT: u32 = 30;

// ============================================================
// CROSS-CONTRACT ARG MIRRORS
// ============================================================
// Structurally identical to the auction contract's init types; contracttype
// structs encode by field name, so no crate dependency is needed.

#[contracttype]
#[derive(Clone)]
struct ExchangeRefs {
    pub factory: Address,
    pub router: Address,
    pub base_asset: Address,
}

#[contracttype]
#[derive(Clone)]
struct InitAuctionParams {
    pub owner: Address,
    pub sale_token: Address,
    pub exchange: ExchangeRefs,
    pub fee_recipient: Address,
    pub locker: Address,
    pub sales_period: u64,
    pub rate: i128,
    pub dev_fee_percent: u32,
    pub lock_period: u64,
    pub whitelist_enabled: bool,
}

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct AuctionFactory;

#[contractimpl]
impl AuctionFactory {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize factory. The fee recipient defaults to the owner.
    pub fn initialize(
        env: Env,
        owner: Address,
        auction_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        let config = FactoryConfig {
            owner: owner.clone(),
            fee_recipient: owner.clone(),
            locker: None,
            auction_wasm_hash,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &owner);

        Ok(())
    }

    // ========================================================
    // AUCTION CREATION
    // ========================================================

    /// Create an auction for a sale token (atomic: deploy + init + locker
    /// registrar grant). One auction per token, ever.
    pub fn create_auction(
        env: Env,
        creator: Address,
        params: CreateAuctionParams,
    ) -> Result<Address, FactoryError> {
        creator.require_auth();

        if !is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }

        let config = read_config(&env);
        let locker = config.locker.clone().ok_or(FactoryError::LockerNotSet)?;

        if auction_exists(&env, &params.sale_token) {
            return Err(FactoryError::AuctionExists);
        }
        if params.rate <= 0 {
            return Err(FactoryError::InvalidRate);
        }
        if params.sales_period == 0 {
            return Err(FactoryError::InvalidSalesPeriod);
        }
        if params.dev_fee_percent > MAX_DEV_FEE_PERCENT {
            return Err(FactoryError::InvalidDevFee);
        }
        if params.lock_period < MIN_LOCK_PERIOD {
            return Err(FactoryError::LockPeriodTooShort);
        }

        // === DEPLOY AUCTION ===
        let auction = Self::deploy_auction(&env, &config, &params.sale_token);

        // === INITIALIZE AUCTION ===
        let init = InitAuctionParams {
            owner: creator.clone(),
            sale_token: params.sale_token.clone(),
            exchange: ExchangeRefs {
                factory: params.exchange_factory.clone(),
                router: params.exchange_router.clone(),
                base_asset: params.base_asset.clone(),
            },
            fee_recipient: config.fee_recipient.clone(),
            locker: locker.clone(),
            sales_period: params.sales_period,
            rate: params.rate,
            dev_fee_percent: params.dev_fee_percent,
            lock_period: params.lock_period,
            whitelist_enabled: params.whitelist_enabled,
        };
        let _: () = env.invoke_contract(
            &auction,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                init.into_val(&env),
            ],
        );

        // === GRANT LOCKER REGISTRAR ===
        let _: () = env.invoke_contract(
            &locker,
            &Symbol::new(&env, "add_registrar"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                auction.clone().into_val(&env),
            ],
        );

        // === REGISTER ===
        register_auction(&env, &params.sale_token, &auction);

        emit_auction_created(&env, &auction, &params.sale_token, &creator, params.rate);

        Ok(auction)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Get auction address for a sale token
    pub fn get_auction(env: Env, sale_token: Address) -> Option<Address> {
        read_auction(&env, &sale_token)
    }

    /// Check if an auction exists for a sale token
    pub fn has_auction(env: Env, sale_token: Address) -> bool {
        auction_exists(&env, &sale_token)
    }

    /// Get all deployed auction addresses
    pub fn get_all_auctions(env: Env) -> Vec<Address> {
        read_auction_list(&env)
    }

    /// Get total number of deployed auctions
    pub fn get_total_auctions(env: Env) -> u32 {
        read_auction_count(&env)
    }

    /// Get factory configuration
    pub fn get_config(env: Env) -> FactoryConfig {
        read_config(&env)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Set the locker auctions register their LP receipts with
    pub fn set_locker(env: Env, locker: Address) -> Result<(), FactoryError> {
        let mut config = read_config(&env);
        config.owner.require_auth();

        config.locker = Some(locker.clone());
        write_config(&env, &config);

        emit_locker_set(&env, &locker);
        Ok(())
    }

    /// Change the dev-fee recipient for future auctions
    pub fn change_fee_recipient(env: Env, new_recipient: Address) -> Result<(), FactoryError> {
        let mut config = read_config(&env);
        config.owner.require_auth();

        emit_fee_recipient_changed(&env, &config.fee_recipient, &new_recipient);

        config.fee_recipient = new_recipient;
        write_config(&env, &config);
        Ok(())
    }

    /// Transfer factory ownership. Both old and new owner must authorize.
    pub fn change_owner(env: Env, new_owner: Address) -> Result<(), FactoryError> {
        let mut config = read_config(&env);
        config.owner.require_auth();
        new_owner.require_auth();

        emit_owner_changed(&env, &config.owner, &new_owner);

        config.owner = new_owner;
        write_config(&env, &config);
        Ok(())
    }

    /// Update auction WASM hash for future deployments
    pub fn set_auction_wasm_hash(env: Env, new_hash: BytesN<32>) -> Result<(), FactoryError> {
        let mut config = read_config(&env);
        config.owner.require_auth();
        config.auction_wasm_hash = new_hash;
        write_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn deploy_auction(env: &Env, config: &FactoryConfig, sale_token: &Address) -> Address {
        // Deterministic salt; also enforces one auction per token at the
        // host level
        let salt_data = sale_token.clone().to_xdr(env);
        let salt = env.crypto().sha256(&salt_data);

        env.deployer()
            .with_current_contract(salt.to_bytes())
            .deploy_v2(config.auction_wasm_hash.clone(), ())
    }
}
