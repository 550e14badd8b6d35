//! Factory type definitions

use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    pub owner: Address,
    /// Receives the dev fee of every auction at launch
    pub fee_recipient: Address,
    /// Locker escrowing LP receipts; must be set before auctions deploy
    pub locker: Option<Address>,
    pub auction_wasm_hash: BytesN<32>,
}

// ============================================================
// CREATE AUCTION PARAMS
// ============================================================

/// Parameters for creating a new auction
/// Bundled into struct to stay within the host param limit
#[contracttype]
#[derive(Clone, Debug)]
pub struct CreateAuctionParams {
    /// Exchange pair factory
    pub exchange_factory: Address,
    /// Exchange router
    pub exchange_router: Address,
    /// Base asset contributions are denominated in
    pub base_asset: Address,
    /// Sale window length in seconds
    pub sales_period: u64,
    /// Token being sold
    pub sale_token: Address,
    /// Sale tokens per base-asset unit, 7-decimal fixed point
    pub rate: i128,
    /// Percent of the raise diverted to the fee recipient
    pub dev_fee_percent: u32,
    /// LP receipt lock duration in seconds
    pub lock_period: u64,
    /// Restrict purchases to whitelisted addresses
    pub whitelist_enabled: bool,
}
