//! Auction type definitions

use soroban_sdk::{contracttype, Address, String};

// ============================================================
// EXCHANGE REFS
// ============================================================

/// External exchange collaborator used to convert the sale to a market
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExchangeRefs {
    /// Exchange pair factory (resolves the pool/receipt address)
    pub factory: Address,
    /// Exchange router (performs the liquidity add)
    pub router: Address,
    /// Base asset contributions are denominated in
    pub base_asset: Address,
}

// ============================================================
// INIT PARAMS
// ============================================================

/// Parameters for initializing a new auction
/// Bundled into struct to stay within the host param limit
#[contracttype]
#[derive(Clone, Debug)]
pub struct InitAuctionParams {
    /// Project owner: receives released tranches and unsold inventory
    pub owner: Address,
    /// Token being sold
    pub sale_token: Address,
    /// Exchange collaborator references
    pub exchange: ExchangeRefs,
    /// Recipient of the dev fee at launch
    pub fee_recipient: Address,
    /// Locker escrowing the LP receipt
    pub locker: Address,
    /// Sale window length in seconds from initialization
    pub sales_period: u64,
    /// Sale tokens per base-asset unit, scaled by RATE_SCALE
    pub rate: i128,
    /// Percent of the raise diverted to the fee recipient at launch
    pub dev_fee_percent: u32,
    /// Lock duration for the LP receipt in seconds
    pub lock_period: u64,
    /// Restrict purchases to whitelisted addresses
    pub whitelist_enabled: bool,
}

// ============================================================
// AUCTION CONFIG
// ============================================================

/// Immutable auction configuration, written once at initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct AuctionConfig {
    pub owner: Address,
    pub sale_token: Address,
    pub exchange: ExchangeRefs,
    pub fee_recipient: Address,
    pub locker: Address,
    /// Purchases accepted while now < open_until
    pub open_until: u64,
    pub rate: i128,
    pub dev_fee_percent: u32,
    pub lock_period: u64,
}

// ============================================================
// INVENTORY
// ============================================================

/// Sale-token allocations deposited by the owner.
///
/// sale + liquidity + bonus + reserved equals the total deposit; `sale`
/// decreases with purchases, `liquidity` leaves at launch, `sale` remainder
/// and `reserved` return to the owner post-launch.
#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    pub sale: i128,
    pub liquidity: i128,
    pub bonus: i128,
    pub reserved: i128,
}

// ============================================================
// SALE STATE
// ============================================================

/// Mutable lifecycle state
#[contracttype]
#[derive(Clone, Debug)]
pub struct SaleState {
    /// Inventory deposit completed (exactly once)
    pub deposited: bool,
    /// Only whitelisted addresses may purchase
    pub whitelist_enabled: bool,
    /// Total base asset contributed by all investors
    pub total_raised: i128,
    /// Total sale tokens transferred to buyers; quorum/holding base
    pub tokens_sold: i128,
    /// Monotonic false -> true
    pub exchange_launched: bool,
    pub launched_at: u64,
    /// Latched true when a case passes while tranches remain
    pub release_stopped: bool,
}

// ============================================================
// PURCHASE BOUNDS
// ============================================================

/// Per-transaction and per-address purchase caps in base asset
#[contracttype]
#[derive(Clone, Debug)]
pub struct PurchaseBounds {
    pub min: i128,
    pub max: i128,
}

// ============================================================
// RELEASE SCHEDULE
// ============================================================

/// Staged release of the custodied base asset to the owner
#[contracttype]
#[derive(Clone, Debug)]
pub struct ReleaseSchedule {
    pub tranches_released: u32,
    pub total_tranches: u32,
    pub next_eligible_time: u64,
    /// Size of each tranche; the last tranche sweeps the remainder
    pub tranche_amount: i128,
    pub custodied_remaining: i128,
}

// ============================================================
// CASES
// ============================================================

/// Window after launch during which disputes may be raised
#[contracttype]
#[derive(Clone, Debug)]
pub struct CaseWindow {
    pub opens_at: u64,
    pub closes_at: u64,
}

/// Dispute kind. The kinds differ in their donation floor; either way the
/// donation accrues to the contract's base balance and so to the refund pool.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CaseKind {
    Refundable = 0,
    NonRefundable = 1,
}

/// A dispute raised by a contributor
#[contracttype]
#[derive(Clone, Debug)]
pub struct Case {
    pub kind: CaseKind,
    pub creator: Address,
    pub description: String,
    /// Accumulated vote weight in sale-token units
    pub weight: i128,
    pub created_at: u64,
    /// Flips at most once, false -> true, at quorum
    pub passed: bool,
}

// ============================================================
// REFUND POOL
// ============================================================

/// Snapshot taken when release is stopped; basis for pro-rata refunds
#[contracttype]
#[derive(Clone, Debug)]
pub struct RefundPool {
    /// Base-asset balance held at the moment release stopped
    pub pool: i128,
    /// Total contributions outstanding at that moment
    pub total: i128,
}

// ============================================================
// PROJECT INFO
// ============================================================

/// Off-chain display metadata set by the owner
#[contracttype]
#[derive(Clone, Debug)]
pub struct ProjectInfo {
    pub logo_link: String,
    pub project_url: String,
}
