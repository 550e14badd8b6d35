// Auction storage module

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{
    AuctionConfig, Case, CaseWindow, Inventory, ProjectInfo, PurchaseBounds, RefundPool,
    ReleaseSchedule, SaleState,
};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum AuctionDataKey {
    /// Auction configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Deposited sale-token allocations
    Inventory,
    /// Mutable lifecycle state
    State,
    /// Purchase bounds
    Bounds,
    /// Tranche schedule, written at launch
    Schedule,
    /// Dispute window, written at launch
    CaseWindow,
    /// Number of cases raised
    CaseCount,
    /// Case by index
    Case(u32),
    /// Vote marker by (case index, voter)
    CaseVote(u32, Address),
    /// Cumulative base-asset contribution by investor
    Contribution(Address),
    /// Refund-completed marker by investor
    Refunded(Address),
    /// Whitelist marker by address
    Whitelisted(Address),
    /// Refund snapshot, written when release stops
    RefundPool,
    /// Off-chain display metadata
    ProjectInfo,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &AuctionDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&AuctionDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&AuctionDataKey::Initialized, &true);
    extend_ttl(env, &AuctionDataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &AuctionConfig) {
    env.storage().persistent().set(&AuctionDataKey::Config, config);
    extend_ttl(env, &AuctionDataKey::Config);
}

pub fn read_config(env: &Env) -> AuctionConfig {
    env.storage()
        .persistent()
        .get(&AuctionDataKey::Config)
        .expect("auction not initialized")
}

// ============================================================
// INVENTORY
// ============================================================

pub fn write_inventory(env: &Env, inventory: &Inventory) {
    env.storage()
        .persistent()
        .set(&AuctionDataKey::Inventory, inventory);
    extend_ttl(env, &AuctionDataKey::Inventory);
}

pub fn read_inventory(env: &Env) -> Inventory {
    env.storage()
        .persistent()
        .get(&AuctionDataKey::Inventory)
        .unwrap_or_default()
}

// ============================================================
// SALE STATE
// ============================================================

pub fn write_state(env: &Env, state: &SaleState) {
    env.storage().persistent().set(&AuctionDataKey::State, state);
    extend_ttl(env, &AuctionDataKey::State);
}

pub fn read_state(env: &Env) -> SaleState {
    env.storage()
        .persistent()
        .get(&AuctionDataKey::State)
        .expect("auction not initialized")
}

// ============================================================
// PURCHASE BOUNDS
// ============================================================

pub fn write_bounds(env: &Env, bounds: &PurchaseBounds) {
    env.storage().persistent().set(&AuctionDataKey::Bounds, bounds);
    extend_ttl(env, &AuctionDataKey::Bounds);
}

pub fn read_bounds(env: &Env) -> PurchaseBounds {
    env.storage()
        .persistent()
        .get(&AuctionDataKey::Bounds)
        .unwrap_or(PurchaseBounds { min: 0, max: i128::MAX })
}

// ============================================================
// RELEASE SCHEDULE
// ============================================================

pub fn write_schedule(env: &Env, schedule: &ReleaseSchedule) {
    env.storage()
        .persistent()
        .set(&AuctionDataKey::Schedule, schedule);
    extend_ttl(env, &AuctionDataKey::Schedule);
}

pub fn read_schedule(env: &Env) -> Option<ReleaseSchedule> {
    env.storage().persistent().get(&AuctionDataKey::Schedule)
}

// ============================================================
// CASE WINDOW
// ============================================================

pub fn write_case_window(env: &Env, window: &CaseWindow) {
    env.storage()
        .persistent()
        .set(&AuctionDataKey::CaseWindow, window);
    extend_ttl(env, &AuctionDataKey::CaseWindow);
}

pub fn read_case_window(env: &Env) -> Option<CaseWindow> {
    env.storage().persistent().get(&AuctionDataKey::CaseWindow)
}

// ============================================================
// CASES
// ============================================================

pub fn read_case_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&AuctionDataKey::CaseCount)
        .unwrap_or(0)
}

pub fn write_case_count(env: &Env, count: u32) {
    env.storage()
        .persistent()
        .set(&AuctionDataKey::CaseCount, &count);
    extend_ttl(env, &AuctionDataKey::CaseCount);
}

pub fn write_case(env: &Env, index: u32, case: &Case) {
    let key = AuctionDataKey::Case(index);
    env.storage().persistent().set(&key, case);
    extend_ttl(env, &key);
}

pub fn read_case(env: &Env, index: u32) -> Option<Case> {
    env.storage().persistent().get(&AuctionDataKey::Case(index))
}

pub fn has_voted(env: &Env, index: u32, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&AuctionDataKey::CaseVote(index, voter.clone()))
}

pub fn write_vote(env: &Env, index: u32, voter: &Address) {
    let key = AuctionDataKey::CaseVote(index, voter.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
}

// ============================================================
// CONTRIBUTIONS
// ============================================================

pub fn read_contribution(env: &Env, investor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&AuctionDataKey::Contribution(investor.clone()))
        .unwrap_or(0)
}

pub fn write_contribution(env: &Env, investor: &Address, amount: i128) {
    let key = AuctionDataKey::Contribution(investor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}

pub fn has_refunded(env: &Env, investor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&AuctionDataKey::Refunded(investor.clone()))
}

pub fn set_refunded(env: &Env, investor: &Address) {
    let key = AuctionDataKey::Refunded(investor.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
}

// ============================================================
// WHITELIST
// ============================================================

pub fn is_whitelisted(env: &Env, addr: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&AuctionDataKey::Whitelisted(addr.clone()))
}

pub fn write_whitelisted(env: &Env, addr: &Address) {
    let key = AuctionDataKey::Whitelisted(addr.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
}

// ============================================================
// REFUND POOL
// ============================================================

pub fn write_refund_pool(env: &Env, pool: &RefundPool) {
    env.storage()
        .persistent()
        .set(&AuctionDataKey::RefundPool, pool);
    extend_ttl(env, &AuctionDataKey::RefundPool);
}

pub fn read_refund_pool(env: &Env) -> Option<RefundPool> {
    env.storage().persistent().get(&AuctionDataKey::RefundPool)
}

// ============================================================
// PROJECT INFO
// ============================================================

pub fn write_project_info(env: &Env, info: &ProjectInfo) {
    env.storage()
        .persistent()
        .set(&AuctionDataKey::ProjectInfo, info);
    extend_ttl(env, &AuctionDataKey::ProjectInfo);
}

pub fn read_project_info(env: &Env) -> Option<ProjectInfo> {
    env.storage().persistent().get(&AuctionDataKey::ProjectInfo)
}
