#![no_std]

//! # Delfy Auction
//!
//! Token presale with staged liquidity release gated by community disputes.
//!
//! ## Lifecycle:
//! 1. Factory deploys and configures the auction; owner deposits inventory
//! 2. Investors buy during the open window (caps, optional whitelist)
//! 3. Any contributor launches the exchange: fee out, liquidity paired,
//!    LP receipt locked, case window opens
//! 4. Custodied base asset releases to the owner in tranches, unless a
//!    dispute case reaches quorum and halts the schedule
//! 5. With release stopped, investors reclaim contributions pro rata

use soroban_sdk::{
    contract, contractimpl, token, vec, Address, Env, IntoVal, String, Symbol, Vec,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::AuctionError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

/// Fixed-point scale for `rate` (7 decimals)
pub const RATE_SCALE: i128 = 10_000_000;

/// Basis-point denominator
const BPS_DENOM: i128 = 10_000;

/// Case/refund eligibility: caller must hold at least this fraction of the
/// tokens sold (1%)
const MIN_HOLDING_BPS: i128 = 100;

/// A case passes once its vote weight reaches this fraction of tokens sold
const QUORUM_BPS: i128 = 5_000;

/// Minimum donation to open a refundable case (0.00789 units at 7 decimals)
const MIN_DONATION_REFUNDABLE: i128 = 78_900;

/// Minimum donation to open a non-refundable case (0.01 units)
const MIN_DONATION_NON_REFUNDABLE: i128 = 100_000;

/// Minimum donation per upvote (0.004 units)
const MIN_UPVOTE_DONATION: i128 = 40_000;

/// Share of the post-fee raise paired into the pool; the rest is custodied
/// for the tranche schedule
const LIQUIDITY_SHARE_BPS: i128 = 5_000;

/// Number of tranches the custodied raise releases in
const TOTAL_TRANCHES: u32 = 3;

/// Spacing between tranches: 2 days
const TRANCHE_INTERVAL: u64 = 172_800;

/// Case window opens this long after launch: 1 day
const CASE_OPEN_DELAY: u64 = 86_400;

/// Case window length once open: 7 days
const CASE_WINDOW: u64 = 604_800;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct DelfyAuction;

#[contractimpl]
impl DelfyAuction {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the auction. Called by the factory at deployment.
    pub fn initialize(
        env: Env,
        factory: Address,
        params: InitAuctionParams,
    ) -> Result<(), AuctionError> {
        factory.require_auth();

        if is_initialized(&env) {
            return Err(AuctionError::AlreadyInitialized);
        }

        if params.rate <= 0 {
            return Err(AuctionError::InvalidAmount);
        }
        if params.sales_period == 0 {
            return Err(AuctionError::InvalidRange);
        }

        let open_until = env.ledger().timestamp().saturating_add(params.sales_period);

        let config = AuctionConfig {
            owner: params.owner.clone(),
            sale_token: params.sale_token.clone(),
            exchange: params.exchange,
            fee_recipient: params.fee_recipient,
            locker: params.locker,
            open_until,
            rate: params.rate,
            dev_fee_percent: params.dev_fee_percent,
            lock_period: params.lock_period,
        };
        write_config(&env, &config);

        write_state(
            &env,
            &SaleState {
                deposited: false,
                whitelist_enabled: params.whitelist_enabled,
                total_raised: 0,
                tokens_sold: 0,
                exchange_launched: false,
                launched_at: 0,
                release_stopped: false,
            },
        );
        set_initialized(&env);

        emit_initialized(&env, &params.owner, &params.sale_token, open_until);

        Ok(())
    }

    // ========================================================
    // OWNER CONFIGURATION
    // ========================================================

    /// Deposit the sale-token allocations. Owner only, exactly once,
    /// before launch.
    pub fn deposit(
        env: Env,
        sale: i128,
        liquidity: i128,
        bonus: i128,
        reserved: i128,
    ) -> Result<(), AuctionError> {
        let config = read_config(&env);
        config.owner.require_auth();

        let mut state = read_state(&env);
        if state.deposited || state.exchange_launched {
            return Err(AuctionError::InvalidState);
        }

        if sale <= 0 || liquidity <= 0 || bonus < 0 || reserved < 0 {
            return Err(AuctionError::InvalidAmount);
        }

        let total = sale
            .checked_add(liquidity)
            .and_then(|t| t.checked_add(bonus))
            .and_then(|t| t.checked_add(reserved))
            .ok_or(AuctionError::InvalidAmount)?;

        token::Client::new(&env, &config.sale_token).transfer(
            &config.owner,
            &env.current_contract_address(),
            &total,
        );

        write_inventory(&env, &Inventory { sale, liquidity, bonus, reserved });
        state.deposited = true;
        write_state(&env, &state);

        emit_deposit(&env, &config.owner, total);

        Ok(())
    }

    /// Set per-address purchase bounds in base asset
    pub fn set_min_max(env: Env, min: i128, max: i128) -> Result<(), AuctionError> {
        let config = read_config(&env);
        config.owner.require_auth();

        if min < 0 || min > max {
            return Err(AuctionError::InvalidRange);
        }

        write_bounds(&env, &PurchaseBounds { min, max });
        emit_bounds_updated(&env, min, max);

        Ok(())
    }

    /// Whitelist addresses and enable whitelist-gated purchasing
    pub fn whitelist_addresses(env: Env, addrs: Vec<Address>) -> Result<(), AuctionError> {
        let config = read_config(&env);
        config.owner.require_auth();

        for addr in addrs.iter() {
            write_whitelisted(&env, &addr);
            emit_whitelisted(&env, &addr);
        }

        let mut state = read_state(&env);
        if !state.whitelist_enabled {
            state.whitelist_enabled = true;
            write_state(&env, &state);
        }

        Ok(())
    }

    /// Set off-chain display metadata
    pub fn add_project_info(
        env: Env,
        logo_link: String,
        project_url: String,
    ) -> Result<(), AuctionError> {
        let config = read_config(&env);
        config.owner.require_auth();

        write_project_info(&env, &ProjectInfo { logo_link, project_url });

        Ok(())
    }

    // ========================================================
    // PURCHASE
    // ========================================================

    /// Buy sale tokens with `amount` of the base asset. Contribution credit
    /// and token transfer happen in the same call.
    pub fn buy(env: Env, buyer: Address, amount: i128) -> Result<i128, AuctionError> {
        buyer.require_auth();

        let config = read_config(&env);
        let mut state = read_state(&env);

        if !state.deposited {
            return Err(AuctionError::InvalidState);
        }
        if state.exchange_launched {
            return Err(AuctionError::AuctionClosed);
        }
        if env.ledger().timestamp() >= config.open_until {
            return Err(AuctionError::AuctionClosed);
        }
        if state.whitelist_enabled && !is_whitelisted(&env, &buyer) {
            return Err(AuctionError::NotWhitelisted);
        }

        let bounds = read_bounds(&env);
        if amount <= 0 || amount < bounds.min || amount > bounds.max {
            return Err(AuctionError::OutOfRange);
        }

        let contribution = read_contribution(&env, &buyer);
        let cumulative = contribution
            .checked_add(amount)
            .ok_or(AuctionError::InvalidAmount)?;
        if cumulative > bounds.max {
            return Err(AuctionError::CapExceeded);
        }

        let tokens_out = amount
            .checked_mul(config.rate)
            .ok_or(AuctionError::InvalidAmount)?
            / RATE_SCALE;
        if tokens_out <= 0 {
            return Err(AuctionError::InvalidAmount);
        }

        let mut inventory = read_inventory(&env);
        if tokens_out > inventory.sale {
            return Err(AuctionError::InsufficientInventory);
        }

        let contract = env.current_contract_address();
        token::Client::new(&env, &config.exchange.base_asset)
            .transfer(&buyer, &contract, &amount);
        token::Client::new(&env, &config.sale_token).transfer(&contract, &buyer, &tokens_out);

        inventory.sale -= tokens_out;
        write_inventory(&env, &inventory);

        write_contribution(&env, &buyer, cumulative);
        state.total_raised += amount;
        state.tokens_sold += tokens_out;
        write_state(&env, &state);

        emit_purchase(&env, &buyer, amount, tokens_out);

        Ok(tokens_out)
    }

    // ========================================================
    // MARKET LAUNCH
    // ========================================================

    /// Convert the sale to a tradable market. Callable once, by any
    /// contributor, after the window closes or the sale allocation sells out.
    pub fn launch_exchange(env: Env, caller: Address, deadline: u64) -> Result<(), AuctionError> {
        caller.require_auth();

        let config = read_config(&env);
        let mut state = read_state(&env);

        if state.exchange_launched {
            return Err(AuctionError::AlreadyLaunched);
        }
        if read_contribution(&env, &caller) <= 0 {
            return Err(AuctionError::NotInvestor);
        }

        let mut inventory = read_inventory(&env);
        let now = env.ledger().timestamp();
        if now < config.open_until && inventory.sale > 0 {
            return Err(AuctionError::AuctionOpen);
        }
        if state.total_raised <= 0 {
            return Err(AuctionError::InvalidState);
        }

        let contract = env.current_contract_address();
        let base = token::Client::new(&env, &config.exchange.base_asset);

        // Dev fee off the top
        let fee = state.total_raised * config.dev_fee_percent as i128 / 100;
        if fee > 0 {
            base.transfer(&contract, &config.fee_recipient, &fee);
        }

        let post_fee = state.total_raised - fee;
        let base_for_lp = post_fee * LIQUIDITY_SHARE_BPS / BPS_DENOM;

        // Fund the router, then ask it to pair the liquidity allocation;
        // the receipt is minted straight to the locker
        let liquidity_tokens = inventory.liquidity;
        token::Client::new(&env, &config.sale_token).transfer(
            &contract,
            &config.exchange.router,
            &liquidity_tokens,
        );
        base.transfer(&contract, &config.exchange.router, &base_for_lp);

        let (_used_tokens, used_base, receipt_amount): (i128, i128, i128) = env.invoke_contract(
            &config.exchange.router,
            &Symbol::new(&env, "add_liquidity"),
            vec![
                &env,
                config.sale_token.clone().into_val(&env),
                config.exchange.base_asset.clone().into_val(&env),
                liquidity_tokens.into_val(&env),
                base_for_lp.into_val(&env),
                0i128.into_val(&env),
                0i128.into_val(&env),
                config.locker.clone().into_val(&env),
                deadline.into_val(&env),
            ],
        );

        let pool_token: Address = env.invoke_contract(
            &config.exchange.factory,
            &Symbol::new(&env, "pair_for"),
            vec![
                &env,
                config.sale_token.clone().into_val(&env),
                config.exchange.base_asset.clone().into_val(&env),
            ],
        );

        let _: () = env.invoke_contract(
            &config.locker,
            &Symbol::new(&env, "register_lock"),
            vec![
                &env,
                contract.clone().into_val(&env),
                config.sale_token.clone().into_val(&env),
                config.exchange.base_asset.clone().into_val(&env),
                pool_token.clone().into_val(&env),
                config.owner.clone().into_val(&env),
                pool_token.into_val(&env),
                receipt_amount.into_val(&env),
                config.lock_period.into_val(&env),
                false.into_val(&env),
            ],
        );

        // Book from live balances: a router may pair less than it was funded
        // with, and only what actually sits here can be custodied or
        // returned. The liquidity allocation is spent; any refunded surplus
        // shows up against the committed allocations and reverts to the
        // owner's reserve.
        let custodied = base.balance(&contract);
        let sale_balance = token::Client::new(&env, &config.sale_token).balance(&contract);
        let committed = inventory.sale + inventory.bonus + inventory.reserved;
        let returned = sale_balance - committed;
        inventory.liquidity = 0;
        if returned > 0 {
            inventory.reserved += returned;
        }
        write_inventory(&env, &inventory);

        write_schedule(
            &env,
            &ReleaseSchedule {
                tranches_released: 0,
                total_tranches: TOTAL_TRANCHES,
                next_eligible_time: now + TRANCHE_INTERVAL,
                tranche_amount: custodied / TOTAL_TRANCHES as i128,
                custodied_remaining: custodied,
            },
        );

        let opens_at = now + CASE_OPEN_DELAY;
        write_case_window(&env, &CaseWindow { opens_at, closes_at: opens_at + CASE_WINDOW });

        state.exchange_launched = true;
        state.launched_at = now;
        write_state(&env, &state);

        emit_exchange_launched(&env, &caller, liquidity_tokens, used_base, receipt_amount);

        Ok(())
    }

    /// Return unsold sale allocation and the reserved allocation to the
    /// owner. Post-launch only.
    pub fn withdraw_unsold(env: Env) -> Result<i128, AuctionError> {
        let config = read_config(&env);
        config.owner.require_auth();

        let state = read_state(&env);
        if !state.exchange_launched {
            return Err(AuctionError::NotLaunched);
        }

        let mut inventory = read_inventory(&env);
        let amount = inventory.sale + inventory.reserved;
        if amount <= 0 {
            return Err(AuctionError::InsufficientInventory);
        }

        token::Client::new(&env, &config.sale_token).transfer(
            &env.current_contract_address(),
            &config.owner,
            &amount,
        );

        inventory.sale = 0;
        inventory.reserved = 0;
        write_inventory(&env, &inventory);

        emit_unsold_withdrawn(&env, &config.owner, amount);

        Ok(amount)
    }

    // ========================================================
    // DISPUTE CASES
    // ========================================================

    /// Raise a dispute case inside the post-launch window. The creator's
    /// qualifying holding counts as the first vote.
    pub fn create_case(
        env: Env,
        caller: Address,
        description: String,
        kind: CaseKind,
        donation: i128,
    ) -> Result<u32, AuctionError> {
        caller.require_auth();

        let config = read_config(&env);
        let state = read_state(&env);

        let window = read_case_window(&env).ok_or(AuctionError::WindowClosed)?;
        let now = env.ledger().timestamp();
        if now < window.opens_at || now > window.closes_at {
            return Err(AuctionError::WindowClosed);
        }

        if read_contribution(&env, &caller) <= 0 {
            return Err(AuctionError::NotInvestor);
        }

        let holding = Self::qualifying_holding(&env, &config, &state, &caller)?;

        let min_donation = match kind {
            CaseKind::Refundable => MIN_DONATION_REFUNDABLE,
            CaseKind::NonRefundable => MIN_DONATION_NON_REFUNDABLE,
        };
        if donation < min_donation {
            return Err(AuctionError::DonationTooLow);
        }

        token::Client::new(&env, &config.exchange.base_asset).transfer(
            &caller,
            &env.current_contract_address(),
            &donation,
        );

        let index = read_case_count(&env);
        let mut case = Case {
            kind,
            creator: caller.clone(),
            description,
            weight: holding,
            created_at: now,
            passed: false,
        };
        write_vote(&env, index, &caller);
        write_case_count(&env, index + 1);

        emit_case_created(&env, index, kind, &caller, holding);

        Self::maybe_pass_case(&env, index, &mut case, state);
        write_case(&env, index, &case);

        Ok(index)
    }

    /// Add vote weight to an open case. One vote per address.
    pub fn upvote_case(
        env: Env,
        caller: Address,
        case_index: u32,
        donation: i128,
    ) -> Result<(), AuctionError> {
        caller.require_auth();

        let config = read_config(&env);
        let state = read_state(&env);

        let mut case = read_case(&env, case_index).ok_or(AuctionError::UnknownCase)?;
        if case.passed {
            return Err(AuctionError::CaseAlreadyPassed);
        }

        if read_contribution(&env, &caller) <= 0 {
            return Err(AuctionError::NotInvestor);
        }

        let holding = Self::qualifying_holding(&env, &config, &state, &caller)?;

        if donation < MIN_UPVOTE_DONATION {
            return Err(AuctionError::DonationTooLow);
        }

        if has_voted(&env, case_index, &caller) {
            return Err(AuctionError::AlreadyVoted);
        }

        token::Client::new(&env, &config.exchange.base_asset).transfer(
            &caller,
            &env.current_contract_address(),
            &donation,
        );

        case.weight = case.weight.saturating_add(holding);
        write_vote(&env, case_index, &caller);

        emit_case_upvoted(&env, case_index, &caller, holding);

        Self::maybe_pass_case(&env, case_index, &mut case, state);
        write_case(&env, case_index, &case);

        Ok(())
    }

    // ========================================================
    // RELEASE & REFUND
    // ========================================================

    /// Release one tranche of the custodied base asset to the owner.
    /// A scheduled entitlement: any contributor may trigger it.
    pub fn release_liquidity(
        env: Env,
        caller: Address,
        deadline: u64,
    ) -> Result<i128, AuctionError> {
        caller.require_auth();

        let config = read_config(&env);
        let state = read_state(&env);

        if read_contribution(&env, &caller) <= 0 {
            return Err(AuctionError::NotInvestor);
        }
        if state.release_stopped {
            return Err(AuctionError::ReleaseStopped);
        }

        let mut schedule = read_schedule(&env).ok_or(AuctionError::NotLaunched)?;
        if schedule.tranches_released >= schedule.total_tranches {
            return Err(AuctionError::AlreadyComplete);
        }

        let now = env.ledger().timestamp();
        if now < schedule.next_eligible_time {
            return Err(AuctionError::TooEarly);
        }
        if now > deadline {
            return Err(AuctionError::DeadlineExpired);
        }

        let balance = token::Client::new(&env, &config.exchange.base_asset)
            .balance(&env.current_contract_address());

        // The final tranche sweeps everything on hand, un-passed case
        // donations included
        let last = schedule.tranches_released + 1 == schedule.total_tranches;
        let amount = if last {
            balance
        } else {
            schedule
                .tranche_amount
                .min(schedule.custodied_remaining)
                .min(balance)
        };

        if amount > 0 {
            token::Client::new(&env, &config.exchange.base_asset).transfer(
                &env.current_contract_address(),
                &config.owner,
                &amount,
            );
        }

        schedule.tranches_released += 1;
        schedule.custodied_remaining = if last {
            0
        } else {
            schedule.custodied_remaining - amount
        };
        schedule.next_eligible_time = now + TRANCHE_INTERVAL;
        write_schedule(&env, &schedule);

        emit_tranche_released(&env, schedule.tranches_released, amount, schedule.next_eligible_time);

        Ok(amount)
    }

    /// Reclaim the caller's contribution once release is stopped.
    ///
    /// Shortfall policy: each investor receives
    /// `min(contribution, contribution * pool / total)` where `pool` is the
    /// base balance snapshotted at the stop and `total` the contributions
    /// outstanding then, further capped by the live balance.
    pub fn refund_buyers(env: Env, caller: Address) -> Result<i128, AuctionError> {
        caller.require_auth();

        let config = read_config(&env);
        let state = read_state(&env);

        if !state.release_stopped {
            return Err(AuctionError::ReleaseNotStopped);
        }

        let contribution = read_contribution(&env, &caller);
        if contribution <= 0 || has_refunded(&env, &caller) {
            return Err(AuctionError::NotRealInvestor);
        }

        Self::qualifying_holding(&env, &config, &state, &caller)?;

        let pool = read_refund_pool(&env).ok_or(AuctionError::ReleaseNotStopped)?;
        let pro_rata = if pool.total > 0 {
            contribution.saturating_mul(pool.pool) / pool.total
        } else {
            0
        };
        let base = token::Client::new(&env, &config.exchange.base_asset);
        let balance = base.balance(&env.current_contract_address());
        let payout = contribution.min(pro_rata).min(balance);

        if payout > 0 {
            base.transfer(&env.current_contract_address(), &caller, &payout);
        }
        set_refunded(&env, &caller);

        emit_refund(&env, &caller, payout);

        Ok(payout)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn get_config(env: Env) -> AuctionConfig {
        read_config(&env)
    }

    pub fn get_state(env: Env) -> SaleState {
        read_state(&env)
    }

    pub fn get_inventory(env: Env) -> Inventory {
        read_inventory(&env)
    }

    pub fn get_contribution(env: Env, investor: Address) -> i128 {
        read_contribution(&env, &investor)
    }

    pub fn get_bounds(env: Env) -> PurchaseBounds {
        read_bounds(&env)
    }

    pub fn get_schedule(env: Env) -> Option<ReleaseSchedule> {
        read_schedule(&env)
    }

    pub fn get_case_window(env: Env) -> Option<CaseWindow> {
        read_case_window(&env)
    }

    pub fn get_case_count(env: Env) -> u32 {
        read_case_count(&env)
    }

    pub fn get_case(env: Env, index: u32) -> Option<Case> {
        read_case(&env, index)
    }

    pub fn address_whitelisted(env: Env, addr: Address) -> bool {
        is_whitelisted(&env, &addr)
    }

    pub fn address_refunded(env: Env, addr: Address) -> bool {
        has_refunded(&env, &addr)
    }

    pub fn get_project_info(env: Env) -> Option<ProjectInfo> {
        read_project_info(&env)
    }

    /// Base-asset balance currently held by the auction
    pub fn get_base_balance(env: Env) -> i128 {
        let config = read_config(&env);
        token::Client::new(&env, &config.exchange.base_asset)
            .balance(&env.current_contract_address())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Current sale-token holding of `caller`, rejected when below the
    /// minimum stake (1% of tokens sold). Distinguishes genuine holders
    /// from addresses that exited their position.
    fn qualifying_holding(
        env: &Env,
        config: &AuctionConfig,
        state: &SaleState,
        caller: &Address,
    ) -> Result<i128, AuctionError> {
        let holding = token::Client::new(env, &config.sale_token).balance(caller);
        let min_holding = state.tokens_sold * MIN_HOLDING_BPS / BPS_DENOM;
        if holding < min_holding || holding <= 0 {
            return Err(AuctionError::InsufficientStake);
        }
        Ok(holding)
    }

    /// Flip a case to passed at quorum; if tranches remain, latch the
    /// release stop and snapshot the refund pool.
    fn maybe_pass_case(env: &Env, index: u32, case: &mut Case, mut state: SaleState) {
        if case.passed {
            return;
        }
        if case.weight * BPS_DENOM < state.tokens_sold * QUORUM_BPS {
            return;
        }

        case.passed = true;
        emit_case_passed(env, index, case.weight);

        let release_complete = read_schedule(env)
            .map(|s| s.tranches_released >= s.total_tranches)
            .unwrap_or(false);

        if !state.release_stopped && !release_complete {
            state.release_stopped = true;

            let config = read_config(env);
            let balance = token::Client::new(env, &config.exchange.base_asset)
                .balance(&env.current_contract_address());
            write_refund_pool(env, &RefundPool { pool: balance, total: state.total_raised });
            write_state(env, &state);

            emit_release_stopped(env, index, balance);
        }
    }
}
