mod common;

use soroban_sdk::{testutils::Address as _, vec, Address, Env};

use common::*;

// ============================================================
// DEPOSIT TESTS
// ============================================================

#[test]
fn test_deposit_records_inventory() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);

    let inventory = t.auction.get_inventory();
    assert_eq!(inventory.sale, SALE_ALLOCATION);
    assert_eq!(inventory.liquidity, LIQUIDITY_ALLOCATION);
    assert_eq!(inventory.bonus, BONUS_ALLOCATION);
    assert_eq!(inventory.reserved, RESERVED_ALLOCATION);
    assert!(t.auction.get_state().deposited);

    // All four allocations sit on the contract
    assert_eq!(
        token_balance(&env, &t.sale_token, &t.auction.address),
        SALE_ALLOCATION + LIQUIDITY_ALLOCATION + BONUS_ALLOCATION + RESERVED_ALLOCATION
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #204)")]
fn test_deposit_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);

    mint_tokens(&env, &t.sale_token, &t.owner, SALE_ALLOCATION);
    t.auction.deposit(&SALE_ALLOCATION, &1, &0, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #405)")]
fn test_deposit_zero_sale_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    t.auction.deposit(&0, &1, &0, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #100)")]
fn test_initialize_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    let config = t.auction.get_config();

    t.auction.initialize(
        &t.factory,
        &delfy_auction::InitAuctionParams {
            owner: t.owner.clone(),
            sale_token: config.sale_token,
            exchange: config.exchange,
            fee_recipient: t.fee_recipient.clone(),
            locker: config.locker,
            sales_period: DEFAULT_SALES_PERIOD,
            rate: DEFAULT_RATE,
            dev_fee_percent: DEFAULT_DEV_FEE_PERCENT,
            lock_period: DEFAULT_LOCK_PERIOD,
            whitelist_enabled: false,
        },
    );
}

// ============================================================
// PURCHASE TESTS
// ============================================================

#[test]
fn test_buy_at_rate() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);

    // 2 base units at rate 2.0 buys 4 sale tokens
    let buyer = buy(&t, 2 * UNIT);

    assert_eq!(token_balance(&env, &t.sale_token, &buyer), 4 * UNIT);
    assert_eq!(t.auction.get_contribution(&buyer), 2 * UNIT);

    let state = t.auction.get_state();
    assert_eq!(state.total_raised, 2 * UNIT);
    assert_eq!(state.tokens_sold, 4 * UNIT);
    assert_eq!(t.auction.get_inventory().sale, SALE_ALLOCATION - 4 * UNIT);
}

#[test]
fn test_buy_accumulates_per_address() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);

    let buyer = Address::generate(&env);
    fund_and_buy(&t, &buyer, UNIT);
    fund_and_buy(&t, &buyer, 2 * UNIT);

    assert_eq!(t.auction.get_contribution(&buyer), 3 * UNIT);
    assert_eq!(token_balance(&env, &t.sale_token, &buyer), 6 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #204)")]
fn test_buy_before_deposit_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    buy(&t, UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_buy_after_window_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);

    advance_time(&env, DEFAULT_SALES_PERIOD + 1);
    buy(&t, UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #400)")]
fn test_buy_below_min_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);
    t.auction.set_min_max(&UNIT, &(4 * UNIT));

    buy(&t, UNIT / 2);
}

#[test]
#[should_panic(expected = "Error(Contract, #400)")]
fn test_buy_above_max_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);
    t.auction.set_min_max(&UNIT, &(4 * UNIT));

    buy(&t, 5 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #401)")]
fn test_cumulative_cap_enforced() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);
    t.auction.set_min_max(&0, &(4 * UNIT));

    // 2.5 then 2 crosses the 4-unit cap even though each buy alone fits
    let buyer = Address::generate(&env);
    fund_and_buy(&t, &buyer, 2 * UNIT + UNIT / 2);
    fund_and_buy(&t, &buyer, 2 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #406)")]
fn test_set_min_max_inverted_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    t.auction.set_min_max(&(4 * UNIT), &UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #407)")]
fn test_buy_beyond_inventory_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);

    // Sale allocation is 1000 tokens; at rate 2.0 a 501-unit buy wants 1002
    buy(&t, 501 * UNIT);
}

// ============================================================
// WHITELIST TESTS
// ============================================================

#[test]
#[should_panic(expected = "Error(Contract, #402)")]
fn test_whitelist_blocks_unlisted_buyer() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);

    let listed = Address::generate(&env);
    t.auction.whitelist_addresses(&vec![&env, listed]);

    buy(&t, UNIT);
}

#[test]
fn test_whitelist_allows_listed_buyer() {
    let env = Env::default();
    env.mock_all_auths();

    let t = setup_auction(&env);
    deposit_default(&t);

    let buyer = Address::generate(&env);
    t.auction.whitelist_addresses(&vec![&env, buyer.clone()]);
    assert!(t.auction.address_whitelisted(&buyer));
    assert!(t.auction.get_state().whitelist_enabled);

    fund_and_buy(&t, &buyer, UNIT);
    assert_eq!(token_balance(&env, &t.sale_token, &buyer), 2 * UNIT);
}
