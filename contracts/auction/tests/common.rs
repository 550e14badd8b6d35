#![allow(dead_code)]

use soroban_sdk::{
    contract, contractimpl, symbol_short, testutils::Address as _, testutils::Ledger, token,
    Address, Env,
};

use delfy_auction::{DelfyAuction, DelfyAuctionClient, ExchangeRefs, InitAuctionParams};
use delfy_locker::{DelfyLocker, DelfyLockerClient};

// Test constants (7-decimal fixed point)
pub const UNIT: i128 = 10_000_000;
pub const DEFAULT_RATE: i128 = 20_000_000; // 2 sale tokens per base unit
pub const DEFAULT_SALES_PERIOD: u64 = 86_400; // 1 day
pub const DEFAULT_DEV_FEE_PERCENT: u32 = 10;
pub const DEFAULT_LOCK_PERIOD: u64 = 10_368_000; // 120 days

pub const SALE_ALLOCATION: i128 = 1_000 * UNIT;
pub const LIQUIDITY_ALLOCATION: i128 = 500 * UNIT;
pub const BONUS_ALLOCATION: i128 = 100 * UNIT;
pub const RESERVED_ALLOCATION: i128 = 100 * UNIT;

/// Receipt supply pre-minted to the mock exchanges. Transferring from their
/// own balance keeps the auth tree rooted at the launch call; a nested mint
/// would need an admin signature the default auth mocking does not cover.
const RECEIPT_SUPPLY: i128 = 1_000_000 * UNIT;

// ============================================================
// MOCK EXCHANGES
// ============================================================
// Stand in for both the pair factory and the router. `MockExchange` pairs
// whatever it is asked to, consuming the full base side; `PartialExchange`
// pairs half of each side and keeps the surplus on its own balance, like a
// router whose pool ratio rejects part of the funding. Both hand the
// recipient receipt tokens one-for-one with the base they consumed.

#[contract]
pub struct MockExchange;

#[contractimpl]
impl MockExchange {
    pub fn init(env: Env, receipt: Address) {
        env.storage().instance().set(&symbol_short!("receipt"), &receipt);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        env: Env,
        _token_a: Address,
        _token_b: Address,
        amount_a: i128,
        amount_b: i128,
        _min_a: i128,
        _min_b: i128,
        recipient: Address,
        _deadline: u64,
    ) -> (i128, i128, i128) {
        let receipt: Address = env
            .storage()
            .instance()
            .get(&symbol_short!("receipt"))
            .unwrap();
        token::Client::new(&env, &receipt).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount_b,
        );
        (amount_a, amount_b, amount_b)
    }

    pub fn pair_for(env: Env, _token_a: Address, _token_b: Address) -> Address {
        env.storage()
            .instance()
            .get(&symbol_short!("receipt"))
            .unwrap()
    }
}

// Nested module so the `#[contractimpl]`-generated items (named after the
// methods, which match `MockExchange`'s) don't collide at module scope.
mod partial_exchange {
    use super::*;

    #[contract]
    pub struct PartialExchange;

    #[contractimpl]
    impl PartialExchange {
        pub fn init(env: Env, receipt: Address) {
            env.storage().instance().set(&symbol_short!("receipt"), &receipt);
        }

        #[allow(clippy::too_many_arguments)]
        pub fn add_liquidity(
            env: Env,
            _token_a: Address,
            _token_b: Address,
            amount_a: i128,
            amount_b: i128,
            _min_a: i128,
            _min_b: i128,
            recipient: Address,
            _deadline: u64,
        ) -> (i128, i128, i128) {
            let receipt: Address = env
                .storage()
                .instance()
                .get(&symbol_short!("receipt"))
                .unwrap();
            let used_b = amount_b / 2;
            token::Client::new(&env, &receipt).transfer(
                &env.current_contract_address(),
                &recipient,
                &used_b,
            );
            (amount_a / 2, used_b, used_b)
        }

        pub fn pair_for(env: Env, _token_a: Address, _token_b: Address) -> Address {
            env.storage()
                .instance()
                .get(&symbol_short!("receipt"))
                .unwrap()
        }
    }
}

pub use partial_exchange::{PartialExchange, PartialExchangeClient};

// ============================================================
// HARNESS
// ============================================================

pub struct AuctionTest<'a> {
    pub env: Env,
    pub auction: DelfyAuctionClient<'a>,
    pub locker: DelfyLockerClient<'a>,
    pub owner: Address,
    pub factory: Address,
    pub fee_recipient: Address,
    pub locker_owner: Address,
    pub sale_token: Address,
    pub base_asset: Address,
    pub receipt: Address,
    pub exchange: Address,
}

/// Setup an initialized auction wired to a real locker and a mock exchange
pub fn setup_auction(env: &Env) -> AuctionTest<'_> {
    let exchange = env.register(MockExchange, ());
    setup_with_exchange(env, exchange, false)
}

/// Same wiring against the exchange that only pairs half of what it is
/// funded with
pub fn setup_auction_partial_fill(env: &Env) -> AuctionTest<'_> {
    let exchange = env.register(PartialExchange, ());
    setup_with_exchange(env, exchange, true)
}

fn setup_with_exchange(env: &Env, exchange: Address, partial: bool) -> AuctionTest<'_> {
    let owner = Address::generate(env);
    let factory = Address::generate(env);
    let fee_recipient = Address::generate(env);
    let locker_owner = Address::generate(env);

    let sale_token = create_token(env, &owner);
    let base_asset = create_token(env, &owner);
    let receipt = create_token(env, &owner);

    if partial {
        PartialExchangeClient::new(env, &exchange).init(&receipt);
    } else {
        MockExchangeClient::new(env, &exchange).init(&receipt);
    }
    mint_tokens(env, &receipt, &exchange, RECEIPT_SUPPLY);

    let locker_id = env.register(DelfyLocker, ());
    let locker = DelfyLockerClient::new(env, &locker_id);
    locker.initialize(&locker_owner);
    locker.set_factory(&factory);

    let auction_id = env.register(DelfyAuction, ());
    let auction = DelfyAuctionClient::new(env, &auction_id);

    locker.add_registrar(&factory, &auction_id);

    auction.initialize(
        &factory,
        &InitAuctionParams {
            owner: owner.clone(),
            sale_token: sale_token.clone(),
            exchange: ExchangeRefs {
                factory: exchange.clone(),
                router: exchange.clone(),
                base_asset: base_asset.clone(),
            },
            fee_recipient: fee_recipient.clone(),
            locker: locker_id,
            sales_period: DEFAULT_SALES_PERIOD,
            rate: DEFAULT_RATE,
            dev_fee_percent: DEFAULT_DEV_FEE_PERCENT,
            lock_period: DEFAULT_LOCK_PERIOD,
            whitelist_enabled: false,
        },
    );

    AuctionTest {
        env: env.clone(),
        auction,
        locker,
        owner,
        factory,
        fee_recipient,
        locker_owner,
        sale_token,
        base_asset,
        receipt,
        exchange,
    }
}

/// Deposit the default inventory allocations
pub fn deposit_default(t: &AuctionTest) {
    mint_tokens(
        &t.env,
        &t.sale_token,
        &t.owner,
        SALE_ALLOCATION + LIQUIDITY_ALLOCATION + BONUS_ALLOCATION + RESERVED_ALLOCATION,
    );
    t.auction.deposit(
        &SALE_ALLOCATION,
        &LIQUIDITY_ALLOCATION,
        &BONUS_ALLOCATION,
        &RESERVED_ALLOCATION,
    );
}

/// Create a funded buyer and purchase `amount` of the base asset
pub fn buy(t: &AuctionTest, amount: i128) -> Address {
    let buyer = Address::generate(&t.env);
    fund_and_buy(t, &buyer, amount);
    buyer
}

pub fn fund_and_buy(t: &AuctionTest, buyer: &Address, amount: i128) {
    mint_tokens(&t.env, &t.base_asset, buyer, amount);
    t.auction.buy(buyer, &amount);
}

/// Close the sale window and launch as `caller`
pub fn launch(t: &AuctionTest, caller: &Address) {
    advance_time(&t.env, DEFAULT_SALES_PERIOD + 1);
    t.auction.launch_exchange(caller, &u64::MAX);
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    let client = token::StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn token_balance(env: &Env, token: &Address, who: &Address) -> i128 {
    token::Client::new(env, token).balance(who)
}

pub fn advance_time(env: &Env, by: u64) {
    env.ledger().with_mut(|l| l.timestamp += by);
}
