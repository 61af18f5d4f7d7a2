
use crate::{AuctionEngine, AuctionEngineClient, AuctionItem};
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    Address, Env, String, Vec,
};

pub const START_TIME: u64 = 1000;
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

pub fn setup_test() -> (Env, AuctionEngineClient<'static>, Address, Address, Address) {
    let (env, client) = setup_unconstructed();

    let admin = Address::generate(&env);
    let bidder = Address::generate(&env);
    let other_bidder = Address::generate(&env);

    client.initialize(&admin);

    (env, client, admin, bidder, other_bidder)
}

pub fn setup_unconstructed() -> (Env, AuctionEngineClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START_TIME);

    let contract_id = env.register(AuctionEngine, ());
    let client = AuctionEngineClient::new(&env, &contract_id);

    (env, client)
}

/// The two-item catalog used throughout: a ball at 1 and a book at 3.
pub fn ball_and_book(env: &Env) -> Vec<AuctionItem> {
    items(env, &[(0, "ball", 1), (1, "book", 3)])
}

pub fn items(env: &Env, entries: &[(u32, &str, i128)]) -> Vec<AuctionItem> {
    let mut items = Vec::new(env);
    for (id, description, starting_price) in entries {
        items.push_back(AuctionItem {
            id: *id,
            description: String::from_str(env, description),
            starting_price: *starting_price,
        });
    }
    items
}

pub fn open_auction(env: &Env, client: &AuctionEngineClient, admin: &Address) -> u64 {
    let deadline = env.ledger().timestamp() + ONE_WEEK;
    client.init_auction(admin, &ball_and_book(env), &deadline);
    deadline
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    set_timestamp(env, env.ledger().timestamp() + seconds);
}

fn set_timestamp(env: &Env, timestamp: u64) {
    env.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
}
