use crate::types::{AuctionItem, BidRecord, DataKey};
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

// ========== Deadline ==========

pub fn get_deadline(env: &Env) -> Option<u64> {
    env.storage().instance().get(&DataKey::Deadline)
}

pub fn set_deadline(env: &Env, deadline: u64) {
    env.storage().instance().set(&DataKey::Deadline, &deadline);
}

// ========== Catalog ==========

pub fn get_item_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ItemCount)
        .unwrap_or(0)
}

pub fn set_item_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ItemCount, &count);
}

pub fn get_item(env: &Env, item_id: u32) -> Option<AuctionItem> {
    let key = DataKey::Item(item_id);
    let item = env.storage().persistent().get::<_, AuctionItem>(&key);
    if item.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    item
}

pub fn save_item(env: &Env, item: &AuctionItem) {
    let key = DataKey::Item(item.id);
    env.storage().persistent().set(&key, item);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Ledger ==========

pub fn get_bid_record(env: &Env, item_id: u32) -> Option<BidRecord> {
    let key = DataKey::BidRecord(item_id);
    let record = env.storage().persistent().get::<_, BidRecord>(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn save_bid_record(env: &Env, item_id: u32, record: &BidRecord) {
    let key = DataKey::BidRecord(item_id);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
