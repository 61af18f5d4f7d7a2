#![no_std]

mod admin;
mod errors;
mod events;
mod phase;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use errors::Error;
use events::{AdminSetEventData, AuctionInitializedEventData, BidPlacedEventData};
pub use types::{AuctionItem, AuctionPhase, BidRecord, Winner};

#[contract]
pub struct AuctionEngine;

#[contractimpl]
impl AuctionEngine {
    // ========== ACCESS CONTROL ==========

    /// Record the administrator. Only callable once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::extend_instance_ttl(&env);

        AdminSetEventData { admin }.publish(&env);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        admin::get_admin(&env)
    }

    // ========== CATALOG ==========

    /// Seed the catalog and open bidding until `deadline`.
    ///
    /// Items are numbered by position; any `id` supplied in `items` is
    /// discarded. Each item's bid record starts at its starting price
    /// with no bidder.
    pub fn init_auction(
        env: Env,
        admin: Address,
        items: Vec<AuctionItem>,
        deadline: u64,
    ) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;

        if phase::current(&env) != AuctionPhase::Uninitialized {
            return Err(Error::AuctionAlreadyInitialized);
        }

        if deadline <= env.ledger().timestamp() {
            return Err(Error::AuctionAlreadyEnded);
        }

        if items.iter().any(|input| input.starting_price < 0) {
            return Err(Error::InvalidStartingPrice);
        }

        for (index, input) in items.iter().enumerate() {
            let item = AuctionItem {
                id: index as u32,
                description: input.description,
                starting_price: input.starting_price,
            };
            storage::save_item(&env, &item);
            storage::save_bid_record(
                &env,
                item.id,
                &BidRecord {
                    highest_bid: item.starting_price,
                    highest_bidder: None,
                },
            );
        }

        let item_count = items.len();
        storage::set_item_count(&env, item_count);
        storage::set_deadline(&env, deadline);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction opened", item_count, deadline);
        AuctionInitializedEventData {
            admin,
            item_count,
            deadline,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_item(env: Env, index: u32) -> Result<AuctionItem, Error> {
        storage::get_item(&env, index).ok_or(Error::ItemNotFound)
    }

    /// Whole catalog in id order.
    pub fn get_items(env: Env) -> Result<Vec<AuctionItem>, Error> {
        let mut items = Vec::new(&env);
        for item_id in 0..storage::get_item_count(&env) {
            items.push_back(storage::get_item(&env, item_id).ok_or(Error::ItemNotFound)?);
        }
        Ok(items)
    }

    pub fn get_item_count(env: Env) -> u32 {
        storage::get_item_count(&env)
    }

    pub fn get_deadline(env: Env) -> Result<u64, Error> {
        storage::get_deadline(&env).ok_or(Error::AuctionNotInitialized)
    }

    pub fn get_phase(env: Env) -> AuctionPhase {
        phase::current(&env)
    }

    // ========== BIDDING ==========

    /// Place a bid on one item. The amount must strictly exceed the
    /// item's current highest bid.
    pub fn bid(env: Env, bidder: Address, item_id: u32, amount: i128) -> Result<(), Error> {
        admin::require_not_admin(&env, &bidder)?;

        match phase::current(&env) {
            AuctionPhase::Uninitialized => return Err(Error::AuctionNotInitialized),
            AuctionPhase::Ended => return Err(Error::AuctionAlreadyEnded),
            AuctionPhase::Open => {}
        }

        let mut record = storage::get_bid_record(&env, item_id).ok_or(Error::ItemNotFound)?;

        if amount <= record.highest_bid {
            return Err(Error::BidTooLow);
        }

        record.highest_bid = amount;
        record.highest_bidder = Some(bidder.clone());
        storage::save_bid_record(&env, item_id, &record);
        storage::extend_instance_ttl(&env);

        BidPlacedEventData {
            item_id,
            bidder,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_bid_record(env: Env, item_id: u32) -> Result<BidRecord, Error> {
        storage::get_bid_record(&env, item_id).ok_or(Error::ItemNotFound)
    }

    pub fn get_highest_bid(env: Env, item_id: u32) -> Result<i128, Error> {
        Ok(Self::get_bid_record(env, item_id)?.highest_bid)
    }

    pub fn get_highest_bidder(env: Env, item_id: u32) -> Result<Option<Address>, Error> {
        Ok(Self::get_bid_record(env, item_id)?.highest_bidder)
    }

    // ========== SETTLEMENT ==========

    /// Winners report, one entry per item in catalog order. Items nobody
    /// bid on report no bidder and their starting price.
    pub fn determine_winner(env: Env) -> Result<Vec<Winner>, Error> {
        match phase::current(&env) {
            AuctionPhase::Uninitialized => return Err(Error::AuctionNotInitialized),
            AuctionPhase::Open => return Err(Error::AuctionNotEndedYet),
            AuctionPhase::Ended => {}
        }

        let mut winners = Vec::new(&env);
        for item_id in 0..storage::get_item_count(&env) {
            let record = storage::get_bid_record(&env, item_id).ok_or(Error::ItemNotFound)?;
            winners.push_back(Winner {
                id: item_id,
                highest_bidder: record.highest_bidder,
                bid_amt: record.highest_bid,
            });
        }
        Ok(winners)
    }
}

#[cfg(test)]
mod test;
