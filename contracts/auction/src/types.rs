use soroban_sdk::{contracttype, Address, String};

/// Lifecycle of the auction. Never stored; see `phase::derive`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionPhase {
    Uninitialized = 0,
    Open = 1,
    Ended = 2,
}

/// A catalog entry. `id` on input is ignored and replaced with the
/// item's position in the catalog.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionItem {
    pub id: u32,
    pub description: String,
    pub starting_price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRecord {
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
}

/// One line of the winners report.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Winner {
    pub id: u32,
    pub highest_bidder: Option<Address>,
    pub bid_amt: i128,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Deadline,
    ItemCount,
    Item(u32),
    BidRecord(u32),
}
