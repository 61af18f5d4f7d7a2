use soroban_sdk::{contractevent, Address};

/// Event emitted when the administrator is recorded
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminSetEventData {
    #[topic]
    pub admin: Address,
}

/// Event emitted when the catalog is seeded and bidding opens
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInitializedEventData {
    #[topic]
    pub admin: Address,
    pub item_count: u32,
    pub deadline: u64,
}

/// Event emitted when a bid replaces the highest bid on an item
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub item_id: u32,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}
