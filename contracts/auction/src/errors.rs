use soroban_sdk::contracterror;

/// Error codes for the item auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// No administrator has been recorded yet
    NotInitialized = 1,
    /// The administrator has already been recorded
    AlreadyInitialized = 2,
    /// Caller is not allowed to perform this operation
    Unauthorized = 3,
    /// Bidding is closed, or the requested deadline is not in the future
    AuctionAlreadyEnded = 4,
    /// Winners cannot be resolved before the deadline
    AuctionNotEndedYet = 5,
    /// Bid must be strictly greater than the current highest bid
    BidTooLow = 6,
    /// Item id is outside the catalog
    ItemNotFound = 7,
    /// The catalog has not been seeded yet
    AuctionNotInitialized = 8,
    /// The catalog can only be seeded once
    AuctionAlreadyInitialized = 9,
    /// Starting prices cannot be negative
    InvalidStartingPrice = 10,
}
