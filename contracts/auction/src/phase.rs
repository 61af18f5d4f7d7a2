use crate::storage;
use crate::types::AuctionPhase;
use soroban_sdk::Env;

/// Phase for a catalog with the given deadline at time `now`.
/// `None` means the catalog has not been seeded.
pub fn derive(deadline: Option<u64>, now: u64) -> AuctionPhase {
    match deadline {
        None => AuctionPhase::Uninitialized,
        Some(deadline) if now < deadline => AuctionPhase::Open,
        Some(_) => AuctionPhase::Ended,
    }
}

pub fn current(env: &Env) -> AuctionPhase {
    derive(storage::get_deadline(env), env.ledger().timestamp())
}
