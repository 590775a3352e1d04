use crate::interface::ReserveCache;
use near_sdk::{ext_contract, Promise};

/// The token contract keeps a local copy of the pool party reserve, which is used to price exchanges
/// without a round trip to pool party.
pub trait PoolPartyReserve {
    /// Refreshes the cached reserve from pool party. Only one refresh may be in flight at a time.
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner account
    /// - if a refresh is already in progress
    fn cache_pool_party_reserve(&mut self) -> Promise;

    fn reserve_cache(&self) -> ReserveCache;
}

pub trait ReserveCacheCallbacks {
    /// Resumes the refresh with the `get_pool_info` result.
    ///
    /// ## Success Workflow
    /// 1. cache the reserve and the next raffle timestamp
    /// 2. clear the refresh in progress flag
    ///
    /// If the call failed, then the flag is cleared and the cached value is left as is. The same applies
    /// when an exchange was in flight while the refresh was pending, because the pool party reserve
    /// cannot be reconciled with the tentative exchange debits.
    ///
    /// Returns true if the cache was refreshed.
    ///
    /// #[private]
    fn on_cache_pool_party_reserve(&mut self) -> bool;
}

#[ext_contract(ext_reserve_cache_callbacks)]
pub trait ExtReserveCacheCallbacks {
    fn on_cache_pool_party_reserve(&mut self) -> bool;
}

pub mod events {
    use crate::domain::CallFailure;

    #[derive(Debug)]
    pub struct ReserveCached {
        pub reserve: u128,
        pub next_raffle_at: u64,
    }

    #[derive(Debug)]
    pub struct ReserveRefreshFailed {
        pub reason: CallFailure,
        /// stale value that is kept
        pub cached_value: u128,
    }

    /// the refresh overlapped with an in-flight exchange
    #[derive(Debug)]
    pub struct ReserveRefreshDiscarded {
        /// reserve reported by pool party
        pub reserve: u128,
        pub cached_value: u128,
        pub in_flight: u128,
    }
}
