use crate::domain::{BlockTimestamp, YoctoNear};
use crate::errors::{
    illegal_state::NO_REFRESH_PENDING,
    reserve_cache::REFRESH_IN_PROGRESS,
    token_exchange::RESERVE_INSUFFICIENT,
};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// Locally stored copy of the pool party reserve.
///
/// The cached value is refreshed by a `get_pool_info` round trip to pool party. In between refreshes,
/// it is tentatively adjusted by the exchanges that this contract submits. At most one refresh can be
/// in flight at a time.
///
/// A refresh is only applied if no tentative debit was outstanding while it was in flight. Pool party
/// may answer `get_pool_info` before or after it processes an in-flight exchange, so the reported
/// reserve cannot be reconciled with the tentative debits. The refresh is discarded in that case and
/// the cached value, which already accounts for the debits, is kept.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct ReserveCache {
    cached_value: YoctoNear,
    last_refreshed_at: Option<BlockTimestamp>,
    pending_refresh: bool,
    /// when pool party will run its next raffle
    next_raffle_at: BlockTimestamp,
    /// gross amount debited by exchanges that are waiting on pool party
    in_flight: YoctoNear,
    /// set when the pending refresh overlapped with an in-flight exchange
    refresh_overlapped: bool,
}

impl ReserveCache {
    pub fn cached_value(&self) -> YoctoNear {
        self.cached_value
    }

    pub fn last_refreshed_at(&self) -> Option<BlockTimestamp> {
        self.last_refreshed_at
    }

    pub fn pending_refresh(&self) -> bool {
        self.pending_refresh
    }

    pub fn next_raffle_at(&self) -> BlockTimestamp {
        self.next_raffle_at
    }

    pub fn in_flight(&self) -> YoctoNear {
        self.in_flight
    }

    /// returns true once the cache was refreshed at least once
    pub fn is_initialized(&self) -> bool {
        self.last_refreshed_at.is_some()
    }

    /// returns true if `now` falls within `window` nanoseconds of the next raffle
    pub fn is_close_to_raffle(&self, now: BlockTimestamp, window: u64) -> bool {
        self.next_raffle_at.value() > 0
            && now.value().saturating_add(window) >= self.next_raffle_at.value()
    }

    /// ## Panics
    /// if a refresh is already in flight
    pub fn begin_refresh(&mut self) {
        assert!(!self.pending_refresh, "{}", REFRESH_IN_PROGRESS);
        self.pending_refresh = true;
        self.refresh_overlapped = self.in_flight.value() > 0;
    }

    /// Returns false if the refresh overlapped with an in-flight exchange, in which case the cache is
    /// left unchanged.
    ///
    /// ## Panics
    /// if there is no refresh in flight
    pub fn complete_refresh(
        &mut self,
        reserve: YoctoNear,
        next_raffle_at: BlockTimestamp,
        now: BlockTimestamp,
    ) -> bool {
        assert!(self.pending_refresh, "{}", NO_REFRESH_PENDING);
        self.pending_refresh = false;
        if self.refresh_overlapped {
            self.refresh_overlapped = false;
            return false;
        }
        self.cached_value = reserve;
        self.next_raffle_at = next_raffle_at;
        self.last_refreshed_at = Some(now);
        true
    }

    /// the cached value is kept as is - a stale value is preferred over a corrupted one
    pub fn abort_refresh(&mut self) {
        self.pending_refresh = false;
        self.refresh_overlapped = false;
    }

    /// Tentatively removes the amount that an exchange is requesting from pool party.
    ///
    /// ## Panics
    /// if the cached value is insufficient
    pub fn debit(&mut self, amount: YoctoNear) {
        assert!(self.cached_value >= amount, "{}", RESERVE_INSUFFICIENT);
        self.cached_value -= amount;
        self.in_flight += amount;
        if self.pending_refresh {
            self.refresh_overlapped = true;
        }
    }

    /// pool party gave the amount - the debit becomes final
    pub fn settle(&mut self, amount: YoctoNear) {
        self.in_flight -= amount;
    }

    /// pool party call failed - the debit is reverted
    pub fn credit(&mut self, amount: YoctoNear) {
        self.in_flight -= amount;
        self.cached_value += amount;
    }
}
