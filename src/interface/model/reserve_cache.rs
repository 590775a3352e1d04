use crate::domain;
use crate::interface::{BlockTimestamp, YoctoNear};
use near_sdk::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ReserveCache {
    pub cached_value: YoctoNear,
    /// None means the reserve has never been cached
    pub last_refreshed_at: Option<BlockTimestamp>,
    pub pending_refresh: bool,
    pub next_raffle_at: BlockTimestamp,
    /// debited by exchanges that are waiting on pool party
    pub in_flight: YoctoNear,
}

impl From<domain::ReserveCache> for ReserveCache {
    fn from(cache: domain::ReserveCache) -> Self {
        Self {
            cached_value: cache.cached_value().into(),
            last_refreshed_at: cache.last_refreshed_at().map(Into::into),
            pending_refresh: cache.pending_refresh(),
            next_raffle_at: cache.next_raffle_at().into(),
            in_flight: cache.in_flight().into(),
        }
    }
}
