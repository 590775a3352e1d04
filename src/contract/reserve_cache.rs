use crate::domain::{BlockTimestamp, CallOutcome};
use crate::interface::{
    self, ext_pool_party, ext_reserve_cache_callbacks, reserve_cache::events, PoolInfo,
    PoolPartyReserve, ReserveCacheCallbacks,
};
use crate::near::{assert_predecessor_is_self, log, promise_outcome, NO_DEPOSIT};
use crate::*;
use near_sdk::{near_bindgen, Promise};

#[near_bindgen]
impl PoolPartyReserve for PoolTokenContract {
    fn cache_pool_party_reserve(&mut self) -> Promise {
        self.assert_predecessor_is_owner();
        self.reserve_cache.begin_refresh();

        let gas_config = self.config.gas_config();
        ext_pool_party::get_pool_info(
            &self.pool_party_id,
            NO_DEPOSIT.value(),
            gas_config.pool_party().get_pool_info().value(),
        )
        .then(ext_reserve_cache_callbacks::on_cache_pool_party_reserve(
            &env::current_account_id(),
            NO_DEPOSIT.value(),
            gas_config.callbacks().on_cache_pool_party_reserve().value(),
        ))
    }

    fn reserve_cache(&self) -> interface::ReserveCache {
        self.reserve_cache.into()
    }
}

#[near_bindgen]
impl ReserveCacheCallbacks for PoolTokenContract {
    fn on_cache_pool_party_reserve(&mut self) -> bool {
        assert_predecessor_is_self();

        match promise_outcome().parse_json::<PoolInfo>() {
            CallOutcome::Success(pool_info) => {
                let applied = self.reserve_cache.complete_refresh(
                    pool_info.reserve.into(),
                    pool_info.next_raffle_at.value().into(),
                    BlockTimestamp::now(),
                );
                if applied {
                    log(events::ReserveCached {
                        reserve: pool_info.reserve.value(),
                        next_raffle_at: pool_info.next_raffle_at.value(),
                    });
                } else {
                    log(events::ReserveRefreshDiscarded {
                        reserve: pool_info.reserve.value(),
                        cached_value: self.reserve_cache.cached_value().value(),
                        in_flight: self.reserve_cache.in_flight().value(),
                    });
                }
                applied
            }
            CallOutcome::Failure(reason) => {
                self.reserve_cache.abort_refresh();
                log(events::ReserveRefreshFailed {
                    reason,
                    cached_value: self.reserve_cache.cached_value().value(),
                });
                false
            }
        }
    }
}
