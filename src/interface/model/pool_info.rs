use crate::interface::{BlockTimestamp, YoctoNear};
use near_sdk::serde::{Deserialize, Serialize};

/// JSON returned by the pool party `get_pool_info` func
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolInfo {
    pub total_staked: YoctoNear,
    pub prize: YoctoNear,
    pub reserve: YoctoNear,
    pub accrued_fees: YoctoNear,
    pub next_raffle_at: BlockTimestamp,
    /// true once the raffle may be drawn
    pub raffle_due: bool,
}
