use crate::interface::YoctoNear;
use near_sdk::{ext_contract, AccountId};

/// The subset of the pool party contract interface that the token contract depends on
#[ext_contract(ext_pool_party)]
pub trait ExtPoolParty {
    /// Stakes `amount` out of the reserve on behalf of `to`, and moves `fee` from the reserve into
    /// the accrued fees. Only the token contract is allowed to call it.
    fn give_from_reserve(&mut self, to: AccountId, amount: YoctoNear, fee: YoctoNear);

    /// Stakes the attached deposit on behalf of the predecessor account.
    ///
    /// `#[payable]`
    fn deposit_and_stake(&mut self);

    /// returns [PoolInfo](crate::interface::PoolInfo)
    fn get_pool_info(&self);
}
