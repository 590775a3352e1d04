use crate::errors::{STAKED_BALANCE_INSUFFICIENT, UNSTAKED_BALANCE_IS_ZERO};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
    AccountId, Balance,
};

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct StakeAccount {
    pub staked_balance: Balance,
    /// can be withdrawn once `available_when` is reached
    pub unstaked_balance: Balance,
    /// block timestamp in nanoseconds
    pub available_when: u64,
}

impl StakeAccount {
    pub fn stake(&mut self, amount: Balance) {
        self.staked_balance += amount;
    }

    /// ## Panics
    /// if the staked balance is insufficient
    pub fn unstake(&mut self, amount: Balance, available_when: u64) {
        assert!(
            self.staked_balance >= amount,
            "{}",
            STAKED_BALANCE_INSUFFICIENT
        );
        self.staked_balance -= amount;
        self.credit_unstaked(amount, available_when);
    }

    /// the lock is reset for the whole unstaked balance
    pub fn credit_unstaked(&mut self, amount: Balance, available_when: u64) {
        self.unstaked_balance += amount;
        self.available_when = available_when;
    }

    pub fn can_withdraw(&self, now: u64) -> bool {
        self.available_when <= now
    }

    /// ## Panics
    /// if there is nothing to withdraw
    pub fn withdraw_all(&mut self) -> Balance {
        assert!(self.unstaked_balance > 0, "{}", UNSTAKED_BALANCE_IS_ZERO);
        let amount = self.unstaked_balance;
        self.unstaked_balance = 0;
        amount
    }
}

/// account snapshot returned by `get_account`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct StakingPoolAccount {
    pub account_id: AccountId,
    /// The unstaked balance that can be withdrawn once it is available.
    pub unstaked_balance: U128,
    pub staked_balance: U128,
    pub available_when: U64,
    /// Whether the unstaked balance is available for withdrawal now.
    pub can_withdraw: bool,
}

impl StakingPoolAccount {
    pub fn new(account_id: AccountId, account: &StakeAccount, now: u64) -> Self {
        Self {
            account_id,
            unstaked_balance: account.unstaked_balance.into(),
            staked_balance: account.staked_balance.into(),
            available_when: account.available_when.into(),
            can_withdraw: account.can_withdraw(now),
        }
    }
}
