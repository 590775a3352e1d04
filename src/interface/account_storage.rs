use crate::interface::YoctoNear;
use near_sdk::{
    json_types::{ValidAccountId, U128},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Default, PartialEq, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
pub struct StorageBalance {
    pub total: YoctoNear,
    /// the storage fee is fixed, thus nothing is ever available for withdrawal
    pub available: YoctoNear,
}

/// Account Storage Standard API - NEP-145
///
/// Accounts must register with the contract before they can hold tokens. Registration is paid for
/// with a fixed storage fee, which is escrowed by the contract.
pub trait AccountStorage {
    /// Registers an account with the contract.
    /// This function supports 2 deposit modes:
    ///
    /// 1. **self deposit** (`account_id` is not specified): predecessor account is used as the account
    /// 2. **third party deposit** (`account_id` is valid NEAR account ID):  the function caller is
    ///    paying the storage fee for the specified `account_id`
    ///
    /// The attached deposit must cover [storage_minimum_balance](AccountStorage::storage_minimum_balance).
    /// Any deposit above the storage fee is refunded to the predecessor account.
    ///
    /// ##### Returns
    /// The account's storage balance.
    ///
    /// ##### Panics
    /// - if the account is already registered
    /// - if the attached deposit is less than the account storage fee
    ///
    /// `#[payable]`
    fn storage_deposit(&mut self, account_id: Option<ValidAccountId>) -> StorageBalance;

    /// Used to look up the minimum balance required for the initial deposit.
    fn storage_minimum_balance(&self) -> YoctoNear;

    /// If the account is unknown to the contract then the total storage balance returned will be zero.
    fn storage_balance_of(&self, account_id: ValidAccountId) -> StorageBalance;

    fn account_registered(&self, account_id: ValidAccountId) -> bool;

    fn total_registered_accounts(&self) -> U128;
}

pub mod events {
    #[derive(Debug)]
    pub struct AccountRegistered<'a> {
        pub account_id: &'a str,
        pub storage_fee: u128,
    }
}
