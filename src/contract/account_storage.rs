use crate::domain::Account;
use crate::errors::account_management::{ACCOUNT_ALREADY_REGISTERED, INSUFFICIENT_STORAGE_FEE};
use crate::interface::{account_storage::events, AccountStorage, StorageBalance, YoctoNear};
use crate::near::log;
use crate::*;
use near_sdk::{
    json_types::{ValidAccountId, U128},
    near_bindgen, Promise,
};

#[near_bindgen]
impl AccountStorage for PoolTokenContract {
    #[payable]
    fn storage_deposit(&mut self, account_id: Option<ValidAccountId>) -> StorageBalance {
        let account_id = account_id.map_or_else(env::predecessor_account_id, |account_id| {
            account_id.as_ref().to_string()
        });
        assert!(
            self.lookup_registered_account(&account_id).is_none(),
            "{}",
            ACCOUNT_ALREADY_REGISTERED
        );

        let storage_fee = self.config.account_storage_fee();
        let deposit: domain::YoctoNear = env::attached_deposit().into();
        assert!(deposit >= storage_fee, "{}", INSUFFICIENT_STORAGE_FEE);

        self.insert_account(&account_id, Account::new(storage_fee));
        self.total_account_storage_escrow += storage_fee;
        log(events::AccountRegistered {
            account_id: &account_id,
            storage_fee: storage_fee.value(),
        });

        let refund = deposit - storage_fee;
        if refund.value() > 0 {
            Promise::new(env::predecessor_account_id()).transfer(refund.value());
        }

        StorageBalance {
            total: storage_fee.into(),
            available: 0.into(),
        }
    }

    fn storage_minimum_balance(&self) -> YoctoNear {
        self.config.account_storage_fee().into()
    }

    fn storage_balance_of(&self, account_id: ValidAccountId) -> StorageBalance {
        self.lookup_registered_account(account_id.as_ref())
            .map_or_else(StorageBalance::default, |account| StorageBalance {
                total: account.storage_escrow.into(),
                available: 0.into(),
            })
    }

    fn account_registered(&self, account_id: ValidAccountId) -> bool {
        self.lookup_registered_account(account_id.as_ref())
            .is_some()
    }

    fn total_registered_accounts(&self) -> U128 {
        self.accounts_len.into()
    }
}
