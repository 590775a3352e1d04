pub mod account_storage;
pub mod contract_owner;
pub mod exchange_callbacks;
pub mod fungible_token;
pub mod reserve_cache;
pub mod settings;
pub mod token_exchange;

use crate::core::Hash;
use crate::domain::{Account, ExchangeRate, RegisteredAccount, TokenAmount};
use crate::errors::{
    account_management::ACCOUNT_NOT_REGISTERED, asserts::PREDECESSOR_MUST_BE_OWNER,
};
use crate::PoolTokenContract;
use near_sdk::env;

impl PoolTokenContract {
    /// asserts that the predecessor account ID must be the owner
    pub(crate) fn assert_predecessor_is_owner(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "{}",
            PREDECESSOR_MUST_BE_OWNER
        );
    }

    pub(crate) fn lookup_registered_account(&self, account_id: &str) -> Option<RegisteredAccount> {
        let id = Hash::from(account_id);
        self.accounts
            .get(&id)
            .map(|account| RegisteredAccount { account, id })
    }

    /// ## Panics
    /// if the account is not registered
    pub(crate) fn registered_account(&self, account_id: &str) -> RegisteredAccount {
        self.lookup_registered_account(account_id)
            .unwrap_or_else(|| panic!("{}", ACCOUNT_NOT_REGISTERED))
    }

    pub(crate) fn contract_account(&self) -> RegisteredAccount {
        self.registered_account(&env::current_account_id())
    }

    pub(crate) fn save_registered_account(&mut self, account: &RegisteredAccount) {
        self.accounts.insert(&account.id, &account.account);
    }

    pub(crate) fn insert_account(&mut self, account_id: &str, account: Account) {
        self.accounts.insert(&Hash::from(account_id), &account);
        self.accounts_len += 1;
    }

    /// tokens that are neither owned by the contract, nor on hold for an in-flight exchange
    pub(crate) fn circulating_supply(&self) -> TokenAmount {
        self.total_supply - self.contract_account().balance() - self.tokens_on_hold
    }

    /// prices exchanges against the cached reserve
    pub(crate) fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate::new(
            self.reserve_cache.cached_value(),
            self.circulating_supply(),
            self.config.exchange_fee_bps(),
        )
    }

    /// moves tokens between 2 registered accounts
    ///
    /// ## Panics
    /// - if either account is not registered
    /// - if the sender has insufficient funds
    pub(crate) fn transfer_tokens(&mut self, sender_id: &str, receiver_id: &str, amount: TokenAmount) {
        let mut sender = self.registered_account(sender_id);
        let mut receiver = self.registered_account(receiver_id);
        sender.debit(amount);
        receiver.credit(amount);
        self.save_registered_account(&sender);
        self.save_registered_account(&receiver);
    }
}
