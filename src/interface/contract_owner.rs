use crate::interface::Config;
use near_sdk::{json_types::ValidAccountId, AccountId};

pub trait ContractOwner {
    fn owner_id(&self) -> AccountId;

    /// Transfers contract ownership. Tokens are not transferred.
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner account
    /// - if the new owner is not registered
    fn transfer_ownership(&mut self, new_owner: ValidAccountId);

    /// Applies the specified config values. Config fields that are not specified are left as is.
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner account
    /// - if the updated config is invalid
    fn update_config(&mut self, config: Config) -> Config;

    fn config(&self) -> Config;
}

pub mod events {
    #[derive(Debug)]
    pub struct OwnershipTransferred<'a> {
        pub from: &'a str,
        pub to: &'a str,
    }
}
