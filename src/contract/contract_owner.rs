use crate::errors::contract_owner::TRANSFER_TO_NON_REGISTERED_ACCOUNT;
use crate::interface::{contract_owner::events, Config, ContractOwner};
use crate::near::log;
use crate::*;
use near_sdk::{json_types::ValidAccountId, near_bindgen};

#[near_bindgen]
impl ContractOwner for PoolTokenContract {
    fn owner_id(&self) -> AccountId {
        self.owner_id.clone()
    }

    fn transfer_ownership(&mut self, new_owner: ValidAccountId) {
        self.assert_predecessor_is_owner();
        assert!(
            self.lookup_registered_account(new_owner.as_ref()).is_some(),
            "{}",
            TRANSFER_TO_NON_REGISTERED_ACCOUNT
        );
        log(events::OwnershipTransferred {
            from: &self.owner_id,
            to: new_owner.as_ref(),
        });
        self.owner_id = new_owner.as_ref().to_string();
    }

    fn update_config(&mut self, config: Config) -> Config {
        self.assert_predecessor_is_owner();
        self.config.apply_updates(&config);
        (&self.config).into()
    }

    fn config(&self) -> Config {
        (&self.config).into()
    }
}
