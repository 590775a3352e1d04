use crate::errors::asserts::ZERO_AMOUNT;
use crate::errors::fungible_token::SENDER_IS_RECEIVER;
use crate::interface::{
    fungible_token::events, FungibleToken, FungibleTokenMetadataProvider, Metadata, TokenAmount,
};
use crate::near::{assert_yocto_near_attached, log};
use crate::*;
use near_sdk::{json_types::ValidAccountId, near_bindgen};

#[near_bindgen]
impl FungibleToken for PoolTokenContract {
    #[payable]
    fn ft_transfer(&mut self, receiver_id: ValidAccountId, amount: TokenAmount, memo: Option<String>) {
        assert_yocto_near_attached();
        assert!(amount.value() > 0, "{}", ZERO_AMOUNT);
        let sender_id = env::predecessor_account_id();
        assert_ne!(
            sender_id.as_str(),
            receiver_id.as_ref().as_str(),
            "{}",
            SENDER_IS_RECEIVER
        );

        self.transfer_tokens(&sender_id, receiver_id.as_ref(), amount.into());
        log(events::Transfer {
            from: &sender_id,
            to: receiver_id.as_ref(),
            amount: amount.value(),
            memo: memo.as_deref(),
        });
    }

    fn ft_total_supply(&self) -> TokenAmount {
        self.total_supply.into()
    }

    fn ft_balance_of(&self, account_id: ValidAccountId) -> TokenAmount {
        self.lookup_registered_account(account_id.as_ref())
            .map_or_else(TokenAmount::default, |account| account.balance().into())
    }
}

#[near_bindgen]
impl FungibleTokenMetadataProvider for PoolTokenContract {
    fn ft_metadata(&self) -> Metadata {
        Metadata::default()
    }
}
