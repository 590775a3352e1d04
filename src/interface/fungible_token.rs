use crate::interface::TokenAmount;
use near_sdk::{
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
};

/// Fungible token core API, modeled after NEP-141
///
/// - accounts must be registered via [`AccountStorage`](crate::interface::AccountStorage) to hold tokens
/// - the total supply is fixed at deployment: tokens are never minted or burned
pub trait FungibleToken {
    /// Transfers `amount` of tokens from the predecessor account to `receiver_id`.
    ///
    /// The predecessor account is required to attach exactly 1 yoctoNEAR.
    ///
    /// ## Panics
    /// - if exactly 1 yoctoNEAR is not attached
    /// - if `amount` is zero
    /// - if the sender and receiver are the same account
    /// - if either account is not registered
    /// - if the sender has insufficient funds
    ///
    /// `#[payable]`
    fn ft_transfer(&mut self, receiver_id: ValidAccountId, amount: TokenAmount, memo: Option<String>);

    fn ft_total_supply(&self) -> TokenAmount;

    /// returns zero for unknown accounts
    fn ft_balance_of(&self, account_id: ValidAccountId) -> TokenAmount;
}

pub trait FungibleTokenMetadataProvider {
    fn ft_metadata(&self) -> Metadata;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Metadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<String>,
    pub decimals: u8,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            spec: "ft-1.0.0".to_string(),
            name: "Pool Party fungible token".to_string(),
            symbol: "$POOL".to_string(),
            icon: None,
            reference: None,
            reference_hash: None,
            decimals: 8,
        }
    }
}

pub mod events {
    #[derive(Debug)]
    pub struct Transfer<'a> {
        pub from: &'a str,
        pub to: &'a str,
        pub amount: u128,
        pub memo: Option<&'a str>,
    }
}
