use crate::interface::{Config, TokenAmount};
use near_sdk::{
    env,
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
};
use std::fmt::{self, Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
pub struct ContractSettings {
    pub owner_id: ValidAccountId,
    pub pool_party_id: ValidAccountId,
    /// defaults to [DEFAULT_TOTAL_SUPPLY](crate::DEFAULT_TOTAL_SUPPLY)
    pub total_supply: Option<TokenAmount>,
    /// overrides the default config values
    pub config: Option<Config>,
}

impl ContractSettings {
    /// depends on NEAR runtime env
    pub fn validate(&self) -> Option<InvalidContractSettings> {
        let contract_id = env::current_account_id();
        if contract_id.as_str() == self.owner_id.as_ref().as_str() {
            Some(InvalidContractSettings::OwnerMustNotBeContract)
        } else if contract_id.as_str() == self.pool_party_id.as_ref().as_str() {
            Some(InvalidContractSettings::PoolPartyMustNotBeContract)
        } else if self
            .total_supply
            .map_or(false, |total_supply| total_supply.value() == 0)
        {
            Some(InvalidContractSettings::ZeroTotalSupply)
        } else {
            None
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum InvalidContractSettings {
    OwnerMustNotBeContract,
    PoolPartyMustNotBeContract,
    ZeroTotalSupply,
}

impl Display for InvalidContractSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidContractSettings::OwnerMustNotBeContract => {
                write!(f, "owner account ID must not be the contract account ID")
            }
            InvalidContractSettings::PoolPartyMustNotBeContract => {
                write!(f, "pool party account ID must not be the contract account ID")
            }
            InvalidContractSettings::ZeroTotalSupply => write!(f, "total supply must not be zero"),
        }
    }
}
