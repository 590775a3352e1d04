use crate::config;
use crate::domain::Gas;
use crate::interface::YoctoNear;
use near_sdk::{
    json_types::U64,
    serde::{Deserialize, Serialize},
};

/// Every field is optional, which enables the config to be partially updated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Config {
    pub account_storage_fee: Option<YoctoNear>,
    pub exchange_fee_bps: Option<u16>,
    /// nanoseconds
    pub raffle_guard_window: Option<U64>,
    pub gas_config: Option<GasConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct GasConfig {
    pub pool_party: Option<PoolPartyGasConfig>,
    pub callbacks: Option<CallBacksGasConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolPartyGasConfig {
    pub give_from_reserve: Option<Gas>,
    pub deposit_and_stake: Option<Gas>,
    pub get_pool_info: Option<Gas>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct CallBacksGasConfig {
    pub on_exchange_tokens_for_tickets: Option<Gas>,
    pub on_exchange_near_for_tokens: Option<Gas>,
    pub on_cache_pool_party_reserve: Option<Gas>,
}

impl From<&config::Config> for Config {
    fn from(config: &config::Config) -> Self {
        let gas_config = config.gas_config();
        Self {
            account_storage_fee: Some(config.account_storage_fee().into()),
            exchange_fee_bps: Some(config.exchange_fee_bps()),
            raffle_guard_window: Some(config.raffle_guard_window().into()),
            gas_config: Some(GasConfig {
                pool_party: Some(PoolPartyGasConfig {
                    give_from_reserve: Some(gas_config.pool_party().give_from_reserve()),
                    deposit_and_stake: Some(gas_config.pool_party().deposit_and_stake()),
                    get_pool_info: Some(gas_config.pool_party().get_pool_info()),
                }),
                callbacks: Some(CallBacksGasConfig {
                    on_exchange_tokens_for_tickets: Some(
                        gas_config.callbacks().on_exchange_tokens_for_tickets(),
                    ),
                    on_exchange_near_for_tokens: Some(
                        gas_config.callbacks().on_exchange_near_for_tokens(),
                    ),
                    on_cache_pool_party_reserve: Some(
                        gas_config.callbacks().on_cache_pool_party_reserve(),
                    ),
                }),
            }),
        }
    }
}
