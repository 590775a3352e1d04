use crate::domain::{Gas, YoctoNear, TGAS};
use crate::interface;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// 0.00125 NEAR - covers the storage staking cost for an account record
pub const DEFAULT_ACCOUNT_STORAGE_FEE: u128 = 1_250_000_000_000_000_000_000;

/// 1% of the reserve share is retained by the pool as a fee
pub const DEFAULT_EXCHANGE_FEE_BPS: u16 = 100;

/// 5 minutes in nanoseconds
pub const DEFAULT_RAFFLE_GUARD_WINDOW: u64 = 5 * 60 * 1_000_000_000;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Config {
    account_storage_fee: YoctoNear,
    exchange_fee_bps: u16,
    /// exchanges are blocked when the next raffle is within this window, expressed in nanoseconds
    raffle_guard_window: u64,
    gas_config: GasConfig,
}

impl Config {
    pub fn account_storage_fee(&self) -> YoctoNear {
        self.account_storage_fee
    }

    pub fn exchange_fee_bps(&self) -> u16 {
        self.exchange_fee_bps
    }

    pub fn raffle_guard_window(&self) -> u64 {
        self.raffle_guard_window
    }

    pub fn gas_config(&self) -> &GasConfig {
        &self.gas_config
    }

    /// ## Panics
    /// if the updated config is invalid
    pub fn apply_updates(&mut self, config: &interface::Config) {
        if let Some(account_storage_fee) = config.account_storage_fee.as_ref() {
            self.account_storage_fee = account_storage_fee.value().into();
        }
        if let Some(exchange_fee_bps) = config.exchange_fee_bps {
            assert!(
                exchange_fee_bps as u128 <= crate::domain::BASIS_POINTS,
                "exchange fee must not exceed 10000 BPS"
            );
            self.exchange_fee_bps = exchange_fee_bps;
        }
        if let Some(raffle_guard_window) = config.raffle_guard_window.as_ref() {
            self.raffle_guard_window = raffle_guard_window.0;
        }
        if let Some(gas_config) = config.gas_config.as_ref() {
            self.gas_config.update(gas_config);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_storage_fee: DEFAULT_ACCOUNT_STORAGE_FEE.into(),
            exchange_fee_bps: DEFAULT_EXCHANGE_FEE_BPS,
            raffle_guard_window: DEFAULT_RAFFLE_GUARD_WINDOW,
            gas_config: GasConfig::default(),
        }
    }
}

/// gas that is burnt by the exchange func call itself before it hands off to pool party
const EXCHANGE_BASE_GAS: Gas = Gas(10_000_000_000_000);

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Default)]
pub struct GasConfig {
    pool_party: PoolPartyGasConfig,
    callbacks: CallBacksGasConfig,
}

impl GasConfig {
    pub fn pool_party(&self) -> &PoolPartyGasConfig {
        &self.pool_party
    }

    pub fn callbacks(&self) -> &CallBacksGasConfig {
        &self.callbacks
    }

    /// minimum prepaid gas required by [`exchange_tokens_for_tickets`](crate::interface::TokenExchange::exchange_tokens_for_tickets)
    pub fn min_gas_for_tokens_for_tickets(&self) -> Gas {
        EXCHANGE_BASE_GAS
            + self.pool_party.give_from_reserve
            + self.callbacks.on_exchange_tokens_for_tickets
    }

    /// minimum prepaid gas required by [`exchange_near_for_tokens`](crate::interface::TokenExchange::exchange_near_for_tokens)
    pub fn min_gas_for_near_for_tokens(&self) -> Gas {
        EXCHANGE_BASE_GAS
            + self.pool_party.deposit_and_stake
            + self.callbacks.on_exchange_near_for_tokens
    }

    pub fn update(&mut self, config: &interface::GasConfig) {
        if let Some(pool_party) = config.pool_party.as_ref() {
            self.pool_party.update(pool_party);
        }
        if let Some(callbacks) = config.callbacks.as_ref() {
            self.callbacks.update(callbacks);
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct PoolPartyGasConfig {
    give_from_reserve: Gas,
    deposit_and_stake: Gas,
    get_pool_info: Gas,
}

impl Default for PoolPartyGasConfig {
    fn default() -> Self {
        Self {
            give_from_reserve: TGAS * 10,
            deposit_and_stake: TGAS * 10,
            get_pool_info: TGAS * 5,
        }
    }
}

impl PoolPartyGasConfig {
    pub fn give_from_reserve(&self) -> Gas {
        self.give_from_reserve
    }

    pub fn deposit_and_stake(&self) -> Gas {
        self.deposit_and_stake
    }

    pub fn get_pool_info(&self) -> Gas {
        self.get_pool_info
    }

    pub fn update(&mut self, config: &interface::PoolPartyGasConfig) {
        if let Some(gas) = config.give_from_reserve {
            self.give_from_reserve = gas;
        }
        if let Some(gas) = config.deposit_and_stake {
            self.deposit_and_stake = gas;
        }
        if let Some(gas) = config.get_pool_info {
            self.get_pool_info = gas;
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct CallBacksGasConfig {
    on_exchange_tokens_for_tickets: Gas,
    on_exchange_near_for_tokens: Gas,
    on_cache_pool_party_reserve: Gas,
}

impl Default for CallBacksGasConfig {
    fn default() -> Self {
        Self {
            on_exchange_tokens_for_tickets: TGAS * 10,
            on_exchange_near_for_tokens: TGAS * 10,
            on_cache_pool_party_reserve: TGAS * 5,
        }
    }
}

impl CallBacksGasConfig {
    pub fn on_exchange_tokens_for_tickets(&self) -> Gas {
        self.on_exchange_tokens_for_tickets
    }

    pub fn on_exchange_near_for_tokens(&self) -> Gas {
        self.on_exchange_near_for_tokens
    }

    pub fn on_cache_pool_party_reserve(&self) -> Gas {
        self.on_cache_pool_party_reserve
    }

    pub fn update(&mut self, config: &interface::CallBacksGasConfig) {
        if let Some(gas) = config.on_exchange_tokens_for_tickets {
            self.on_exchange_tokens_for_tickets = gas;
        }
        if let Some(gas) = config.on_exchange_near_for_tokens {
            self.on_exchange_near_for_tokens = gas;
        }
        if let Some(gas) = config.on_cache_pool_party_reserve {
            self.on_cache_pool_party_reserve = gas;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use near_sdk::json_types::U64;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(
            config.account_storage_fee(),
            1_250_000_000_000_000_000_000.into()
        );
        assert_eq!(config.exchange_fee_bps(), 100);
        assert_eq!(config.raffle_guard_window(), 300_000_000_000);
        assert_eq!(
            config.gas_config().min_gas_for_tokens_for_tickets(),
            TGAS * 30
        );
    }

    #[test]
    fn apply_partial_updates() {
        let mut config = Config::default();
        config.apply_updates(&interface::Config {
            account_storage_fee: None,
            exchange_fee_bps: Some(50),
            raffle_guard_window: Some(U64(1000)),
            gas_config: Some(interface::GasConfig {
                pool_party: Some(interface::PoolPartyGasConfig {
                    give_from_reserve: Some(TGAS * 20),
                    deposit_and_stake: None,
                    get_pool_info: None,
                }),
                callbacks: None,
            }),
        });

        assert_eq!(config.exchange_fee_bps(), 50);
        assert_eq!(config.raffle_guard_window(), 1000);
        assert_eq!(config.gas_config().pool_party().give_from_reserve(), TGAS * 20);
        assert_eq!(config.gas_config().pool_party().deposit_and_stake(), TGAS * 10);
        assert_eq!(
            config.account_storage_fee(),
            DEFAULT_ACCOUNT_STORAGE_FEE.into()
        );
    }

    #[test]
    #[should_panic(expected = "exchange fee must not exceed 10000 BPS")]
    fn fee_above_100_percent() {
        let mut config = Config::default();
        config.apply_updates(&interface::Config {
            account_storage_fee: None,
            exchange_fee_bps: Some(10_001),
            raffle_guard_window: None,
            gas_config: None,
        });
    }
}
