pub mod config;
pub mod contract;
pub mod core;
pub mod domain;
pub mod errors;
pub mod interface;
pub mod near;

#[cfg(test)]
pub(crate) mod test_utils;

pub use contract::settings::*;

use crate::{
    config::Config,
    core::Hash,
    domain::{Account, ExchangeId, PendingExchange, ReserveCache, TokenAmount, YoctoNear},
    near::storage_keys::{ACCOUNTS_KEY_PREFIX, PENDING_EXCHANGES_KEY_PREFIX},
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
    env, near_bindgen, setup_alloc, AccountId, PanicOnDefault,
};

setup_alloc!();

/// 10 million tokens are credited to the owner when the contract is deployed
pub const DEFAULT_TOTAL_SUPPLY: u128 = 10_000_000;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct PoolTokenContract {
    owner_id: AccountId,
    pool_party_id: AccountId,
    config: Config,

    accounts: LookupMap<Hash, Account>,
    accounts_len: u128,
    total_account_storage_escrow: YoctoNear,
    /// fixed at deployment
    total_supply: TokenAmount,

    reserve_cache: ReserveCache,

    pending_exchanges: LookupMap<ExchangeId, PendingExchange>,
    pending_exchanges_len: u128,
    exchange_id_sequence: ExchangeId,
    /// contract tokens that are being sold by in-flight NEAR exchanges
    tokens_on_hold: TokenAmount,
    /// fees from committed ticket exchanges, which were retained by pool party
    total_fees: YoctoNear,
}

#[near_bindgen]
impl PoolTokenContract {
    /// ## Notes
    /// - the owner is credited with the total supply
    /// - both the owner and the contract accounts are registered without a storage fee
    ///
    /// ## Panics
    /// - if the settings are invalid
    #[init]
    pub fn new(settings: ContractSettings) -> Self {
        if let Some(err) = settings.validate() {
            panic!("{}", err);
        }

        let mut config = Config::default();
        if let Some(updates) = settings.config.as_ref() {
            config.apply_updates(updates);
        }
        let total_supply: TokenAmount = settings
            .total_supply
            .map_or(DEFAULT_TOTAL_SUPPLY.into(), Into::into);

        let mut contract = Self {
            owner_id: settings.owner_id.as_ref().to_string(),
            pool_party_id: settings.pool_party_id.as_ref().to_string(),
            config,
            accounts: LookupMap::new(ACCOUNTS_KEY_PREFIX.to_vec()),
            accounts_len: 0,
            total_account_storage_escrow: YoctoNear::default(),
            total_supply,
            reserve_cache: ReserveCache::default(),
            pending_exchanges: LookupMap::new(PENDING_EXCHANGES_KEY_PREFIX.to_vec()),
            pending_exchanges_len: 0,
            exchange_id_sequence: ExchangeId::default(),
            tokens_on_hold: TokenAmount::default(),
            total_fees: YoctoNear::default(),
        };

        let mut owner = Account::new(YoctoNear::default());
        owner.credit(total_supply);
        let owner_id = contract.owner_id.clone();
        contract.insert_account(&owner_id, owner);
        contract.insert_account(&env::current_account_id(), Account::new(YoctoNear::default()));

        contract
    }

    pub fn pool_party_id(&self) -> AccountId {
        self.pool_party_id.clone()
    }
}
