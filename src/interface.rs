//! defines the interfaces that the contract exposes externally

pub mod account_storage;
pub mod contract_owner;
pub mod fungible_token;
mod model;
pub mod pool_party;
pub mod reserve_cache;
pub mod token_exchange;

pub use account_storage::{AccountStorage, StorageBalance};
pub use contract_owner::ContractOwner;
pub use fungible_token::{FungibleToken, FungibleTokenMetadataProvider, Metadata};
pub use model::*;
pub use pool_party::ext_pool_party;
pub use reserve_cache::{ext_reserve_cache_callbacks, PoolPartyReserve, ReserveCacheCallbacks};
pub use token_exchange::{ext_token_exchange_callbacks, TokenExchange, TokenExchangeCallbacks};
