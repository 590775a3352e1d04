mod config;
mod exchange;
mod pool_info;
mod reserve_cache;

pub use config::*;
pub use exchange::*;
pub use pool_info::PoolInfo;
pub use reserve_cache::ReserveCache;

use crate::domain;
use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct YoctoNear(pub U128);

impl Default for YoctoNear {
    fn default() -> Self {
        Self(U128(0))
    }
}

impl From<domain::YoctoNear> for YoctoNear {
    fn from(value: domain::YoctoNear) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for YoctoNear {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl YoctoNear {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct TokenAmount(pub U128);

impl Default for TokenAmount {
    fn default() -> Self {
        Self(U128(0))
    }
}

impl From<domain::TokenAmount> for TokenAmount {
    fn from(value: domain::TokenAmount) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl TokenAmount {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ExchangeId(pub U128);

impl From<domain::ExchangeId> for ExchangeId {
    fn from(value: domain::ExchangeId) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for ExchangeId {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct BlockTimestamp(pub U64);

impl From<domain::BlockTimestamp> for BlockTimestamp {
    fn from(value: domain::BlockTimestamp) -> Self {
        Self(value.0.into())
    }
}

impl BlockTimestamp {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use near_sdk::serde_json;

    #[test]
    fn amounts_are_json_strings() {
        let amount = TokenAmount::from(100_000);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"100000\"");
        let amount: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount.value(), 100_000);

        let json = serde_json::to_string(&BlockTimestamp::from(domain::BlockTimestamp(5))).unwrap();
        assert_eq!(json, "\"5\"");
    }

    #[test]
    fn default_amounts_are_zero() {
        assert_eq!(TokenAmount::default().value(), 0);
        assert_eq!(YoctoNear::default().value(), 0);
    }
}
