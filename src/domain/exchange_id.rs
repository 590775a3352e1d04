use crate::interface;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::ops::{Deref, DerefMut};

/// correlation ID that ties an in-flight cross contract exchange to its callback
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Default,
    Hash,
)]
pub struct ExchangeId(pub u128);

impl From<u128> for ExchangeId {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl ExchangeId {
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl From<ExchangeId> for u128 {
    fn from(value: ExchangeId) -> Self {
        value.0
    }
}

impl From<interface::ExchangeId> for ExchangeId {
    fn from(value: interface::ExchangeId) -> Self {
        ExchangeId(value.0 .0)
    }
}

impl Deref for ExchangeId {
    type Target = u128;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ExchangeId {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
