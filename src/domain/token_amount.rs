use crate::interface;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// amount of $POOL expressed in the token's smallest unit
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct TokenAmount(pub u128);

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl TokenAmount {
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl From<TokenAmount> for u128 {
    fn from(value: TokenAmount) -> Self {
        value.0
    }
}

impl From<interface::TokenAmount> for TokenAmount {
    fn from(value: interface::TokenAmount) -> Self {
        Self(value.value())
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for TokenAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Sub for TokenAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for TokenAmount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
