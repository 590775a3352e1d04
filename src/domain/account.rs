use crate::core::Hash;
use crate::domain::{TokenAmount, YoctoNear};
use crate::errors::fungible_token::INSUFFICIENT_BALANCE;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::ops::{Deref, DerefMut};

/// Balance ledger entry. An account is registered when a record exists for it.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Account {
    /// account pays a fixed storage fee when it registers, which is escrowed by the contract
    pub storage_escrow: YoctoNear,
    balance: TokenAmount,
}

impl Account {
    pub fn new(storage_escrow: YoctoNear) -> Self {
        Self {
            storage_escrow,
            balance: TokenAmount::default(),
        }
    }

    pub fn balance(&self) -> TokenAmount {
        self.balance
    }

    pub fn has_funds(&self) -> bool {
        self.balance.value() > 0
    }

    /// ## Panics
    /// if overflow occurs
    pub fn credit(&mut self, amount: TokenAmount) {
        self.balance += amount;
    }

    /// ## Panics
    /// if the balance is insufficient
    pub fn debit(&mut self, amount: TokenAmount) {
        assert!(self.balance >= amount, "{}", INSUFFICIENT_BALANCE);
        self.balance -= amount;
    }
}

/// [Account] paired with the hashed account ID it is stored under
pub struct RegisteredAccount {
    pub account: Account,
    pub id: Hash,
}

impl Deref for RegisteredAccount {
    type Target = Account;

    fn deref(&self) -> &Self::Target {
        &self.account
    }
}

impl DerefMut for RegisteredAccount {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.account
    }
}
