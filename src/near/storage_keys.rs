//! This module is used to centralize NEAR SDK Collection IDs to ensure duplicates are not defined
//!
//! Each NEAR SDK persistent collection must be defined with a unique ID, which is used to store the
//! collection in the TRIE. Each of the IDs defined below should only be referenced once within the
//! project.
//!
//! The pool party contract uses upper case letters for its prefixes, which keeps both contracts
//! apart when they share a mocked blockchain in tests.

pub const ACCOUNTS_KEY_PREFIX: [u8; 1] = [0];
pub const PENDING_EXCHANGES_KEY_PREFIX: [u8; 1] = [1];
