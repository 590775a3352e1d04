use near_sdk::json_types::ValidAccountId;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};

/// SHA-256 digest used as the fixed size storage key for account records
#[derive(
    BorshDeserialize,
    BorshSerialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Ord,
    PartialOrd,
    Default,
)]
pub struct Hash([u8; 32]);

impl Hash {
    const LENGTH: usize = 32;
}

impl From<&[u8]> for Hash {
    fn from(value: &[u8]) -> Self {
        assert!(!value.is_empty(), "value cannot be empty");
        let mut buf = [0u8; Hash::LENGTH];
        let hash = env::sha256(value);
        buf.copy_from_slice(&hash.as_slice()[..Hash::LENGTH]);
        Self(buf)
    }
}

impl From<&str> for Hash {
    fn from(value: &str) -> Self {
        value.as_bytes().into()
    }
}

impl From<&String> for Hash {
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}

impl From<&ValidAccountId> for Hash {
    fn from(value: &ValidAccountId) -> Self {
        value.as_ref().as_str().into()
    }
}
