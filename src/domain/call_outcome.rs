use near_sdk::{
    serde::{de::DeserializeOwned, Deserialize, Serialize},
    serde_json,
};

/// Why an upstream cross contract call is considered to have failed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub enum CallFailure {
    /// the callback was not given exactly one promise result
    NoResult,
    /// the remote call panicked or ran out of gas
    Failed,
    /// the remote call succeeded, but its return value could not be deserialized
    InvalidResponse,
}

/// Result of the remote call that a callback is resuming from.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome<T> {
    Success(T),
    Failure(CallFailure),
}

impl<T> CallOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success(_))
    }
}

impl CallOutcome<Vec<u8>> {
    /// deserializes the JSON payload returned by the remote contract
    pub fn parse_json<T: DeserializeOwned>(self) -> CallOutcome<T> {
        match self {
            CallOutcome::Success(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => CallOutcome::Success(value),
                Err(_) => CallOutcome::Failure(CallFailure::InvalidResponse),
            },
            CallOutcome::Failure(failure) => CallOutcome::Failure(failure),
        }
    }
}
