pub mod storage_keys;

use crate::domain::{CallFailure, CallOutcome, YoctoNear};
use crate::errors::asserts::{PREDECESSOR_MUST_BE_SELF, YOCTO_NEAR_MUST_BE_ATTACHED};
use near_sdk::{env, PromiseResult};
use std::fmt::Debug;

/// YOCTO = 10^24
pub const YOCTO: u128 = 1_000_000_000_000_000_000_000_000;

/// Used to indicate that no deposit is being attached to a cross contract func call
pub const NO_DEPOSIT: YoctoNear = YoctoNear(0);

/// asserts that predecessor account is the contract itself - used to enforce that callbacks
/// should only be called internally - even though they are exposed on the public contract interface
pub fn assert_predecessor_is_self() {
    if env::predecessor_account_id() != env::current_account_id() {
        panic!("{}", PREDECESSOR_MUST_BE_SELF)
    }
}

/// requiring exactly 1 yoctoNEAR forces the call to be signed with a full access key
pub fn assert_yocto_near_attached() {
    assert_eq!(env::attached_deposit(), 1, "{}", YOCTO_NEAR_MUST_BE_ATTACHED)
}

/// wrapper around `near_sdk::env::log()` which supports structured logging
pub fn log<T: Debug>(event: T) {
    env::log(format!("{:#?}", event).as_bytes());
}

/// Reads the result of the single promise that the current callback is chained to.
pub fn promise_outcome() -> CallOutcome<Vec<u8>> {
    if env::promise_results_count() != 1 {
        return CallOutcome::Failure(CallFailure::NoResult);
    }
    match env::promise_result(0) {
        PromiseResult::Successful(bytes) => CallOutcome::Success(bytes),
        PromiseResult::Failed | PromiseResult::NotReady => {
            CallOutcome::Failure(CallFailure::Failed)
        }
    }
}
