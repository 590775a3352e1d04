//! centralizes all error messages

pub mod asserts {
    pub const PREDECESSOR_MUST_BE_SELF: &str = "contract call is only allowed internally";
    pub const PREDECESSOR_MUST_BE_OWNER: &str =
        "contract call is only allowed by the contract owner";
    pub const ATTACHED_DEPOSIT_IS_REQUIRED: &str = "attached deposit is required";
    pub const YOCTO_NEAR_MUST_BE_ATTACHED: &str = "exactly 1 yoctoNEAR must be attached";
    pub const ZERO_AMOUNT: &str = "amount must not be zero";
    pub const INSUFFICIENT_GAS: &str = "not enough gas was attached to complete the exchange";
}

pub mod account_management {
    pub const INSUFFICIENT_STORAGE_FEE: &str =
        "sufficient deposit is required to pay for account storage fees";

    pub const ACCOUNT_ALREADY_REGISTERED: &str = "account is already registered";

    pub const ACCOUNT_NOT_REGISTERED: &str = "account is not registered";
}

pub mod fungible_token {
    pub const INSUFFICIENT_BALANCE: &str = "account token balance is insufficient";

    pub const SENDER_IS_RECEIVER: &str = "sender and receiver must not be the same account";
}

pub mod reserve_cache {
    pub const REFRESH_IN_PROGRESS: &str = "a reserve cache refresh is already in progress";

    pub const CACHE_NOT_INITIALIZED: &str =
        "the pool party reserve has not been cached yet - the owner must refresh the cache";

    pub const TOO_CLOSE_TO_RAFFLE: &str =
        "exchanges are blocked right before the raffle - wait for the raffle, then refresh the cache";
}

pub mod token_exchange {
    pub const TOKEN_AMOUNT_TOO_SMALL: &str = "token amount is too small to be exchanged for tickets";

    pub const RESERVE_INSUFFICIENT: &str = "cached pool party reserve is insufficient";

    pub const RESERVE_IS_EMPTY: &str = "cached pool party reserve is empty";

    pub const NO_CIRCULATING_SUPPLY: &str = "there are no circulating tokens";

    pub const NEAR_AMOUNT_TOO_SMALL: &str = "attached deposit is too small to buy any tokens";

    pub const NOT_ENOUGH_TOKENS_TO_SELL: &str = "contract does not have enough tokens to sell";
}

pub mod contract_owner {
    pub const TRANSFER_TO_NON_REGISTERED_ACCOUNT: &str =
        "contract ownership can only be transferred to a registered account";
}

pub mod illegal_state {
    pub const PENDING_EXCHANGE_SHOULD_EXIST: &str =
        "ILLEGAL STATE : pending exchange should exist";

    pub const PENDING_EXCHANGE_KIND_MISMATCH: &str =
        "ILLEGAL STATE : pending exchange kind does not match the callback";

    pub const NO_REFRESH_PENDING: &str = "ILLEGAL STATE : there is no reserve cache refresh pending";
}
