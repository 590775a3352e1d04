//! centralizes all error messages

pub const PREDECESSOR_MUST_BE_OWNER: &str = "contract call is only allowed by the contract owner";

pub const PREDECESSOR_MUST_BE_TOKEN_EXCHANGE: &str =
    "only the token exchange contract may give from the reserve";

pub const ZERO_DEPOSIT: &str = "attached deposit must not be zero";

pub const ZERO_AMOUNT: &str = "amount must not be zero";

pub const RESERVE_INSUFFICIENT: &str = "reserve is insufficient";

pub const STAKED_BALANCE_INSUFFICIENT: &str = "staked balance is insufficient";

pub const UNSTAKED_BALANCE_IS_ZERO: &str = "unstaked balance is zero";

pub const ACCOUNT_CANNOT_WITHDRAW_YET: &str = "account cannot withdraw yet";

pub const INVALID_PRIZE_FUNDING_BPS: &str = "prize funding must not exceed 10000 BPS";
