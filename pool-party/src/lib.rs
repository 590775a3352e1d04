//! Pool Party staking pool
//!
//! Accounts stake NEAR with the pool. Staked balances are the raffle tickets: the raffle winner is drawn
//! weighted by stake and is paid the prize, which is funded from the pool reserve. The reserve is
//! replenished by the fees that the token exchange contract retains when it converts tokens into tickets.

pub mod account;
pub mod errors;
pub mod raffle;

pub use account::{StakeAccount, StakingPoolAccount};
pub use raffle::{RaffleResult, StakeWeighted, WinnerSelection};

use crate::errors::*;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::UnorderedMap,
    env,
    json_types::{ValidAccountId, U128, U64},
    log, near_bindgen,
    serde::{Deserialize, Serialize},
    setup_alloc, AccountId, Balance, PanicOnDefault, Promise,
};
use std::fmt::Debug;

setup_alloc!();

/// storage key prefixes must not collide with the token exchange contract's prefixes
const ACCOUNTS_KEY_PREFIX: &[u8] = b"P";

/// 1 day in nanoseconds
pub const DEFAULT_RAFFLE_INTERVAL: u64 = 86_400 * 1_000_000_000;
/// 4 epochs, which is roughly 48 hours in nanoseconds
pub const DEFAULT_UNLOCK_DELAY: u64 = 4 * 12 * 3600 * 1_000_000_000;
/// 10% of the reserve is moved into the prize on each raffle
pub const DEFAULT_PRIZE_FUNDING_BPS: u16 = 1000;

#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolConfig {
    /// nanoseconds between raffles
    pub raffle_interval: U64,
    /// nanoseconds that unstaked funds are locked before they can be withdrawn
    pub unlock_delay: U64,
    pub prize_funding_bps: u16,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            raffle_interval: DEFAULT_RAFFLE_INTERVAL.into(),
            unlock_delay: DEFAULT_UNLOCK_DELAY.into(),
            prize_funding_bps: DEFAULT_PRIZE_FUNDING_BPS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolInfo {
    pub total_staked: U128,
    pub prize: U128,
    pub reserve: U128,
    /// exchange fees that are moved into the reserve on the next raffle
    pub accrued_fees: U128,
    pub next_raffle_at: U64,
    pub raffle_due: bool,
}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct PoolParty {
    owner_id: AccountId,
    /// the only account that may give from the reserve
    token_exchange_id: Option<AccountId>,
    config: PoolConfig,

    accounts: UnorderedMap<AccountId, StakeAccount>,
    total_staked: Balance,

    prize: Balance,
    reserve: Balance,
    accrued_fees: Balance,
    next_raffle_at: u64,
    raffle_count: u64,
}

#[near_bindgen]
impl PoolParty {
    #[init]
    pub fn new(
        owner_id: ValidAccountId,
        token_exchange_id: Option<ValidAccountId>,
        config: Option<PoolConfig>,
    ) -> Self {
        let config = config.unwrap_or_default();
        assert!(
            config.prize_funding_bps <= 10_000,
            "{}",
            INVALID_PRIZE_FUNDING_BPS
        );
        Self {
            owner_id: owner_id.into(),
            token_exchange_id: token_exchange_id.map(Into::into),
            next_raffle_at: env::block_timestamp() + config.raffle_interval.0,
            config,
            accounts: UnorderedMap::new(ACCOUNTS_KEY_PREFIX.to_vec()),
            total_staked: 0,
            prize: 0,
            reserve: 0,
            accrued_fees: 0,
            raffle_count: 0,
        }
    }

    /// Stakes the attached deposit on behalf of the predecessor account.
    #[payable]
    pub fn deposit_and_stake(&mut self) {
        let amount = env::attached_deposit();
        assert!(amount > 0, "{}", ZERO_DEPOSIT);
        let account_id = env::predecessor_account_id();
        let mut account = self.account(&account_id);
        account.stake(amount);
        self.accounts.insert(&account_id, &account);
        self.total_staked += amount;
        log_event(events::Staked {
            account_id: &account_id,
            amount,
        });
    }

    /// Grows the reserve, which funds the raffle prize.
    #[payable]
    pub fn deposit_to_reserve(&mut self) {
        let amount = env::attached_deposit();
        assert!(amount > 0, "{}", ZERO_DEPOSIT);
        self.reserve += amount;
        log_event(events::ReserveFunded {
            account_id: &env::predecessor_account_id(),
            amount,
        });
    }

    /// Stakes `amount` from the reserve on behalf of `to`. `fee` is also taken out of the reserve and
    /// is accrued until the next raffle puts it back into the reserve.
    ///
    /// ## Panics
    /// - if the predecessor is not the token exchange
    /// - if amount and fee are both zero
    /// - if the reserve is insufficient
    pub fn give_from_reserve(&mut self, to: ValidAccountId, amount: U128, fee: U128) {
        assert_eq!(
            Some(env::predecessor_account_id()),
            self.token_exchange_id,
            "{}",
            PREDECESSOR_MUST_BE_TOKEN_EXCHANGE
        );
        let total = amount.0 + fee.0;
        assert!(total > 0, "{}", ZERO_AMOUNT);
        assert!(self.reserve >= total, "{}", RESERVE_INSUFFICIENT);

        self.reserve -= total;
        self.accrued_fees += fee.0;
        let mut account = self.account(to.as_ref());
        account.stake(amount.0);
        self.accounts.insert(to.as_ref(), &account);
        self.total_staked += amount.0;
        log_event(events::GivenFromReserve {
            to: to.as_ref(),
            amount: amount.0,
            fee: fee.0,
        });
    }

    /// Unstaked funds are locked for [PoolConfig::unlock_delay].
    pub fn unstake(&mut self, amount: U128) {
        assert!(amount.0 > 0, "{}", ZERO_AMOUNT);
        let account_id = env::predecessor_account_id();
        let mut account = self.account(&account_id);
        account.unstake(amount.0, self.unlock_at());
        self.accounts.insert(&account_id, &account);
        self.total_staked -= amount.0;
        log!("{} unstaked {}", account_id, amount.0);
    }

    pub fn withdraw_all(&mut self) -> U128 {
        let account_id = env::predecessor_account_id();
        let mut account = self.account(&account_id);
        assert!(
            account.can_withdraw(env::block_timestamp()),
            "{}",
            ACCOUNT_CANNOT_WITHDRAW_YET
        );
        let amount = account.withdraw_all();
        self.accounts.insert(&account_id, &account);
        Promise::new(account_id).transfer(amount);
        amount.into()
    }

    /// Draws the raffle winner, when the raffle is due. Anyone may trigger the raffle.
    ///
    /// 1. accrued fees are moved into the reserve
    /// 2. the prize is funded with [PoolConfig::prize_funding_bps] of the reserve
    /// 3. the winner is drawn weighted by stake
    /// 4. the prize is paid into the winner's unstaked balance, which is locked for [PoolConfig::unlock_delay]
    pub fn raffle(&mut self) -> RaffleResult {
        self.run_raffle(&StakeWeighted)
    }

    pub fn set_token_exchange(&mut self, account_id: ValidAccountId) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "{}",
            PREDECESSOR_MUST_BE_OWNER
        );
        self.token_exchange_id = Some(account_id.into());
    }

    /// returns a zeroed snapshot for unknown accounts
    pub fn get_account(&self, account_id: ValidAccountId) -> StakingPoolAccount {
        let account = self.account(account_id.as_ref());
        StakingPoolAccount::new(account_id.into(), &account, env::block_timestamp())
    }

    pub fn get_pool_info(&self) -> PoolInfo {
        PoolInfo {
            total_staked: self.total_staked.into(),
            prize: self.prize.into(),
            reserve: self.reserve.into(),
            accrued_fees: self.accrued_fees.into(),
            next_raffle_at: self.next_raffle_at.into(),
            raffle_due: env::block_timestamp() >= self.next_raffle_at,
        }
    }

    pub fn get_config(&self) -> PoolConfig {
        self.config.clone()
    }

    pub fn get_token_exchange_id(&self) -> Option<AccountId> {
        self.token_exchange_id.clone()
    }
}

impl PoolParty {
    fn account(&self, account_id: &str) -> StakeAccount {
        self.accounts
            .get(&account_id.to_string())
            .unwrap_or_default()
    }

    fn unlock_at(&self) -> u64 {
        env::block_timestamp() + self.config.unlock_delay.0
    }

    pub fn run_raffle<S: WinnerSelection>(&mut self, selection: &S) -> RaffleResult {
        let now = env::block_timestamp();
        if now < self.next_raffle_at {
            return RaffleResult::NotDue {
                next_raffle_at: self.next_raffle_at.into(),
            };
        }

        let participants: Vec<(AccountId, Balance)> = self
            .accounts
            .iter()
            .filter(|(_, account)| account.staked_balance > 0)
            .map(|(account_id, account)| (account_id, account.staked_balance))
            .collect();
        let winner_id = match selection.select(&participants, &self.entropy()) {
            Some(account_id) => account_id.clone(),
            None => return RaffleResult::NoEligibleParticipants,
        };

        self.reserve += self.accrued_fees;
        self.accrued_fees = 0;
        let prize_funding = raffle::bps_of(self.reserve, self.config.prize_funding_bps);
        self.reserve -= prize_funding;
        self.prize += prize_funding;

        let prize = self.prize;
        let mut winner = self.account(&winner_id);
        winner.credit_unstaked(prize, self.unlock_at());
        self.accounts.insert(&winner_id, &winner);
        self.prize = 0;
        self.next_raffle_at = now + self.config.raffle_interval.0;
        self.raffle_count += 1;

        log_event(events::RaffleWinner {
            account_id: &winner_id,
            prize,
            prize_funding,
            raffle_count: self.raffle_count,
        });
        RaffleResult::Winner {
            account_id: winner_id,
            prize: prize.into(),
            raffle_count: self.raffle_count.into(),
            next_raffle_at: self.next_raffle_at.into(),
        }
    }

    /// `sha256(random_seed ++ raffle_count)`
    fn entropy(&self) -> [u8; 32] {
        let mut seed = env::random_seed();
        seed.extend_from_slice(&self.raffle_count.to_le_bytes());
        let mut entropy = [0u8; 32];
        entropy.copy_from_slice(&env::sha256(&seed));
        entropy
    }
}

/// wrapper around `near_sdk::env::log()` which supports structured logging
fn log_event<T: Debug>(event: T) {
    env::log(format!("{:#?}", event).as_bytes());
}

pub mod events {
    use near_sdk::Balance;

    #[derive(Debug)]
    pub struct Staked<'a> {
        pub account_id: &'a str,
        pub amount: Balance,
    }

    #[derive(Debug)]
    pub struct ReserveFunded<'a> {
        pub account_id: &'a str,
        pub amount: Balance,
    }

    #[derive(Debug)]
    pub struct GivenFromReserve<'a> {
        pub to: &'a str,
        pub amount: Balance,
        pub fee: Balance,
    }

    #[derive(Debug)]
    pub struct RaffleWinner<'a> {
        pub account_id: &'a str,
        pub prize: Balance,
        /// moved from the reserve into the prize
        pub prize_funding: Balance,
        pub raffle_count: u64,
    }
}
