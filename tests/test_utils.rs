#![allow(dead_code)]

//! Runs the token exchange and pool party contracts side by side on a single mocked blockchain.
//!
//! Cross-contract calls are routed by hand: the remote pool party func is invoked with the token
//! exchange contract as predecessor, and its outcome is fed to the token exchange callback as the
//! promise result.

extern crate pool_party;
extern crate pool_party_token;

use near_sdk::{
    env, json_types::ValidAccountId, serde::Serialize, serde_json, testing_env, MockedBlockchain,
    PromiseResult, VMContext,
};
use pool_party::{PoolInfo, PoolParty, StakingPoolAccount};
use pool_party_token::{
    interface::{
        AccountStorage, ExchangeFailure, ExchangeId, ExchangeInfo, ExchangeReceipt, FungibleToken,
        PendingExchangeKind, PoolPartyReserve, ReserveCacheCallbacks, TokenExchange,
        TokenExchangeCallbacks,
    },
    near::YOCTO,
    ContractSettings, PoolTokenContract,
};
use std::convert::TryFrom;

pub const TOKEN_CONTRACT_ID: &str = "pool-token.near";
pub const POOL_PARTY_ID: &str = "pool-party.near";
pub const OWNER_ID: &str = "owner.near";

pub fn account_id(account_id: &str) -> ValidAccountId {
    ValidAccountId::try_from(account_id).unwrap()
}

pub fn new_context(current_account_id: &str, predecessor_account_id: &str) -> VMContext {
    VMContext {
        current_account_id: current_account_id.to_string(),
        signer_account_id: predecessor_account_id.to_string(),
        signer_account_pk: vec![0, 1, 2],
        predecessor_account_id: predecessor_account_id.to_string(),
        input: vec![],
        epoch_height: 0,
        block_index: 0,
        block_timestamp: 0,
        account_balance: 10_000 * YOCTO,
        account_locked_balance: 0,
        storage_usage: 10u64.pow(6),
        attached_deposit: 0,
        prepaid_gas: 10u64.pow(18),
        random_seed: vec![0, 1, 2],
        is_view: false,
        output_data_receivers: vec![],
    }
}

/// Outcome of a routed pool party func call
pub enum RemoteCall {
    Succeeds,
    Fails,
}

pub struct Workflow {
    pub token: PoolTokenContract,
    pub pool: PoolParty,
    pub block_timestamp: u64,
    exchange_count: u128,
}

impl Workflow {
    /// deploys both contracts - the pool party reserve is funded by the owner
    pub fn new(reserve: u128) -> Self {
        let mut context = new_context(POOL_PARTY_ID, OWNER_ID);
        testing_env!(context.clone());
        let mut pool = PoolParty::new(account_id(OWNER_ID), Some(account_id(TOKEN_CONTRACT_ID)), None);
        if reserve > 0 {
            context.attached_deposit = reserve;
            testing_env!(context);
            pool.deposit_to_reserve();
        }

        testing_env!(new_context(TOKEN_CONTRACT_ID, OWNER_ID));
        let token = PoolTokenContract::new(ContractSettings {
            owner_id: account_id(OWNER_ID),
            pool_party_id: account_id(POOL_PARTY_ID),
            total_supply: None,
            config: None,
        });

        Self {
            token,
            pool,
            block_timestamp: 0,
            exchange_count: 0,
        }
    }

    pub fn token_context(&self, predecessor: &str, attached_deposit: u128) {
        let mut context = new_context(TOKEN_CONTRACT_ID, predecessor);
        context.block_timestamp = self.block_timestamp;
        context.attached_deposit = attached_deposit;
        testing_env!(context);
    }

    pub fn pool_context(&self, predecessor: &str, attached_deposit: u128) {
        let mut context = new_context(POOL_PARTY_ID, predecessor);
        context.block_timestamp = self.block_timestamp;
        context.attached_deposit = attached_deposit;
        testing_env!(context);
    }

    /// the token exchange contract resumes in a callback that sees the specified promise result
    pub fn callback_context(&self, result: PromiseResult) {
        let mut context = new_context(TOKEN_CONTRACT_ID, TOKEN_CONTRACT_ID);
        context.block_timestamp = self.block_timestamp;
        let storage = env::take_blockchain_interface()
            .unwrap()
            .as_mut_mocked_blockchain()
            .unwrap()
            .take_storage();
        env::set_blockchain_interface(Box::new(MockedBlockchain::new(
            context,
            Default::default(),
            Default::default(),
            vec![result],
            storage,
            Default::default(),
            None,
        )));
    }

    pub fn register(&mut self, account: &str) {
        let fee = self.token.storage_minimum_balance().value();
        self.token_context(account, fee);
        self.token.storage_deposit(None);
    }

    pub fn transfer_tokens(&mut self, from: &str, to: &str, amount: u128) {
        self.token_context(from, 1);
        self.token.ft_transfer(account_id(to), amount.into(), None);
    }

    /// runs the full refresh round trip: `cache_pool_party_reserve` -> `get_pool_info` -> callback
    pub fn refresh_reserve_cache(&mut self) -> bool {
        let pool_info = self.start_reserve_refresh();
        self.finish_reserve_refresh(&pool_info)
    }

    /// `cache_pool_party_reserve` up to the point where pool party answered `get_pool_info`
    pub fn start_reserve_refresh(&mut self) -> PoolInfo {
        self.token_context(OWNER_ID, 0);
        self.token.cache_pool_party_reserve();

        self.pool_context(TOKEN_CONTRACT_ID, 0);
        self.pool.get_pool_info()
    }

    pub fn finish_reserve_refresh(&mut self, pool_info: &PoolInfo) -> bool {
        self.callback_context(successful(pool_info));
        self.token.on_cache_pool_party_reserve()
    }

    pub fn stake(&mut self, account: &str, amount: u128) {
        self.pool_context(account, amount);
        self.pool.deposit_and_stake();
    }

    /// `exchange_tokens_for_tickets` up to the point where the pool party call is in flight
    pub fn start_tokens_for_tickets(&mut self, account: &str, amount: u128) -> ExchangeId {
        self.token_context(account, 0);
        self.token.exchange_tokens_for_tickets(amount.into());
        self.next_exchange_id()
    }

    /// delivers the in-flight `give_from_reserve` call to pool party, and then resumes the token
    /// exchange callback
    pub fn finish_tokens_for_tickets(
        &mut self,
        exchange_id: ExchangeId,
        remote_call: RemoteCall,
    ) -> Result<ExchangeReceipt, ExchangeFailure> {
        let result = match remote_call {
            RemoteCall::Succeeds => {
                let pending = self.token.pending_exchange(exchange_id).unwrap();
                match pending.kind {
                    PendingExchangeKind::TokensForTickets {
                        ticket_amount_out,
                        fee_amount,
                        ..
                    } => {
                        self.pool_context(TOKEN_CONTRACT_ID, 0);
                        self.pool.give_from_reserve(
                            account_id(&pending.account_id),
                            ticket_amount_out.0,
                            fee_amount.0,
                        );
                        PromiseResult::Successful(vec![])
                    }
                    kind => panic!("unexpected pending exchange kind: {:?}", kind),
                }
            }
            RemoteCall::Fails => PromiseResult::Failed,
        };
        self.callback_context(result);
        self.token.on_exchange_tokens_for_tickets(exchange_id)
    }

    pub fn exchange_tokens_for_tickets(
        &mut self,
        account: &str,
        amount: u128,
    ) -> Result<ExchangeReceipt, ExchangeFailure> {
        let exchange_id = self.start_tokens_for_tickets(account, amount);
        self.finish_tokens_for_tickets(exchange_id, RemoteCall::Succeeds)
    }

    pub fn start_near_for_tokens(&mut self, account: &str, amount: u128) -> ExchangeId {
        self.token_context(account, amount);
        self.token.exchange_near_for_tokens();
        self.next_exchange_id()
    }

    /// delivers the in-flight `deposit_and_stake` call to pool party, and then resumes the token
    /// exchange callback
    pub fn finish_near_for_tokens(
        &mut self,
        exchange_id: ExchangeId,
        remote_call: RemoteCall,
    ) -> Result<ExchangeReceipt, ExchangeFailure> {
        let result = match remote_call {
            RemoteCall::Succeeds => {
                let pending = self.token.pending_exchange(exchange_id).unwrap();
                match pending.kind {
                    PendingExchangeKind::NearForTokens { near_amount_in, .. } => {
                        self.pool_context(TOKEN_CONTRACT_ID, near_amount_in.value());
                        self.pool.deposit_and_stake();
                        PromiseResult::Successful(vec![])
                    }
                    kind => panic!("unexpected pending exchange kind: {:?}", kind),
                }
            }
            RemoteCall::Fails => PromiseResult::Failed,
        };
        self.callback_context(result);
        self.token.on_exchange_near_for_tokens(exchange_id)
    }

    pub fn exchange_near_for_tokens(
        &mut self,
        account: &str,
        amount: u128,
    ) -> Result<ExchangeReceipt, ExchangeFailure> {
        let exchange_id = self.start_near_for_tokens(account, amount);
        self.finish_near_for_tokens(exchange_id, RemoteCall::Succeeds)
    }

    pub fn token_balance(&self, account: &str) -> u128 {
        self.token_context(account, 0);
        self.token.ft_balance_of(account_id(account)).value()
    }

    /// the token exchange looks up its own account, which depends on the current contract context
    pub fn exchange_info(&self) -> ExchangeInfo {
        self.token_context(OWNER_ID, 0);
        self.token.exchange_info()
    }

    pub fn pool_account(&self, account: &str) -> StakingPoolAccount {
        self.pool_context(account, 0);
        self.pool.get_account(account_id(account))
    }

    pub fn staked_balance(&self, account: &str) -> u128 {
        self.pool_account(account).staked_balance.0
    }

    pub fn pool_reserve(&self) -> u128 {
        self.pool_context(OWNER_ID, 0);
        self.pool.get_pool_info().reserve.0
    }

    pub fn cached_reserve(&self) -> u128 {
        self.token.reserve_cache().cached_value.value()
    }

    /// exchange IDs are assigned sequentially starting at 1
    fn next_exchange_id(&mut self) -> ExchangeId {
        self.exchange_count += 1;
        self.exchange_count.into()
    }
}

pub fn successful<T: Serialize>(value: &T) -> PromiseResult {
    PromiseResult::Successful(serde_json::to_vec(value).unwrap())
}
