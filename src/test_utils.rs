#![allow(dead_code)]

use crate::interface::{AccountStorage, FungibleToken, PoolInfo, StorageBalance};
use crate::{ContractSettings, PoolTokenContract};
use near_sdk::{
    env,
    json_types::ValidAccountId,
    serde_json, test_utils::get_created_receipts, testing_env, AccountId, MockedBlockchain,
    PromiseResult, VMContext,
};
use std::convert::TryFrom;
use std::ops::{Deref, DerefMut};

pub const TOKEN_CONTRACT_ID: &str = "pool-token.near";
pub const POOL_PARTY_ID: &str = "pool-party.near";
pub const OWNER_ID: &str = "owner.near";
pub const ACCOUNT_ID: &str = "bob.near";

pub const YOCTO: u128 = crate::near::YOCTO;

pub fn to_valid_account_id(account_id: &str) -> ValidAccountId {
    ValidAccountId::try_from(account_id).unwrap()
}

pub fn new_context(predecessor_account_id: &str) -> VMContext {
    VMContext {
        current_account_id: TOKEN_CONTRACT_ID.to_string(),
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

/// installs the promise result that the next callback invocation will see - contract storage is
/// carried over
pub fn set_promise_result(context: VMContext, result: PromiseResult) {
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

/// Debug renderings of the receipts that the current contract call created
pub fn created_receipts() -> Vec<String> {
    get_created_receipts()
        .iter()
        .map(|receipt| format!("{:?}", receipt))
        .collect()
}

/// context for a callback, i.e., the contract is calling itself
pub fn callback_context() -> VMContext {
    new_context(TOKEN_CONTRACT_ID)
}

pub fn pool_info_result(reserve: u128, next_raffle_at: u64) -> PromiseResult {
    let pool_info = PoolInfo {
        total_staked: 0.into(),
        prize: 0.into(),
        reserve: reserve.into(),
        accrued_fees: 0.into(),
        next_raffle_at: crate::domain::BlockTimestamp(next_raffle_at).into(),
        raffle_due: false,
    };
    PromiseResult::Successful(serde_json::to_vec(&pool_info).unwrap())
}

pub struct TestContext {
    pub contract: PoolTokenContract,
    pub context: VMContext,
    pub account_id: &'static str,
}

impl Deref for TestContext {
    type Target = PoolTokenContract;

    fn deref(&self) -> &Self::Target {
        &self.contract
    }
}

impl DerefMut for TestContext {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.contract
    }
}

impl TestContext {
    /// deploys the contract - the predecessor is [ACCOUNT_ID], which is not registered
    pub fn new() -> Self {
        let context = new_context(ACCOUNT_ID);
        testing_env!(context.clone());
        let contract = PoolTokenContract::new(ContractSettings {
            owner_id: to_valid_account_id(OWNER_ID),
            pool_party_id: to_valid_account_id(POOL_PARTY_ID),
            total_supply: None,
            config: None,
        });
        Self {
            contract,
            context,
            account_id: ACCOUNT_ID,
        }
    }

    pub fn set_predecessor(&mut self, account_id: &str) {
        self.context.predecessor_account_id = account_id.to_string();
        self.context.signer_account_id = account_id.to_string();
        self.context.attached_deposit = 0;
        testing_env!(self.context.clone());
    }

    pub fn set_block_timestamp(&mut self, block_timestamp: u64) {
        self.context.block_timestamp = block_timestamp;
        testing_env!(self.context.clone());
    }

    /// registers [ACCOUNT_ID] and funds it with the specified tokens from the owner
    pub fn register_account(&mut self, tokens: u128) -> StorageBalance {
        let mut context = self.context.clone();
        context.predecessor_account_id = self.account_id.to_string();
        context.attached_deposit = self.storage_minimum_balance().value();
        testing_env!(context);
        let balance = self.storage_deposit(None);

        if tokens > 0 {
            let mut context = self.context.clone();
            context.predecessor_account_id = OWNER_ID.to_string();
            context.attached_deposit = 1;
            testing_env!(context);
            let receiver_id = to_valid_account_id(self.account_id);
            self.ft_transfer(receiver_id, tokens.into(), None);
        }

        testing_env!(self.context.clone());
        balance
    }

    /// simulates a successful reserve refresh
    pub fn cache_reserve(&mut self, reserve: u128, next_raffle_at: u64) {
        use crate::interface::{PoolPartyReserve, ReserveCacheCallbacks};

        let mut context = self.context.clone();
        context.predecessor_account_id = OWNER_ID.to_string();
        testing_env!(context);
        self.cache_pool_party_reserve();

        let mut context = self.context.clone();
        context.predecessor_account_id = TOKEN_CONTRACT_ID.to_string();
        set_promise_result(context, pool_info_result(reserve, next_raffle_at));
        assert!(self.on_cache_pool_party_reserve());

        testing_env!(self.context.clone());
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id.to_string()
    }

    pub fn token_balance(&self, account_id: &str) -> u128 {
        self.ft_balance_of(to_valid_account_id(account_id)).value()
    }
}
