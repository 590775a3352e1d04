use crate::domain::{self, BlockTimestamp, PendingExchange};
use crate::errors::{
    account_management::ACCOUNT_NOT_REGISTERED,
    asserts::{INSUFFICIENT_GAS, ZERO_AMOUNT},
    fungible_token::INSUFFICIENT_BALANCE,
    reserve_cache::{CACHE_NOT_INITIALIZED, TOO_CLOSE_TO_RAFFLE},
    token_exchange::{
        NEAR_AMOUNT_TOO_SMALL, NOT_ENOUGH_TOKENS_TO_SELL, RESERVE_INSUFFICIENT, RESERVE_IS_EMPTY,
        TOKEN_AMOUNT_TOO_SMALL,
    },
};
use crate::interface::{
    ext_pool_party, ext_token_exchange_callbacks, token_exchange::events, ExchangeId, ExchangeInfo,
    TicketQuote, TokenAmount, TokenExchange, YoctoNear,
};
use crate::near::{log, NO_DEPOSIT};
use crate::*;
use near_sdk::{near_bindgen, Promise};

#[near_bindgen]
impl TokenExchange for PoolTokenContract {
    fn exchange_tokens_for_tickets(&mut self, amount: TokenAmount) -> Promise {
        let gas_config = self.config.gas_config().clone();
        assert!(
            env::prepaid_gas() >= gas_config.min_gas_for_tokens_for_tickets().value(),
            "{}",
            INSUFFICIENT_GAS
        );
        self.assert_exchange_allowed();
        assert!(amount.value() > 0, "{}", ZERO_AMOUNT);

        let account_id = env::predecessor_account_id();
        let amount: domain::TokenAmount = amount.into();
        let mut account = self.registered_account(&account_id);
        assert!(account.balance() >= amount, "{}", INSUFFICIENT_BALANCE);

        // price the tokens while they are still circulating
        let quote = self.exchange_rate().tokens_to_tickets(amount);
        assert!(quote.gross.value() > 0, "{}", TOKEN_AMOUNT_TOO_SMALL);
        assert!(
            quote.gross <= self.reserve_cache.cached_value(),
            "{}",
            RESERVE_INSUFFICIENT
        );

        // tentative commit - the tokens are consumed up front and held until pool party confirms
        account.debit(amount);
        self.save_registered_account(&account);
        self.tokens_on_hold += amount;
        self.reserve_cache.debit(quote.gross);
        let exchange_id = self.save_pending_exchange(|id| {
            PendingExchange::tokens_for_tickets(id, account_id.clone(), amount, quote)
        });

        ext_pool_party::give_from_reserve(
            account_id,
            quote.tickets.into(),
            quote.fee.into(),
            &self.pool_party_id,
            NO_DEPOSIT.value(),
            gas_config.pool_party().give_from_reserve().value(),
        )
        .then(ext_token_exchange_callbacks::on_exchange_tokens_for_tickets(
            exchange_id.into(),
            &env::current_account_id(),
            NO_DEPOSIT.value(),
            gas_config.callbacks().on_exchange_tokens_for_tickets().value(),
        ))
    }

    #[payable]
    fn exchange_near_for_tokens(&mut self) -> Promise {
        let near_amount: domain::YoctoNear = env::attached_deposit().into();
        assert!(near_amount.value() > 0, "{}", ZERO_AMOUNT);
        let account_id = env::predecessor_account_id();
        assert!(
            self.lookup_registered_account(&account_id).is_some(),
            "{}",
            ACCOUNT_NOT_REGISTERED
        );
        let gas_config = self.config.gas_config().clone();
        assert!(
            env::prepaid_gas() >= gas_config.min_gas_for_near_for_tokens().value(),
            "{}",
            INSUFFICIENT_GAS
        );
        self.assert_exchange_allowed();
        assert!(
            self.reserve_cache.cached_value().value() > 0,
            "{}",
            RESERVE_IS_EMPTY
        );

        let token_amount = self.exchange_rate().near_to_tokens(near_amount);
        assert!(token_amount.value() > 0, "{}", NEAR_AMOUNT_TOO_SMALL);
        let mut contract_account = self.contract_account();
        assert!(
            contract_account.balance() >= token_amount,
            "{}",
            NOT_ENOUGH_TOKENS_TO_SELL
        );

        // tentative commit - the tokens are held to prevent them from being sold twice
        contract_account.debit(token_amount);
        self.save_registered_account(&contract_account);
        self.tokens_on_hold += token_amount;
        let exchange_id = self.save_pending_exchange(|id| {
            PendingExchange::near_for_tokens(id, account_id.clone(), near_amount, token_amount)
        });

        ext_pool_party::deposit_and_stake(
            &self.pool_party_id,
            near_amount.value(),
            gas_config.pool_party().deposit_and_stake().value(),
        )
        .then(ext_token_exchange_callbacks::on_exchange_near_for_tokens(
            exchange_id.into(),
            &env::current_account_id(),
            NO_DEPOSIT.value(),
            gas_config.callbacks().on_exchange_near_for_tokens().value(),
        ))
    }

    fn pending_exchange(&self, exchange_id: ExchangeId) -> Option<interface::PendingExchange> {
        self.pending_exchanges
            .get(&exchange_id.into())
            .map(Into::into)
    }

    fn exchange_info(&self) -> ExchangeInfo {
        ExchangeInfo {
            cached_reserve: self.reserve_cache.cached_value().into(),
            circulating_supply: self.circulating_supply().into(),
            contract_token_balance: self.contract_account().balance().into(),
            tokens_on_hold: self.tokens_on_hold.into(),
            total_fees: self.total_fees.into(),
            pending_exchange_count: self.pending_exchanges_len.into(),
        }
    }

    fn quote_tokens_for_tickets(&self, amount: TokenAmount) -> TicketQuote {
        self.exchange_rate().tokens_to_tickets(amount.into()).into()
    }

    fn quote_near_for_tokens(&self, amount: YoctoNear) -> TokenAmount {
        self.exchange_rate().near_to_tokens(amount.into()).into()
    }
}

impl PoolTokenContract {
    /// ## Panics
    /// - if the reserve has never been cached
    /// - if the next raffle is within the raffle guard window - the raffle changes the reserve
    fn assert_exchange_allowed(&self) {
        assert!(
            self.reserve_cache.is_initialized(),
            "{}",
            CACHE_NOT_INITIALIZED
        );
        assert!(
            !self
                .reserve_cache
                .is_close_to_raffle(BlockTimestamp::now(), self.config.raffle_guard_window()),
            "{}",
            TOO_CLOSE_TO_RAFFLE
        );
    }

    fn save_pending_exchange<F>(&mut self, new_exchange: F) -> domain::ExchangeId
    where
        F: FnOnce(domain::ExchangeId) -> PendingExchange,
    {
        *self.exchange_id_sequence += 1;
        let exchange = new_exchange(self.exchange_id_sequence);
        self.pending_exchanges.insert(&exchange.id, &exchange);
        self.pending_exchanges_len += 1;
        log(events::ExchangeStarted {
            exchange_id: exchange.id.value(),
            account_id: &exchange.account_id,
            kind: &exchange.kind,
        });
        exchange.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interface::{FungibleToken, PendingExchangeKind};
    use crate::test_utils::*;
    use near_sdk::{test_utils::get_logs, testing_env, MockedBlockchain};

    const RESERVE: u128 = 10 * YOCTO;
    const ONE_DAY: u64 = 86_400 * 1_000_000_000;

    /// registered account owns 1_000_000 tokens and the reserve is cached
    fn setup() -> TestContext {
        let mut context = TestContext::new();
        context.register_account(1_000_000);
        context.cache_reserve(RESERVE, ONE_DAY);
        context
    }

    #[test]
    fn exchange_tokens_for_tickets_tentatively_commits() {
        let mut context = setup();
        context.exchange_tokens_for_tickets(100_000.into());

        assert_eq!(context.token_balance(ACCOUNT_ID), 900_000);
        let info = context.exchange_info();
        assert_eq!(info.tokens_on_hold.value(), 100_000);
        assert_eq!(info.contract_token_balance.value(), 0);
        assert_eq!(info.cached_reserve.value(), RESERVE - RESERVE / 100);
        assert_eq!(info.circulating_supply.value(), DEFAULT_TOTAL_SUPPLY - 100_000);
        assert_eq!(info.pending_exchange_count.0, 1);

        let exchange = context
            .pending_exchange(context.exchange_id_sequence.value().into())
            .unwrap();
        assert_eq!(exchange.account_id, ACCOUNT_ID);
        assert_eq!(
            exchange.kind,
            PendingExchangeKind::TokensForTickets {
                token_amount_in: 100_000.into(),
                gross: (RESERVE / 100).into(),
                ticket_amount_out: (RESERVE / 100 - RESERVE / 10_000).into(),
                fee_amount: (RESERVE / 10_000).into(),
            }
        );
        assert!(get_logs().iter().any(|log| log.contains("ExchangeStarted")));
    }

    #[test]
    fn quotes_match_exchange() {
        let context = setup();
        let quote = context.quote_tokens_for_tickets(100_000.into());
        assert_eq!(quote.gross.value(), RESERVE / 100);
        assert_eq!(quote.fee.value(), RESERVE / 10_000);
        assert_eq!(
            context.quote_near_for_tokens((RESERVE / 100).into()).value(),
            100_000
        );
    }

    #[test]
    #[should_panic(expected = "amount must not be zero")]
    fn exchange_zero_tokens() {
        let mut context = setup();
        context.exchange_tokens_for_tickets(0.into());
    }

    #[test]
    #[should_panic(expected = "account is not registered")]
    fn exchange_tokens_unregistered_account() {
        let mut context = setup();
        context.set_predecessor("unknown.near");
        context.exchange_tokens_for_tickets(100.into());
    }

    #[test]
    #[should_panic(expected = "account token balance is insufficient")]
    fn exchange_more_tokens_than_balance() {
        let mut context = setup();
        context.exchange_tokens_for_tickets(1_000_001.into());
    }

    #[test]
    #[should_panic(expected = "the pool party reserve has not been cached yet")]
    fn exchange_tokens_before_reserve_is_cached() {
        let mut context = TestContext::new();
        context.register_account(1_000_000);
        context.exchange_tokens_for_tickets(100.into());
    }

    #[test]
    #[should_panic(expected = "exchanges are blocked right before the raffle")]
    fn exchange_tokens_right_before_raffle() {
        let mut context = setup();
        context.set_block_timestamp(ONE_DAY - 60 * 1_000_000_000);
        context.exchange_tokens_for_tickets(100.into());
    }

    #[test]
    #[should_panic(expected = "not enough gas was attached to complete the exchange")]
    fn exchange_tokens_with_insufficient_gas() {
        let mut context = setup();
        let mut ctx = context.context.clone();
        ctx.prepaid_gas = 20_000_000_000_000;
        testing_env!(ctx);
        context.exchange_tokens_for_tickets(100.into());
    }

    #[test]
    #[should_panic(expected = "token amount is too small to be exchanged for tickets")]
    fn exchange_dust_tokens() {
        let mut context = TestContext::new();
        context.register_account(1_000_000);
        // 1 yoctoNEAR reserve is not enough to be shared among 10M tokens
        context.cache_reserve(1, ONE_DAY);
        context.exchange_tokens_for_tickets(1.into());
    }

    #[test]
    fn exchange_near_for_tokens_tentatively_commits() {
        let mut context = setup();
        // stock the contract with tokens to sell
        let mut ctx = context.context.clone();
        ctx.predecessor_account_id = OWNER_ID.to_string();
        ctx.attached_deposit = 1;
        testing_env!(ctx);
        context.ft_transfer(to_valid_account_id(TOKEN_CONTRACT_ID), 100_000.into(), None);

        let mut ctx = context.context.clone();
        ctx.attached_deposit = RESERVE / 100;
        testing_env!(ctx);
        context.exchange_near_for_tokens();

        let info = context.exchange_info();
        // 1% of the reserve buys 1% of the 9.9M circulating tokens
        assert_eq!(info.tokens_on_hold.value(), 99_000);
        assert_eq!(info.contract_token_balance.value(), 1_000);
        assert_eq!(info.cached_reserve.value(), RESERVE);
        assert_eq!(context.token_balance(ACCOUNT_ID), 1_000_000);

        let exchange = context
            .pending_exchange(context.exchange_id_sequence.value().into())
            .unwrap();
        assert_eq!(
            exchange.kind,
            PendingExchangeKind::NearForTokens {
                near_amount_in: (RESERVE / 100).into(),
                token_amount_out: 99_000.into(),
            }
        );
    }

    #[test]
    #[should_panic(expected = "amount must not be zero")]
    fn exchange_zero_near() {
        let mut context = setup();
        context.exchange_near_for_tokens();
    }

    #[test]
    #[should_panic(expected = "contract does not have enough tokens to sell")]
    fn exchange_near_when_contract_has_no_tokens() {
        let mut context = setup();
        let mut ctx = context.context.clone();
        ctx.attached_deposit = YOCTO;
        testing_env!(ctx);
        context.exchange_near_for_tokens();
    }

    #[test]
    #[should_panic(expected = "attached deposit is too small to buy any tokens")]
    fn exchange_dust_near() {
        let mut context = setup();
        let mut ctx = context.context.clone();
        ctx.attached_deposit = 1;
        testing_env!(ctx);
        context.exchange_near_for_tokens();
    }

    #[test]
    #[should_panic(expected = "cached pool party reserve is empty")]
    fn exchange_near_with_empty_reserve() {
        let mut context = TestContext::new();
        context.register_account(1_000_000);
        context.cache_reserve(0, ONE_DAY);
        let mut ctx = context.context.clone();
        ctx.attached_deposit = YOCTO;
        testing_env!(ctx);
        context.exchange_near_for_tokens();
    }
}
