use crate::domain::{self, CallOutcome, ExchangeKind, PendingExchange};
use crate::errors::illegal_state::{PENDING_EXCHANGE_KIND_MISMATCH, PENDING_EXCHANGE_SHOULD_EXIST};
use crate::interface::{
    token_exchange::events, ExchangeFailure, ExchangeId, ExchangeReceipt, TokenExchangeCallbacks,
};
use crate::near::{assert_predecessor_is_self, log, promise_outcome};
use crate::*;
use near_sdk::{near_bindgen, Promise};

#[near_bindgen]
impl TokenExchangeCallbacks for PoolTokenContract {
    fn on_exchange_tokens_for_tickets(
        &mut self,
        exchange_id: ExchangeId,
    ) -> Result<ExchangeReceipt, ExchangeFailure> {
        assert_predecessor_is_self();

        let exchange = self.remove_pending_exchange(exchange_id.into());
        let (token_amount_in, gross, tickets, fee) = match exchange.kind {
            ExchangeKind::TokensForTickets {
                token_amount_in,
                gross,
                ticket_amount_out,
                fee_amount,
            } => (token_amount_in, gross, ticket_amount_out, fee_amount),
            ExchangeKind::NearForTokens { .. } => panic!("{}", PENDING_EXCHANGE_KIND_MISMATCH),
        };
        self.tokens_on_hold -= token_amount_in;

        match promise_outcome() {
            CallOutcome::Success(_) => {
                let mut contract_account = self.contract_account();
                contract_account.credit(token_amount_in);
                self.save_registered_account(&contract_account);
                self.reserve_cache.settle(gross);
                self.total_fees += fee;

                log(events::TicketsIssued {
                    exchange_id: exchange.id.value(),
                    account_id: &exchange.account_id,
                    tokens: token_amount_in.value(),
                    tickets: tickets.value(),
                    fee: fee.value(),
                });
                Ok(ExchangeReceipt::TicketsIssued {
                    exchange_id: exchange.id.into(),
                    account_id: exchange.account_id,
                    token_amount_in: token_amount_in.into(),
                    tickets: tickets.into(),
                    fee: fee.into(),
                })
            }
            CallOutcome::Failure(reason) => {
                let mut account = self.registered_account(&exchange.account_id);
                account.credit(token_amount_in);
                self.save_registered_account(&account);
                self.reserve_cache.credit(gross);

                log(events::ExchangeFailed {
                    exchange_id: exchange.id.value(),
                    account_id: &exchange.account_id,
                    reason,
                });
                Err(ExchangeFailure::TokensRefunded {
                    exchange_id: exchange.id.into(),
                    account_id: exchange.account_id,
                    amount: token_amount_in.into(),
                    reason,
                })
            }
        }
    }

    fn on_exchange_near_for_tokens(
        &mut self,
        exchange_id: ExchangeId,
    ) -> Result<ExchangeReceipt, ExchangeFailure> {
        assert_predecessor_is_self();

        let exchange = self.remove_pending_exchange(exchange_id.into());
        let (near_amount_in, token_amount_out) = match exchange.kind {
            ExchangeKind::NearForTokens {
                near_amount_in,
                token_amount_out,
            } => (near_amount_in, token_amount_out),
            ExchangeKind::TokensForTickets { .. } => {
                panic!("{}", PENDING_EXCHANGE_KIND_MISMATCH)
            }
        };
        self.tokens_on_hold -= token_amount_out;

        match promise_outcome() {
            CallOutcome::Success(_) => {
                let mut account = self.registered_account(&exchange.account_id);
                account.credit(token_amount_out);
                self.save_registered_account(&account);

                log(events::TokensPurchased {
                    exchange_id: exchange.id.value(),
                    account_id: &exchange.account_id,
                    near: near_amount_in.value(),
                    tokens: token_amount_out.value(),
                });
                Ok(ExchangeReceipt::TokensPurchased {
                    exchange_id: exchange.id.into(),
                    account_id: exchange.account_id,
                    near_amount_in: near_amount_in.into(),
                    token_amount_out: token_amount_out.into(),
                })
            }
            CallOutcome::Failure(reason) => {
                let mut contract_account = self.contract_account();
                contract_account.credit(token_amount_out);
                self.save_registered_account(&contract_account);
                // pool party refunds the deposit to this contract when deposit_and_stake fails
                Promise::new(exchange.account_id.clone()).transfer(near_amount_in.value());

                log(events::ExchangeFailed {
                    exchange_id: exchange.id.value(),
                    account_id: &exchange.account_id,
                    reason,
                });
                Err(ExchangeFailure::NearRefunded {
                    exchange_id: exchange.id.into(),
                    account_id: exchange.account_id,
                    amount: near_amount_in.into(),
                    reason,
                })
            }
        }
    }
}

impl PoolTokenContract {
    /// ## Panics
    /// if the pending exchange does not exist
    fn remove_pending_exchange(&mut self, exchange_id: domain::ExchangeId) -> PendingExchange {
        let exchange = self
            .pending_exchanges
            .remove(&exchange_id)
            .unwrap_or_else(|| panic!("{}", PENDING_EXCHANGE_SHOULD_EXIST));
        self.pending_exchanges_len -= 1;
        exchange
    }
}
