use crate::interface::{
    ExchangeFailure, ExchangeId, ExchangeInfo, ExchangeReceipt, PendingExchange, TicketQuote,
    TokenAmount, YoctoNear,
};
use near_sdk::{ext_contract, Promise};

/// Exchanges $POOL tokens for pool party tickets and NEAR for $POOL tokens.
///
/// Exchanges are priced against the cached pool party reserve. Each exchange is a 2 phase operation:
/// 1. the ledger is tentatively updated and the pool party call is submitted
/// 2. the callback commits the exchange, or rolls back the tentative changes if the call failed
///
/// Exchanges are blocked until the reserve has been cached, and right before the pool party raffle.
pub trait TokenExchange {
    /// Exchanges the predecessor's tokens for tickets. The tokens are moved to the contract and the
    /// reserve share that they are worth, minus the exchange fee, is staked on behalf of the account.
    ///
    /// ## Panics
    /// - if not enough gas is attached
    /// - if the reserve is not cached or the raffle is about to run
    /// - if amount is zero
    /// - if the account is not registered
    /// - if the account has insufficient funds
    /// - if the tokens are not worth any tickets, or are worth more than the cached reserve
    fn exchange_tokens_for_tickets(&mut self, amount: TokenAmount) -> Promise;

    /// Sells the contract's tokens for the attached NEAR, which is staked with pool party.
    ///
    /// ## Panics
    /// - if no deposit is attached
    /// - if the account is not registered
    /// - if not enough gas is attached
    /// - if the reserve is not cached, is empty, or the raffle is about to run
    /// - if the contract does not own enough tokens
    ///
    /// `#[payable]`
    fn exchange_near_for_tokens(&mut self) -> Promise;

    fn pending_exchange(&self, exchange_id: ExchangeId) -> Option<PendingExchange>;

    fn exchange_info(&self) -> ExchangeInfo;

    fn quote_tokens_for_tickets(&self, amount: TokenAmount) -> TicketQuote;

    fn quote_near_for_tokens(&self, amount: YoctoNear) -> TokenAmount;
}

pub trait TokenExchangeCallbacks {
    /// Commits the exchange if `give_from_reserve` succeeded. Otherwise, the tokens are credited back
    /// to the account and the gross amount is credited back to the cached reserve.
    ///
    /// #[private]
    fn on_exchange_tokens_for_tickets(
        &mut self,
        exchange_id: ExchangeId,
    ) -> Result<ExchangeReceipt, ExchangeFailure>;

    /// Credits the tokens on hold to the account if `deposit_and_stake` succeeded. Otherwise, the
    /// tokens are released back to the contract and the NEAR is refunded.
    ///
    /// #[private]
    fn on_exchange_near_for_tokens(
        &mut self,
        exchange_id: ExchangeId,
    ) -> Result<ExchangeReceipt, ExchangeFailure>;
}

#[ext_contract(ext_token_exchange_callbacks)]
pub trait ExtTokenExchangeCallbacks {
    fn on_exchange_tokens_for_tickets(
        &mut self,
        exchange_id: ExchangeId,
    ) -> Result<ExchangeReceipt, ExchangeFailure>;

    fn on_exchange_near_for_tokens(
        &mut self,
        exchange_id: ExchangeId,
    ) -> Result<ExchangeReceipt, ExchangeFailure>;
}

pub mod events {
    use crate::domain::{CallFailure, ExchangeKind};

    #[derive(Debug)]
    pub struct ExchangeStarted<'a> {
        pub exchange_id: u128,
        pub account_id: &'a str,
        pub kind: &'a ExchangeKind,
    }

    #[derive(Debug)]
    pub struct TicketsIssued<'a> {
        pub exchange_id: u128,
        pub account_id: &'a str,
        pub tokens: u128,
        pub tickets: u128,
        pub fee: u128,
    }

    #[derive(Debug)]
    pub struct TokensPurchased<'a> {
        pub exchange_id: u128,
        pub account_id: &'a str,
        pub near: u128,
        pub tokens: u128,
    }

    #[derive(Debug)]
    pub struct ExchangeFailed<'a> {
        pub exchange_id: u128,
        pub account_id: &'a str,
        pub reason: CallFailure,
    }
}
