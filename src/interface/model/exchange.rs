use crate::domain::{self, CallFailure};
use crate::interface::{BlockTimestamp, ExchangeId, TokenAmount, YoctoNear};
use near_sdk::{
    json_types::U128,
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct TicketQuote {
    pub gross: YoctoNear,
    pub fee: YoctoNear,
    pub tickets: YoctoNear,
}

impl From<domain::TicketQuote> for TicketQuote {
    fn from(quote: domain::TicketQuote) -> Self {
        Self {
            gross: quote.gross.into(),
            fee: quote.fee.into(),
            tickets: quote.tickets.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ExchangeInfo {
    pub cached_reserve: YoctoNear,
    pub circulating_supply: TokenAmount,
    /// tokens owned by the contract, which are available for sale
    pub contract_token_balance: TokenAmount,
    /// tokens that are sold by in-flight exchanges
    pub tokens_on_hold: TokenAmount,
    pub total_fees: YoctoNear,
    pub pending_exchange_count: U128,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum PendingExchangeKind {
    TokensForTickets {
        token_amount_in: TokenAmount,
        gross: YoctoNear,
        ticket_amount_out: YoctoNear,
        fee_amount: YoctoNear,
    },
    NearForTokens {
        near_amount_in: YoctoNear,
        token_amount_out: TokenAmount,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PendingExchange {
    pub exchange_id: ExchangeId,
    pub account_id: AccountId,
    pub created_at: BlockTimestamp,
    pub kind: PendingExchangeKind,
}

impl From<domain::PendingExchange> for PendingExchange {
    fn from(exchange: domain::PendingExchange) -> Self {
        let kind = match exchange.kind {
            domain::ExchangeKind::TokensForTickets {
                token_amount_in,
                gross,
                ticket_amount_out,
                fee_amount,
            } => PendingExchangeKind::TokensForTickets {
                token_amount_in: token_amount_in.into(),
                gross: gross.into(),
                ticket_amount_out: ticket_amount_out.into(),
                fee_amount: fee_amount.into(),
            },
            domain::ExchangeKind::NearForTokens {
                near_amount_in,
                token_amount_out,
            } => PendingExchangeKind::NearForTokens {
                near_amount_in: near_amount_in.into(),
                token_amount_out: token_amount_out.into(),
            },
        };
        Self {
            exchange_id: exchange.id.into(),
            account_id: exchange.account_id,
            created_at: exchange.created_at.into(),
            kind,
        }
    }
}

/// Returned by the exchange callbacks when the exchange is committed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum ExchangeReceipt {
    TicketsIssued {
        exchange_id: ExchangeId,
        account_id: AccountId,
        token_amount_in: TokenAmount,
        /// staked in pool party on behalf of the account
        tickets: YoctoNear,
        fee: YoctoNear,
    },
    TokensPurchased {
        exchange_id: ExchangeId,
        account_id: AccountId,
        near_amount_in: YoctoNear,
        token_amount_out: TokenAmount,
    },
}

/// Returned by the exchange callbacks when the pool party call failed and the exchange was rolled back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum ExchangeFailure {
    /// the tokens were credited back to the account
    TokensRefunded {
        exchange_id: ExchangeId,
        account_id: AccountId,
        amount: TokenAmount,
        reason: CallFailure,
    },
    /// the attached NEAR was transferred back to the account
    NearRefunded {
        exchange_id: ExchangeId,
        account_id: AccountId,
        amount: YoctoNear,
        reason: CallFailure,
    },
}
