use crate::domain::{BlockTimestamp, ExchangeId, TicketQuote, TokenAmount, YoctoNear};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    AccountId,
};

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq)]
pub enum ExchangeKind {
    /// tokens were moved from the account on hold
    TokensForTickets {
        token_amount_in: TokenAmount,
        /// amount that was removed from the cached reserve
        gross: YoctoNear,
        ticket_amount_out: YoctoNear,
        fee_amount: YoctoNear,
    },
    /// tokens were moved from the contract's token balance on hold
    NearForTokens {
        near_amount_in: YoctoNear,
        token_amount_out: TokenAmount,
    },
}

/// Tentative ledger mutation that is waiting on the pool party call to complete.
///
/// The record is created when the exchange is submitted and removed by the exchange callback, which
/// either commits or reverts the tentative mutation.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct PendingExchange {
    pub id: ExchangeId,
    pub account_id: AccountId,
    pub created_at: BlockTimestamp,
    pub kind: ExchangeKind,
}

impl PendingExchange {
    pub fn tokens_for_tickets(
        id: ExchangeId,
        account_id: AccountId,
        token_amount_in: TokenAmount,
        quote: TicketQuote,
    ) -> Self {
        Self {
            id,
            account_id,
            created_at: BlockTimestamp::now(),
            kind: ExchangeKind::TokensForTickets {
                token_amount_in,
                gross: quote.gross,
                ticket_amount_out: quote.tickets,
                fee_amount: quote.fee,
            },
        }
    }

    pub fn near_for_tokens(
        id: ExchangeId,
        account_id: AccountId,
        near_amount_in: YoctoNear,
        token_amount_out: TokenAmount,
    ) -> Self {
        Self {
            id,
            account_id,
            created_at: BlockTimestamp::now(),
            kind: ExchangeKind::NearForTokens {
                near_amount_in,
                token_amount_out,
            },
        }
    }
}
