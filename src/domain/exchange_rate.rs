//! Integer pricing for both exchange directions.
//!
//! Tokens are priced against the cached pool party reserve: the holder of `x` out of `c` circulating
//! tokens owns the share `x / c` of the reserve. All divisions truncate, i.e., round down, and are
//! computed with 256-bit intermediates.

use crate::core::U256;
use crate::domain::{TokenAmount, YoctoNear};

/// fees are expressed in basis points, i.e., 100 BPS = 1%
pub const BASIS_POINTS: u128 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate {
    reserve: YoctoNear,
    circulating_supply: TokenAmount,
    fee_bps: u16,
}

/// Splits the reserve share that a token amount is worth.
///
/// `tickets` + `fee` == `gross`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TicketQuote {
    /// reserve share owned by the tokens - this is what is removed from the reserve
    pub gross: YoctoNear,
    /// portion of the gross amount that is retained on the pool side
    pub fee: YoctoNear,
    /// staked in pool party on behalf of the account
    pub tickets: YoctoNear,
}

impl ExchangeRate {
    pub fn new(reserve: YoctoNear, circulating_supply: TokenAmount, fee_bps: u16) -> Self {
        Self {
            reserve,
            circulating_supply,
            fee_bps,
        }
    }

    pub fn reserve(&self) -> YoctoNear {
        self.reserve
    }

    pub fn circulating_supply(&self) -> TokenAmount {
        self.circulating_supply
    }

    /// `gross = reserve * tokens / circulating_supply`, `fee = gross * fee_bps / 10_000`
    pub fn tokens_to_tickets(&self, tokens: TokenAmount) -> TicketQuote {
        if self.circulating_supply.value() == 0 {
            return TicketQuote::default();
        }
        let gross = mul_div(
            self.reserve.value(),
            tokens.value(),
            self.circulating_supply.value(),
        );
        let fee = mul_div(gross, self.fee_bps as u128, BASIS_POINTS);
        TicketQuote {
            gross: gross.into(),
            fee: fee.into(),
            tickets: (gross - fee).into(),
        }
    }

    /// `tokens = near * circulating_supply / reserve`
    pub fn near_to_tokens(&self, near: YoctoNear) -> TokenAmount {
        if self.reserve.value() == 0 {
            return TokenAmount::default();
        }
        mul_div(
            near.value(),
            self.circulating_supply.value(),
            self.reserve.value(),
        )
        .into()
    }
}

/// saturates at `u128::MAX`
fn mul_div(a: u128, b: u128, denominator: u128) -> u128 {
    let value = U256::from(a) * U256::from(b) / U256::from(denominator);
    if value > U256::from(u128::MAX) {
        u128::MAX
    } else {
        value.as_u128()
    }
}
