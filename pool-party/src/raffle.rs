//! Raffle winner selection

use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
    AccountId, Balance,
};
use primitive_types::U256;

/// Picks the raffle winner among participants that have a positive stake.
///
/// Implementations must be deterministic for the same entropy, which keeps raffles reproducible when
/// they are replayed.
pub trait WinnerSelection {
    /// `participants` is a list of `(account_id, staked_balance)` pairs
    fn select<'a>(
        &self,
        participants: &'a [(AccountId, Balance)],
        entropy: &[u8; 32],
    ) -> Option<&'a AccountId>;
}

/// Each staked yoctoNEAR is a ticket: the entropy is reduced to a ticket number in `[0, total_stake)`
/// and the winner is the participant whose cumulative stake range contains the ticket.
pub struct StakeWeighted;

impl WinnerSelection for StakeWeighted {
    fn select<'a>(
        &self,
        participants: &'a [(AccountId, Balance)],
        entropy: &[u8; 32],
    ) -> Option<&'a AccountId> {
        let total_stake: u128 = participants.iter().map(|(_, stake)| *stake).sum();
        if total_stake == 0 {
            return None;
        }
        let ticket = (U256::from_big_endian(entropy) % U256::from(total_stake)).as_u128();

        let mut upper_bound = 0u128;
        participants.iter().find_map(|(account_id, stake)| {
            upper_bound += *stake;
            if ticket < upper_bound {
                Some(account_id)
            } else {
                None
            }
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum RaffleResult {
    Winner {
        account_id: AccountId,
        prize: U128,
        raffle_count: U64,
        next_raffle_at: U64,
    },
    /// no account has a positive stake - nothing was funded and the schedule is unchanged
    NoEligibleParticipants,
    NotDue {
        next_raffle_at: U64,
    },
}

/// `amount * bps / 10_000`, rounded down
pub fn bps_of(amount: Balance, bps: u16) -> Balance {
    (U256::from(amount) * U256::from(bps) / U256::from(10_000)).as_u128()
}
