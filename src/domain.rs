//! defines the internal domain model used to implement the business logic
//!
//! NOTE: the domain model is separate from the interface model. That being said, the interface model
//! closely mirrors the domain model.

mod account;
mod block_timestamp;
mod call_outcome;
mod exchange_id;
mod exchange_rate;
mod gas;
mod pending_exchange;
mod reserve_cache;
mod token_amount;
mod yocto_near;

pub use account::{Account, RegisteredAccount};
pub use block_timestamp::BlockTimestamp;
pub use call_outcome::{CallFailure, CallOutcome};
pub use exchange_id::ExchangeId;
pub use exchange_rate::{ExchangeRate, TicketQuote, BASIS_POINTS};
pub use gas::{Gas, TGAS};
pub use pending_exchange::{ExchangeKind, PendingExchange};
pub use reserve_cache::ReserveCache;
pub use token_amount::TokenAmount;
pub use yocto_near::YoctoNear;
