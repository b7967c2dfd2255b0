//! Identifiers, failure kinds and journal entries shared by the ledger
//! store, the token service and the controller.

mod logic;
mod model;

pub use logic::{is_null, null_account, Ownable};
pub use model::{AccountId, Balance, Component, Error, Event, Result};
