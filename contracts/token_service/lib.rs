//! User-facing transfer, approve, burn and mint surface.
//!
//! The service keeps no balances of its own. Every mutation is applied to
//! the [`LedgerStore`] under the authority of the service's owner, and every
//! gated call first consults the [`Governor`] that currently owns the
//! service for the paused and minting-closed flags.

mod logic;
mod model;

pub use ledger_store::LedgerStore;
pub use ledger_types::{AccountId, Balance, Error, Ownable, Result};
pub use model::{Governor, TokenConfig, TokenService, Unwired};
