//! Authoritative holder of balances, allowances and the supply counter.
//!
//! The store trusts its owner to authorize each call: every mutation takes
//! the explicit caller and fails with `Unauthorized` unless that caller is
//! the current owner. Reads are total and return zero for unknown keys.

mod logic;
mod model;

pub use ledger_types::{AccountId, Balance, Error, Ownable, Result};
pub use model::{LedgerSnapshot, LedgerStore, STORAGE_VERSION};
