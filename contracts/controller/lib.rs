//! Administrative gateway for a token service and its ledger store.
//!
//! A [`Controller`] holds the pause and minting lifecycle, forwards
//! privileged calls, and hands ownership of both components over to a
//! successor controller (`kill`). [`TokenSystem`] hosts the components,
//! resolves addresses and applies every operation one at a time.

mod config;
mod logic;
mod model;
mod system;

pub use config::{ConfigError, SystemConfig};
pub use ledger_store::{LedgerSnapshot, LedgerStore};
pub use ledger_types::{null_account, AccountId, Balance, Component, Error, Event, Ownable, Result};
pub use model::{Controller, ControllerConfig};
pub use system::TokenSystem;
pub use token_service::{Governor, TokenConfig, TokenService};
