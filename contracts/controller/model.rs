use ledger_types::AccountId;
use serde::{Deserialize, Serialize};

/// Construction-time settings of a controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Start with minting already closed. A successor does not inherit
    /// its predecessor's flag; set this to keep supply closed across a
    /// handover.
    pub minting_finished: bool,
}

#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq, scale_info::TypeInfo)]
pub struct Controller {
    // identity / governance
    pub(crate) address_acc: AccountId,
    pub(crate) admin_acc: AccountId,

    // governed components
    pub(crate) token_acc: AccountId,
    pub(crate) ledger_acc: AccountId,

    // lifecycle
    pub(crate) paused_flag: bool,
    pub(crate) minting_finished_flag: bool,
    pub(crate) successor_opt: Option<AccountId>,
}
