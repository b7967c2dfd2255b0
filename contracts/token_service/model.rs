use ledger_types::AccountId;
use serde::{Deserialize, Serialize};

/// Token metadata fixed at deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: "Skeletal Token".to_string(),
            symbol: "SKL".to_string(),
            decimals: 18,
        }
    }
}

/// Lifecycle flags of whoever administers a token service.
///
/// Looked up fresh on every call; a token service never remembers anything
/// about its governor beyond the owner identifier.
pub trait Governor {
    fn governor_acc(&self) -> AccountId;
    fn is_paused(&self) -> bool;
    fn is_minting_finished(&self) -> bool;
}

/// Stand-in governor for a service still owned by a plain account.
/// User operations stay closed until a controller takes over.
#[derive(Debug, Clone, Copy)]
pub struct Unwired {
    pub owner_acc: AccountId,
}

#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq, scale_info::TypeInfo)]
pub struct TokenService {
    // governance
    pub(crate) address_acc: AccountId,
    pub(crate) owner_acc: AccountId,
    pub(crate) ledger_acc: AccountId,

    // metadata
    pub(crate) name: String,
    pub(crate) symbol: String,
    pub(crate) decimals: u8,
}
