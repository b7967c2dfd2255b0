use std::collections::BTreeMap;

use ledger_types::{AccountId, Balance};

/// Layout version written into every store and snapshot.
pub const STORAGE_VERSION: u32 = 1;

#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq, scale_info::TypeInfo)]
pub struct LedgerStore {
    // governance
    pub(crate) address_acc: AccountId,
    pub(crate) owner_acc: AccountId,

    // token state
    // circulating supply is total_minted - total_burned
    pub(crate) total_minted: Balance,
    pub(crate) total_burned: Balance,
    pub(crate) balances: BTreeMap<AccountId, Balance>,
    pub(crate) allowances: BTreeMap<(AccountId, AccountId), Balance>,

    // versioning (future migrations)
    pub(crate) storage_ver_u32: u32,
}

/// Everything a handover must leave untouched: the store minus its owner.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub total_minted: Balance,
    pub total_burned: Balance,
    pub balances: BTreeMap<AccountId, Balance>,
    pub allowances: BTreeMap<(AccountId, AccountId), Balance>,
    pub storage_ver_u32: u32,
}
