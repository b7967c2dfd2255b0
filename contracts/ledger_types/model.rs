pub type AccountId = ink::primitives::AccountId;
pub type Balance = <ink::env::DefaultEnvironment as ink::env::Environment>::Balance;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, scale_info::TypeInfo)]
pub enum Error {
    /// Caller does not hold the ownership or administrative relation.
    #[error("caller is not authorized for this operation")]
    Unauthorized,
    /// Null, self, or otherwise disallowed counterparty.
    #[error("target account is not allowed")]
    InvalidTarget,
    #[error("amount must be non-zero")]
    ZeroAmount,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("insufficient allowance")]
    InsufficientAllowance,
    #[error("system is paused")]
    SystemPaused,
    #[error("minting is closed")]
    MintingClosed,
    #[error("controller must be paused first")]
    MustBePaused,
    #[error("lifecycle transition not allowed from the current state")]
    InvalidTransition,
    #[error("arithmetic overflow")]
    Overflow,
    #[error("no controller deployed at this address")]
    UnknownController,
}

/// Which owned component an ownership change applies to.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq, scale_info::TypeInfo)]
pub enum Component {
    LedgerStore,
    TokenService,
    Controller,
}

/// Journal entry appended for every successful state change.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq, scale_info::TypeInfo)]
pub enum Event {
    Transferred {
        from_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    },
    Approved {
        owner_acc: AccountId,
        spender_acc: AccountId,
        amount_val: Balance,
    },
    Minted {
        to_acc: AccountId,
        amount_val: Balance,
    },
    Burned {
        from_acc: AccountId,
        amount_val: Balance,
    },
    Paused {
        controller_acc: AccountId,
    },
    Unpaused {
        controller_acc: AccountId,
    },
    MintingFinished {
        controller_acc: AccountId,
    },
    OwnershipTransferred {
        component: Component,
        previous_acc: AccountId,
        new_acc: AccountId,
    },
    HandedOver {
        retired_acc: AccountId,
        successor_acc: AccountId,
    },
}
