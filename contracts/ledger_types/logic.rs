use crate::model::{AccountId, Error, Result};

/// The all-zero account. Never a valid recipient or owner.
pub fn null_account() -> AccountId {
    AccountId::from([0u8; 32])
}

pub fn is_null(acc: &AccountId) -> bool {
    *acc == null_account()
}

/// A component with exactly one administrative owner.
///
/// Every privileged entry point calls [`Ownable::only_owner`] with the
/// explicit caller before touching state. The owner is read at the moment
/// of the call, so a reassignment takes effect for the very next call.
pub trait Ownable {
    fn owner(&self) -> AccountId;

    fn only_owner(&self, caller_acc: AccountId) -> Result<()> {
        if caller_acc != self.owner() {
            return Err(Error::Unauthorized)
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(AccountId);

    impl Ownable for Fixed {
        fn owner(&self) -> AccountId {
            self.0
        }
    }

    #[test]
    fn only_owner_rejects_strangers() {
        let owner_acc = AccountId::from([1u8; 32]);
        let fixed = Fixed(owner_acc);
        assert_eq!(fixed.only_owner(owner_acc), Ok(()));
        assert_eq!(fixed.only_owner(AccountId::from([2u8; 32])), Err(Error::Unauthorized));
    }

    #[test]
    fn null_account_is_all_zero() {
        assert!(is_null(&null_account()));
        assert!(!is_null(&AccountId::from([7u8; 32])));
    }

    #[test]
    fn errors_render_for_operators() {
        assert_eq!(Error::MustBePaused.to_string(), "controller must be paused first");
        assert_eq!(Error::SystemPaused.to_string(), "system is paused");
    }
}
