use ledger_store::LedgerStore;
use ledger_types::{is_null, AccountId, Balance, Error, Ownable, Result};
use log::{debug, info};

use crate::model::{Governor, TokenConfig, TokenService, Unwired};

impl Governor for Unwired {
    fn governor_acc(&self) -> AccountId {
        self.owner_acc
    }

    fn is_paused(&self) -> bool {
        true
    }

    fn is_minting_finished(&self) -> bool {
        false
    }
}

impl Ownable for TokenService {
    fn owner(&self) -> AccountId {
        self.owner_acc
    }
}

impl TokenService {
    // -------- constructors --------

    pub fn new(address_acc: AccountId, deployer_acc: AccountId, ledger_acc: AccountId, config: TokenConfig) -> Self {
        Self {
            address_acc,
            owner_acc: deployer_acc,
            ledger_acc,
            name: config.name,
            symbol: config.symbol,
            decimals: config.decimals,
        }
    }

    // -------- modifiers (helpers) --------

    /// The governor handed in must be the current owner, and the ledger
    /// must be the one this service was deployed against.
    fn governed_by<G: Governor + ?Sized>(&self, governor: &G, ledger: &LedgerStore) -> Result<()> {
        if governor.governor_acc() != self.owner_acc {
            return Err(Error::Unauthorized)
        }
        if ledger.address() != self.ledger_acc {
            return Err(Error::InvalidTarget)
        }
        Ok(())
    }

    fn when_not_paused<G: Governor + ?Sized>(governor: &G) -> Result<()> {
        if governor.is_paused() {
            return Err(Error::SystemPaused)
        }
        Ok(())
    }

    fn check_counterparty(from_acc: AccountId, to_acc: AccountId) -> Result<()> {
        if is_null(&to_acc) || from_acc == to_acc {
            return Err(Error::InvalidTarget)
        }
        Ok(())
    }

    // an allowance may not promise more than the owner holds right now
    fn covered_by_balance(ledger: &LedgerStore, owner_acc: AccountId, allowance_val: Balance) -> Result<()> {
        if allowance_val > ledger.balance_of(owner_acc) {
            return Err(Error::InsufficientFunds)
        }
        Ok(())
    }

    // -------- read API --------

    pub fn address(&self) -> AccountId {
        self.address_acc
    }

    pub fn ledger(&self) -> AccountId {
        self.ledger_acc
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn total_supply(&self, ledger: &LedgerStore) -> Balance {
        ledger.total_supply()
    }

    pub fn total_minted(&self, ledger: &LedgerStore) -> Balance {
        ledger.total_minted()
    }

    pub fn balance_of(&self, ledger: &LedgerStore, owner_acc: AccountId) -> Balance {
        ledger.balance_of(owner_acc)
    }

    pub fn allowance(&self, ledger: &LedgerStore, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
        ledger.allowance(owner_acc, spender_acc)
    }

    pub fn ensure_owner(&self, acc: AccountId) -> Result<()> {
        self.only_owner(acc)
    }

    // -------- ownership --------

    pub fn transfer_ownership(&mut self, caller_acc: AccountId, new_owner_acc: AccountId) -> Result<()> {
        self.only_owner(caller_acc)?;
        if is_null(&new_owner_acc) {
            return Err(Error::InvalidTarget)
        }
        self.owner_acc = new_owner_acc;
        info!("token {:?}: owner {:?} -> {:?}", self.address_acc, caller_acc, new_owner_acc);
        Ok(())
    }

    // -------- write API --------

    /// Move `amount_val` from the caller to `to_acc`.
    pub fn transfer<G: Governor + ?Sized>(
        &self,
        governor: &G,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.governed_by(governor, ledger)?;
        Self::when_not_paused(governor)?;
        Self::check_counterparty(caller_acc, to_acc)?;
        if amount_val == 0 {
            return Err(Error::ZeroAmount)
        }
        ledger.move_balance(self.owner_acc, caller_acc, to_acc, amount_val)?;
        debug!("transfer {:?} -> {:?} {}", caller_acc, to_acc, amount_val);
        Ok(())
    }

    /// Overwrite the caller's allowance for `spender_acc`. Not additive:
    /// zero an existing allowance before setting a new one. The amount
    /// may not exceed the caller's current balance.
    pub fn approve<G: Governor + ?Sized>(
        &self,
        governor: &G,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        spender_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.governed_by(governor, ledger)?;
        Self::when_not_paused(governor)?;
        Self::check_counterparty(caller_acc, spender_acc)?;
        Self::covered_by_balance(ledger, caller_acc, amount_val)?;
        ledger.set_allowance(self.owner_acc, caller_acc, spender_acc, amount_val)
    }

    pub fn increase_allowance<G: Governor + ?Sized>(
        &self,
        governor: &G,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        spender_acc: AccountId,
        add_val: Balance,
    ) -> Result<Balance> {
        self.governed_by(governor, ledger)?;
        Self::when_not_paused(governor)?;
        Self::check_counterparty(caller_acc, spender_acc)?;
        let new_val = ledger.allowance(caller_acc, spender_acc).saturating_add(add_val);
        Self::covered_by_balance(ledger, caller_acc, new_val)?;
        ledger.increase_allowance(self.owner_acc, caller_acc, spender_acc, add_val)
    }

    pub fn decrease_allowance<G: Governor + ?Sized>(
        &self,
        governor: &G,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        spender_acc: AccountId,
        sub_val: Balance,
    ) -> Result<Balance> {
        self.governed_by(governor, ledger)?;
        Self::when_not_paused(governor)?;
        Self::check_counterparty(caller_acc, spender_acc)?;
        ledger.decrease_allowance(self.owner_acc, caller_acc, spender_acc, sub_val)
    }

    /// Spend the caller's allowance on `from_acc` to pay `to_acc`.
    pub fn transfer_from<G: Governor + ?Sized>(
        &self,
        governor: &G,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        from_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.governed_by(governor, ledger)?;
        Self::when_not_paused(governor)?;
        Self::check_counterparty(from_acc, to_acc)?;
        if amount_val == 0 {
            return Err(Error::ZeroAmount)
        }

        // Check allowance before touching balances
        if ledger.allowance(from_acc, caller_acc) < amount_val {
            return Err(Error::InsufficientAllowance)
        }

        ledger.move_balance(self.owner_acc, from_acc, to_acc, amount_val)?;

        // Reduce allowance last; checked above, cannot fail
        ledger.decrease_allowance(self.owner_acc, from_acc, caller_acc, amount_val)?;
        debug!("transfer_from {:?} -> {:?} {} by {:?}", from_acc, to_acc, amount_val, caller_acc);
        Ok(())
    }

    /// Destroy part of the caller's own balance.
    pub fn burn<G: Governor + ?Sized>(
        &self,
        governor: &G,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.governed_by(governor, ledger)?;
        Self::when_not_paused(governor)?;
        if amount_val == 0 {
            return Err(Error::ZeroAmount)
        }
        ledger.retire(self.owner_acc, caller_acc, amount_val)
    }

    /// Privileged mint: caller must be the owner of this service.
    pub fn mint<G: Governor + ?Sized>(
        &self,
        governor: &G,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.governed_by(governor, ledger)?;
        if governor.is_minting_finished() {
            return Err(Error::MintingClosed)
        }
        self.only_owner(caller_acc)?;
        if is_null(&to_acc) {
            return Err(Error::InvalidTarget)
        }
        if amount_val == 0 {
            return Err(Error::ZeroAmount)
        }
        ledger.issue(self.owner_acc, to_acc, amount_val)
    }
}
