use ledger_types::{is_null, AccountId, Balance, Error, Ownable, Result};
use log::{debug, info};

use crate::model::{LedgerSnapshot, LedgerStore, STORAGE_VERSION};

impl Ownable for LedgerStore {
    fn owner(&self) -> AccountId {
        self.owner_acc
    }
}

impl LedgerStore {
    // -------- constructors --------

    /// A fresh store at `address_acc`, owned by whoever deployed it.
    pub fn new(address_acc: AccountId, deployer_acc: AccountId) -> Self {
        Self {
            address_acc,
            owner_acc: deployer_acc,
            total_minted: 0,
            total_burned: 0,
            balances: Default::default(),
            allowances: Default::default(),
            storage_ver_u32: STORAGE_VERSION,
        }
    }

    // -------- read API --------

    pub fn address(&self) -> AccountId {
        self.address_acc
    }

    /// Circulating supply: everything issued minus everything retired.
    pub fn total_supply(&self) -> Balance {
        self.total_minted.saturating_sub(self.total_burned)
    }

    /// Supply counter. Only `issue` raises it and nothing lowers it.
    pub fn total_minted(&self) -> Balance {
        self.total_minted
    }

    pub fn total_burned(&self) -> Balance {
        self.total_burned
    }

    pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
        self.balances.get(&owner_acc).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
        self.allowances.get(&(owner_acc, spender_acc)).copied().unwrap_or(0)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            total_minted: self.total_minted,
            total_burned: self.total_burned,
            balances: self.balances.clone(),
            allowances: self.allowances.clone(),
            storage_ver_u32: self.storage_ver_u32,
        }
    }

    /// Read-only form of the ownership check, for callers that must
    /// validate several components before mutating any of them.
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
        info!("ledger {:?}: owner {:?} -> {:?}", self.address_acc, caller_acc, new_owner_acc);
        Ok(())
    }

    // -------- balance primitives --------

    pub fn credit(&mut self, caller_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<()> {
        self.only_owner(caller_acc)?;
        let new_to = self.balance_of(to_acc).checked_add(amount_val).ok_or(Error::Overflow)?;
        self.write_balance(to_acc, new_to);
        debug!("ledger credit {:?} +{}", to_acc, amount_val);
        Ok(())
    }

    pub fn debit(&mut self, caller_acc: AccountId, from_acc: AccountId, amount_val: Balance) -> Result<()> {
        self.only_owner(caller_acc)?;
        let new_from = self
            .balance_of(from_acc)
            .checked_sub(amount_val)
            .ok_or(Error::InsufficientFunds)?;
        self.write_balance(from_acc, new_from);
        debug!("ledger debit {:?} -{}", from_acc, amount_val);
        Ok(())
    }

    /// Debit and credit as one step. Both sides are checked before either
    /// balance is written.
    pub fn move_balance(
        &mut self,
        caller_acc: AccountId,
        from_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.only_owner(caller_acc)?;
        let from_bal = self.balance_of(from_acc);
        if from_bal < amount_val {
            return Err(Error::InsufficientFunds)
        }
        if from_acc == to_acc {
            return Ok(())
        }
        let new_to = self.balance_of(to_acc).checked_add(amount_val).ok_or(Error::Overflow)?;
        self.write_balance(from_acc, from_bal - amount_val);
        self.write_balance(to_acc, new_to);
        debug!("ledger move {:?} -> {:?} {}", from_acc, to_acc, amount_val);
        Ok(())
    }

    /// Credit `to_acc` and grow the minted counter by the same amount.
    pub fn issue(&mut self, caller_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<()> {
        self.only_owner(caller_acc)?;
        let new_minted = self.total_minted.checked_add(amount_val).ok_or(Error::Overflow)?;
        let new_to = self.balance_of(to_acc).checked_add(amount_val).ok_or(Error::Overflow)?;
        self.total_minted = new_minted;
        self.write_balance(to_acc, new_to);
        debug!("ledger issue {:?} +{} (minted {})", to_acc, amount_val, new_minted);
        Ok(())
    }

    /// Debit `from_acc` and record the amount as burned. The minted
    /// counter is left alone.
    pub fn retire(&mut self, caller_acc: AccountId, from_acc: AccountId, amount_val: Balance) -> Result<()> {
        self.only_owner(caller_acc)?;
        let new_from = self
            .balance_of(from_acc)
            .checked_sub(amount_val)
            .ok_or(Error::InsufficientFunds)?;
        // burned never exceeds minted: the debit above bounds it by a balance
        let new_burned = self.total_burned.checked_add(amount_val).ok_or(Error::Overflow)?;
        self.write_balance(from_acc, new_from);
        self.total_burned = new_burned;
        debug!("ledger retire {:?} -{} (burned {})", from_acc, amount_val, new_burned);
        Ok(())
    }

    // -------- allowance primitives --------

    pub fn set_allowance(
        &mut self,
        caller_acc: AccountId,
        owner_acc: AccountId,
        spender_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.only_owner(caller_acc)?;
        self.write_allowance(owner_acc, spender_acc, amount_val);
        Ok(())
    }

    pub fn increase_allowance(
        &mut self,
        caller_acc: AccountId,
        owner_acc: AccountId,
        spender_acc: AccountId,
        add_val: Balance,
    ) -> Result<Balance> {
        self.only_owner(caller_acc)?;
        let new_val = self
            .allowance(owner_acc, spender_acc)
            .checked_add(add_val)
            .ok_or(Error::Overflow)?;
        self.write_allowance(owner_acc, spender_acc, new_val);
        Ok(new_val)
    }

    pub fn decrease_allowance(
        &mut self,
        caller_acc: AccountId,
        owner_acc: AccountId,
        spender_acc: AccountId,
        sub_val: Balance,
    ) -> Result<Balance> {
        self.only_owner(caller_acc)?;
        let new_val = self
            .allowance(owner_acc, spender_acc)
            .checked_sub(sub_val)
            .ok_or(Error::InsufficientAllowance)?;
        self.write_allowance(owner_acc, spender_acc, new_val);
        Ok(new_val)
    }

    // ---- internals ----

    // zero entries are dropped so equal ledgers encode identically
    fn write_balance(&mut self, acc: AccountId, value: Balance) {
        if value == 0 {
            self.balances.remove(&acc);
        } else {
            self.balances.insert(acc, value);
        }
    }

    fn write_allowance(&mut self, owner_acc: AccountId, spender_acc: AccountId, value: Balance) {
        if value == 0 {
            self.allowances.remove(&(owner_acc, spender_acc));
        } else {
            self.allowances.insert((owner_acc, spender_acc), value);
        }
    }
}
