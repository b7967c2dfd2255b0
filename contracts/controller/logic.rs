use ledger_store::LedgerStore;
use ledger_types::{is_null, AccountId, Balance, Error, Ownable, Result};
use log::{info, warn};
use token_service::{Governor, TokenService};

use crate::model::{Controller, ControllerConfig};

impl Ownable for Controller {
    fn owner(&self) -> AccountId {
        self.admin_acc
    }
}

impl Governor for Controller {
    fn governor_acc(&self) -> AccountId {
        self.address_acc
    }

    fn is_paused(&self) -> bool {
        self.paused_flag
    }

    fn is_minting_finished(&self) -> bool {
        self.minting_finished_flag
    }
}

impl Controller {
    // -------- constructors --------

    /// Deployed Paused, so the administrator can verify the ownership
    /// wiring before anything moves.
    pub fn new(
        address_acc: AccountId,
        admin_acc: AccountId,
        token_acc: AccountId,
        ledger_acc: AccountId,
        config: ControllerConfig,
    ) -> Self {
        Self {
            address_acc,
            admin_acc,
            token_acc,
            ledger_acc,
            paused_flag: true,
            minting_finished_flag: config.minting_finished,
            successor_opt: None,
        }
    }

    // -------- read API --------

    pub fn address(&self) -> AccountId {
        self.address_acc
    }

    pub fn admin(&self) -> AccountId {
        self.admin_acc
    }

    pub fn token(&self) -> AccountId {
        self.token_acc
    }

    pub fn ledger(&self) -> AccountId {
        self.ledger_acc
    }

    /// Set once this controller has handed over its components.
    pub fn successor(&self) -> Option<AccountId> {
        self.successor_opt
    }

    // -------- admin / lifecycle --------

    pub fn pause(&mut self, caller_acc: AccountId) -> Result<()> {
        self.only_owner(caller_acc)?;
        if self.paused_flag {
            return Err(Error::InvalidTransition)
        }
        self.paused_flag = true;
        info!("controller {:?} paused", self.address_acc);
        Ok(())
    }

    /// A retired controller never resumes.
    pub fn unpause(&mut self, caller_acc: AccountId) -> Result<()> {
        self.only_owner(caller_acc)?;
        if !self.paused_flag || self.successor_opt.is_some() {
            return Err(Error::InvalidTransition)
        }
        self.paused_flag = false;
        info!("controller {:?} unpaused", self.address_acc);
        Ok(())
    }

    /// One-way: there is no way to reopen minting on this controller.
    pub fn finish_minting(&mut self, caller_acc: AccountId) -> Result<()> {
        self.only_owner(caller_acc)?;
        if self.minting_finished_flag {
            return Err(Error::InvalidTransition)
        }
        self.minting_finished_flag = true;
        info!("controller {:?} finished minting", self.address_acc);
        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller_acc: AccountId, new_admin_acc: AccountId) -> Result<()> {
        self.only_owner(caller_acc)?;
        if is_null(&new_admin_acc) {
            return Err(Error::InvalidTarget)
        }
        self.admin_acc = new_admin_acc;
        info!("controller {:?}: admin {:?} -> {:?}", self.address_acc, caller_acc, new_admin_acc);
        Ok(())
    }

    // -------- forwarding --------

    fn wired_to(&self, token: &TokenService, ledger: &LedgerStore) -> Result<()> {
        if token.address() != self.token_acc || ledger.address() != self.ledger_acc {
            return Err(Error::InvalidTarget)
        }
        Ok(())
    }

    /// Forward a mint to the token service under this controller's authority.
    pub fn mint(
        &self,
        token: &TokenService,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.only_owner(caller_acc)?;
        self.wired_to(token, ledger)?;
        token.mint(self, ledger, self.address_acc, to_acc, amount_val)
    }

    // -------- handover --------

    /// Every `kill` precondition that depends only on this controller.
    pub fn check_kill(&self, caller_acc: AccountId, successor_acc: AccountId) -> Result<()> {
        self.only_owner(caller_acc)?;
        if !self.paused_flag {
            warn!("controller {:?}: handover refused while active", self.address_acc);
            return Err(Error::MustBePaused)
        }
        if is_null(&successor_acc) || successor_acc == self.address_acc {
            return Err(Error::InvalidTarget)
        }
        Ok(())
    }

    /// Hand ownership of the ledger store and the token service to
    /// `successor_acc`. Both move or neither does.
    pub fn kill(
        &mut self,
        token: &mut TokenService,
        ledger: &mut LedgerStore,
        caller_acc: AccountId,
        successor_acc: AccountId,
    ) -> Result<()> {
        self.check_kill(caller_acc, successor_acc)?;
        self.wired_to(token, ledger)?;
        ledger.ensure_owner(self.address_acc)?;
        token.ensure_owner(self.address_acc)?;

        ledger.transfer_ownership(self.address_acc, successor_acc)?;
        if let Err(err) = token.transfer_ownership(self.address_acc, successor_acc) {
            ledger.transfer_ownership(successor_acc, self.address_acc)?;
            return Err(err)
        }

        self.successor_opt = Some(successor_acc);
        info!("controller {:?} handed over to {:?}", self.address_acc, successor_acc);
        Ok(())
    }
}
