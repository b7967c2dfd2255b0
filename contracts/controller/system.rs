use std::collections::BTreeMap;

use ledger_store::LedgerStore;
use ledger_types::{AccountId, Balance, Component, Error, Event, Ownable, Result};
use log::{debug, info};
use token_service::{Governor, TokenConfig, TokenService, Unwired};

use crate::config::SystemConfig;
use crate::model::{Controller, ControllerConfig};

const LEDGER_TAG: u8 = 0xDA;
const TOKEN_TAG: u8 = 0x70;
const CONTROLLER_TAG: u8 = 0xC0;

/// One token service, its ledger store, and every controller deployed
/// against them.
///
/// Each public method is one atomic step: it either completes and appends
/// its events to the journal, or fails and leaves everything as it was.
/// `&mut self` gives the total order; embedders that share a system across
/// threads put it behind a mutex.
#[derive(Debug, Clone)]
pub struct TokenSystem {
    ledger: LedgerStore,
    token: TokenService,
    controllers: BTreeMap<AccountId, Controller>,
    journal: Vec<Event>,
    nonce_u64: u64,
}

impl TokenSystem {
    // -------- deployment --------

    /// Deploy a ledger store and a token service, both owned by `deployer_acc`.
    pub fn deploy(deployer_acc: AccountId, config: TokenConfig) -> Self {
        let ledger_acc = Self::derive_address(LEDGER_TAG, 0);
        let token_acc = Self::derive_address(TOKEN_TAG, 1);
        info!("deployed ledger {:?} and token {:?} for {:?}", ledger_acc, token_acc, deployer_acc);
        Self {
            ledger: LedgerStore::new(ledger_acc, deployer_acc),
            token: TokenService::new(token_acc, deployer_acc, ledger_acc, config),
            controllers: BTreeMap::new(),
            journal: Vec::new(),
            nonce_u64: 2,
        }
    }

    /// Deploy from a [`SystemConfig`]: token and ledger owned by
    /// `deployer_acc`, plus a first controller administered by `admin_acc`.
    /// Returns the system and the controller's address. Ownership is not
    /// moved yet; the deployer wires it once the addresses are checked.
    pub fn from_config(deployer_acc: AccountId, admin_acc: AccountId, config: &SystemConfig) -> (Self, AccountId) {
        let mut system = Self::deploy(deployer_acc, config.token.clone());
        let controller_acc = system.deploy_controller(admin_acc, config.controller.clone());
        (system, controller_acc)
    }

    /// Deploy a controller bound to this system's token and ledger. It starts
    /// Paused and owns nothing until ownership is transferred to it.
    pub fn deploy_controller(&mut self, admin_acc: AccountId, config: ControllerConfig) -> AccountId {
        let address_acc = Self::derive_address(CONTROLLER_TAG, self.nonce_u64);
        self.nonce_u64 += 1;
        let controller = Controller::new(
            address_acc,
            admin_acc,
            self.token.address(),
            self.ledger.address(),
            config,
        );
        self.controllers.insert(address_acc, controller);
        info!("deployed controller {:?} administered by {:?}", address_acc, admin_acc);
        address_acc
    }

    // Addresses are unique per system: a tag byte plus a deployment counter.
    fn derive_address(tag: u8, nonce_u64: u64) -> AccountId {
        let mut raw = [0u8; 32];
        raw[0] = tag;
        raw[24..].copy_from_slice(&nonce_u64.to_be_bytes());
        AccountId::from(raw)
    }

    // -------- read API --------

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn token(&self) -> &TokenService {
        &self.token
    }

    pub fn controller(&self, controller_acc: AccountId) -> Option<&Controller> {
        self.controllers.get(&controller_acc)
    }

    /// The account currently governing the token service.
    pub fn governor(&self) -> AccountId {
        self.token.owner()
    }

    pub fn total_supply(&self) -> Balance {
        self.token.total_supply(&self.ledger)
    }

    pub fn total_minted(&self) -> Balance {
        self.token.total_minted(&self.ledger)
    }

    pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
        self.token.balance_of(&self.ledger, owner_acc)
    }

    pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
        self.token.allowance(&self.ledger, owner_acc, spender_acc)
    }

    pub fn events(&self) -> &[Event] {
        &self.journal
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.journal)
    }

    fn emit(&mut self, event: Event) {
        debug!("event {:?}", event);
        self.journal.push(event);
    }

    // -------- direct ownership --------

    pub fn transfer_ledger_ownership(&mut self, caller_acc: AccountId, new_owner_acc: AccountId) -> Result<()> {
        self.ledger.transfer_ownership(caller_acc, new_owner_acc)?;
        self.emit(Event::OwnershipTransferred {
            component: Component::LedgerStore,
            previous_acc: caller_acc,
            new_acc: new_owner_acc,
        });
        Ok(())
    }

    pub fn transfer_token_ownership(&mut self, caller_acc: AccountId, new_owner_acc: AccountId) -> Result<()> {
        self.token.transfer_ownership(caller_acc, new_owner_acc)?;
        self.emit(Event::OwnershipTransferred {
            component: Component::TokenService,
            previous_acc: caller_acc,
            new_acc: new_owner_acc,
        });
        Ok(())
    }

    // -------- token API --------

    /// Run a token operation against whatever currently owns the token.
    fn governed<T>(
        &mut self,
        op: impl FnOnce(&TokenService, &dyn Governor, &mut LedgerStore) -> Result<T>,
    ) -> Result<T> {
        let owner_acc = self.token.owner();
        let unwired = Unwired { owner_acc };
        let governor: &dyn Governor = match self.controllers.get(&owner_acc) {
            Some(controller) => controller,
            None => &unwired,
        };
        op(&self.token, governor, &mut self.ledger)
    }

    pub fn transfer(&mut self, caller_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<()> {
        self.governed(|token, governor, ledger| token.transfer(governor, ledger, caller_acc, to_acc, amount_val))?;
        self.emit(Event::Transferred { from_acc: caller_acc, to_acc, amount_val });
        Ok(())
    }

    pub fn approve(&mut self, caller_acc: AccountId, spender_acc: AccountId, amount_val: Balance) -> Result<()> {
        self.governed(|token, governor, ledger| token.approve(governor, ledger, caller_acc, spender_acc, amount_val))?;
        self.emit(Event::Approved { owner_acc: caller_acc, spender_acc, amount_val });
        Ok(())
    }

    pub fn increase_allowance(
        &mut self,
        caller_acc: AccountId,
        spender_acc: AccountId,
        add_val: Balance,
    ) -> Result<()> {
        let amount_val = self.governed(|token, governor, ledger| {
            token.increase_allowance(governor, ledger, caller_acc, spender_acc, add_val)
        })?;
        self.emit(Event::Approved { owner_acc: caller_acc, spender_acc, amount_val });
        Ok(())
    }

    pub fn decrease_allowance(
        &mut self,
        caller_acc: AccountId,
        spender_acc: AccountId,
        sub_val: Balance,
    ) -> Result<()> {
        let amount_val = self.governed(|token, governor, ledger| {
            token.decrease_allowance(governor, ledger, caller_acc, spender_acc, sub_val)
        })?;
        self.emit(Event::Approved { owner_acc: caller_acc, spender_acc, amount_val });
        Ok(())
    }

    pub fn transfer_from(
        &mut self,
        caller_acc: AccountId,
        from_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.governed(|token, governor, ledger| {
            token.transfer_from(governor, ledger, caller_acc, from_acc, to_acc, amount_val)
        })?;
        self.emit(Event::Transferred { from_acc, to_acc, amount_val });
        Ok(())
    }

    pub fn burn(&mut self, caller_acc: AccountId, amount_val: Balance) -> Result<()> {
        self.governed(|token, governor, ledger| token.burn(governor, ledger, caller_acc, amount_val))?;
        self.emit(Event::Burned { from_acc: caller_acc, amount_val });
        Ok(())
    }

    /// Mint called on the token service directly. Only its owner may do
    /// this; once a controller owns the token, use [`Self::controller_mint`].
    pub fn mint(&mut self, caller_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<()> {
        self.governed(|token, governor, ledger| token.mint(governor, ledger, caller_acc, to_acc, amount_val))?;
        self.emit(Event::Minted { to_acc, amount_val });
        Ok(())
    }

    // -------- controller API --------

    fn controller_mut(&mut self, controller_acc: AccountId) -> Result<&mut Controller> {
        self.controllers.get_mut(&controller_acc).ok_or(Error::UnknownController)
    }

    pub fn pause(&mut self, controller_acc: AccountId, caller_acc: AccountId) -> Result<()> {
        self.controller_mut(controller_acc)?.pause(caller_acc)?;
        self.emit(Event::Paused { controller_acc });
        Ok(())
    }

    pub fn unpause(&mut self, controller_acc: AccountId, caller_acc: AccountId) -> Result<()> {
        self.controller_mut(controller_acc)?.unpause(caller_acc)?;
        self.emit(Event::Unpaused { controller_acc });
        Ok(())
    }

    pub fn finish_minting(&mut self, controller_acc: AccountId, caller_acc: AccountId) -> Result<()> {
        self.controller_mut(controller_acc)?.finish_minting(caller_acc)?;
        self.emit(Event::MintingFinished { controller_acc });
        Ok(())
    }

    pub fn transfer_controller_ownership(
        &mut self,
        controller_acc: AccountId,
        caller_acc: AccountId,
        new_admin_acc: AccountId,
    ) -> Result<()> {
        self.controller_mut(controller_acc)?.transfer_ownership(caller_acc, new_admin_acc)?;
        self.emit(Event::OwnershipTransferred {
            component: Component::Controller,
            previous_acc: caller_acc,
            new_acc: new_admin_acc,
        });
        Ok(())
    }

    pub fn controller_mint(
        &mut self,
        controller_acc: AccountId,
        caller_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        let controller = self.controllers.get(&controller_acc).ok_or(Error::UnknownController)?;
        controller.mint(&self.token, &mut self.ledger, caller_acc, to_acc, amount_val)?;
        self.emit(Event::Minted { to_acc, amount_val });
        Ok(())
    }

    /// Handover: move the ledger store and the token service from
    /// `controller_acc` to `successor_acc`.
    ///
    /// Controllers deployed here are always bound to this token and ledger.
    /// Any other non-null account is accepted and leaves the token unwired.
    pub fn kill(&mut self, controller_acc: AccountId, caller_acc: AccountId, successor_acc: AccountId) -> Result<()> {
        let controller = self.controllers.get_mut(&controller_acc).ok_or(Error::UnknownController)?;
        controller.kill(&mut self.token, &mut self.ledger, caller_acc, successor_acc)?;

        self.emit(Event::OwnershipTransferred {
            component: Component::LedgerStore,
            previous_acc: controller_acc,
            new_acc: successor_acc,
        });
        self.emit(Event::OwnershipTransferred {
            component: Component::TokenService,
            previous_acc: controller_acc,
            new_acc: successor_acc,
        });
        self.emit(Event::HandedOver { retired_acc: controller_acc, successor_acc });
        Ok(())
    }
}
