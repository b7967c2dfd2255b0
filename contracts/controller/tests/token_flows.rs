use controller::{null_account, AccountId, ControllerConfig, Error, Event, TokenConfig, TokenSystem};

fn acc(byte: u8) -> AccountId {
    AccountId::from([byte; 32])
}

const DEPLOYER: u8 = 9;
const ADMIN: u8 = 8;
const TOKENHOLDER_1: u8 = 5;
const SCAMMER: u8 = 4;
const BENEFICIARY: u8 = 1;

fn wired() -> (TokenSystem, AccountId) {
    let mut system = TokenSystem::deploy(acc(DEPLOYER), TokenConfig::default());
    let controller_acc = system.deploy_controller(acc(ADMIN), ControllerConfig::default());
    system.transfer_token_ownership(acc(DEPLOYER), controller_acc).unwrap();
    system.transfer_ledger_ownership(acc(DEPLOYER), controller_acc).unwrap();
    system.unpause(controller_acc, acc(ADMIN)).unwrap();
    system.controller_mint(controller_acc, acc(ADMIN), acc(TOKENHOLDER_1), 100).unwrap();
    (system, controller_acc)
}

mod transfer {
    use super::*;

    #[test]
    fn investors_can_transfer() {
        let (mut system, _) = wired();
        system.transfer(acc(TOKENHOLDER_1), acc(BENEFICIARY), 100).unwrap();
        assert_eq!(system.balance_of(acc(BENEFICIARY)), 100);
    }

    #[test]
    fn scammer_cannot_transfer_unowned_tokens() {
        let (mut system, _) = wired();
        assert_eq!(
            system.transfer(acc(SCAMMER), acc(BENEFICIARY), 100),
            Err(Error::InsufficientFunds)
        );
        assert_eq!(system.balance_of(acc(BENEFICIARY)), 0);
    }

    #[test]
    fn cannot_transfer_more_than_balance() {
        let (mut system, _) = wired();
        system.transfer(acc(TOKENHOLDER_1), acc(BENEFICIARY), 100).unwrap();
        assert_eq!(
            system.transfer(acc(BENEFICIARY), acc(TOKENHOLDER_1), 110),
            Err(Error::InsufficientFunds)
        );
        assert_eq!(system.balance_of(acc(BENEFICIARY)), 100);
    }

    #[test]
    fn cannot_transfer_when_paused() {
        let (mut system, controller_acc) = wired();
        system.pause(controller_acc, acc(ADMIN)).unwrap();
        assert_eq!(
            system.transfer(acc(TOKENHOLDER_1), acc(BENEFICIARY), 100),
            Err(Error::SystemPaused)
        );
        assert_eq!(system.balance_of(acc(BENEFICIARY)), 0);
    }

    #[test]
    fn cannot_mint_when_minting_finished() {
        let (mut system, controller_acc) = wired();
        system.finish_minting(controller_acc, acc(ADMIN)).unwrap();
        // direct call on the token, not through the controller
        assert_eq!(system.mint(acc(ADMIN), acc(BENEFICIARY), 100), Err(Error::MintingClosed));
        assert_eq!(
            system.controller_mint(controller_acc, acc(ADMIN), acc(BENEFICIARY), 100),
            Err(Error::MintingClosed)
        );
        assert_eq!(system.balance_of(acc(BENEFICIARY)), 0);
    }

    #[test]
    fn only_the_owner_mints_directly() {
        let (mut system, _) = wired();
        assert_eq!(system.mint(acc(ADMIN), acc(BENEFICIARY), 100), Err(Error::Unauthorized));
        assert_eq!(system.mint(acc(DEPLOYER), acc(BENEFICIARY), 100), Err(Error::Unauthorized));
    }

    #[test]
    fn cannot_transfer_to_self() {
        let (mut system, _) = wired();
        assert_eq!(
            system.transfer(acc(TOKENHOLDER_1), acc(TOKENHOLDER_1), 100),
            Err(Error::InvalidTarget)
        );
    }

    #[test]
    fn cannot_transfer_to_null() {
        let (mut system, _) = wired();
        assert_eq!(
            system.transfer(acc(TOKENHOLDER_1), null_account(), 100),
            Err(Error::InvalidTarget)
        );
    }

    #[test]
    fn cannot_transfer_zero() {
        let (mut system, _) = wired();
        assert_eq!(system.transfer(acc(BENEFICIARY), acc(TOKENHOLDER_1), 0), Err(Error::ZeroAmount));
    }
}

mod transfer_from {
    use super::*;

    #[test]
    fn investors_can_approve_and_transfer_from() {
        let (mut system, _) = wired();
        system.approve(acc(TOKENHOLDER_1), acc(BENEFICIARY), 100).unwrap();
        assert_eq!(system.allowance(acc(TOKENHOLDER_1), acc(BENEFICIARY)), 100);
        system
            .transfer_from(acc(BENEFICIARY), acc(TOKENHOLDER_1), acc(BENEFICIARY), 100)
            .unwrap();
        assert_eq!(system.balance_of(acc(BENEFICIARY)), 100);
        assert_eq!(system.allowance(acc(TOKENHOLDER_1), acc(BENEFICIARY)), 0);
        assert_eq!(
            system.transfer_from(acc(BENEFICIARY), acc(TOKENHOLDER_1), acc(BENEFICIARY), 1),
            Err(Error::InsufficientAllowance)
        );
    }

    #[test]
    fn cannot_approve_when_paused() {
        let (mut system, controller_acc) = wired();
        system.pause(controller_acc, acc(ADMIN)).unwrap();
        assert_eq!(
            system.approve(acc(TOKENHOLDER_1), acc(BENEFICIARY), 100),
            Err(Error::SystemPaused)
        );
        assert_eq!(system.allowance(acc(TOKENHOLDER_1), acc(BENEFICIARY)), 0);
    }

    #[test]
    fn cannot_approve_self() {
        let (mut system, _) = wired();
        assert_eq!(
            system.approve(acc(BENEFICIARY), acc(BENEFICIARY), 100),
            Err(Error::InvalidTarget)
        );
        assert_eq!(system.allowance(acc(TOKENHOLDER_1), acc(BENEFICIARY)), 0);
    }

    #[test]
    fn cannot_transfer_from_more_than_allowed() {
        let (mut system, _) = wired();
        system.approve(acc(TOKENHOLDER_1), acc(BENEFICIARY), 100).unwrap();
        assert_eq!(
            system.transfer_from(acc(BENEFICIARY), acc(TOKENHOLDER_1), acc(BENEFICIARY), 110),
            Err(Error::InsufficientAllowance)
        );
        assert_eq!(system.balance_of(acc(BENEFICIARY)), 0);
    }

    #[test]
    fn cannot_transfer_from_when_paused() {
        let (mut system, controller_acc) = wired();
        system.pause(controller_acc, acc(ADMIN)).unwrap();
        assert_eq!(
            system.transfer_from(acc(BENEFICIARY), acc(TOKENHOLDER_1), acc(BENEFICIARY), 100),
            Err(Error::SystemPaused)
        );
        assert_eq!(system.balance_of(acc(BENEFICIARY)), 0);
    }

    #[test]
    fn scammer_cannot_approve_unowned_tokens() {
        let (mut system, _) = wired();
        assert_eq!(
            system.approve(acc(SCAMMER), acc(BENEFICIARY), 100),
            Err(Error::InsufficientFunds)
        );
        assert_eq!(system.allowance(acc(SCAMMER), acc(BENEFICIARY)), 0);
        assert_eq!(system.allowance(acc(TOKENHOLDER_1), acc(BENEFICIARY)), 0);
    }

    #[test]
    fn allowance_adjusters_emit_the_resulting_value() {
        let (mut system, _) = wired();
        system.drain_events();
        system.increase_allowance(acc(TOKENHOLDER_1), acc(BENEFICIARY), 30).unwrap();
        system.decrease_allowance(acc(TOKENHOLDER_1), acc(BENEFICIARY), 10).unwrap();
        assert_eq!(
            system.drain_events(),
            vec![
                Event::Approved { owner_acc: acc(TOKENHOLDER_1), spender_acc: acc(BENEFICIARY), amount_val: 30 },
                Event::Approved { owner_acc: acc(TOKENHOLDER_1), spender_acc: acc(BENEFICIARY), amount_val: 20 },
            ]
        );
    }
}

mod supply {
    use super::*;

    #[test]
    fn burn_is_recorded_and_reduces_supply() {
        let (mut system, _) = wired();
        system.drain_events();
        system.burn(acc(TOKENHOLDER_1), 30).unwrap();
        assert_eq!(system.total_supply(), 70);
        assert_eq!(
            system.events(),
            &[Event::Burned { from_acc: acc(TOKENHOLDER_1), amount_val: 30 }]
        );
    }

    #[test]
    fn burning_after_minting_closed_keeps_the_minted_total() {
        let (mut system, controller_acc) = wired();
        system.finish_minting(controller_acc, acc(ADMIN)).unwrap();
        system.burn(acc(TOKENHOLDER_1), 40).unwrap();
        assert_eq!(system.total_minted(), 100);
        assert_eq!(system.total_supply(), 60);
        assert_eq!(
            system.controller_mint(controller_acc, acc(ADMIN), acc(BENEFICIARY), 40),
            Err(Error::MintingClosed)
        );
        assert_eq!(system.total_minted(), 100);
        assert_eq!(system.total_supply(), 60);
    }

    #[test]
    fn failed_operations_leave_no_events() {
        let (mut system, _) = wired();
        system.drain_events();
        let _ = system.transfer(acc(SCAMMER), acc(BENEFICIARY), 1);
        let _ = system.approve(acc(BENEFICIARY), acc(BENEFICIARY), 1);
        let _ = system.burn(acc(SCAMMER), 1);
        assert!(system.events().is_empty());
    }

    #[test]
    fn token_metadata_is_reachable() {
        let config = TokenConfig { name: "Moo".into(), symbol: "MOO".into(), decimals: 2 };
        let system = TokenSystem::deploy(acc(DEPLOYER), config);
        assert_eq!(system.token().symbol(), "MOO");
        assert_eq!(system.token().decimals(), 2);
    }
}
