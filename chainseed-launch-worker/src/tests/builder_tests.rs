// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

use crate::builder::{build_register_groups, build_seeding_group, build_seeding_groups};
use crate::tests::tools::{amount, genesis_index, name};
use chainseed_launch_exports::{LaunchError, RegistryConfig};
use chainseed_models::{Amount, OperationKind};
use chainseed_snapshot::test_exports::MemorySource;
use chainseed_snapshot::{SnapshotFormat, SnapshotIndex};

#[test]
fn test_seeding_group_shape() {
    let index = genesis_index(&[("alice", "5.0000")]);
    let groups = build_seeding_groups(&index).unwrap();
    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.account, name("alice"));
    assert_eq!(group.len(), 4);

    match &group.operations[0].kind {
        OperationKind::CreateAccount {
            creator,
            name: created,
            owner_key,
            active_key,
        } => {
            assert_eq!(creator.as_str(), "chainseed");
            assert_eq!(created.as_str(), "alice");
            assert_eq!(owner_key, active_key);
        }
        other => panic!("expected a create, got {}", other),
    }
    match &group.operations[1].kind {
        OperationKind::AllocateRam { bytes, .. } => assert_eq!(*bytes, 4096),
        other => panic!("expected a ram purchase, got {}", other),
    }
    match &group.operations[2].kind {
        OperationKind::DelegateStake {
            cpu_stake,
            net_stake,
            transfer,
            ..
        } => {
            assert_eq!(*cpu_stake, amount("1.5"));
            assert_eq!(*net_stake, amount("1.5"));
            assert!(*transfer);
        }
        other => panic!("expected a stake delegation, got {}", other),
    }
    match &group.operations[3].kind {
        OperationKind::Transfer { quantity, memo, .. } => {
            assert_eq!(*quantity, amount("2"));
            assert_eq!(memo, "Genesis");
        }
        other => panic!("expected a transfer, got {}", other),
    }
    for op in &group.operations {
        assert_eq!(op.auth.actor.as_str(), "chainseed");
        assert_eq!(op.auth.permission, "active");
    }
}

#[test]
fn test_transfer_is_omitted_when_nothing_stays_liquid() {
    let index = genesis_index(&[("alice", "5.0000")]);
    let mut record = index.get(&name("alice")).unwrap().clone();
    record.liquid = Amount::zero();

    let group = build_seeding_group(&record).unwrap();
    assert_eq!(group.len(), 3);
    assert!(!group
        .operations
        .iter()
        .any(|op| matches!(op.kind, OperationKind::Transfer { .. })));
}

#[test]
fn test_seeding_requires_a_key() {
    // balances-format rows carry no public key
    let source = MemorySource::new("alice,5.0000");
    let index =
        SnapshotIndex::build(&source, SnapshotFormat::Balances, &Default::default()).unwrap();

    let err = build_seeding_groups(&index).unwrap_err();
    assert!(matches!(err, LaunchError::MissingKey(account) if account == "alice"));
}

#[test]
fn test_register_groups_write_one_entry_per_account() {
    let index = genesis_index(&[("alice", "5.0000"), ("bob", "0.5000")]);
    let registry = RegistryConfig {
        registry: name("seedregistry"),
        actor: name("seedscribe"),
        permission: "active".to_string(),
        snapshot_id: 42,
    };

    let groups = build_register_groups(&index, &registry);
    assert_eq!(groups.len(), 2);
    for group in &groups {
        assert_eq!(group.len(), 1);
        assert_eq!(group.operations[0].auth.actor, registry.actor);
    }
    match &groups[0].operations[0].kind {
        OperationKind::RegisterBalance {
            registry: target,
            account,
            snapshot_id,
            amount: recorded,
        } => {
            assert_eq!(target.as_str(), "seedregistry");
            assert_eq!(account.as_str(), "alice");
            assert_eq!(*snapshot_id, 42);
            assert_eq!(*recorded, amount("5"));
        }
        other => panic!("expected a registry write, got {}", other),
    }
}
