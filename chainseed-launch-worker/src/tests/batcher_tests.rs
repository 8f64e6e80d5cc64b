// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

use crate::batcher::pack_batches;
use crate::builder::build_seeding_groups;
use crate::tests::tools::genesis_index;

#[test]
fn test_groups_are_never_split_across_batches() {
    // five accounts, four operations each, so a cap of ten fits two groups
    let index = genesis_index(&[
        ("alice", "5"),
        ("bob", "5"),
        ("carol", "5"),
        ("dave", "5"),
        ("erin", "5"),
    ]);
    let groups = build_seeding_groups(&index).unwrap();

    let batches = pack_batches(groups, 10);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 8);
    assert_eq!(batches[0].accounts, 2);
    assert_eq!(batches[1].len(), 8);
    assert_eq!(batches[1].accounts, 2);
    assert_eq!(batches[2].len(), 4);
    assert_eq!(batches[2].accounts, 1);
    let ids: Vec<u64> = batches.iter().map(|batch| batch.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_exact_fit_fills_the_batch() {
    let index = genesis_index(&[("alice", "5"), ("bob", "5")]);
    let groups = build_seeding_groups(&index).unwrap();

    let batches = pack_batches(groups, 8);
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 8);
    assert_eq!(batches[0].accounts, 2);
}

#[test]
fn test_oversized_group_rides_alone() {
    let index = genesis_index(&[("alice", "5"), ("bob", "5")]);
    let groups = build_seeding_groups(&index).unwrap();

    // the cap is below the group size, so each group becomes an over-cap batch
    let batches = pack_batches(groups, 3);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 4);
    assert_eq!(batches[0].accounts, 1);
    assert_eq!(batches[1].len(), 4);
    assert_eq!(batches[1].accounts, 1);
}

#[test]
fn test_account_order_is_preserved() {
    // index order is name order, whatever the snapshot order was
    let index = genesis_index(&[("dave", "5"), ("alice", "5"), ("bob", "5")]);
    let groups = build_seeding_groups(&index).unwrap();
    let names: Vec<&str> = groups.iter().map(|group| group.account.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "dave"]);

    let batches = pack_batches(groups, 600);
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].accounts, 3);
}

#[test]
fn test_no_groups_no_batches() {
    assert!(pack_batches(vec![], 600).is_empty());
}
