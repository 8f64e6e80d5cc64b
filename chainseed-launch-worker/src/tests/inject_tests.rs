// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

use crate::batcher::pack_batches;
use crate::builder::build_seeding_groups;
use crate::inject::inject_batches;
use crate::tests::tools::genesis_index;
use chainseed_launch_exports::test_exports::RecordingSink;
use chainseed_launch_exports::{
    BatchStatus, ChainClient, ClientError, LaunchConfig, MockChainClient, ProgressEvent,
    TransactionAck, WalletConfig,
};
use chainseed_models::Batch;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn five_account_batches() -> Vec<Batch> {
    let index = genesis_index(&[
        ("alice", "5"),
        ("bob", "5"),
        ("carol", "5"),
        ("dave", "5"),
        ("erin", "5"),
    ]);
    pack_batches(build_seeding_groups(&index).unwrap(), 8)
}

#[tokio::test]
async fn test_drain_confirms_every_batch() {
    let batches = five_account_batches();
    assert_eq!(batches.len(), 3);

    let mut client = MockChainClient::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    client.expect_submit().returning(move |operations, opts| {
        assert!(operations.len() <= 8);
        assert_eq!(opts.blocks_behind, 3);
        assert_eq!(opts.expire_seconds, 30);
        let n = seen.fetch_add(1, Ordering::SeqCst);
        Ok(TransactionAck {
            transaction_id: format!("tx-{}", n),
        })
    });
    let client: Arc<dyn ChainClient> = Arc::new(client);
    let sink = Arc::new(RecordingSink::new());

    let report = inject_batches(client, sink.clone(), &LaunchConfig::default(), batches)
        .await
        .unwrap();

    assert!(report.is_clean());
    assert!(!report.halted);
    assert_eq!(report.batches_confirmed, 3);
    assert_eq!(report.batches_failed, 0);
    assert_eq!(report.accounts_submitted, 5);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    let ids: Vec<u64> = report.outcomes.iter().map(|o| o.batch_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    let events = sink.events();
    assert!(events.contains(&ProgressEvent::BatchesPrepared {
        batches: 3,
        operations: 20,
    }));
    // below the reporting interval only the final batch reports
    let confirmations: Vec<&ProgressEvent> = events
        .iter()
        .filter(|event| matches!(event, ProgressEvent::BatchConfirmed { .. }))
        .collect();
    assert_eq!(
        confirmations,
        vec![&ProgressEvent::BatchConfirmed {
            batch_id: 2,
            accounts_done: 5,
            batches_left: 0,
        }]
    );
}

#[tokio::test]
async fn test_first_failure_halts_the_drain() {
    let batches = five_account_batches();

    let mut client = MockChainClient::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    client.expect_submit().returning(move |_, _| {
        let n = seen.fetch_add(1, Ordering::SeqCst);
        if n == 1 {
            Err(ClientError::Rejected(
                "assertion failure at operation 3".to_string(),
            ))
        } else {
            Ok(TransactionAck {
                transaction_id: format!("tx-{}", n),
            })
        }
    });
    let sink = Arc::new(RecordingSink::new());

    let report = inject_batches(
        Arc::new(client),
        sink,
        &LaunchConfig::default(),
        batches,
    )
    .await
    .unwrap();

    assert!(!report.is_clean());
    assert!(report.halted);
    assert_eq!(report.batches_confirmed, 1);
    assert_eq!(report.batches_failed, 1);
    assert_eq!(report.accounts_submitted, 2);
    // the third batch was never pulled
    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    match &report.outcomes[1].status {
        BatchStatus::Failed { reason, operations } => {
            assert!(reason.contains("assertion failure"));
            assert_eq!(operations.len(), 8);
        }
        other => panic!("expected a failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wallet_unlock_is_retried_once() {
    let index = genesis_index(&[("alice", "5")]);
    let batches = pack_batches(build_seeding_groups(&index).unwrap(), 600);

    let mut client = MockChainClient::new();
    let unlocks = Arc::new(AtomicUsize::new(0));
    let seen = unlocks.clone();
    client
        .expect_unlock_wallet()
        .returning(move |wallet, password| {
            assert_eq!(wallet, "genesis");
            assert_eq!(password, "hunter2");
            let n = seen.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                Err(ClientError::Rejected("already unlocked".to_string()))
            } else {
                Ok(())
            }
        });
    client.expect_submit().returning(|_, _| {
        Ok(TransactionAck {
            transaction_id: "tx".to_string(),
        })
    });
    let mut config = LaunchConfig::default();
    config.wallet = Some(WalletConfig {
        name: "genesis".to_string(),
        password: "hunter2".to_string(),
    });
    let sink = Arc::new(RecordingSink::new());

    let report = inject_batches(Arc::new(client), sink.clone(), &config, batches)
        .await
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(unlocks.load(Ordering::SeqCst), 2);
    assert!(sink.events().contains(&ProgressEvent::WalletUnlockRetried));
}

#[tokio::test]
async fn test_persistent_unlock_failure_does_not_block_the_run() {
    let index = genesis_index(&[("alice", "5")]);
    let batches = pack_batches(build_seeding_groups(&index).unwrap(), 600);

    let mut client = MockChainClient::new();
    let unlocks = Arc::new(AtomicUsize::new(0));
    let seen = unlocks.clone();
    client.expect_unlock_wallet().returning(move |_, _| {
        seen.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Rejected("already unlocked".to_string()))
    });
    client.expect_submit().returning(|_, _| {
        Ok(TransactionAck {
            transaction_id: "tx".to_string(),
        })
    });
    let mut config = LaunchConfig::default();
    config.wallet = Some(WalletConfig {
        name: "genesis".to_string(),
        password: "hunter2".to_string(),
    });
    let sink = Arc::new(RecordingSink::new());

    let report = inject_batches(Arc::new(client), sink.clone(), &config, batches)
        .await
        .unwrap();

    // exactly one retry; whether the signer can sign is for the submission
    // to decide, and here it confirms
    assert!(report.is_clean());
    assert_eq!(report.batches_confirmed, 1);
    assert_eq!(unlocks.load(Ordering::SeqCst), 2);
    assert!(sink.events().contains(&ProgressEvent::WalletUnlockRetried));
}

#[tokio::test]
async fn test_empty_queue_is_a_clean_run() {
    // any client call would panic the mock
    let client = MockChainClient::new();
    let sink = Arc::new(RecordingSink::new());

    let report = inject_batches(
        Arc::new(client),
        sink.clone(),
        &LaunchConfig::default(),
        vec![],
    )
    .await
    .unwrap();

    assert!(report.is_clean());
    assert!(report.outcomes.is_empty());
    assert!(sink.events().contains(&ProgressEvent::BatchesPrepared {
        batches: 0,
        operations: 0,
    }));
}

#[tokio::test(start_paused = true)]
async fn test_same_actor_batches_are_spaced() {
    let index = genesis_index(&[("alice", "5"), ("bob", "5")]);
    // two batches, both authorized by the funding account
    let batches = pack_batches(build_seeding_groups(&index).unwrap(), 4);
    assert_eq!(batches.len(), 2);

    let mut client = MockChainClient::new();
    client.expect_submit().returning(|_, _| {
        Ok(TransactionAck {
            transaction_id: "tx".to_string(),
        })
    });
    let mut config = LaunchConfig::default();
    config.same_actor_delay = Some(Duration::from_secs(1));
    let started = tokio::time::Instant::now();

    let report = inject_batches(
        Arc::new(client),
        Arc::new(RecordingSink::new()),
        &config,
        batches,
    )
    .await
    .unwrap();

    assert!(report.is_clean());
    assert!(started.elapsed() >= Duration::from_secs(1));
}
