// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Batch submission: drains the prepared batches through the chain client
//! and stops the line at the first failure.

use chainseed_launch_exports::{
    BatchOutcome, BatchStatus, ChainClient, InjectionReport, LaunchConfig, LaunchError,
    ProgressEvent, ReportSink, SubmitOptions, WalletConfig,
};
use chainseed_models::config::PROGRESS_BATCH_INTERVAL;
use chainseed_models::{AccountName, Batch};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Drain state shared by the submission workers.
struct DrainState {
    batches: Vec<Batch>,
    cursor: AtomicUsize,
    halt: AtomicBool,
    batches_done: AtomicU64,
    accounts_done: AtomicU64,
}

/// Submits the batches through `client` and reports progress to `sink`.
///
/// Batches are pulled in order by `injection_concurrency` workers. The first
/// rejected submission halts the drain: in-flight submissions finish,
/// batches never pulled stay out of the report, and the failed batch keeps
/// its full operation list so the operator can see exactly what did not
/// land. Only a worker panic makes this function itself fail.
pub async fn inject_batches(
    client: Arc<dyn ChainClient>,
    sink: Arc<dyn ReportSink>,
    config: &LaunchConfig,
    batches: Vec<Batch>,
) -> Result<InjectionReport, LaunchError> {
    if let Some(wallet) = &config.wallet {
        unlock_wallet(client.as_ref(), sink.as_ref(), wallet).await;
    }
    let operations: u64 = batches.iter().map(|batch| batch.len() as u64).sum();
    sink.progress(ProgressEvent::BatchesPrepared {
        batches: batches.len() as u64,
        operations,
    });
    info!(
        "submitting {} batches carrying {} operations",
        batches.len(),
        operations
    );

    let state = Arc::new(DrainState {
        batches,
        cursor: AtomicUsize::new(0),
        halt: AtomicBool::new(false),
        batches_done: AtomicU64::new(0),
        accounts_done: AtomicU64::new(0),
    });
    let opts = SubmitOptions {
        blocks_behind: config.blocks_behind,
        expire_seconds: config.expire_seconds,
    };
    let workers = config.injection_concurrency.max(1);
    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        handles.push(tokio::spawn(drain_worker(
            state.clone(),
            client.clone(),
            sink.clone(),
            opts,
            config.same_actor_delay,
        )));
    }
    let mut outcomes: Vec<BatchOutcome> = Vec::new();
    for handle in handles {
        let mut worker_outcomes = handle.await.map_err(|err| {
            LaunchError::EngineError(format!("submission worker panicked: {}", err))
        })?;
        outcomes.append(&mut worker_outcomes);
    }
    outcomes.sort_by_key(|outcome| outcome.batch_id);

    let mut batches_confirmed = 0u64;
    let mut batches_failed = 0u64;
    let mut accounts_submitted = 0u64;
    for outcome in &outcomes {
        match outcome.status {
            BatchStatus::Confirmed { .. } => {
                batches_confirmed += 1;
                accounts_submitted += outcome.accounts;
            }
            BatchStatus::Failed { .. } => batches_failed += 1,
        }
    }
    let halted = state.halt.load(Ordering::Relaxed);
    if halted {
        warn!(
            "drain halted after {} confirmed and {} failed batches, {} batches never submitted",
            batches_confirmed,
            batches_failed,
            state.batches.len() as u64 - batches_confirmed - batches_failed
        );
    } else {
        info!("all {} batches confirmed", batches_confirmed);
    }
    Ok(InjectionReport {
        outcomes,
        accounts_submitted,
        batches_confirmed,
        batches_failed,
        halted,
    })
}

async fn drain_worker(
    state: Arc<DrainState>,
    client: Arc<dyn ChainClient>,
    sink: Arc<dyn ReportSink>,
    opts: SubmitOptions,
    same_actor_delay: Option<Duration>,
) -> Vec<BatchOutcome> {
    let total = state.batches.len();
    let mut outcomes = Vec::new();
    let mut last_actor: Option<AccountName> = None;
    loop {
        if state.halt.load(Ordering::Relaxed) {
            break;
        }
        let index = state.cursor.fetch_add(1, Ordering::Relaxed);
        if index >= total {
            break;
        }
        let batch = &state.batches[index];
        // backends rate-limit an authorizer submitting back to back
        if let (Some(delay), Some(actor)) = (same_actor_delay, batch.primary_authorizer()) {
            if last_actor.as_ref() == Some(actor) {
                tokio::time::sleep(delay).await;
            }
        }
        match client.submit(&batch.operations, &opts).await {
            Ok(ack) => {
                let done = state.batches_done.fetch_add(1, Ordering::Relaxed) + 1;
                let accounts_done = state
                    .accounts_done
                    .fetch_add(batch.accounts, Ordering::Relaxed)
                    + batch.accounts;
                let batches_left = total as u64 - done;
                if done % PROGRESS_BATCH_INTERVAL == 0 || batches_left == 0 {
                    sink.progress(ProgressEvent::BatchConfirmed {
                        batch_id: batch.id,
                        accounts_done,
                        batches_left,
                    });
                }
                outcomes.push(BatchOutcome {
                    batch_id: batch.id,
                    accounts: batch.accounts,
                    status: BatchStatus::Confirmed {
                        transaction_id: ack.transaction_id,
                    },
                });
            }
            Err(err) => {
                state.halt.store(true, Ordering::Relaxed);
                error!("batch {} rejected, halting the drain: {}", batch.id, err);
                match serde_json::to_string(&batch.operations) {
                    Ok(payload) => error!("failed batch {} payload: {}", batch.id, payload),
                    Err(err) => error!(
                        "failed batch {} payload could not be serialized: {}",
                        batch.id, err
                    ),
                }
                outcomes.push(BatchOutcome {
                    batch_id: batch.id,
                    accounts: batch.accounts,
                    status: BatchStatus::Failed {
                        reason: err.to_string(),
                        operations: batch.operations.clone(),
                    },
                });
                break;
            }
        }
        last_actor = batch.primary_authorizer().cloned();
    }
    outcomes
}

/// Opens the wallet session, retrying a failed unlock once.
///
/// An already-open session reports an error on unlock, so a failure here is
/// not proof the signer cannot sign; the submission itself decides that.
async fn unlock_wallet(client: &dyn ChainClient, sink: &dyn ReportSink, wallet: &WalletConfig) {
    if let Err(err) = client.unlock_wallet(&wallet.name, &wallet.password).await {
        warn!("wallet {} unlock failed, retrying once: {}", wallet.name, err);
        sink.progress(ProgressEvent::WalletUnlockRetried);
        if let Err(err) = client.unlock_wallet(&wallet.name, &wallet.password).await {
            warn!(
                "wallet {} unlock failed again, submitting anyway: {}",
                wallet.name, err
            );
        }
    }
}
