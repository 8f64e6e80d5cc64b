// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Post-injection reconciliation: reads every account back from the chain
//! and compares what landed against the snapshot expectations.

use chainseed_launch_exports::{
    AccountMismatch, ChainClient, ClientError, LaunchConfig, LaunchError, MismatchKind,
    ProgressEvent, ReconciliationReport, ReportSink,
};
use chainseed_models::config::PROGRESS_ACCOUNT_INTERVAL;
use chainseed_models::{AccountName, Amount};
use chainseed_snapshot::SnapshotIndex;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tracing::{info, warn};

/// Expected balance decomposition of one account, detached from the index so
/// the reads can run on owned data.
struct Expected {
    name: AccountName,
    total: Amount,
    liquid: Amount,
    cpu_stake: Amount,
    net_stake: Amount,
}

/// Reads every indexed account back and builds the reconciliation report.
///
/// The issued supply read comes first and is fatal when it fails: without it
/// the aggregate check is meaningless. Account reads then run with at most
/// `reconcile_concurrency` in flight. A read that fails in transport counts
/// as a read failure and moves on; an account the backend does not know is a
/// mismatch. Observed totals are annotated back onto the index records and
/// the findings come out sorted by account name.
pub async fn reconcile_accounts(
    client: Arc<dyn ChainClient>,
    sink: Arc<dyn ReportSink>,
    config: &LaunchConfig,
    index: &mut SnapshotIndex,
) -> Result<ReconciliationReport, LaunchError> {
    let chain_supply = client.get_issued_supply(&config.token_symbol).await?;
    info!("issued supply of {}: {}", config.token_symbol, chain_supply);

    let expected: Vec<Expected> = index
        .iter()
        .map(|(_, record)| Expected {
            name: record.name.clone(),
            total: record.raw_balance,
            liquid: record.liquid,
            cpu_stake: record.cpu_stake,
            net_stake: record.net_stake,
        })
        .collect();
    let total = expected.len() as u64;
    let concurrency = config.reconcile_concurrency.max(1);

    let mut queue = expected.into_iter();
    let mut in_flight = FuturesUnordered::new();
    let mut checked = 0u64;
    let mut read_failures = 0u64;
    let mut mismatches: Vec<AccountMismatch> = Vec::new();
    let mut observations: Vec<(AccountName, Amount)> = Vec::new();

    loop {
        // keep at most `concurrency` reads in flight
        while in_flight.len() < concurrency {
            match queue.next() {
                Some(exp) => {
                    let client = client.clone();
                    in_flight.push(async move {
                        let state = client.get_account_state(&exp.name).await;
                        (exp, state)
                    });
                }
                None => break,
            }
        }
        let (exp, result) = match in_flight.next().await {
            Some(item) => item,
            None => break,
        };
        match result {
            Ok(state) => {
                checked += 1;
                let liquid = state.liquid.unwrap_or_default();
                let mut cpu = state.cpu_weight.unwrap_or_default();
                let mut net = state.net_weight.unwrap_or_default();
                if config.include_pending_refunds {
                    if let Some(refund) = state.refund {
                        cpu = cpu.saturating_add(refund.cpu);
                        net = net.saturating_add(refund.net);
                    }
                }
                let observed = liquid.saturating_add(cpu).saturating_add(net);
                observations.push((exp.name.clone(), observed));
                if observed != exp.total {
                    mismatches.push(AccountMismatch {
                        account: exp.name.clone(),
                        kind: MismatchKind::TotalMismatch {
                            expected: exp.total,
                            observed,
                        },
                    });
                }
                if config.check_stake_split {
                    push_component_mismatches(&mut mismatches, &exp, liquid, cpu, net);
                }
            }
            Err(ClientError::UnknownAccount(_)) => {
                checked += 1;
                mismatches.push(AccountMismatch {
                    account: exp.name,
                    kind: MismatchKind::MissingAccount,
                });
            }
            Err(err) => {
                read_failures += 1;
                warn!("account {} could not be read back: {}", exp.name, err);
            }
        }
        let done = checked + read_failures;
        if done % PROGRESS_ACCOUNT_INTERVAL == 0 || done == total {
            sink.progress(ProgressEvent::AccountsChecked {
                checked: done,
                total,
            });
        }
    }

    for (name, observed) in &observations {
        index.annotate_observed(name, *observed);
    }
    mismatches.sort_by(|a, b| a.account.cmp(&b.account));
    if !mismatches.is_empty() || read_failures > 0 {
        warn!(
            "reconciliation found {} mismatches and {} read failures over {} accounts",
            mismatches.len(),
            read_failures,
            total
        );
    }
    let report = ReconciliationReport {
        mismatches,
        checked,
        read_failures,
        snapshot_total: index.meta.total_balance,
        chain_supply,
    };
    if report.supply_delta_raw() != 0 {
        warn!(
            "issued supply {} differs from the snapshot total {}",
            report.chain_supply, report.snapshot_total
        );
    }
    Ok(report)
}

fn push_component_mismatches(
    mismatches: &mut Vec<AccountMismatch>,
    exp: &Expected,
    liquid: Amount,
    cpu: Amount,
    net: Amount,
) {
    if liquid != exp.liquid {
        mismatches.push(AccountMismatch {
            account: exp.name.clone(),
            kind: MismatchKind::LiquidMismatch {
                expected: exp.liquid,
                observed: liquid,
            },
        });
    }
    if cpu != exp.cpu_stake {
        mismatches.push(AccountMismatch {
            account: exp.name.clone(),
            kind: MismatchKind::CpuStakeMismatch {
                expected: exp.cpu_stake,
                observed: cpu,
            },
        });
    }
    if net != exp.net_stake {
        mismatches.push(AccountMismatch {
            account: exp.name.clone(),
            kind: MismatchKind::NetStakeMismatch {
                expected: exp.net_stake,
                observed: net,
            },
        });
    }
}
