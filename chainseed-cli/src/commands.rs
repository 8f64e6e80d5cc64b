// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Command definitions and their wiring to the launch engine.

use crate::settings::SETTINGS;
use anyhow::{bail, Context, Result};
use chainseed_launch_exports::{
    ChainClient, LaunchConfig, MismatchKind, ProgressEvent, ReconciliationReport, RegistryConfig,
    ReportSink, RunSummary, WalletConfig,
};
use chainseed_launch_worker::{
    build_register_groups, build_seeding_groups, inject_batches, pack_batches,
    reconcile_accounts, LogReportSink,
};
use chainseed_models::config::SAME_ACTOR_DELAY_MILLIS;
use chainseed_models::{AccountName, Amount, OperationGroup};
use chainseed_sdk::{ClientConfig, RpcClient};
use chainseed_snapshot::{
    merge_recovered_keys, write_derived_snapshot, FileSource, SnapshotFormat, SnapshotIndex,
    SnapshotSettings,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Snapshot injection and reconciliation tool for a chain launch
#[derive(Parser)]
#[command(name = "chainseed-cli", version, about)]
pub struct Args {
    /// Node RPC endpoint, overriding the configured one
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Account traced in full through splitting and injection (repeatable)
    #[arg(long = "debug-account")]
    pub debug_accounts: Vec<AccountName>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the snapshot index and seed every account on chain
    Inject {
        /// Snapshot CSV file
        #[arg(long)]
        snapshot: PathBuf,
        /// Row format of the snapshot file
        #[arg(long, default_value = "genesis")]
        format: SnapshotFormat,
    },
    /// Read every account back and reconcile it against the snapshot
    Validate {
        /// Snapshot CSV file
        #[arg(long)]
        snapshot: PathBuf,
        /// Row format of the snapshot file
        #[arg(long, default_value = "genesis")]
        format: SnapshotFormat,
        /// Also compare the liquid/cpu/net components individually
        #[arg(long)]
        check_stake_split: bool,
        /// Leave pending stake refunds out of the observed totals
        #[arg(long)]
        exclude_refunds: bool,
    },
    /// Write the derived balances snapshot without touching the chain
    WriteSnapshot {
        /// Snapshot CSV file
        #[arg(long)]
        snapshot: PathBuf,
        /// Row format of the snapshot file
        #[arg(long, default_value = "genesis")]
        format: SnapshotFormat,
        /// Output file for the derived snapshot
        #[arg(long)]
        output: PathBuf,
    },
    /// Merge recovered keys into a genesis snapshot file
    MergeRecovered {
        /// Snapshot CSV file
        #[arg(long)]
        snapshot: PathBuf,
        /// Recovered `source_key,public_key` CSV file
        #[arg(long)]
        recovered: PathBuf,
        /// Output file for the merged snapshot
        #[arg(long)]
        output: PathBuf,
    },
    /// Record every snapshot balance on the registry contract
    RegisterBalances {
        /// Snapshot CSV file
        #[arg(long)]
        snapshot: PathBuf,
        /// Row format of the snapshot file
        #[arg(long, default_value = "balances")]
        format: SnapshotFormat,
    },
}

/// Runs the parsed command and reports whether the run was clean.
pub async fn run(args: Args) -> Result<bool> {
    let snapshot_settings = snapshot_settings(&args)?;
    match args.command {
        Command::Inject { snapshot, format } => {
            let index = build_index(&snapshot, format, &snapshot_settings)?;
            let groups = build_seeding_groups(&index)?;
            inject(args.endpoint, index, groups, None).await
        }
        Command::Validate {
            snapshot,
            format,
            check_stake_split,
            exclude_refunds,
        } => {
            let mut index = build_index(&snapshot, format, &snapshot_settings)?;
            let mut config = launch_config();
            config.check_stake_split |= check_stake_split;
            config.include_pending_refunds &= !exclude_refunds;
            let client = rpc_client(args.endpoint)?;
            let sink: Arc<dyn ReportSink> = Arc::new(LogReportSink);
            let report =
                reconcile_accounts(client, sink.clone(), &config, &mut index).await?;
            print_mismatches(&report);
            sink.summary(&RunSummary {
                accounts: index.meta.parsed,
                skipped: index.meta.skipped.total(),
                mismatched: report.mismatches.len() as u64,
                read_failures: report.read_failures,
                batches_confirmed: 0,
                batches_failed: 0,
                snapshot_total: report.snapshot_total,
                chain_supply: Some(report.chain_supply),
            });
            Ok(report.is_clean())
        }
        Command::WriteSnapshot {
            snapshot,
            format,
            output,
        } => {
            let index = build_index(&snapshot, format, &snapshot_settings)?;
            let rows = write_derived_snapshot(&index, &output)
                .context("writing the derived snapshot failed")?;
            info!("derived snapshot of {} rows at {}", rows, output.display());
            Ok(true)
        }
        Command::MergeRecovered {
            snapshot,
            recovered,
            output,
        } => {
            let stats = merge_recovered_keys(
                &FileSource::new(snapshot),
                &FileSource::new(recovered),
                &output,
            )
            .context("merging the recovered keys failed")?;
            info!(
                "merged snapshot at {}: {} rows, {} keys replaced",
                output.display(),
                stats.rows,
                stats.replaced
            );
            Ok(true)
        }
        Command::RegisterBalances { snapshot, format } => {
            let registry = registry_config()?;
            let index = build_index(&snapshot, format, &snapshot_settings)?;
            let groups = build_register_groups(&index, &registry);
            inject(args.endpoint, index, groups, Some(registry)).await
        }
    }
}

/// Packs the groups, drains them through the node and prints the summary.
async fn inject(
    endpoint: Option<String>,
    index: SnapshotIndex,
    groups: Vec<OperationGroup>,
    registry: Option<RegistryConfig>,
) -> Result<bool> {
    let mut config = launch_config();
    if registry.is_some() {
        // every registry batch shares one authorizer, so space them out
        config.same_actor_delay = Some(Duration::from_millis(SAME_ACTOR_DELAY_MILLIS));
        config.registry = registry;
    }
    let batches = pack_batches(groups, config.max_operations_per_batch);
    let client = rpc_client(endpoint)?;
    let sink: Arc<dyn ReportSink> = Arc::new(LogReportSink);
    let report = inject_batches(client, sink.clone(), &config, batches).await?;
    sink.summary(&RunSummary {
        accounts: index.meta.parsed,
        skipped: index.meta.skipped.total(),
        mismatched: 0,
        read_failures: 0,
        batches_confirmed: report.batches_confirmed,
        batches_failed: report.batches_failed,
        snapshot_total: index.meta.total_balance,
        chain_supply: None,
    });
    Ok(report.is_clean())
}

fn build_index(
    path: &Path,
    format: SnapshotFormat,
    settings: &SnapshotSettings,
) -> Result<SnapshotIndex> {
    let index = SnapshotIndex::build(&FileSource::new(path), format, settings)
        .with_context(|| format!("building the index from {} failed", path.display()))?;
    LogReportSink.progress(ProgressEvent::IndexBuilt {
        accounts: index.meta.parsed,
        skipped: index.meta.skipped.total(),
    });
    Ok(index)
}

fn snapshot_settings(args: &Args) -> Result<SnapshotSettings> {
    let mut settings = SnapshotSettings {
        ram_bytes: SETTINGS.snapshot.ram_bytes,
        memo: SETTINGS.snapshot.memo.clone(),
        funding_account: AccountName::from_str(&SETTINGS.snapshot.treasury)
            .context("configured treasury is not a valid account name")?,
        ..Default::default()
    };
    settings.debug_names = args.debug_accounts.iter().cloned().collect();
    Ok(settings)
}

fn launch_config() -> LaunchConfig {
    let launch = &SETTINGS.launch;
    LaunchConfig {
        max_operations_per_batch: launch.max_operations_per_batch,
        injection_concurrency: launch.injection_concurrency,
        reconcile_concurrency: launch.reconcile_concurrency,
        check_stake_split: launch.check_stake_split,
        include_pending_refunds: launch.include_pending_refunds,
        token_symbol: launch.token_symbol.clone(),
        blocks_behind: launch.blocks_behind,
        expire_seconds: launch.expire_seconds,
        wallet: SETTINGS.wallet.as_ref().map(|wallet| WalletConfig {
            name: wallet.name.clone(),
            password: wallet.password.clone(),
        }),
        same_actor_delay: None,
        registry: None,
    }
}

fn registry_config() -> Result<RegistryConfig> {
    let Some(registry) = &SETTINGS.registry else {
        bail!("register-balances needs a [registry] section in the configuration");
    };
    Ok(RegistryConfig {
        registry: AccountName::from_str(&registry.registry)
            .context("configured registry account is not a valid account name")?,
        actor: AccountName::from_str(&registry.actor)
            .context("configured registry actor is not a valid account name")?,
        permission: registry.permission.clone(),
        snapshot_id: registry.snapshot_id,
    })
}

fn rpc_client(endpoint: Option<String>) -> Result<Arc<dyn ChainClient>> {
    let config = ClientConfig {
        endpoint: endpoint.unwrap_or_else(|| SETTINGS.node.endpoint.clone()),
        request_timeout_ms: SETTINGS.node.request_timeout_ms,
        token_symbol: SETTINGS.launch.token_symbol.clone(),
    };
    let client = RpcClient::new(&config).context("could not reach the node")?;
    Ok(Arc::new(client))
}

fn print_mismatches(report: &ReconciliationReport) {
    for mismatch in &report.mismatches {
        match &mismatch.kind {
            MismatchKind::MissingAccount => {
                println!("{}: absent on chain", mismatch.account)
            }
            MismatchKind::TotalMismatch { expected, observed } => println!(
                "{}: total expected {} observed {}",
                mismatch.account, expected, observed
            ),
            MismatchKind::LiquidMismatch { expected, observed } => println!(
                "{}: liquid expected {} observed {}",
                mismatch.account, expected, observed
            ),
            MismatchKind::CpuStakeMismatch { expected, observed } => println!(
                "{}: cpu stake expected {} observed {}",
                mismatch.account, expected, observed
            ),
            MismatchKind::NetStakeMismatch { expected, observed } => println!(
                "{}: net stake expected {} observed {}",
                mismatch.account, expected, observed
            ),
        }
    }
    let delta = report.supply_delta_raw();
    if delta == 0 {
        println!(
            "issued supply matches the snapshot total of {}",
            report.snapshot_total
        );
    } else {
        println!(
            "issued supply {} {} from the snapshot total {} by {}",
            report.chain_supply,
            if delta > 0 { "exceeds" } else { "falls short of" },
            report.snapshot_total,
            Amount::from_raw(delta.unsigned_abs() as u64)
        );
    }
}
