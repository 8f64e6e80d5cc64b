// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! Chainseed launch CLI: snapshot injection, reconciliation and the
//! snapshot preprocessing passes around them.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

use anyhow::Result;
use clap::Parser;
use commands::Args;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::filter::EnvFilter;

mod commands;
mod settings;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Setup panic handlers,
    // and when a panic occurs,
    // run default handler,
    // and then shutdown.
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_panic(info);
        std::process::exit(1);
    }));

    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .thread_name_fn(|| {
            static ATOMIC_ID: AtomicUsize = AtomicUsize::new(0);
            let id = ATOMIC_ID.fetch_add(1, Ordering::SeqCst);
            format!("tokio-chainseed-{}", id)
        })
        .enable_all()
        .build()?;

    let clean = tokio_rt.block_on(commands::run(args))?;
    if !clean {
        // a halted injection or a dirty reconciliation is a failed run even
        // when no error surfaced
        std::process::exit(1);
    }
    Ok(())
}
