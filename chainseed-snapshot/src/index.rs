// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

//! The in-memory account index built from a snapshot.

use crate::error::SnapshotError;
use crate::parse::{parse_row, SnapshotFormat};
use crate::record::{AccountRecord, SnapshotSettings};
use crate::source::SnapshotSource;
use crate::split::split_balance;
use chainseed_models::{AccountName, Amount, ModelsError, PublicKey};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Rows dropped during an index build, counted by reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    /// rows with fewer fields than the format requires
    pub short_rows: u64,
    /// rows whose identity failed validation
    pub bad_names: u64,
    /// rows whose public key failed validation
    pub bad_keys: u64,
    /// rows whose balance failed to parse
    pub bad_balances: u64,
    /// rows whose balance cannot cover the liquid tier
    pub negative_remainders: u64,
    /// rows displaced by a later row carrying the same identity
    pub duplicate_names: u64,
}

impl SkipCounts {
    /// total number of dropped rows
    pub fn total(&self) -> u64 {
        self.short_rows
            + self.bad_names
            + self.bad_keys
            + self.bad_balances
            + self.negative_remainders
            + self.duplicate_names
    }
}

/// Counters accumulated while building a `SnapshotIndex`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SnapshotMeta {
    /// rows kept in the index
    pub parsed: u64,
    /// rows dropped, by reason
    pub skipped: SkipCounts,
    /// checked sum of the kept rows' balances
    pub total_balance: Amount,
}

/// The account records of a snapshot, keyed by name.
///
/// Iteration order is the name order, so every downstream stage (operation
/// building, batching, reconciliation, artifact writing) sees the accounts
/// in the same deterministic sequence.
#[derive(Clone, Debug)]
pub struct SnapshotIndex {
    accounts: BTreeMap<AccountName, AccountRecord>,
    /// build counters
    pub meta: SnapshotMeta,
}

enum RowReject {
    Short,
    Name(ModelsError),
    Key(ModelsError),
    Balance(ModelsError),
    Remainder(Amount),
}

impl std::fmt::Display for RowReject {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RowReject::Short => write!(f, "fewer fields than the format requires"),
            RowReject::Name(err) => write!(f, "{}", err),
            RowReject::Key(err) => write!(f, "{}", err),
            RowReject::Balance(err) => write!(f, "{}", err),
            RowReject::Remainder(amount) => {
                write!(f, "balance {} cannot cover its liquid tier", amount)
            }
        }
    }
}

impl SnapshotIndex {
    /// Builds the index by streaming the source once.
    ///
    /// Malformed rows are counted and dropped; when a name appears twice the
    /// later row wins and the displaced one counts as skipped. An I/O failure
    /// or an overflowing balance total aborts the build.
    pub fn build(
        source: &dyn SnapshotSource,
        format: SnapshotFormat,
        settings: &SnapshotSettings,
    ) -> Result<SnapshotIndex, SnapshotError> {
        debug!("building {} index from {}", format, source.describe());
        let reader = source.open()?;
        let mut accounts: BTreeMap<AccountName, AccountRecord> = BTreeMap::new();
        let mut skipped = SkipCounts::default();
        let mut total_balance = Amount::zero();

        for (row, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| {
                SnapshotError::FileError(format!(
                    "error reading snapshot row {} from {}: {}",
                    row + 1,
                    source.describe(),
                    err
                ))
            })?;
            match row_to_record(&line, format, settings) {
                Ok(record) => {
                    if settings.debug_names.contains(&record.name) {
                        info!(
                            "account {}: balance {} split into liquid {} cpu {} net {}",
                            record.name,
                            record.raw_balance,
                            record.liquid,
                            record.cpu_stake,
                            record.net_stake
                        );
                    }
                    total_balance = total_balance
                        .checked_add(record.raw_balance)
                        .ok_or(SnapshotError::TotalOverflow)?;
                    if let Some(previous) = accounts.insert(record.name.clone(), record) {
                        skipped.duplicate_names += 1;
                        total_balance = total_balance.saturating_sub(previous.raw_balance);
                        warn!(
                            "duplicate snapshot row for {}, keeping the later one",
                            previous.name
                        );
                    }
                }
                Err(reject) => {
                    match reject {
                        RowReject::Short => skipped.short_rows += 1,
                        RowReject::Name(_) => skipped.bad_names += 1,
                        RowReject::Key(_) => skipped.bad_keys += 1,
                        RowReject::Balance(_) => skipped.bad_balances += 1,
                        RowReject::Remainder(_) => skipped.negative_remainders += 1,
                    }
                    debug!("skipping snapshot row {}: {}", row + 1, reject);
                }
            }
        }

        let parsed = accounts.len() as u64;
        info!(
            "snapshot index built: {} accounts, {} rows skipped, total balance {}",
            parsed,
            skipped.total(),
            total_balance
        );
        Ok(SnapshotIndex {
            accounts,
            meta: SnapshotMeta {
                parsed,
                skipped,
                total_balance,
            },
        })
    }

    /// number of indexed accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// true when the index holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// record of one account
    pub fn get(&self, name: &AccountName) -> Option<&AccountRecord> {
        self.accounts.get(name)
    }

    /// records in name order
    pub fn iter(&self) -> impl Iterator<Item = (&AccountName, &AccountRecord)> {
        self.accounts.iter()
    }

    /// account names in order
    pub fn names(&self) -> impl Iterator<Item = &AccountName> {
        self.accounts.keys()
    }

    /// Writes the reconciliation observation on a record.
    ///
    /// The snapshot-derived fields stay untouched; only the annotation slot
    /// is filled. Unknown names are ignored.
    pub fn annotate_observed(&mut self, name: &AccountName, observed: Amount) {
        if let Some(record) = self.accounts.get_mut(name) {
            record.observed_total = Some(observed);
        }
    }
}

fn row_to_record(
    line: &str,
    format: SnapshotFormat,
    settings: &SnapshotSettings,
) -> Result<AccountRecord, RowReject> {
    let fields = parse_row(line, format).ok_or(RowReject::Short)?;
    let name = AccountName::from_str(fields.name).map_err(RowReject::Name)?;
    let public_key = match fields.public_key {
        Some(text) => Some(PublicKey::from_str(text).map_err(RowReject::Key)?),
        None => None,
    };
    let raw_balance = Amount::from_str_rounded(fields.balance).map_err(RowReject::Balance)?;
    let split = split_balance(raw_balance).map_err(|_| RowReject::Remainder(raw_balance))?;
    Ok(AccountRecord {
        name,
        public_key,
        raw_balance,
        liquid: split.liquid,
        cpu_stake: split.cpu_stake,
        net_stake: split.net_stake,
        ram_bytes: settings.ram_bytes,
        memo: settings.memo.clone(),
        funding_account: settings.funding_account.clone(),
        observed_total: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_exports::MemorySource;

    const GOOD_KEY: &str = "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV";

    fn genesis_row(name: &str, balance: &str) -> String {
        format!("7,0xdeadbeef,{},{},{}", name, GOOD_KEY, balance)
    }

    #[test]
    fn test_build_genesis_index() {
        let rows = [
            "id,source_key,account".to_string(),
            genesis_row("alice", "5.0000"),
            genesis_row("bob", "123.45678"),
        ]
        .join("\n");
        let source = MemorySource::new(rows);
        let index =
            SnapshotIndex::build(&source, SnapshotFormat::Genesis, &Default::default()).unwrap();

        assert_eq!(index.len(), 2);
        // the header row is shorter than the genesis format
        assert_eq!(index.meta.skipped.short_rows, 1);
        let alice = index
            .get(&AccountName::from_str("alice").unwrap())
            .unwrap();
        assert_eq!(alice.raw_balance, Amount::from_str("5").unwrap());
        assert_eq!(alice.liquid, Amount::from_str("2").unwrap());
        assert_eq!(alice.cpu_stake, Amount::from_str("1.5").unwrap());
        assert_eq!(alice.net_stake, Amount::from_str("1.5").unwrap());
        assert_eq!(alice.public_key.as_ref().unwrap().as_str(), GOOD_KEY);
        // bob's balance is rounded half away from zero before splitting
        let bob = index.get(&AccountName::from_str("bob").unwrap()).unwrap();
        assert_eq!(bob.raw_balance, Amount::from_str("123.4568").unwrap());
        assert_eq!(
            index.meta.total_balance,
            Amount::from_str("128.4568").unwrap()
        );
    }

    #[test]
    fn test_malformed_rows_are_counted_not_fatal() {
        let rows = [
            genesis_row("alice", "5.0000"),
            // name longer than 12 characters
            genesis_row("averylongaccountname", "5.0000"),
            // 54 character key
            format!("7,0xdeadbeef,carol,{}V,5.0000", GOOD_KEY),
            genesis_row("dave", "not-a-number"),
            // dust balance under the liquid floor
            genesis_row("erin", "0.0500"),
            "short,row".to_string(),
            genesis_row("frank", "11.0001"),
        ]
        .join("\n");
        let source = MemorySource::new(rows);
        let index =
            SnapshotIndex::build(&source, SnapshotFormat::Genesis, &Default::default()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.meta.parsed, 2);
        assert_eq!(index.meta.skipped.bad_names, 1);
        assert_eq!(index.meta.skipped.bad_keys, 1);
        assert_eq!(index.meta.skipped.bad_balances, 1);
        assert_eq!(index.meta.skipped.negative_remainders, 1);
        assert_eq!(index.meta.skipped.short_rows, 1);
        assert_eq!(index.meta.skipped.total(), 5);
    }

    #[test]
    fn test_duplicate_names_keep_the_later_row() {
        let rows = [
            genesis_row("alice", "5.0000"),
            genesis_row("alice", "12.0000"),
        ]
        .join("\n");
        let source = MemorySource::new(rows);
        let index =
            SnapshotIndex::build(&source, SnapshotFormat::Genesis, &Default::default()).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.meta.skipped.duplicate_names, 1);
        let alice = index
            .get(&AccountName::from_str("alice").unwrap())
            .unwrap();
        assert_eq!(alice.raw_balance, Amount::from_str("12").unwrap());
        assert_eq!(alice.liquid, Amount::from_str("10").unwrap());
        assert_eq!(index.meta.total_balance, Amount::from_str("12").unwrap());
    }

    #[test]
    fn test_build_balances_index_recomputes_the_split() {
        let source = MemorySource::new("alice,5.0000,9.9,9.9,9.9\nbob,0.1000");
        let index =
            SnapshotIndex::build(&source, SnapshotFormat::Balances, &Default::default()).unwrap();

        assert_eq!(index.len(), 2);
        let alice = index
            .get(&AccountName::from_str("alice").unwrap())
            .unwrap();
        // the trailing columns are ignored, the split comes from the policy
        assert_eq!(alice.liquid, Amount::from_str("2").unwrap());
        assert_eq!(alice.cpu_stake, Amount::from_str("1.5").unwrap());
        assert!(alice.public_key.is_none());
    }

    #[test]
    fn test_annotate_observed_leaves_expectations_alone() {
        let source = MemorySource::new(genesis_row("alice", "5.0000"));
        let mut index =
            SnapshotIndex::build(&source, SnapshotFormat::Genesis, &Default::default()).unwrap();
        let name = AccountName::from_str("alice").unwrap();

        index.annotate_observed(&name, Amount::from_str("4.9000").unwrap());
        let alice = index.get(&name).unwrap();
        assert_eq!(
            alice.observed_total,
            Some(Amount::from_str("4.9000").unwrap())
        );
        assert_eq!(alice.raw_balance, Amount::from_str("5").unwrap());
    }
}
