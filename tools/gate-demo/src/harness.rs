//! Gated vs. direct comparison run

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use bloom_gate::{
    BloomConfig, DirectStore, GatedStore, LinearScanStore, LookupOutcome, MetricsSnapshot,
    StoreError,
};

use crate::users::UserRecord;

/// A username to probe, optionally with a password to check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    pub username: String,
    pub password: Option<String>,
}

impl Probe {
    /// Parse `name` or `name:password`
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((username, password)) => Self {
                username: username.to_string(),
                password: Some(password.to_string()),
            },
            None => Self {
                username: raw.to_string(),
                password: None,
            },
        }
    }
}

/// Per-probe comparison
#[derive(Clone, Debug, Serialize)]
pub struct ProbeReport {
    pub username: String,
    pub gate_outcome: &'static str,
    pub gated_records_scanned: u64,
    pub direct_found: bool,
    pub direct_records_scanned: u64,
    /// Wall-clock time of the gated query, filter check included
    pub gated_micros: f64,
    pub direct_micros: f64,
    /// `None` when no password was supplied or the user does not exist
    pub authenticated: Option<bool>,
}

/// Filter state after loading the table
#[derive(Clone, Debug, Serialize)]
pub struct FilterReport {
    pub size_bits: usize,
    pub hash_count: usize,
    pub keys_inserted: usize,
    pub bits_set: usize,
    pub fill_ratio: f64,
    pub estimated_false_positive_rate: f64,
}

/// Full run output
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub filter: FilterReport,
    pub probes: Vec<ProbeReport>,
    pub gated: MetricsSnapshot,
    pub direct: MetricsSnapshot,
}

/// Read a JSON [`BloomConfig`] from disk and validate it
pub fn load_config(path: &Path) -> Result<BloomConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: BloomConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Load `table` into a gated and a direct store, then run every probe on both
pub fn run(config: &BloomConfig, table: Vec<UserRecord>, probes: &[Probe]) -> Result<Report> {
    let mut gated = GatedStore::new(config, LinearScanStore::new())?;
    let mut direct = DirectStore::new(LinearScanStore::new());

    for user in table {
        let key = user.username.clone();
        direct.index(key.as_bytes(), user.clone())?;
        gated.index(key.as_bytes(), user)?;
    }

    let filter = gated.filter();
    info!(
        users = filter.inserted_count(),
        estimated_fpr = filter.estimated_false_positive_rate(),
        "user table loaded"
    );

    let reports = probes
        .iter()
        .map(|probe| run_probe(&gated, &direct, probe))
        .collect::<Result<Vec<_>, StoreError>>()?;

    Ok(Report {
        filter: FilterReport {
            size_bits: filter.size_bits(),
            hash_count: filter.hash_count(),
            keys_inserted: filter.inserted_count(),
            bits_set: filter.bits_set(),
            fill_ratio: filter.fill_ratio(),
            estimated_false_positive_rate: filter.estimated_false_positive_rate(),
        },
        probes: reports,
        gated: gated.metrics().snapshot(),
        direct: direct.metrics().snapshot(),
    })
}

fn run_probe(
    gated: &GatedStore<LinearScanStore<UserRecord>>,
    direct: &DirectStore<LinearScanStore<UserRecord>>,
    probe: &Probe,
) -> Result<ProbeReport, StoreError> {
    let key = probe.username.as_bytes();

    let gated_before = gated.records_scanned();
    let started = Instant::now();
    let outcome = gated.query(key)?;
    let gated_micros = started.elapsed().as_secs_f64() * 1e6;
    let gated_records_scanned = gated.records_scanned() - gated_before;

    let direct_before = direct.records_scanned();
    let started = Instant::now();
    let direct_record = direct.query(key)?;
    let direct_micros = started.elapsed().as_secs_f64() * 1e6;
    let direct_records_scanned = direct.records_scanned() - direct_before;

    let authenticated = match (&outcome, &probe.password) {
        (LookupOutcome::Found(user), Some(password)) => Some(user.verify_password(password)),
        _ => None,
    };

    Ok(ProbeReport {
        username: probe.username.clone(),
        gate_outcome: outcome.label(),
        gated_records_scanned,
        direct_found: direct_record.is_some(),
        direct_records_scanned,
        gated_micros,
        direct_micros,
        authenticated,
    })
}
