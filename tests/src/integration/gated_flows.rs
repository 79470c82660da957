//! # Gated Lookup Flows
//!
//! Index a user table through the public API, then check the three-way
//! outcomes, the counters, and the gated path against the direct one.

#[cfg(test)]
mod tests {
    use bloom_gate::{
        BloomConfig, BloomConfigBuilder, BloomFilter, DirectStore, ExactStore, GateApi,
        GatedStore, LinearScanStore, LookupOutcome, ScanResult, SharedBloomFilter,
    };
    use proptest::prelude::*;
    use rand::distributions::Alphanumeric;
    use rand::{Rng, SeedableRng};
    use std::thread;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Account {
        username: String,
        email: String,
    }

    fn account(username: &str) -> Account {
        Account {
            username: username.to_string(),
            email: format!("{}@example.com", username),
        }
    }

    fn usernames(count: usize) -> Vec<String> {
        ["admin", "user1", "john.doe", "jane.smith", "bob.wilson"]
            .iter()
            .map(|s| s.to_string())
            .chain((6..count as u64 + 6).map(|n| format!("user{}", n)))
            .collect()
    }

    fn loaded_gate(count: usize) -> GatedStore<LinearScanStore<Account>> {
        let mut gate = GatedStore::new(&BloomConfig::default(), LinearScanStore::new()).unwrap();
        for name in usernames(count) {
            gate.index(name.as_bytes(), account(&name)).unwrap();
        }
        gate
    }

    /// Exact store that counts every call it receives
    #[derive(Default)]
    struct CountingStore {
        inner: LinearScanStore<Account>,
        lookups: std::cell::Cell<u64>,
    }

    impl ExactStore for CountingStore {
        type Record = Account;
        type Error = bloom_gate::StoreError;

        fn insert(&mut self, key: &[u8], record: Account) -> Result<(), Self::Error> {
            self.inner.insert(key, record)
        }

        fn lookup(&self, key: &[u8]) -> Result<ScanResult<Account>, Self::Error> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.lookup(key)
        }
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_three_users_nonexistent_is_gate_rejected() {
        let mut gate = GatedStore::new(&BloomConfig::default(), CountingStore::default()).unwrap();
        for name in ["admin", "user1", "john.doe"] {
            gate.index(name.as_bytes(), account(name)).unwrap();
        }
        let lookups_before = gate.exact_lookups();

        let outcome = gate.query(b"nonexistent_user_42").unwrap();

        assert_eq!(outcome, LookupOutcome::GateRejected);
        assert_eq!(gate.exact_lookups(), lookups_before);
        assert_eq!(gate.store().lookups.get(), 0, "Store must not be touched");
    }

    #[test]
    fn test_admin_is_found_and_counters_step_by_one() {
        let gate = loaded_gate(10_000);
        let checks_before = gate.gate_checks();
        let lookups_before = gate.exact_lookups();

        let outcome = gate.query(b"admin").unwrap();

        assert_eq!(outcome, LookupOutcome::Found(account("admin")));
        assert_eq!(gate.gate_checks(), checks_before + 1);
        assert_eq!(gate.exact_lookups(), lookups_before + 1);
    }

    #[test]
    fn test_every_indexed_user_is_found() {
        let names = usernames(2_000);
        let gate = loaded_gate(2_000);

        for name in &names {
            assert_eq!(
                gate.query(name.as_bytes()).unwrap().into_record(),
                Some(account(name)),
                "Indexed user {} must be found",
                name
            );
        }
        assert_eq!(gate.exact_lookups(), names.len() as u64);
    }

    #[test]
    fn test_gate_saves_scan_work_for_absent_users() {
        let names = usernames(10_000);
        let gate = loaded_gate(10_000);
        let mut direct = DirectStore::new(LinearScanStore::new());
        for name in &names {
            direct.index(name.as_bytes(), account(name)).unwrap();
        }

        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let probes: Vec<String> = (0..500)
            .map(|_| {
                let suffix: String = (&mut rng)
                    .sample_iter(&Alphanumeric)
                    .take(12)
                    .map(char::from)
                    .collect();
                format!("ghost_{}", suffix)
            })
            .collect();

        for probe in &probes {
            let outcome = gate.query(probe.as_bytes()).unwrap();
            assert!(!outcome.is_found(), "Never-indexed {} was found", probe);
            assert_eq!(direct.query(probe.as_bytes()).unwrap(), None);
        }

        let gated = gate.metrics().snapshot();
        assert_eq!(gated.gate_rejections + gated.false_positives, 500);
        assert!(
            gated.records_scanned < direct.records_scanned() / 2,
            "Gate should skip most scans: gated={} direct={}",
            gated.records_scanned,
            direct.records_scanned()
        );

        // Observed rate stays near the analytic estimate (~9% here)
        let estimate = gate.estimated_false_positive_rate();
        let observed = gate.metrics().observed_false_positive_rate();
        assert!(
            observed < estimate * 2.0,
            "Observed FPR {} far above estimate {}",
            observed,
            estimate
        );
    }

    #[test]
    fn test_single_bit_gate_saturates() {
        let mut gate = GatedStore::new(&BloomConfig::new(1, 3).unwrap(), LinearScanStore::new())
            .unwrap();
        gate.index(b"admin", account("admin")).unwrap();

        for probe in ["nonexistent_user_42", "", "x"] {
            assert_eq!(
                gate.query(probe.as_bytes()).unwrap(),
                LookupOutcome::NotFoundAfterGate
            );
        }
        assert_eq!(gate.exact_lookups(), 3);
    }

    #[test]
    fn test_capacity_sized_gate() {
        let config = BloomConfigBuilder::new()
            .for_capacity(10_005, 0.01)
            .build()
            .unwrap();
        let mut gate = GatedStore::new(&config, LinearScanStore::new()).unwrap();
        for name in usernames(10_000) {
            gate.index(name.as_bytes(), account(&name)).unwrap();
        }

        let fpr = gate.estimated_false_positive_rate();
        assert!(fpr <= 0.011, "Sized gate should hit its target, got {}", fpr);
    }

    #[test]
    fn test_prebuilt_shared_filter_snapshot_gates_reads() {
        let names = usernames(500);
        let shared = SharedBloomFilter::new(8192, 4).unwrap();

        thread::scope(|scope| {
            for chunk in names.chunks(125) {
                let shared = shared.clone();
                scope.spawn(move || {
                    for name in chunk {
                        shared.add(name.as_bytes());
                    }
                });
            }
        });

        let mut store = LinearScanStore::new();
        for name in &names {
            store.insert(name.as_bytes(), account(name)).unwrap();
        }
        let gate = GatedStore::with_filter(shared.snapshot(), store);

        for name in &names {
            assert!(gate.query(name.as_bytes()).unwrap().is_found());
        }
        assert_eq!(gate.filter().inserted_count(), names.len());
    }

    #[test]
    fn test_generic_driver_over_gate_api() {
        fn login<G: GateApi<Record = Account>>(gate: &G, username: &str) -> Option<String> {
            gate.query(username.as_bytes())
                .ok()
                .and_then(LookupOutcome::into_record)
                .map(|account| account.email)
        }

        let gate = loaded_gate(100);
        assert_eq!(login(&gate, "jane.smith").as_deref(), Some("jane.smith@example.com"));
        assert_eq!(login(&gate, "mallory"), None);
        assert_eq!(gate.metrics_snapshot().gate_checks, 2);
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    proptest! {
        #[test]
        fn prop_indexed_keys_always_found(
            keys in prop::collection::hash_set("[a-z0-9._]{0,16}", 1..64),
            size_bits in 1usize..4096,
            hash_count in 1usize..6,
        ) {
            let config = BloomConfig::new(size_bits, hash_count).unwrap();
            let mut gate = GatedStore::new(&config, LinearScanStore::new()).unwrap();
            for key in &keys {
                gate.index(key.as_bytes(), key.clone()).unwrap();
            }
            for key in &keys {
                prop_assert_eq!(
                    gate.query(key.as_bytes()).unwrap(),
                    LookupOutcome::Found(key.clone())
                );
            }
        }

        #[test]
        fn prop_never_indexed_keys_never_found(
            indexed in prop::collection::hash_set("[a-z]{1,12}", 0..32),
            probes in prop::collection::vec("[A-Z]{1,12}", 1..32),
        ) {
            let mut gate = GatedStore::new(&BloomConfig::new(512, 3).unwrap(), LinearScanStore::new()).unwrap();
            for key in &indexed {
                gate.index(key.as_bytes(), ()).unwrap();
            }
            // Probes are upper-case, indexed keys lower-case
            for probe in &probes {
                let outcome = gate.query(probe.as_bytes()).unwrap();
                prop_assert!(!outcome.is_found());
                prop_assert_eq!(
                    outcome.passed_gate(),
                    gate.filter().might_contain(probe.as_bytes())
                );
            }
        }

        #[test]
        fn prop_filter_positions_are_pure(key in prop::collection::vec(any::<u8>(), 0..64)) {
            let mut a = BloomFilter::new(997, 5).unwrap();
            let b = BloomFilter::new(997, 5).unwrap();
            a.add(b"unrelated");
            prop_assert_eq!(a.positions(&key), b.positions(&key));
        }
    }
}
