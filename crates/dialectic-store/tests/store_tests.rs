use dialectic_model::FrameworkKey;
use dialectic_store::{Framework, FrameworkRegistry};
use dialectic_test_utils::{arb_framework, sample_catalog, simple_defeat, three_cycle};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

proptest! {
    #[test]
    fn prop_generated_frameworks_load_and_index(spec in arb_framework(12, 30)) {
        let attack_total = spec.attacks.len();
        let fw = Framework::load(spec.clone()).unwrap();

        prop_assert_eq!(fw.attack_count(), attack_total);
        prop_assert_eq!(fw.fingerprint(), Framework::load(spec).unwrap().fingerprint());

        // Every attack is visible from both endpoints
        let incoming: usize = fw.ids().map(|id| fw.attackers_of(id.as_str()).unwrap().len()).sum();
        let outgoing: usize = fw.ids().map(|id| fw.attacks_from(id.as_str()).unwrap().len()).sum();
        prop_assert_eq!(incoming, attack_total);
        prop_assert_eq!(outgoing, attack_total);

        for (index, id) in fw.ids().enumerate() {
            prop_assert_eq!(fw.index_of(id.as_str()), Some(index));
            for attacker in fw.attacker_indices(index) {
                prop_assert!(fw.attacks_between(attacker, index));
            }
        }
    }
}

#[test]
fn sample_catalog_loads() {
    let registry = FrameworkRegistry::new();
    let published = registry.load_catalog(sample_catalog()).unwrap();
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|p| p.previous.is_none()));

    let collapse = registry.framework(&FrameworkKey::from("collapse-debate")).unwrap();
    assert_eq!(collapse.len(), 6);
    assert_eq!(collapse.title(), "Does the Wavefunction Collapse?");
    let attackers: Vec<&str> = collapse
        .attackers_of("A4")
        .unwrap()
        .iter()
        .map(|a| a.attacker_id.as_str())
        .collect();
    assert_eq!(attackers, ["A5"]);
}

#[test]
fn readers_see_whole_snapshots_during_reloads() {
    let registry = Arc::new(FrameworkRegistry::new());
    let key = FrameworkKey::from("k");
    registry.load(key.clone(), three_cycle()).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let key = key.clone();
            thread::spawn(move || {
                let mut last_version = 0;
                for _ in 0..500 {
                    let snapshot = registry.snapshot(&key).unwrap();
                    let fw = snapshot.framework();
                    // Either fixture, never a mix
                    match fw.attack_count() {
                        3 => assert!(fw.contains("A") && fw.attacks_between(2, 0)),
                        1 => assert!(fw.contains("C") && !fw.attacks_between(2, 0)),
                        other => panic!("torn snapshot with {other} attacks"),
                    }
                    assert!(snapshot.version() >= last_version);
                    last_version = snapshot.version();
                }
            })
        })
        .collect();

    for round in 0..200 {
        let spec = if round % 2 == 0 { simple_defeat() } else { three_cycle() };
        registry.load(key.clone(), spec).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(registry.snapshot(&key).unwrap().version(), 201);
}
