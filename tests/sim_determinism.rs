use abfigs::config::TrialConfig;
use abfigs::sim::simulate_effect;

#[test]
fn same_seed_reproduces_counts() {
    let cfg = TrialConfig::default();
    let a = simulate_effect(&cfg).expect("simulate");
    let b = simulate_effect(&cfg).expect("simulate");
    assert_eq!(a.baseline_counts, b.baseline_counts);
    assert_eq!(a.decreased_counts, b.decreased_counts);
    assert_eq!(a.increased_counts, b.increased_counts);
}

#[test]
fn same_seed_reproduces_series() {
    let cfg = TrialConfig::default();
    let a = simulate_effect(&cfg).expect("simulate");
    let b = simulate_effect(&cfg).expect("simulate");
    assert_eq!(a.baseline, b.baseline);
    assert_eq!(a.decreased, b.decreased);
    assert_eq!(a.increased, b.increased);
}

#[test]
fn different_seeds_diverge() {
    let cfg_a = TrialConfig::default();
    let cfg_b = TrialConfig {
        seed: cfg_a.seed + 1,
        ..cfg_a.clone()
    };
    let a = simulate_effect(&cfg_a).expect("simulate");
    let b = simulate_effect(&cfg_b).expect("simulate");
    assert_ne!(
        a.baseline_counts, b.baseline_counts,
        "distinct seeds should not reproduce the same baseline draws"
    );
}
