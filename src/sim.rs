use std::error::Error;
use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Binomial, Distribution};
use tracing::debug;

use crate::config::TrialConfig;

/// One simulated run: raw per-day success counts for each scenario plus the
/// plottable (day, rate-in-percent) series derived from them.
///
/// The baseline covers every day. The variant series start at the junction
/// day with the baseline's rate there, then continue with their own draws
/// for the second half of the range.
#[derive(Debug, Clone)]
pub struct EffectRun {
    pub baseline_counts: Vec<u64>,
    pub decreased_counts: Vec<u64>,
    pub increased_counts: Vec<u64>,
    pub baseline: Vec<(u32, f64)>,
    pub decreased: Vec<(u32, f64)>,
    pub increased: Vec<(u32, f64)>,
}

impl EffectRun {
    /// Day where the variant series split off from the baseline.
    pub fn junction_day(&self) -> u32 {
        self.decreased.first().map(|&(day, _)| day).unwrap_or(0)
    }
}

/// Draws the three scenario trajectories from a single seeded RNG.
///
/// Draw order is fixed (baseline fully, then decreased, then increased), so
/// a given seed always reproduces the same run.
pub fn simulate_effect(cfg: &TrialConfig) -> Result<EffectRun, Box<dyn Error>> {
    if cfg.days < 2 {
        return Err(io::Error::other("effect run needs at least two days to split at a midpoint").into());
    }
    if cfg.trials == 0 {
        return Err(io::Error::other("effect run needs a non-zero trial size").into());
    }

    let half = cfg.days / 2;
    let junction = half - 1;
    let variant_len = cfg.days - half;

    let mut rng = seeded_rng(cfg.seed);
    let baseline_counts = binomial_counts(&mut rng, cfg.trials, cfg.p_baseline, cfg.days)?;
    let decreased_counts = binomial_counts(
        &mut rng,
        cfg.trials,
        cfg.p_baseline * cfg.drop_factor,
        variant_len,
    )?;
    let increased_counts = binomial_counts(
        &mut rng,
        cfg.trials,
        cfg.p_baseline * cfg.lift_factor,
        variant_len,
    )?;

    let baseline: Vec<(u32, f64)> = baseline_counts
        .iter()
        .enumerate()
        .map(|(day, &count)| (day as u32, rate_pct(count, cfg.trials)))
        .collect();
    let decreased = variant_series(&baseline, junction, &decreased_counts, cfg.trials);
    let increased = variant_series(&baseline, junction, &increased_counts, cfg.trials);

    debug!(
        seed = cfg.seed,
        days = cfg.days,
        trials = cfg.trials,
        junction,
        "simulated effect trajectories"
    );

    Ok(EffectRun {
        baseline_counts,
        decreased_counts,
        increased_counts,
        baseline,
        decreased,
        increased,
    })
}

/// Prefixes a variant's rates with the shared junction point.
fn variant_series(
    baseline: &[(u32, f64)],
    junction: usize,
    counts: &[u64],
    trials: u64,
) -> Vec<(u32, f64)> {
    let mut series = Vec::with_capacity(counts.len() + 1);
    series.push(baseline[junction]);
    for (i, &count) in counts.iter().enumerate() {
        series.push(((junction + 1 + i) as u32, rate_pct(count, trials)));
    }
    series
}

fn binomial_counts(
    rng: &mut StdRng,
    trials: u64,
    p: f64,
    len: usize,
) -> Result<Vec<u64>, Box<dyn Error>> {
    let binom = Binomial::new(trials, p)?;
    Ok((0..len).map(|_| binom.sample(rng)).collect())
}

fn rate_pct(count: u64, trials: u64) -> f64 {
    100.0 * count as f64 / trials as f64
}

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
