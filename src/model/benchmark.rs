use std::collections::BTreeMap;
use serde::Serialize;

/// Instrumentation captured by a single benchmark trial.
#[derive(Serialize, Clone, Debug)]
pub struct RunMetrics {
    pub time_s: f64,
    pub expansions: u64,
    // None when the trial found no path
    pub path_len: Option<usize>,
    pub cost: f64,
    pub peak_memory_bytes: u64,
}

/// Mean/standard deviation of the run metrics over all trials of one
/// (algorithm, origin, destination) evaluation.
#[derive(Serialize, Clone, Debug)]
pub struct AggregatedMetrics {
    pub algorithm: String,
    pub origin: String,
    pub destination: String,
    pub mean_time: f64,
    pub std_time: f64,
    pub mean_expansions: f64,
    pub std_expansions: f64,
    pub mean_path_length: f64,
    pub std_path_length: f64,
    pub mean_cost: f64,
    pub std_cost: f64,
    pub mean_memory: f64,
    pub std_memory: f64,
    // path of the first trial; the algorithms are deterministic, so it
    // stands for all trials
    pub representative_path: Option<Vec<String>>,
}

impl AggregatedMetrics {
    pub fn from_runs(
        algorithm: &str,
        origin: &str,
        destination: &str,
        runs: &[RunMetrics],
        representative_path: Option<Vec<String>>,
    ) -> AggregatedMetrics {
        let times: Vec<f64> = runs.iter().map(|r| r.time_s).collect();
        let expansions: Vec<f64> = runs.iter().map(|r| r.expansions as f64).collect();
        let memories: Vec<f64> = runs.iter().map(|r| r.peak_memory_bytes as f64).collect();
        // failed trials are excluded from the length/cost statistics
        // instead of dragging them toward zero
        let lengths: Vec<f64> = runs
            .iter()
            .map(|r| r.path_len.map(|l| l as f64).unwrap_or(f64::NAN))
            .collect();
        let costs: Vec<f64> = runs
            .iter()
            .map(|r| if r.path_len.is_some() { r.cost } else { f64::NAN })
            .collect();

        AggregatedMetrics {
            algorithm: algorithm.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            mean_time: nan_mean(&times),
            std_time: nan_std(&times),
            mean_expansions: nan_mean(&expansions),
            std_expansions: nan_std(&expansions),
            mean_path_length: nan_mean(&lengths),
            std_path_length: nan_std(&lengths),
            mean_cost: nan_mean(&costs),
            std_cost: nan_std(&costs),
            mean_memory: nan_mean(&memories),
            std_memory: nan_std(&memories),
            representative_path,
        }
    }

    pub fn pair(&self) -> String {
        format!("{}->{}", self.origin, self.destination)
    }
}

/// All aggregated results of one benchmark session, keyed by pair.
#[derive(Serialize, Clone, Default)]
pub struct CollectedBenchmarks {
    pub results: BTreeMap<String, Vec<AggregatedMetrics>>,
}

impl CollectedBenchmarks {
    pub fn new() -> CollectedBenchmarks {
        CollectedBenchmarks { results: BTreeMap::new() }
    }

    pub fn insert(&mut self, metrics: AggregatedMetrics) {
        self.results.entry(metrics.pair()).or_default().push(metrics);
    }
}

/// Mean over the finite values only; NaN when none are finite.
pub fn nan_mean(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.iter().sum::<f64>() / finite.len() as f64
}

/// Population standard deviation over the finite values only; NaN when
/// none are finite.
pub fn nan_std(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    let mean = finite.iter().sum::<f64>() / finite.len() as f64;
    let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / finite.len() as f64;
    variance.sqrt()
}
