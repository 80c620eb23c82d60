use std::path::Path;

use serde::Serialize;

use crate::export::ExportError;
use crate::model::benchmark::CollectedBenchmarks;

// flat row shape consumed by the downstream report generation
#[derive(Serialize)]
struct MetricsRow<'a> {
    pair: &'a str,
    algorithm: &'a str,
    mean_time: f64,
    std_time: f64,
    mean_expansions: f64,
    std_expansions: f64,
    mean_path_length: f64,
    std_path_length: f64,
    mean_cost: f64,
    std_cost: f64,
    mean_memory: f64,
    std_memory: f64,
    representative_path: String,
}

/// Writes one CSV row per (pair, algorithm) evaluation. Paths are joined
/// with "->"; a failed evaluation writes N/A.
pub fn write_metrics_csv<P: AsRef<Path>>(
    path: P,
    benchmarks: &CollectedBenchmarks,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for (pair, metrics) in &benchmarks.results {
        for m in metrics {
            let representative_path = match &m.representative_path {
                Some(route) => route.join("->"),
                None => String::from("N/A"),
            };
            writer.serialize(MetricsRow {
                pair,
                algorithm: &m.algorithm,
                mean_time: m.mean_time,
                std_time: m.std_time,
                mean_expansions: m.mean_expansions,
                std_expansions: m.std_expansions,
                mean_path_length: m.mean_path_length,
                std_path_length: m.std_path_length,
                mean_cost: m.mean_cost,
                std_cost: m.std_cost,
                mean_memory: m.mean_memory,
                std_memory: m.std_memory,
                representative_path,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
