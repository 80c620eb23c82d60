use clap::Parser;
use once_cell::sync::OnceCell;
use std::path::Path;

static INSTANCE: OnceCell<Config> = OnceCell::new();

/// This doc string acts as a help message when the user runs '--help'
/// Airport route search benchmark
#[derive(Parser, Debug)]
#[command(version)]
pub struct Config {
    /// CSV file with the extracted flight routes and airport coordinates
    routes_file: String,

    /// Origin-destination pair to benchmark, written as ORG-DST (e.g. GRU-HND). May be given multiple times. If omitted, random pairs are drawn from the graph.
    #[arg(short, long = "pair")]
    pairs: Vec<String>,

    /// Number of random pairs to draw when no explicit pairs are given
    #[arg(long, default_value = "5")]
    random_pairs: usize,

    /// Number of trials per algorithm and pair
    #[arg(short, long, default_value = "5")]
    trials: usize,

    /// Path to save the aggregated metrics as CSV, if set
    #[arg(long)]
    metrics_export_path: Option<String>,

    /// Path to save the graph as JSON for the visualization, if set
    #[arg(long)]
    graph_export_path: Option<String>,

    /// JSON file mapping airport codes to display names, used in the report and the graph export
    #[arg(long)]
    labels_file: Option<String>,
}

impl Config {
    pub fn global() -> &'static Config {
        INSTANCE.get().expect("Config is not initialized")
    }

    pub fn init() {
        if INSTANCE.get().is_some() {
            println!("Config is already loaded!")
        }
        let config = Config::parse();
        // verify paths
        if !Path::new(config.routes_file()).is_file() {
            panic!("Could not open routes file: {}", config.routes_file());
        }
        if let Some(labels_file) = config.labels_file() {
            if !Path::new(labels_file).is_file() {
                panic!("Could not open labels file: {}", labels_file);
            }
        }
        INSTANCE.set(config).unwrap();
    }

    pub fn routes_file(&self) -> &str {
        &self.routes_file
    }

    /// Explicit pairs parsed from ORG-DST notation.
    pub fn route_pairs(&self) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .map(|pair| match pair.split_once('-') {
                Some((origin, destination)) if !origin.is_empty() && !destination.is_empty() => {
                    (origin.to_string(), destination.to_string())
                }
                _ => panic!("Invalid pair '{}', expected ORG-DST", pair),
            })
            .collect()
    }

    pub fn random_pairs(&self) -> usize {
        self.random_pairs
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn metrics_export_path(&self) -> &Option<String> {
        &self.metrics_export_path
    }

    pub fn graph_export_path(&self) -> &Option<String> {
        &self.graph_export_path
    }

    pub fn labels_file(&self) -> Option<&str> {
        self.labels_file.as_deref()
    }
}
