mod algorithms;
mod benchmark;
mod config;
mod export;
mod import;
mod memory;
mod model;

use std::collections::HashMap;
use std::fs::File;

use rand::seq::SliceRandom;
use termion::color;

use crate::algorithms::a_star::AStar;
use crate::algorithms::breadth_first::BreadthFirst;
use crate::algorithms::depth_first::DepthFirst;
use crate::algorithms::dijkstra::Dijkstra;
use crate::algorithms::greedy_best_first::GreedyBestFirst;
use crate::algorithms::search::SearchStrategy;
use crate::benchmark::BenchmarkRunner;
use crate::config::Config;
use crate::model::benchmark::{AggregatedMetrics, CollectedBenchmarks};
use crate::model::heuristic::HaversineHeuristic;
use crate::model::route_graph::RouteGraph;

#[global_allocator]
static ALLOCATOR: memory::CountingAllocator = memory::CountingAllocator;

fn main() {
    Config::init();
    let config = Config::global();

    let (graph, coordinates) = import::route_reader::read_routes(config.routes_file())
        .unwrap_or_else(|e| panic!("Could not read routes file {}: {}", config.routes_file(), e));
    println!("Total airports in the graph: {}", graph.node_count());
    println!("Total routes in the graph: {}", graph.edge_count());

    let labels = match config.labels_file() {
        Some(path) => load_labels(path),
        None => HashMap::new(),
    };

    let heuristic = HaversineHeuristic::new(coordinates.clone());
    let strategies: Vec<Box<dyn SearchStrategy + '_>> = vec![
        Box::new(Dijkstra),
        Box::new(AStar::new(&heuristic)),
        Box::new(GreedyBestFirst::new(&heuristic)),
        Box::new(DepthFirst),
        Box::new(BreadthFirst),
    ];

    let pairs = resolve_pairs(&graph, config);
    println!("Benchmarked pairs: {:?}", pairs);

    let runner = BenchmarkRunner::new(&graph, config.trials());
    let mut benchmarks = CollectedBenchmarks::new();
    for (origin, destination) in &pairs {
        let mut pair_results: Vec<AggregatedMetrics> = Vec::new();
        for strategy in &strategies {
            println!("Measuring {} for {} => {}...", strategy.name(), origin, destination);
            pair_results.push(runner.measure(strategy.as_ref(), origin, destination));
        }
        check_cost_agreement(&pair_results);
        for metrics in pair_results {
            benchmarks.insert(metrics);
        }
    }

    print_report(&benchmarks, &labels, &pairs);

    if let Some(path) = config.metrics_export_path() {
        match export::csv_exporter::write_metrics_csv(path, &benchmarks) {
            Ok(()) => println!("Metrics saved at {}", path),
            Err(e) => println!("Could not write metrics csv: {:?}", e),
        }
    }
    if let Some(path) = config.graph_export_path() {
        match export::graph_exporter::write_graph_json(path, &graph, &coordinates, &labels) {
            Ok(()) => println!("Graph saved at {}", path),
            Err(e) => println!("Could not write graph json: {:?}", e),
        }
    }
}

fn load_labels(path: &str) -> HashMap<String, String> {
    let file = File::open(path).unwrap_or_else(|e| panic!("Could not open labels file {}: {}", path, e));
    serde_json::from_reader(file)
        .unwrap_or_else(|e| panic!("Could not parse labels file {}: {}", path, e))
}

/// Explicit pairs from the command line, or consecutive random airports
/// like the classic random-query benchmark setup.
fn resolve_pairs(graph: &RouteGraph, config: &Config) -> Vec<(String, String)> {
    let explicit = config.route_pairs();
    if !explicit.is_empty() {
        return explicit;
    }
    let nodes: Vec<&str> = graph.node_ids().collect();
    let chosen: Vec<&str> = nodes
        .choose_multiple(&mut rand::thread_rng(), config.random_pairs() + 1)
        .copied()
        .collect();
    if chosen.len() < 2 {
        panic!("Graph has too few airports to draw random pairs");
    }
    chosen.windows(2).map(|w| (w[0].to_string(), w[1].to_string())).collect()
}

// the two cost-ordered searches have to agree, everything else is a bug
fn check_cost_agreement(results: &[AggregatedMetrics]) {
    let dijkstra = results.iter().find(|m| m.algorithm == "dijkstra");
    let a_star = results.iter().find(|m| m.algorithm == "a_star");
    if let (Some(d), Some(a)) = (dijkstra, a_star) {
        if d.mean_cost.is_finite()
            && a.mean_cost.is_finite()
            && (d.mean_cost - a.mean_cost).abs() > 1e-6
        {
            println!(
                "{}BAD RESULT for {}: a_star cost {} does not match dijkstra cost {}{}",
                color::Fg(color::Red),
                d.pair(),
                a.mean_cost,
                d.mean_cost,
                color::Fg(color::Reset)
            );
        }
    }
}

fn print_report(
    benchmarks: &CollectedBenchmarks,
    labels: &HashMap<String, String>,
    pairs: &[(String, String)],
) {
    println!();
    println!("SEARCH ALGORITHM PERFORMANCE REPORT");
    separator(false);
    for (i, (origin, destination)) in pairs.iter().enumerate() {
        let key = format!("{}->{}", origin, destination);
        let results = match benchmarks.results.get(&key) {
            Some(results) => results,
            None => continue,
        };
        println!("{}. ROUTE: {} => {}", i + 1, origin, destination);
        println!("{} => {}", label_of(labels, origin), label_of(labels, destination));
        separator(false);
        println!(
            "{:<20} {:<12} {:<10} {:<8} {:<12} {:<12}",
            "ALGORITHM", "TIME(s)", "EXPANDED", "NODES", "COST(km)", "MEMORY(B)"
        );
        separator(true);
        for m in results {
            println!(
                "{:<20} {:<12} {:<10} {:<8} {:<12} {:<12}",
                m.algorithm.to_uppercase(),
                fmt_metric(m.mean_time, 6),
                fmt_metric(m.mean_expansions, 1),
                fmt_metric(m.mean_path_length, 1),
                fmt_metric(m.mean_cost, 0),
                fmt_metric(m.mean_memory, 0)
            );
            match &m.representative_path {
                Some(route) => println!("Route found: {}", route.join(" -> ")),
                None => println!(
                    "{}No route found{}",
                    color::Fg(color::Red),
                    color::Fg(color::Reset)
                ),
            }
            separator(true);
        }
    }
}

fn label_of<'a>(labels: &'a HashMap<String, String>, code: &'a str) -> &'a str {
    labels.get(code).map(|l| l.as_str()).unwrap_or(code)
}

fn fmt_metric(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        String::from("N/A")
    }
}

fn separator(simple: bool) {
    if simple {
        println!("{}", "-".repeat(80));
    } else {
        println!("{}\n", "=".repeat(80));
    }
}
