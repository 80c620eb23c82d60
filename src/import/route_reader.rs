use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::heuristic::{haversine_km, CoordinateTable};
use crate::model::route_graph::RouteGraph;

/// One row of the pre-extracted routes file. The extraction of these rows
/// from the raw flight dataset happens upstream of this tool.
#[derive(Debug, Deserialize)]
pub struct RouteRecord {
    pub origin_iata: String,
    pub destination_iata: String,
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub destination_lat: f64,
    pub destination_lon: f64,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not open routes file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse routes file: {0}")]
    Csv(#[from] csv::Error),
    #[error("routes file contains no usable rows")]
    Empty,
}

/// Reads the routes CSV and builds the coordinate table and the
/// undirected graph. Edge weights are the great-circle distances between
/// the two endpoints, computed from the row coordinates.
pub fn read_routes<P: AsRef<Path>>(path: P) -> Result<(RouteGraph, CoordinateTable), ImportError> {
    let file = std::fs::File::open(path.as_ref())?;
    let mut reader = csv::Reader::from_reader(file);
    let mut graph = RouteGraph::new();
    let mut coordinates = CoordinateTable::new();

    for row in reader.deserialize() {
        let record: RouteRecord = row?;
        coordinates.insert(&record.origin_iata, record.origin_lat, record.origin_lon);
        coordinates.insert(
            &record.destination_iata,
            record.destination_lat,
            record.destination_lon,
        );
        if record.origin_iata == record.destination_iata {
            println!("Discarded route from {} to itself", record.origin_iata);
            continue;
        }
        let distance = haversine_km(
            (record.origin_lat, record.origin_lon),
            (record.destination_lat, record.destination_lon),
        );
        graph.add_route(&record.origin_iata, &record.destination_iata, distance);
    }

    if graph.node_count() == 0 {
        return Err(ImportError::Empty);
    }
    println!("Loaded coordinates for {} airports", coordinates.len());
    Ok((graph, coordinates))
}
