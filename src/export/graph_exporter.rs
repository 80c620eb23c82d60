use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::export::ExportError;
use crate::model::heuristic::CoordinateTable;
use crate::model::route_graph::RouteGraph;

/*
flattens the graph into the node/edge JSON consumed by the external
visualization; each undirected edge appears once, source < target
 */

#[derive(Serialize)]
struct NodeExport {
    id: String,
    label: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Serialize)]
struct EdgeExport {
    source: String,
    target: String,
    distance_km: f64,
}

#[derive(Serialize)]
struct GraphExport {
    nodes: Vec<NodeExport>,
    edges: Vec<EdgeExport>,
}

pub fn write_graph_json<P: AsRef<Path>>(
    path: P,
    graph: &RouteGraph,
    coordinates: &CoordinateTable,
    labels: &HashMap<String, String>,
) -> Result<(), ExportError> {
    let nodes = graph
        .node_ids()
        .map(|id| {
            let coords = coordinates.get(id);
            NodeExport {
                id: id.to_string(),
                label: labels.get(id).cloned().unwrap_or_else(|| id.to_string()),
                lat: coords.map(|(lat, _)| lat),
                lon: coords.map(|(_, lon)| lon),
            }
        })
        .collect();
    let edges = graph
        .undirected_edges()
        .map(|(source, target, distance_km)| EdgeExport {
            source: source.to_string(),
            target: target.to_string(),
            distance_km,
        })
        .collect();

    let file = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(file, &GraphExport { nodes, edges })?;
    Ok(())
}
