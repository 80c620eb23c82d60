use thiserror::Error;

pub(crate) mod csv_exporter;
pub(crate) mod graph_exporter;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not write metrics csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not write graph json: {0}")]
    Json(#[from] serde_json::Error),
}
