//! CSV loading for the listings dataset.

use std::path::Path;

use thiserror::Error;

use crate::index::CityRegionIndex;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read dataset '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("dataset '{path}' is missing required column '{column}'")]
    MissingColumn { path: String, column: &'static str },
    #[error("dataset '{path}' contains no usable city/region rows")]
    Empty { path: String },
}

/// Reads the listings CSV and builds the city/region lookup.
///
/// Called exactly once at process start; the returned index is immutable
/// and re-renders never touch the file again. Any failure here is fatal to
/// the application.
pub fn load_city_region_index(path: &Path) -> Result<CityRegionIndex, IngestError> {
    let display_path = path.display().to_string();
    let read_err = |source| IngestError::Read {
        path: display_path.clone(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| read_err(e))?;

    let headers = reader.headers().map_err(|e| read_err(e))?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IngestError::MissingColumn {
                path: display_path.clone(),
                column: name,
            })
    };
    let city_col = column("city")?;
    let region_col = column("region")?;

    let mut pairs = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| read_err(e))?;
        let city = record.get(city_col).unwrap_or("").trim();
        let region = record.get(region_col).unwrap_or("").trim();
        if city.is_empty() || region.is_empty() {
            tracing::warn!("skipping dataset row {} with blank city/region", idx + 1);
            continue;
        }
        pairs.push((city.to_string(), region.to_string()));
    }

    let index = CityRegionIndex::from_pairs(pairs);
    if index.is_empty() {
        return Err(IngestError::Empty { path: display_path });
    }

    tracing::info!(
        "loaded dataset '{}': {} cities",
        display_path,
        index.cities().len()
    );
    Ok(index)
}
