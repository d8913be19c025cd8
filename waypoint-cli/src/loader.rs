use std::fs;
use std::path::{Path, PathBuf};

use waypoint_core::{CatalogError, DataLoader, TripCatalog};

/// Reads a trip catalog from a JSON file on disk.
pub struct FileDataLoader {
    path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum FileDataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid trip data in {path}: {source}")]
    Catalog { path: String, source: CatalogError },
}

impl FileDataLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataLoader for FileDataLoader {
    type Error = FileDataError;

    fn load_catalog(&self) -> Result<TripCatalog, Self::Error> {
        let display = self.path.display().to_string();
        let json = fs::read_to_string(&self.path).map_err(|source| FileDataError::Io {
            path: display.clone(),
            source,
        })?;
        let catalog = TripCatalog::from_json(&json)
            .map_err(|source| FileDataError::Catalog {
                path: display.clone(),
                source,
            })?;
        log::debug!("loaded {} points from {display}", catalog.points.len());
        Ok(catalog)
    }
}
