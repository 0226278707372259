use thiserror::Error;

use crate::catalog::CatalogError;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] UtilsError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
