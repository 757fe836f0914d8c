use crate::catalog::error::CatalogError;
use crate::structured_data::error::StructuredDataError;
use crate::types::{AppConfigError, PostEntryError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] AppConfigError),

    #[error("structured data error: {0}")]
    StructuredData(#[from] StructuredDataError),

    #[error("validation error: {0}")]
    Validation(#[from] PostEntryError),
}
