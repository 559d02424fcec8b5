use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] tuner_engine::CatalogError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
