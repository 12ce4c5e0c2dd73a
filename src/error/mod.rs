use crate::catalog::CatalogError;
use crate::contact::ContactError;
use crate::gallery::GalleryError;
use crate::state::StateError;
use crate::storage::StorageError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
