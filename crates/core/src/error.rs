use thiserror::Error;

use crate::model::{FormatError, ItemError, PoolError, ResultError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Item(#[from] ItemError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Result(#[from] ResultError),
}
