use thiserror::Error;

use crate::domain::ParseAmountError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
