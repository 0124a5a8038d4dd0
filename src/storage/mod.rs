mod error;
mod repository;

pub use error::*;
pub use repository::*;

/// Data file used when no path is given.
pub const DEFAULT_DATA_FILE: &str = "budget_data.json";
