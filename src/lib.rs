//! A personal budget tracker: seven fixed categories, a running balance for
//! each, an append-only transaction history and a JSON data file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

pub use domain::*;
pub use storage::{LoadOutcome, Repository};
